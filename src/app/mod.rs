mod help;
mod input;
mod navigation;
mod scroll;
mod typewriter;
mod types;

pub use navigation::Navigable;
pub use typewriter::Typewriter;
pub use types::*;

use crate::config::Config;
use crate::content::PROFILE;
use crate::navigator::{ListViewport, ScrollViewport, StepNavigator};
use crate::services::clipboard::ClipboardService;
use crate::ui::layout::AppLayout;
use ratatui::layout::Rect;
use std::collections::HashMap;
use std::sync::mpsc::{Receiver, channel};
use std::time::{Duration, Instant};

const STATUS_TOAST_DURATION: Duration = Duration::from_millis(1500);
const TAGLINE_DELAY: Duration = Duration::from_millis(1500);
const TAGLINE_SPEED: Duration = Duration::from_millis(80);

/// Main application state
pub struct App {
    pub should_quit: bool,
    pub config: Config,
    pub route: Route,
    pub page: Page,
    pub navigator: StepNavigator<ListViewport>,
    pub layout: Option<AppLayout>,
    pub content_scroll: u16,
    pub prompt: Typewriter,
    pub tagline: Typewriter,
    pub status_toast: Option<StatusToast>,
    pub clipboard_service: ClipboardService,
    pub show_help: bool,
    last_page_by_route: HashMap<Route, &'static str>,
    event_rx: Receiver<AppEvent>,
}

impl App {
    pub fn new(config: Config) -> Self {
        let start_id = config.ui.start_page.as_str();
        let route = Route::containing(start_id).unwrap_or(Route::Home);
        let page = Page::resolve(start_id).unwrap_or_else(|| route.default_page());
        if page.id() != start_id {
            log::warn!("unknown start page {:?}, using {}", start_id, page.id());
        }

        let mut navigator = StepNavigator::new(
            route.items(),
            Some(page.id()),
            config.navigator.step_settings(),
            ListViewport::new(config.navigator.scroll_speed),
        );
        let (event_tx, event_rx) = channel();
        navigator.on_select(move |item| {
            if event_tx.send(AppEvent::Selected(item.clone())).is_err() {
                log::debug!("selection {} dropped, event receiver gone", item.id);
            }
        });

        let now = Instant::now();
        let prompt = Typewriter::from_config(page.command(), &config.typewriter, now);
        let tagline = Typewriter::new(PROFILE.tagline, TAGLINE_DELAY, TAGLINE_SPEED, now)
            .with_blink(Duration::from_millis(config.typewriter.cursor_blink_ms));

        let mut last_page_by_route = HashMap::new();
        last_page_by_route.insert(route, page.id());

        Self {
            should_quit: false,
            config,
            route,
            page,
            navigator,
            layout: None,
            content_scroll: 0,
            prompt,
            tagline,
            status_toast: None,
            clipboard_service: ClipboardService::new(),
            show_help: false,
            last_page_by_route,
            event_rx,
        }
    }

    /// Recomputes screen regions and mounts the navigator viewport
    pub fn apply_layout(&mut self, area: Rect) {
        self.layout = Some(AppLayout::compute(area));
        self.mount_navigator_viewport();
    }

    fn mount_navigator_viewport(&mut self) {
        let item_height = usize::from(self.config.navigator.item_height());
        let content_rows = self.navigator.items().len() * item_height;
        let list_height = self.layout.map_or(0, |layout| layout.nav_list.height);
        let viewport = self.navigator.viewport_mut();
        let previous_extent = viewport.measure().map(|measured| measured.extent);
        if list_height == 0 {
            viewport.unmount();
        } else {
            viewport.mount(list_height, content_rows);
        }

        // Focus set while unmounted or under another height was never centered
        let extent_changed = previous_extent != Some(f64::from(list_height));
        if viewport.is_mounted() && extent_changed {
            self.navigator.resync_scroll();
        }
    }

    /// Advances timers and animations; call once per frame
    pub fn tick(&mut self) {
        self.navigator.tick();
        if self.navigator.viewport().is_animating() {
            self.navigator.viewport_mut().tick();
        }
        self.clear_expired_status_toast();
    }

    /// Applies events emitted since the last frame
    pub fn process_events(&mut self) {
        while let Ok(event) = self.event_rx.try_recv() {
            match event {
                AppEvent::Selected(item) => self.show_page(&item.id),
            }
        }
    }

    /// Switches the page pane to the page behind a navigator item
    pub fn show_page(&mut self, id: &str) {
        let Some(page) = Page::resolve(id) else {
            log::warn!("no page for navigator item {}", id);
            return;
        };
        if page == self.page {
            return;
        }
        log::info!("page {} -> {}", self.page.id(), page.id());
        self.page = page;
        self.last_page_by_route.insert(self.route, page.id());
        self.reset_content_scroll();
        self.restart_typewriters();
    }

    /// Changes route and reconfigures the navigator for it.
    ///
    /// The route remembers the last page it showed.
    pub fn switch_route(&mut self, route: Route) {
        if route == self.route {
            return;
        }
        let page = self
            .last_page_by_route
            .get(&route)
            .and_then(|id| Page::resolve(id))
            .unwrap_or_else(|| route.default_page());
        log::info!("route {} -> {}", self.route.command(), route.command());

        self.route = route;
        self.navigator.configure(route.items(), Some(page.id()));
        self.mount_navigator_viewport();
        self.page = page;
        self.last_page_by_route.insert(route, page.id());
        self.reset_content_scroll();
        self.restart_typewriters();
    }

    pub fn copy_page_link(&mut self) {
        let Some(link) = self.page.link() else {
            self.show_status_toast("NO LINK");
            return;
        };
        match self.clipboard_service.copy_text(link) {
            Ok(()) => self.show_status_toast("COPIED"),
            Err(error) => {
                log::warn!("clipboard copy failed: {}", error);
                self.show_status_toast("COPY FAILED");
            }
        }
    }

    pub fn show_status_toast(&mut self, message: impl Into<String>) {
        self.status_toast = Some(StatusToast::new(message));
    }

    pub fn clear_expired_status_toast(&mut self) {
        if self
            .status_toast
            .as_ref()
            .is_some_and(|toast| toast.is_expired(STATUS_TOAST_DURATION))
        {
            self.status_toast = None;
        }
    }

    fn restart_typewriters(&mut self) {
        let now = Instant::now();
        self.prompt.restart(self.page.command(), now);
        self.tagline.restart(PROFILE.tagline, now);
    }
}
