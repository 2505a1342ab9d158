mod components;
mod help;
pub mod layout;
mod navigator;
mod pages;
mod radar;
mod utils;

use crate::app::App;
use crate::ui::layout::AppLayout;
use ratatui::{Frame, widgets::Block};

pub fn render(f: &mut Frame, app: &App) {
    let layout = app.layout.unwrap_or_else(|| AppLayout::compute(f.area()));

    components::render_header(f, &layout, app);
    pages::render_page(f, layout.page, app);
    navigator::render_navigator(f, &layout, app);
    navigator::render_side_info(f, layout.side_info, app);

    components::render_navigation_footer(
        f,
        layout.footer,
        app.route.title(),
        &[
            ("wheel", "step"),
            ("↑↓", "select"),
            ("Tab", "route"),
            ("y", "copy link"),
            ("?", "help"),
            ("q", "quit"),
        ],
        &[("LOCKED", app.navigator.is_locked())],
    );

    if let Some(toast) = &app.status_toast {
        let toast_area = Block::bordered().inner(layout.footer);
        components::render_status_toast(f, toast_area, &toast.message);
    }

    if app.show_help {
        help::render_help_overlay(f);
    }
}
