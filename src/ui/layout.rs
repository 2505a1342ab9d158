use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    widgets::{Block, Borders},
};
use unicode_width::UnicodeWidthStr;

use crate::app::Route;
use crate::content::PROFILE;

/// Width of the navigator pane, borders included
pub const NAV_WIDTH: u16 = 28;
/// Height of the navigator pane, borders included
pub const NAV_HEIGHT: u16 = 7;

/// Screen regions shared by rendering and mouse hit-testing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppLayout {
    pub header: Rect,
    pub prompt: Rect,
    pub home_tab: Rect,
    pub analytics_tab: Rect,
    pub clock: Rect,
    pub page: Rect,
    pub nav: Rect,
    pub nav_list: Rect,
    pub side_info: Rect,
    pub footer: Rect,
}

impl AppLayout {
    pub fn compute(area: Rect) -> Self {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(0),    // Body
                Constraint::Length(3), // Footer
            ])
            .split(area);
        let header = rows.first().copied().unwrap_or_default();
        let body = rows.get(1).copied().unwrap_or_default();
        let footer = rows.get(2).copied().unwrap_or_default();

        let header_inner = bordered().inner(header);
        let header_cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(prompt_text().width() as u16 + 3),
                Constraint::Length(tab_text(Route::Home).width() as u16 + 2),
                Constraint::Length(tab_text(Route::Analytics).width() as u16 + 2),
                Constraint::Min(0),
            ])
            .split(header_inner);

        let body_cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(0), Constraint::Length(NAV_WIDTH)])
            .split(body);
        let side = body_cols.get(1).copied().unwrap_or_default();
        let side_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(NAV_HEIGHT), Constraint::Min(0)])
            .split(side);
        let nav = side_rows.first().copied().unwrap_or_default();

        Self {
            header,
            prompt: header_cols.first().copied().unwrap_or_default(),
            home_tab: header_cols.get(1).copied().unwrap_or_default(),
            analytics_tab: header_cols.get(2).copied().unwrap_or_default(),
            clock: header_cols.get(3).copied().unwrap_or_default(),
            page: body_cols.first().copied().unwrap_or_default(),
            nav,
            nav_list: bordered().inner(nav),
            side_info: side_rows.get(1).copied().unwrap_or_default(),
            footer,
        }
    }

    #[must_use]
    pub fn tab_rect(&self, route: Route) -> Rect {
        match route {
            Route::Home => self.home_tab,
            Route::Analytics => self.analytics_tab,
        }
    }

    /// Route tab under a screen cell
    #[must_use]
    pub fn tab_at(&self, column: u16, row: u16) -> Option<Route> {
        Route::ALL
            .into_iter()
            .find(|route| contains(self.tab_rect(*route), column, row))
    }
}

#[must_use]
pub fn contains(area: Rect, column: u16, row: u16) -> bool {
    column >= area.x
        && column < area.x.saturating_add(area.width)
        && row >= area.y
        && row < area.y.saturating_add(area.height)
}

#[must_use]
pub fn prompt_text() -> String {
    format!("root@{}:~$", PROFILE.handle)
}

#[must_use]
pub fn tab_text(route: Route) -> String {
    format!("$ {}", route.command())
}

fn bordered() -> Block<'static> {
    Block::default().borders(Borders::ALL)
}
