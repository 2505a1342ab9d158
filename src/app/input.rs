use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

use crate::app::scroll::CONTENT_SCROLL_LINES;
use crate::app::{App, Navigable, Route};
use crate::navigator::WheelOutcome;
use crate::ui::layout::contains;

impl App {
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        if self.show_help {
            self.handle_help_key(key.code);
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('?') => self.toggle_help(),
            KeyCode::Up | KeyCode::Char('k') => self.navigator.select_previous(),
            KeyCode::Down | KeyCode::Char('j') => self.navigator.select_next(),
            KeyCode::PageUp => self.scroll_content_page_up(),
            KeyCode::PageDown => self.scroll_content_page_down(),
            KeyCode::Home => self.reset_content_scroll(),
            KeyCode::Tab | KeyCode::BackTab => self.switch_route(self.route.other()),
            KeyCode::Char('1') => self.switch_route(Route::Home),
            KeyCode::Char('2') => self.switch_route(Route::Analytics),
            KeyCode::Char('y') => self.copy_page_link(),
            KeyCode::Char(_)
            | KeyCode::Backspace
            | KeyCode::Enter
            | KeyCode::Left
            | KeyCode::Right
            | KeyCode::End
            | KeyCode::Delete
            | KeyCode::Insert
            | KeyCode::F(_)
            | KeyCode::Null
            | KeyCode::CapsLock
            | KeyCode::ScrollLock
            | KeyCode::NumLock
            | KeyCode::PrintScreen
            | KeyCode::Pause
            | KeyCode::Menu
            | KeyCode::KeypadBegin
            | KeyCode::Media(_)
            | KeyCode::Modifier(_) => {}
        }
    }

    fn handle_help_key(&mut self, key_code: KeyCode) {
        match key_code {
            KeyCode::Char('?') => self.toggle_help(),
            KeyCode::Esc | KeyCode::Char('q') => self.close_help(),
            KeyCode::Char(_)
            | KeyCode::Backspace
            | KeyCode::Enter
            | KeyCode::Left
            | KeyCode::Right
            | KeyCode::Up
            | KeyCode::Down
            | KeyCode::Home
            | KeyCode::End
            | KeyCode::PageUp
            | KeyCode::PageDown
            | KeyCode::Tab
            | KeyCode::BackTab
            | KeyCode::Delete
            | KeyCode::Insert
            | KeyCode::F(_)
            | KeyCode::Null
            | KeyCode::CapsLock
            | KeyCode::ScrollLock
            | KeyCode::NumLock
            | KeyCode::PrintScreen
            | KeyCode::Pause
            | KeyCode::Menu
            | KeyCode::KeypadBegin
            | KeyCode::Media(_)
            | KeyCode::Modifier(_) => {}
        }
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        let Some(layout) = self.layout else {
            return;
        };
        if self.show_help {
            return;
        }
        let (column, row) = (mouse.column, mouse.row);
        let notch = self.config.navigator.wheel_notch_delta;

        match mouse.kind {
            MouseEventKind::ScrollDown | MouseEventKind::ScrollUp => {
                let down = mouse.kind == MouseEventKind::ScrollDown;
                if contains(layout.nav, column, row) {
                    let delta = if down { notch } else { -notch };
                    if let WheelOutcome::Stepped { index } = self.navigator.on_wheel(delta) {
                        log::debug!("wheel moved navigator to {}", index);
                    }
                } else if contains(layout.page, column, row) {
                    if down {
                        self.scroll_content_down(CONTENT_SCROLL_LINES);
                    } else {
                        self.scroll_content_up(CONTENT_SCROLL_LINES);
                    }
                }
            }
            MouseEventKind::Down(MouseButton::Left) => {
                if let Some(route) = layout.tab_at(column, row) {
                    self.switch_route(route);
                } else if let Some(index) = self.navigator_row_at(column, row) {
                    self.navigator.on_item_activate(index);
                }
            }
            MouseEventKind::ScrollLeft | MouseEventKind::ScrollRight => {
                // Ignore horizontal scrolling
            }
            MouseEventKind::Down(_)
            | MouseEventKind::Up(_)
            | MouseEventKind::Drag(_)
            | MouseEventKind::Moved => {}
        }
    }

    /// Navigator item under a screen cell, accounting for the list scroll
    #[must_use]
    pub fn navigator_row_at(&self, column: u16, row: u16) -> Option<usize> {
        let list = self.layout?.nav_list;
        if !contains(list, column, row) {
            return None;
        }
        let item_height = usize::from(self.config.navigator.item_height());
        let content_row =
            usize::from(row - list.y) + self.navigator.viewport().first_visible_row();
        let index = content_row / item_height;
        (index < self.navigator.items().len()).then_some(index)
    }
}
