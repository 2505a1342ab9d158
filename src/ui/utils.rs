use ratatui::layout::{Constraint, Flex, Layout, Rect};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Centers a popup of the given percentage size inside `area`.
///
/// Small terminals get at least 30x10 cells when they have room for it.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let width = percent_of(area.width, percent_x).max(30).min(area.width);
    let height = percent_of(area.height, percent_y).max(10).min(area.height);

    let [row] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    let [popup] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(row);
    popup
}

fn percent_of(value: u16, percent: u16) -> u16 {
    let scaled = u32::from(value) * u32::from(percent.min(100)) / 100;
    u16::try_from(scaled).unwrap_or(value)
}

/// Cuts `text` to at most `max_width` display columns, ending in `…` when cut
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut result = String::new();
    let mut used = 0;
    for character in text.chars() {
        let char_width = character.width().unwrap_or(0);
        if used + char_width + 1 > max_width {
            break;
        }
        result.push(character);
        used += char_width;
    }
    result.push('…');
    result
}
