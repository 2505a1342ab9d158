use ratatui::{
    Frame,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Clear, Paragraph},
};

use crate::ui::components::{ACCENT, page_block};
use crate::ui::utils::centered_rect;

const SHORTCUTS: &[(&str, &str)] = &[
    ("wheel", "step the navigator one item"),
    ("click", "jump to a navigator item"),
    ("↑ ↓ j k", "previous / next item"),
    ("Tab 1 2", "switch between ~/home and ~/analytics"),
    ("PgUp PgDn", "scroll the page"),
    ("Home", "back to the top of the page"),
    ("y", "copy the page link"),
    ("?", "toggle this help"),
    ("q Esc", "quit"),
];

pub fn render_help_overlay(frame: &mut Frame) {
    let area = centered_rect(60, 60, frame.area());

    let mut lines = vec![Line::from("")];
    lines.extend(SHORTCUTS.iter().map(|(keys, action)| {
        Line::from(vec![
            Span::styled(format!("  {:<11}", keys), Style::default().fg(Color::Yellow)),
            Span::styled(*action, Style::default().fg(Color::White)),
        ])
    }));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "  Esc to close",
        Style::default().fg(ACCENT),
    )));

    frame.render_widget(Clear, area);
    frame.render_widget(Paragraph::new(lines).block(page_block("man termfolio")), area);
}
