use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::app::{App, Route};
use crate::ui::layout::{AppLayout, prompt_text, tab_text};

const SEPARATOR: &str = "  ";
pub const ACCENT: Color = Color::LightGreen;
pub const MUTED: Color = Color::DarkGray;

/// Renders the prompt, route tabs and clock
pub fn render_header(frame: &mut Frame, layout: &AppLayout, app: &App) {
    frame.render_widget(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(MUTED)),
        layout.header,
    );

    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::raw(" "),
            Span::styled(
                prompt_text(),
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            ),
        ])),
        layout.prompt,
    );

    for route in Route::ALL {
        let active = route == app.route;
        let command_style = if active {
            Style::default()
                .fg(ACCENT)
                .add_modifier(Modifier::UNDERLINED)
        } else {
            Style::default().fg(MUTED)
        };
        let text = tab_text(route);
        let (dollar, command) = text.split_at(2);
        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled(dollar.to_string(), Style::default().fg(MUTED)),
                Span::styled(command.to_string(), command_style),
            ])),
            layout.tab_rect(route),
        );
    }

    let clock = chrono::Local::now().format("%H:%M:%S").to_string();
    frame.render_widget(
        Paragraph::new(Span::styled(format!("{} ", clock), Style::default().fg(MUTED)))
            .alignment(Alignment::Right),
        layout.clock,
    );
}

/// Renders a footer with mode indicator, keybindings, and status
pub fn render_navigation_footer(
    frame: &mut Frame,
    area: Rect,
    mode: &str,
    keybindings: &[(&str, &str)],
    status: &[(&str, bool)],
) {
    let mut spans = vec![
        Span::raw(" "),
        Span::styled(
            format!(" {} ", mode),
            Style::default()
                .fg(Color::Black)
                .bg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ),
    ];

    for &(key, desc) in keybindings {
        spans.push(Span::raw(SEPARATOR));
        spans.push(Span::styled(
            format!(" {} ", key),
            Style::default().fg(Color::Black).bg(Color::Yellow),
        ));
        spans.push(Span::styled(
            format!(" {}", desc),
            Style::default().fg(Color::White),
        ));
    }

    for &(label, active) in status {
        spans.push(Span::raw(SEPARATOR));
        let style = if active {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Red)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(MUTED)
        };
        spans.push(Span::styled(format!(" {} ", label), style));
    }

    frame.render_widget(
        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(MUTED)),
        ),
        area,
    );
}

pub fn render_status_toast(frame: &mut Frame, area: Rect, message: &str) {
    let toast = Paragraph::new(Line::from(vec![Span::styled(
        format!(" {} ", message),
        Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    )]))
    .alignment(Alignment::Right);

    frame.render_widget(toast, area);
}

/// Bordered block used by every page
pub fn page_block(title: &str) -> Block<'_> {
    Block::default()
        .borders(Borders::ALL)
        .title(Span::styled(
            format!(" {} ", title),
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        ))
        .border_style(Style::default().fg(MUTED))
}

/// Inline badge such as a tech tag or project type
pub fn chip(label: &str, background: Color) -> Span<'static> {
    Span::styled(
        format!(" {} ", label),
        Style::default()
            .fg(Color::Black)
            .bg(background)
            .add_modifier(Modifier::BOLD),
    )
}
