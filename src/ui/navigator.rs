use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::app::App;
use crate::navigator::VisualTier;
use crate::ui::components::{ACCENT, MUTED};
use crate::ui::layout::AppLayout;
use crate::ui::utils::truncate_to_width;

pub fn render_navigator(frame: &mut Frame, layout: &AppLayout, app: &App) {
    let border_color = if app.navigator.is_locked() {
        Color::Green
    } else {
        MUTED
    };
    frame.render_widget(
        Block::default()
            .borders(Borders::ALL)
            .title(Span::styled(" cd ", Style::default().fg(MUTED)))
            .border_style(Style::default().fg(border_color)),
        layout.nav,
    );

    let list = layout.nav_list;
    if list.height == 0 || list.width == 0 {
        return;
    }

    let item_height = usize::from(app.config.navigator.item_height());
    let label_width = usize::from(list.width).saturating_sub(2);
    let mut lines = Vec::new();
    for (index, item) in app.navigator.items().iter().enumerate() {
        let tier = app.navigator.tier(index).unwrap_or(VisualTier::Far);
        let marker = if tier == VisualTier::Focused { "▸ " } else { "  " };
        lines.push(Line::from(vec![
            Span::styled(marker, tier_style(tier)),
            Span::styled(truncate_to_width(&item.label, label_width), tier_style(tier)),
        ]));
        lines.extend((1..item_height).map(|_| Line::from("")));
    }

    let first_row = app.navigator.viewport().first_visible_row();
    let scroll = u16::try_from(first_row).unwrap_or(u16::MAX);
    frame.render_widget(Paragraph::new(lines).scroll((scroll, 0)), list);
}

/// Terminal rendition of focus emphasis: bright, normal, dimmed
pub fn tier_style(tier: VisualTier) -> Style {
    match tier {
        VisualTier::Focused => Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        VisualTier::Adjacent => Style::default().fg(Color::Green),
        VisualTier::Far => Style::default().fg(MUTED).add_modifier(Modifier::DIM),
    }
}

/// Focus position and wheel accumulator under the navigator
pub fn render_side_info(frame: &mut Frame, area: Rect, app: &App) {
    if area.height == 0 {
        return;
    }
    let total = app.navigator.items().len();
    let position = app
        .navigator
        .focused_index()
        .map_or_else(|| "-".to_string(), |index| (index + 1).to_string());
    let threshold = app.navigator.settings().step_threshold;

    let lines = vec![
        Line::from(vec![
            Span::styled(" focus ", Style::default().fg(MUTED)),
            Span::styled(format!("{}/{}", position, total), Style::default().fg(ACCENT)),
        ]),
        Line::from(vec![
            Span::styled(" at    ", Style::default().fg(MUTED)),
            Span::styled(
                app.navigator
                    .focused_item()
                    .map_or_else(String::new, |item| item.id.clone()),
                Style::default().fg(Color::White),
            ),
        ]),
        Line::from(vec![
            Span::styled(" delta ", Style::default().fg(MUTED)),
            Span::styled(
                format!("{:+.0}/{:.0}", app.navigator.accumulated_delta(), threshold),
                Style::default().fg(Color::Cyan),
            ),
        ]),
        Line::from(Span::styled(
            " scroll here to step",
            Style::default().fg(MUTED).add_modifier(Modifier::ITALIC),
        )),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}
