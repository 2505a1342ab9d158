use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};
use std::time::Instant;

use crate::app::{App, Page};
use crate::content::{self, PROFILE, Project, SkillSection};
use crate::ui::components::{ACCENT, MUTED, chip, page_block};
use crate::ui::radar;

const SKILL_BULLETS: [Color; 5] = [
    Color::LightMagenta,
    Color::LightBlue,
    Color::LightGreen,
    Color::Magenta,
    Color::LightYellow,
];

pub fn render_page(frame: &mut Frame, area: Rect, app: &App) {
    let now = Instant::now();
    if let Page::Radar = app.page {
        let [prompt, chart] =
            Layout::vertical([Constraint::Length(2), Constraint::Min(0)]).areas(area);
        frame.render_widget(Paragraph::new(prompt_lines(app, now)), prompt);
        radar::render_radar(frame, chart, content::RADAR);
        return;
    }

    let (title, body) = match app.page {
        Page::Whoami => ("whoami", whoami_lines(app, now)),
        Page::Skills(section) => (section.title, skill_lines(section)),
        Page::Stories => (content::STORIES_TITLE, stories_lines()),
        Page::Arsenal => ("tools arsenal", arsenal_lines()),
        Page::Project(project) => (project.title, project_lines(project)),
        Page::Radar => ("skills radar", Vec::new()),
    };

    let mut lines = prompt_lines(app, now);
    lines.extend(body);

    let visible_rows = area.height.saturating_sub(2);
    let max_scroll = u16::try_from(lines.len())
        .unwrap_or(u16::MAX)
        .saturating_sub(visible_rows);
    let scroll = app.content_scroll.min(max_scroll);

    frame.render_widget(
        Paragraph::new(lines)
            .block(page_block(title))
            .wrap(Wrap { trim: false })
            .scroll((scroll, 0)),
        area,
    );
}

/// Typed-out shell command heading every page
fn prompt_lines(app: &App, now: Instant) -> Vec<Line<'static>> {
    let mut prompt = vec![Span::styled(
        format!(" {}", app.prompt.visible_text(now)),
        Style::default().fg(ACCENT),
    )];
    if !app.prompt.is_complete(now) {
        prompt.push(Span::styled("_", Style::default().fg(ACCENT)));
    }
    vec![Line::from(prompt), Line::from("")]
}

fn whoami_lines(app: &App, now: Instant) -> Vec<Line<'static>> {
    let mut tagline = vec![Span::styled(
        format!(" {}", app.tagline.visible_text(now)),
        Style::default().fg(Color::Gray),
    )];
    if app.tagline.cursor_visible(now) {
        tagline.push(Span::styled("█", Style::default().fg(ACCENT)));
    }

    let mut lines = vec![
        Line::from(Span::styled(
            format!(" {}", PROFILE.name),
            Style::default()
                .fg(Color::LightCyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(tagline),
        Line::from(""),
    ];
    lines.extend(PROFILE.links.iter().map(|link| {
        Line::from(vec![
            Span::styled(format!(" [{}] ", link.label), Style::default().fg(ACCENT)),
            Span::styled(link.url, Style::default().fg(MUTED)),
        ])
    }));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        " scroll the navigator or press ↑/↓ to explore",
        Style::default().fg(MUTED).add_modifier(Modifier::ITALIC),
    )));
    lines
}

fn skill_lines(section: &SkillSection) -> Vec<Line<'static>> {
    let color = content::SKILL_SECTIONS
        .iter()
        .position(|candidate| candidate.id == section.id)
        .and_then(|index| SKILL_BULLETS.get(index))
        .copied()
        .unwrap_or(ACCENT);
    bullet_lines(section.skills, color)
}

fn bullet_lines(skills: &'static [&'static str], color: Color) -> Vec<Line<'static>> {
    skills
        .iter()
        .map(|skill| {
            Line::from(vec![
                Span::styled("  ● ", Style::default().fg(color)),
                Span::styled(*skill, Style::default().fg(Color::White)),
            ])
        })
        .collect()
}

fn stories_lines() -> Vec<Line<'static>> {
    vec![
        Line::from(Span::styled(
            format!(" {}", content::STORIES_TITLE),
            Style::default()
                .fg(Color::LightMagenta)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!(" {}", content::STORIES_BLURB),
            Style::default().fg(Color::Gray),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!(" {}", content::STORIES_QUOTE),
            Style::default().fg(MUTED).add_modifier(Modifier::ITALIC),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!(" {} projects below in the navigator", content::PROJECTS.len()),
            Style::default().fg(ACCENT),
        )),
    ]
}

fn arsenal_lines() -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for (section, color) in content::TOOL_ARSENAL.iter().zip(SKILL_BULLETS.iter().cycle()) {
        lines.push(Line::from(Span::styled(
            format!(" {}", section.title),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )));
        lines.extend(bullet_lines(section.skills, *color));
        lines.push(Line::from(""));
    }
    lines
}

fn project_lines(project: &'static Project) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(vec![Span::raw(" "), chip(project.kind, Color::Cyan)]),
        Line::from(""),
        Line::from(Span::styled(
            format!(" {}", project.description),
            Style::default().fg(Color::White),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!(" {}", project.story),
            Style::default().fg(MUTED).add_modifier(Modifier::ITALIC),
        )),
        Line::from(""),
    ];

    let mut metrics = vec![Span::raw(" ")];
    for metric in project.metrics {
        metrics.push(Span::styled(
            metric.value,
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        ));
        metrics.push(Span::styled(
            format!(" {}   ", metric.label.to_uppercase()),
            Style::default().fg(MUTED),
        ));
    }
    lines.push(Line::from(metrics));
    lines.push(Line::from(""));

    let mut tech = vec![Span::raw(" ")];
    for name in project.tech {
        tech.push(chip(name, Color::LightBlue));
        tech.push(Span::raw(" "));
    }
    lines.push(Line::from(tech));
    lines.push(Line::from(""));

    let links = [
        ("live site", project.live_site),
        ("code", project.github),
        ("notebook", project.notebook),
    ];
    for (label, url) in links {
        if let Some(url) = url {
            lines.push(Line::from(vec![
                Span::styled(format!(" [{}] ", label), Style::default().fg(ACCENT)),
                Span::styled(url, Style::default().fg(MUTED)),
            ]));
        }
    }
    lines.push(Line::from(Span::styled(
        " press y to copy the link",
        Style::default().fg(MUTED).add_modifier(Modifier::ITALIC),
    )));
    lines
}
