use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::canvas::{Canvas, Circle, Line as CanvasLine, Points},
};
use std::f64::consts::{FRAC_PI_2, TAU};

use crate::content::RadarSkill;
use crate::ui::components::page_block;

const GRID_LEVELS: u32 = 5;
const RADIUS: f64 = 1.0;
const LABEL_GAP: f64 = 0.12;
/// Half-height of the canvas in chart units
const Y_EXTENT: f64 = 1.35;

/// Canvas position of `value` (0..=100) on axis `index` of `count`.
///
/// Axis 0 points straight up and the rest follow clockwise. Canvas y grows
/// upwards.
#[must_use]
pub fn radar_vertex(index: usize, count: usize, value: f64, radius: f64) -> (f64, f64) {
    let count = count.max(1) as f64;
    let angle = TAU * index as f64 / count - FRAC_PI_2;
    let distance = radius * value.clamp(0.0, 100.0) / 100.0;
    (angle.cos() * distance, -angle.sin() * distance)
}

/// Closed outline through every data point
#[must_use]
pub fn radar_polygon(data: &[RadarSkill], radius: f64) -> Vec<((f64, f64), (f64, f64))> {
    let vertices: Vec<(f64, f64)> = data
        .iter()
        .enumerate()
        .map(|(index, entry)| radar_vertex(index, data.len(), entry.value, radius))
        .collect();
    vertices
        .iter()
        .zip(vertices.iter().cycle().skip(1))
        .map(|(from, to)| (*from, *to))
        .collect()
}

pub fn render_radar(frame: &mut Frame, area: Rect, data: &'static [RadarSkill]) {
    let block = page_block("skills radar");
    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.width < 4 || inner.height < 4 {
        return;
    }

    // Terminal cells are about twice as tall as wide
    let aspect = f64::from(inner.width) / (f64::from(inner.height) * 2.0);
    let x_extent = Y_EXTENT * aspect.max(0.5);
    let char_width = 2.0 * x_extent / f64::from(inner.width);

    let canvas = Canvas::default()
        .marker(Marker::Braille)
        .x_bounds([-x_extent, x_extent])
        .y_bounds([-Y_EXTENT, Y_EXTENT])
        .paint(move |ctx| {
            for level in 1..=GRID_LEVELS {
                ctx.draw(&Circle {
                    x: 0.0,
                    y: 0.0,
                    radius: RADIUS * f64::from(level) / f64::from(GRID_LEVELS),
                    color: Color::DarkGray,
                });
            }
            for index in 0..data.len() {
                let (x, y) = radar_vertex(index, data.len(), 100.0, RADIUS);
                ctx.draw(&CanvasLine::new(0.0, 0.0, x, y, Color::DarkGray));
            }
            ctx.layer();

            for (from, to) in radar_polygon(data, RADIUS) {
                ctx.draw(&CanvasLine::new(from.0, from.1, to.0, to.1, Color::Magenta));
            }
            let points: Vec<(f64, f64)> = data
                .iter()
                .enumerate()
                .map(|(index, entry)| radar_vertex(index, data.len(), entry.value, RADIUS))
                .collect();
            ctx.draw(&Points {
                coords: &points,
                color: Color::LightMagenta,
            });

            for level in 1..=GRID_LEVELS {
                let y = RADIUS * f64::from(level) / f64::from(GRID_LEVELS);
                ctx.print(
                    char_width,
                    y,
                    Span::styled(format!("{}%", level * 20), Style::default().fg(Color::Gray)),
                );
            }
            for (index, entry) in data.iter().enumerate() {
                let (x, y) = radar_vertex(index, data.len(), 100.0, RADIUS + LABEL_GAP);
                let label_width = entry.skill.chars().count() as f64 * char_width;
                let x = if x < -f64::EPSILON { x - label_width } else { x };
                ctx.print(
                    x,
                    y,
                    Line::from(Span::styled(
                        entry.skill,
                        Style::default()
                            .fg(Color::LightGreen)
                            .add_modifier(Modifier::BOLD),
                    )),
                );
            }
        });
    frame.render_widget(canvas, inner);
}
