use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        canvas::{Canvas, Line as CanvasLine},
        Block, Borders, Paragraph,
    },
    Frame,
};
use rust_decimal::prelude::ToPrimitive;

use crate::models::{format_amount, ChartSlice};
use crate::ui::theme;
use crate::ui::util::{format_pct, truncate};

/// Start angle of the first slice, measured counterclockwise from the
/// positive x axis. Matches the original layout: the first slice opens
/// upward from 12 o'clock.
const START_ANGLE: f64 = 90.0;

/// Degrees between adjacent fill rays. Small enough that the braille
/// raster has no visible gaps at typical terminal sizes.
const RAY_STEP: f64 = 0.5;

/// Angular extents `(start, end)` in degrees for each slice with a positive
/// magnitude, paired with the slice's index into the series. Slices are laid
/// out counterclockwise from [`START_ANGLE`], each spanning its share of
/// 360°. Empty when every magnitude is zero.
pub(crate) fn slice_angles(series: &[ChartSlice]) -> Vec<(usize, f64, f64)> {
    let magnitudes: Vec<f64> = series
        .iter()
        .map(|s| s.amount.to_f64().unwrap_or(0.0).max(0.0))
        .collect();
    let total: f64 = magnitudes.iter().sum();
    if total <= 0.0 {
        return Vec::new();
    }

    let mut angles = Vec::new();
    let mut start = START_ANGLE;
    for (i, magnitude) in magnitudes.iter().enumerate() {
        if *magnitude <= 0.0 {
            continue;
        }
        let span = magnitude / total * 360.0;
        angles.push((i, start, start + span));
        start += span;
    }
    angles
}

/// Percentage share (0..100) of each slice, in series order. All zeros when
/// the series is empty of magnitude.
pub(crate) fn slice_percentages(series: &[ChartSlice]) -> Vec<f64> {
    let magnitudes: Vec<f64> = series
        .iter()
        .map(|s| s.amount.to_f64().unwrap_or(0.0).max(0.0))
        .collect();
    let total: f64 = magnitudes.iter().sum();
    if total <= 0.0 {
        return vec![0.0; series.len()];
    }
    magnitudes.iter().map(|m| m / total * 100.0).collect()
}

pub(crate) fn render(f: &mut Frame, area: Rect, series: &[ChartSlice]) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::unfocused_border_style())
        .title(Span::styled(" Monthly Budget Breakdown ", theme::accent_style()));

    let angles = slice_angles(series);
    if angles.is_empty() {
        let msg = Paragraph::new(Line::from(Span::styled(
            "Nothing to chart yet. Raise a value to see the breakdown.",
            theme::dim_style(),
        )))
        .centered()
        .block(block);
        f.render_widget(msg, area);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(5),
            Constraint::Length(series.len() as u16),
        ])
        .split(block.inner(area));
    f.render_widget(block, area);

    render_pie(f, chunks[0], &angles);
    render_legend(f, chunks[1], series);
}

fn render_pie(f: &mut Frame, area: Rect, angles: &[(usize, f64, f64)]) {
    let canvas = Canvas::default()
        .marker(Marker::Braille)
        // Terminal cells are about twice as tall as wide; widen the x
        // bounds so the disc reads as a circle.
        .x_bounds([-2.1, 2.1])
        .y_bounds([-1.05, 1.05])
        .paint(|ctx| {
            for &(slice, start, end) in angles {
                let color = theme::SLICE_COLORS[slice % theme::SLICE_COLORS.len()];
                let mut angle = start;
                while angle < end {
                    let (sin, cos) = angle.to_radians().sin_cos();
                    ctx.draw(&CanvasLine {
                        x1: 0.0,
                        y1: 0.0,
                        x2: cos,
                        y2: sin,
                        color,
                    });
                    angle += RAY_STEP;
                }
            }
        });

    f.render_widget(canvas, area);
}

fn render_legend(f: &mut Frame, area: Rect, series: &[ChartSlice]) {
    let percentages = slice_percentages(series);
    let lines: Vec<Line> = series
        .iter()
        .zip(&percentages)
        .enumerate()
        .map(|(i, (slice, pct))| {
            let color = theme::SLICE_COLORS[i % theme::SLICE_COLORS.len()];
            Line::from(vec![
                Span::styled("■ ", Style::default().fg(color)),
                Span::styled(
                    format!("{:<15}", truncate(slice.label, 15)),
                    theme::normal_style(),
                ),
                Span::styled(
                    format!("{:>12}", format_amount(slice.amount)),
                    theme::normal_style(),
                ),
                Span::styled(format!("  {:>6}", format_pct(*pct)), theme::dim_style()),
            ])
        })
        .collect();

    f.render_widget(Paragraph::new(lines), area);
}
