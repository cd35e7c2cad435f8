use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Gauge, Paragraph},
    Frame,
};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use super::app::{App, InputMode, FIELDS};
use super::chart;
use super::theme;
use crate::models::{format_amount, SavingsTier};

pub(crate) fn render(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Min(10),   // Content
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);
    render_content(f, chunks[1], app);
    render_status_bar(f, chunks[2], app);

    if app.show_help {
        render_help_overlay(f, f.area());
    }
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Line::from(vec![
        Span::styled(" Budget Planner ", theme::header_style()),
        Span::styled(
            "  ←/→ adjust  tab next  e edit  g report  ? help  q quit",
            Style::default().fg(theme::TEXT_DIM).bg(theme::HEADER_BG),
        ),
    ]);
    f.render_widget(
        Paragraph::new(header).style(Style::default().bg(theme::HEADER_BG)),
        area,
    );
}

fn render_content(f: &mut Frame, area: Rect, app: &App) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(42), Constraint::Percentage(58)])
        .split(area);

    render_form(f, columns[0], app);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(11), Constraint::Min(8)])
        .split(columns[1]);

    render_summary(f, right[0], app);
    chart::render(f, right[1], &app.series);
}

fn render_form(f: &mut Frame, area: Rect, app: &App) {
    let mut constraints: Vec<Constraint> = FIELDS.iter().map(|_| Constraint::Length(3)).collect();
    constraints.push(Constraint::Min(0));
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    for (i, spec) in FIELDS.iter().enumerate() {
        render_field(f, rows[i], app, i, spec.label, spec.min, spec.max);
    }
}

fn render_field(
    f: &mut Frame,
    area: Rect,
    app: &App,
    index: usize,
    label: &str,
    min: i64,
    max: i64,
) {
    let focused = app.focus == index;
    let editing = focused && app.input_mode == InputMode::Editing;

    let border_style = if focused {
        theme::focused_border_style()
    } else {
        theme::unfocused_border_style()
    };

    let value = app.values[index];
    let display = if editing {
        format!("{}▏", app.edit_input)
    } else {
        format_amount(value)
    };

    let span = (max - min).max(1);
    let ratio = ((value - Decimal::from(min)).to_f64().unwrap_or(0.0) / span as f64)
        .clamp(0.0, 1.0);

    let label_style = if focused {
        theme::accent_style()
    } else {
        Style::default().fg(theme::TEXT_DIM)
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style)
                .title(Span::styled(format!(" {label} "), label_style)),
        )
        .gauge_style(Style::default().fg(if editing {
            theme::YELLOW
        } else {
            theme::ACCENT
        }))
        .ratio(ratio)
        .label(Span::styled(
            display,
            Style::default().fg(theme::TEXT).add_modifier(Modifier::BOLD),
        ));

    f.render_widget(gauge, area);
}

fn render_summary(f: &mut Frame, area: Rect, app: &App) {
    let summary = &app.summary;
    let tier_style = match summary.tier {
        SavingsTier::Overspending => theme::expense_style(),
        SavingsTier::Low => Style::default().fg(theme::YELLOW),
        SavingsTier::Healthy => theme::income_style(),
    };

    let mut lines = vec![
        figure_line("Monthly Income", summary.income, theme::income_style()),
        figure_line("Total Expenses", summary.total_expenses, theme::expense_style()),
        figure_line(
            "Remaining (Savings)",
            summary.savings,
            if summary.savings < Decimal::ZERO {
                theme::expense_style()
            } else {
                theme::income_style()
            },
        ),
        Line::from(""),
        Line::from(Span::styled(summary.tier.message(), tier_style)),
        Line::from(""),
    ];

    if let Some(needed) = summary.shortfall {
        lines.push(Line::from(Span::styled(
            format!(
                "Goal: save ~20% ({})",
                format_amount(summary.recommended_savings)
            ),
            theme::normal_style(),
        )));
        lines.push(Line::from(Span::styled(
            format!("Reduce expenses by about {}", format_amount(needed)),
            Style::default().fg(theme::YELLOW),
        )));
    } else {
        lines.push(Line::from(Span::styled(
            "You are meeting the recommended 20% savings threshold.",
            theme::income_style(),
        )));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::unfocused_border_style())
        .title(Span::styled(
            format!(" Summary — {} ", summary.tier),
            tier_style.add_modifier(Modifier::BOLD),
        ));

    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn figure_line(label: &str, amount: Decimal, style: Style) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{label:<20}"), theme::dim_style()),
        Span::styled(
            format!("{:>12}", format_amount(amount)),
            style.add_modifier(Modifier::BOLD),
        ),
    ])
}

fn render_status_bar(f: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![
        Span::styled(
            format!(" {} ", app.input_mode),
            theme::header_style(),
        ),
        Span::raw(" "),
        Span::styled(&app.status_message, theme::status_bar_style()),
    ];
    if let Some(path) = &app.report_path {
        spans.push(Span::styled(
            format!("  [report: {}]", path.display()),
            Style::default().fg(theme::GREEN).bg(theme::SURFACE),
        ));
    }
    f.render_widget(
        Paragraph::new(Line::from(spans)).style(theme::status_bar_style()),
        area,
    );
}

fn render_help_overlay(f: &mut Frame, area: Rect) {
    let help_text = vec![
        Line::from(Span::styled(
            " Budget Planner Help ",
            theme::accent_style(),
        )),
        Line::from(""),
        Line::from("  tab / j / ↓     next field"),
        Line::from("  shift-tab / k / ↑   previous field"),
        Line::from("  ← / h           decrease by one step"),
        Line::from("  → / l           increase by one step"),
        Line::from("  H / L           decrease / increase by ten steps"),
        Line::from("  e / enter       type an exact amount"),
        Line::from("  g               generate the PDF report"),
        Line::from("  ?               toggle this help"),
        Line::from("  q               quit"),
        Line::from(""),
        Line::from(Span::styled(
            "  Summary and chart update live; the PDF is written on g.",
            theme::dim_style(),
        )),
        Line::from(Span::styled("  Press any key to close.", theme::dim_style())),
    ];

    let width = 58.min(area.width);
    let height = (help_text.len() as u16 + 2).min(area.height);
    let popup = Rect {
        x: area.x + (area.width.saturating_sub(width)) / 2,
        y: area.y + (area.height.saturating_sub(height)) / 2,
        width,
        height,
    };

    f.render_widget(Clear, popup);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::focused_border_style());
    f.render_widget(
        Paragraph::new(help_text)
            .style(theme::normal_style())
            .block(block),
        popup,
    );
}
