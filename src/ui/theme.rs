use ratatui::style::{Color, Modifier, Style};

pub(crate) const HEADER_BG: Color = Color::Rgb(36, 39, 58);
pub(crate) const HEADER_FG: Color = Color::Rgb(202, 211, 245);
pub(crate) const ACCENT: Color = Color::Rgb(138, 173, 244);
pub(crate) const GREEN: Color = Color::Rgb(166, 218, 149);
pub(crate) const RED: Color = Color::Rgb(237, 135, 150);
pub(crate) const YELLOW: Color = Color::Rgb(238, 212, 159);
pub(crate) const TEXT: Color = Color::Rgb(202, 211, 245);
pub(crate) const TEXT_DIM: Color = Color::Rgb(128, 135, 162);
pub(crate) const OVERLAY: Color = Color::Rgb(73, 77, 100);
pub(crate) const SURFACE: Color = Color::Rgb(54, 58, 79);

/// One color per chart slice, in series order:
/// housing, food, transportation, other, savings.
pub(crate) const SLICE_COLORS: [Color; 5] = [
    Color::Rgb(138, 173, 244), // blue
    Color::Rgb(238, 212, 159), // yellow
    Color::Rgb(245, 169, 127), // peach
    Color::Rgb(198, 160, 246), // mauve
    Color::Rgb(166, 218, 149), // green
];

pub(crate) fn header_style() -> Style {
    Style::default()
        .fg(HEADER_FG)
        .bg(HEADER_BG)
        .add_modifier(Modifier::BOLD)
}

pub(crate) fn normal_style() -> Style {
    Style::default().fg(TEXT)
}

pub(crate) fn dim_style() -> Style {
    Style::default().fg(TEXT_DIM)
}

pub(crate) fn accent_style() -> Style {
    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
}

pub(crate) fn income_style() -> Style {
    Style::default().fg(GREEN)
}

pub(crate) fn expense_style() -> Style {
    Style::default().fg(RED)
}

pub(crate) fn status_bar_style() -> Style {
    Style::default().fg(TEXT_DIM).bg(SURFACE)
}

pub(crate) fn focused_border_style() -> Style {
    Style::default().fg(ACCENT)
}

pub(crate) fn unfocused_border_style() -> Style {
    Style::default().fg(OVERLAY)
}
