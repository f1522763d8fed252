use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::config::Theme;
use crate::game::GameState;

const SEPARATOR: &str = " │ ";

/// Renders the one-line HUD at the bottom and returns the area above it.
#[must_use]
pub fn render_hud(frame: &mut Frame<'_>, area: Rect, state: &GameState, theme: &Theme) -> Rect {
    let [play_area, hud_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(area);

    frame.render_widget(
        Paragraph::new(info_line(state, theme)).alignment(Alignment::Center),
        hud_area,
    );

    play_area
}

fn info_line(state: &GameState, theme: &Theme) -> Line<'static> {
    let grid = state.grid();
    let fields = [
        ("Score", state.score.to_string()),
        ("Length", state.snake.len().to_string()),
        ("Tick", format!("{}ms", state.speed().as_millis())),
        ("Grid", format!("{}x{}", grid.rows(), grid.cols())),
    ];

    let label_style = Style::default().fg(theme.hud_label);
    let value_style = Style::default().fg(theme.hud_value);

    let mut spans = Vec::with_capacity(fields.len() * 3);
    for (index, (label, value)) in fields.into_iter().enumerate() {
        if index > 0 {
            spans.push(Span::styled(SEPARATOR, label_style));
        }
        spans.push(Span::styled(format!("{label}: "), label_style));
        spans.push(Span::styled(value, value_style));
    }

    Line::from(spans)
}
