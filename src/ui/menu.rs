use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Clear, Paragraph};

use crate::config::Theme;
use crate::game::GameOverReason;

/// Draws the start screen as a centered popup.
pub fn render_start_menu(frame: &mut Frame<'_>, area: Rect, theme: &Theme) {
    let lines = vec![
        title_line("SNAKE", theme),
        Line::from(""),
        Line::from("[Enter]/[Space] Start"),
        Line::from("[Q]/[Esc] Quit"),
        Line::from(""),
        footer_line("Arrows/WASD to steer", theme),
    ];
    render_popup(frame, area, " start ", lines);
}

/// Draws the pause screen as a centered popup.
pub fn render_pause_menu(frame: &mut Frame<'_>, area: Rect, theme: &Theme) {
    let lines = vec![
        title_line("PAUSED", theme),
        Line::from(""),
        Line::from("[P]/[Enter] Resume"),
        Line::from("[R] Restart"),
        Line::from("[Q]/[Esc] Quit"),
    ];
    render_popup(frame, area, " pause ", lines);
}

/// Draws the game-over screen as a centered popup.
pub fn render_game_over_menu(
    frame: &mut Frame<'_>,
    area: Rect,
    score: u32,
    reason: Option<GameOverReason>,
    theme: &Theme,
) {
    let lines = vec![
        title_line("GAME OVER", theme),
        Line::from(""),
        Line::from(format!("Score: {score}")),
        Line::from(reason_text(reason)),
        Line::from(""),
        Line::from("[R]/[Enter] Play Again"),
        Line::from("[Q]/[Esc] Quit"),
    ];
    render_popup(frame, area, " game over ", lines);
}

fn reason_text(reason: Option<GameOverReason>) -> &'static str {
    match reason {
        Some(GameOverReason::WallCollision) => "Cause: hit wall",
        Some(GameOverReason::SelfCollision) => "Cause: hit yourself",
        Some(GameOverReason::BoardFull) => "Board filled!",
        None => "",
    }
}

fn title_line(text: &'static str, theme: &Theme) -> Line<'static> {
    Line::from(text).style(
        Style::default()
            .fg(theme.popup_title)
            .add_modifier(Modifier::BOLD),
    )
}

fn footer_line(text: &'static str, theme: &Theme) -> Line<'static> {
    Line::from(text).style(Style::default().fg(theme.popup_footer))
}

fn render_popup(frame: &mut Frame<'_>, area: Rect, title: &'static str, lines: Vec<Line<'static>>) {
    let width = lines
        .iter()
        .map(Line::width)
        .max()
        .unwrap_or(0)
        .saturating_add(4);
    let height = lines.len().saturating_add(2);
    let popup = centered_popup(
        area,
        u16::try_from(width).unwrap_or(u16::MAX),
        u16::try_from(height).unwrap_or(u16::MAX),
    );

    frame.render_widget(Clear, popup);
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(Block::bordered().title(title)),
        popup,
    );
}

fn centered_popup(area: Rect, width: u16, height: u16) -> Rect {
    let [mid] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    let [center] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(mid);

    center
}
