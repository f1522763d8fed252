use ratatui::Frame;
use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::Block;

use crate::config::{
    BORDER_PLAY_AREA, CELL_WIDTH, GLYPH_BODY, GLYPH_EMPTY, GLYPH_FOOD, GLYPH_HEAD, Theme,
};
use crate::game::{CellKind, GamePhase, GameState};
use crate::grid::{Cell, GridSize};
use crate::ui::hud::render_hud;
use crate::ui::menu::{render_game_over_menu, render_pause_menu, render_start_menu};

/// Renders the full game frame from immutable state.
pub fn render(frame: &mut Frame<'_>, state: &GameState, theme: &Theme) {
    let area = frame.area();
    let remaining = render_hud(frame, area, state, theme);
    let play_area = board_area(remaining, state.grid());

    let block = Block::bordered()
        .border_set(BORDER_PLAY_AREA)
        .border_style(Style::new().fg(theme.border_fg));
    let inner = block.inner(play_area);
    frame.render_widget(block, play_area);

    render_cells(frame, inner, state, theme);

    match state.phase {
        GamePhase::Idle => render_start_menu(frame, play_area, theme),
        GamePhase::Paused => render_pause_menu(frame, play_area, theme),
        GamePhase::GameOver => {
            render_game_over_menu(frame, play_area, state.score, state.game_over_reason(), theme);
        }
        GamePhase::Running => {}
    }
}

/// Centres a bordered box sized to the grid inside `area`.
fn board_area(area: Rect, grid: GridSize) -> Rect {
    let width = grid.cols().saturating_mul(CELL_WIDTH).saturating_add(2);
    let height = grid.rows().saturating_add(2);

    let [column] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(area);
    let [board] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(column);
    board
}

fn render_cells(frame: &mut Frame<'_>, inner: Rect, state: &GameState, theme: &Theme) {
    let buffer = frame.buffer_mut();

    for cell in state.grid().cells() {
        let Some((x, y)) = cell_to_terminal(inner, cell) else {
            continue;
        };

        let (glyph, style) = match state.cell_kind(cell) {
            CellKind::Empty => (GLYPH_EMPTY, Style::new().bg(theme.empty)),
            CellKind::Body => (GLYPH_BODY, Style::new().fg(theme.body).bg(theme.empty)),
            CellKind::Head => (
                GLYPH_HEAD,
                Style::new()
                    .fg(theme.head)
                    .bg(theme.empty)
                    .add_modifier(Modifier::BOLD),
            ),
            CellKind::Food => (GLYPH_FOOD, Style::new().fg(theme.food).bg(theme.empty)),
        };
        buffer.set_string(x, y, glyph, style);
    }
}

/// Maps a grid cell to the terminal position of its left column, if visible.
fn cell_to_terminal(inner: Rect, cell: Cell) -> Option<(u16, u16)> {
    let col = u16::try_from(cell.col).ok()?;
    let row = u16::try_from(cell.row).ok()?;

    let x = inner.x.saturating_add(col.saturating_mul(CELL_WIDTH));
    let y = inner.y.saturating_add(row);
    if x.saturating_add(CELL_WIDTH) > inner.right() || y >= inner.bottom() {
        return None;
    }

    Some((x, y))
}
