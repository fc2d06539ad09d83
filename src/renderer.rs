use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::Block;
use ratatui::Frame;

use crate::config::{growth_stage, GlyphSet, GridSize, Theme};
use crate::session::{SessionPhase, Snapshot};
use crate::snake::Position;
use crate::ui::hud::render_hud;
use crate::ui::menu::{
    render_game_over_menu, render_pause_menu, render_start_menu, render_victory_menu,
};

/// Renders the full frame from an immutable session snapshot.
///
/// Pure presentation: nothing here feeds back into the game core.
pub fn render(frame: &mut Frame<'_>, snapshot: &Snapshot<'_>, glyphs: &GlyphSet, theme: &Theme) {
    let area = frame.area();
    let play_area = render_hud(frame, area, snapshot, theme);

    let block = Block::bordered()
        .border_style(Style::default().fg(theme.border_fg))
        .style(Style::default().bg(theme.play_bg));
    let inner = block.inner(play_area);
    frame.render_widget(block, play_area);

    render_snake(frame, inner, snapshot, glyphs, theme);
    render_food(frame, inner, snapshot, glyphs, theme);

    match snapshot.phase {
        SessionPhase::Idle => render_start_menu(frame, play_area, snapshot.high_score, theme),
        SessionPhase::Paused => render_pause_menu(frame, play_area),
        SessionPhase::GameOver => render_game_over_menu(
            frame,
            play_area,
            snapshot.score,
            snapshot.high_score,
            snapshot.death_reason,
        ),
        SessionPhase::Victory => render_victory_menu(frame, play_area, snapshot.score),
        SessionPhase::Running => {}
    }
}

fn render_snake(
    frame: &mut Frame<'_>,
    inner: Rect,
    snapshot: &Snapshot<'_>,
    glyphs: &GlyphSet,
    theme: &Theme,
) {
    let head = snapshot.snake.head();
    let tail = snapshot.snake.tail();

    for segment in snapshot.snake.segments() {
        let (glyph, style) = if *segment == head {
            (
                glyphs.solid,
                Style::default()
                    .fg(theme.snake_head)
                    .add_modifier(Modifier::BOLD),
            )
        } else if *segment == tail {
            (glyphs.tail, Style::default().fg(theme.snake_tail))
        } else {
            (glyphs.solid, Style::default().fg(theme.snake_body))
        };

        fill_cell(frame, inner, snapshot.grid, *segment, glyph, style);
    }
}

fn render_food(
    frame: &mut Frame<'_>,
    inner: Rect,
    snapshot: &Snapshot<'_>,
    glyphs: &GlyphSet,
    theme: &Theme,
) {
    // Food appearance is keyed off snake length alone (growth stages).
    let glyph = glyphs.food_stages[growth_stage(snapshot.snake.len())];
    let Some(cell) = cell_rect(inner, snapshot.grid, snapshot.food) else {
        return;
    };

    // Single glyph centered in the cell rather than a solid fill.
    let x = cell.x + cell.width / 2;
    let y = cell.y + cell.height / 2;
    frame
        .buffer_mut()
        .set_string(x, y, glyph, Style::default().fg(theme.food));
}

fn fill_cell(
    frame: &mut Frame<'_>,
    inner: Rect,
    grid: GridSize,
    position: Position,
    glyph: &str,
    style: Style,
) {
    let Some(cell) = cell_rect(inner, grid, position) else {
        return;
    };

    let buffer = frame.buffer_mut();
    for y in cell.y..cell.bottom() {
        for x in cell.x..cell.right() {
            buffer.set_string(x, y, glyph, style);
        }
    }
}

/// Maps a logical cell to its terminal-space rectangle.
///
/// Cell size is the surface divided by the grid dimension on each axis
/// independently, so cells need not be square; the minimum is one terminal
/// cell per axis, with overflow clipped at the play-area edge.
fn cell_rect(inner: Rect, grid: GridSize, position: Position) -> Option<Rect> {
    if !position.is_within_bounds(grid) {
        return None;
    }

    let cell_width = (inner.width / grid.width.max(1)).max(1);
    let cell_height = (inner.height / grid.height.max(1)).max(1);

    let x_offset = u16::try_from(position.x).ok()?.checked_mul(cell_width)?;
    let y_offset = u16::try_from(position.y).ok()?.checked_mul(cell_height)?;

    let x = inner.x.saturating_add(x_offset);
    let y = inner.y.saturating_add(y_offset);
    if x >= inner.right() || y >= inner.bottom() {
        return None;
    }

    Some(Rect {
        x,
        y,
        width: cell_width.min(inner.right() - x),
        height: cell_height.min(inner.bottom() - y),
    })
}
