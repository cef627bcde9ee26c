use std::io;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::Block;

use crate::config::{
    BORDER_HALF_BLOCK, CELL_WIDTH_COLUMNS, GLYPH_FOOD, GLYPH_OBSTACLE, GLYPH_SNAKE_BODY,
    GLYPH_SNAKE_HEAD, GridSize, Theme,
};
use crate::game::{GameOverReport, GameState};
use crate::game_loop::Renderer;
use crate::snake::Position;
use crate::terminal_runtime::TerminalSession;
use crate::ui::hud::render_hud;
use crate::ui::menu::{render_game_over_menu, render_start_hint};

/// Draws the game into the terminal session.
pub struct TerminalRenderer {
    session: TerminalSession,
    theme: &'static Theme,
}

impl TerminalRenderer {
    #[must_use]
    pub fn new(session: TerminalSession, theme: &'static Theme) -> Self {
        Self { session, theme }
    }
}

impl Renderer for TerminalRenderer {
    type Error = io::Error;

    fn render(&mut self, state: &GameState) -> io::Result<()> {
        let theme = self.theme;
        self.session
            .terminal_mut()
            .draw(|frame| render(frame, state, theme, None))?;
        Ok(())
    }

    fn notify_game_over(&mut self, state: &GameState, report: &GameOverReport) -> io::Result<()> {
        let theme = self.theme;
        self.session
            .terminal_mut()
            .draw(|frame| render(frame, state, theme, Some(report)))?;

        loop {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press
                    && matches!(key.code, KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Esc)
                {
                    return Ok(());
                }
            }
        }
    }
}

/// Renders the full game frame from immutable state.
pub fn render(
    frame: &mut Frame<'_>,
    state: &GameState,
    theme: &Theme,
    game_over: Option<&GameOverReport>,
) {
    let area = frame.area();
    let board_area = render_hud(frame, area, state, theme);
    let play_area = board_rect(board_area, state.bounds());

    let block = Block::bordered()
        .border_set(BORDER_HALF_BLOCK)
        .border_style(Style::new().fg(theme.border_fg).bg(theme.border_bg))
        .style(Style::new().bg(theme.play_bg));

    let inner = block.inner(play_area);
    frame.render_widget(block, play_area);

    let bounds = state.bounds();
    for obstacle in &state.obstacles {
        paint_cell(frame, inner, bounds, *obstacle, GLYPH_OBSTACLE, Style::new().fg(theme.obstacle));
    }
    paint_cell(frame, inner, bounds, state.food, GLYPH_FOOD, Style::new().fg(theme.food));
    render_snake(frame, inner, state, theme);

    if let Some(report) = game_over {
        render_game_over_menu(frame, play_area, report, theme);
    } else if state.heading.is_still() {
        render_start_hint(frame, play_area, theme);
    }
}

fn render_snake(frame: &mut Frame<'_>, inner: Rect, state: &GameState, theme: &Theme) {
    let bounds = state.bounds();
    let body_style = Style::new().fg(theme.snake_body);
    for segment in state.snake.segments().skip(1) {
        paint_cell(frame, inner, bounds, *segment, GLYPH_SNAKE_BODY, body_style);
    }

    let head_style = Style::new()
        .fg(theme.snake_head)
        .add_modifier(Modifier::BOLD);
    paint_cell(frame, inner, bounds, state.snake.head(), GLYPH_SNAKE_HEAD, head_style);
}

fn paint_cell(
    frame: &mut Frame<'_>,
    inner: Rect,
    bounds: GridSize,
    position: Position,
    glyph: &str,
    style: Style,
) {
    let Some((x, y)) = logical_to_terminal(inner, bounds, position) else {
        return;
    };

    frame.buffer_mut().set_string(x, y, glyph, style);
}

/// Centers the bordered board inside `area`, clipping on small terminals.
fn board_rect(area: Rect, bounds: GridSize) -> Rect {
    let width = (bounds.tile_count() * CELL_WIDTH_COLUMNS + 2).min(area.width);
    let height = (bounds.tile_count() + 2).min(area.height);

    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

fn logical_to_terminal(inner: Rect, bounds: GridSize, position: Position) -> Option<(u16, u16)> {
    if !bounds.contains(position) {
        return None;
    }

    let x_offset = u16::try_from(position.x).ok()? * CELL_WIDTH_COLUMNS;
    let y_offset = u16::try_from(position.y).ok()?;

    let x = inner.x.saturating_add(x_offset);
    let y = inner.y.saturating_add(y_offset);
    if x + CELL_WIDTH_COLUMNS > inner.right() || y >= inner.bottom() {
        return None;
    }

    Some((x, y))
}
