use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::config::Theme;
use crate::game::GameState;

const HUD_SEPARATOR: &str = " │ ";

/// Renders the one-line HUD and returns the remaining area above it.
#[must_use]
pub fn render_hud(frame: &mut Frame<'_>, area: Rect, state: &GameState, theme: &Theme) -> Rect {
    let [play_area, hud_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(area);

    frame.render_widget(
        Paragraph::new(info_line(state, theme))
            .alignment(Alignment::Center)
            .style(Style::default().fg(theme.hud_muted)),
        hud_area,
    );

    play_area
}

fn info_line(state: &GameState, theme: &Theme) -> Line<'static> {
    let value_style = Style::default()
        .fg(theme.hud_score)
        .add_modifier(Modifier::BOLD);

    Line::from(vec![
        Span::raw("Score: "),
        Span::styled(state.score.to_string(), value_style),
        Span::raw(HUD_SEPARATOR),
        Span::raw("Stage: "),
        Span::styled(state.stage.to_string(), value_style),
        Span::raw(HUD_SEPARATOR),
        Span::raw("Length: "),
        Span::styled(state.snake.len().to_string(), value_style),
    ])
}
