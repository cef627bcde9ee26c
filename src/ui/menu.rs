use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Clear, Paragraph};

use crate::config::Theme;
use crate::game::{DeathReason, GameOverReport};

/// Draws the waiting-for-first-input hint as a centered popup.
pub fn render_start_hint(frame: &mut Frame<'_>, area: Rect, theme: &Theme) {
    let popup = centered_popup(area, 32, 5);
    frame.render_widget(Clear, popup);

    let lines = vec![
        Line::from("Press an arrow key to start"),
        Line::from(""),
        Line::from("[Q] Quit").style(Style::default().fg(theme.menu_footer)),
    ];
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(Block::bordered().title(" snake ")),
        popup,
    );
}

/// Draws the game-over notification as a centered popup.
pub fn render_game_over_menu(
    frame: &mut Frame<'_>,
    area: Rect,
    report: &GameOverReport,
    theme: &Theme,
) {
    let popup = centered_popup(area, 34, 9);
    frame.render_widget(Clear, popup);

    let lines = vec![
        Line::from("GAME OVER").style(
            Style::default()
                .fg(theme.menu_title)
                .add_modifier(Modifier::BOLD),
        ),
        Line::from(""),
        Line::from(report.summary()),
        Line::from(cause_text(report.reason)),
        Line::from(""),
        Line::from("[Enter] OK").style(Style::default().fg(theme.menu_footer)),
    ];

    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(Block::bordered().title(" game over ")),
        popup,
    );
}

fn cause_text(reason: DeathReason) -> &'static str {
    match reason {
        DeathReason::WallCollision => "Cause: hit wall",
        DeathReason::SelfCollision => "Cause: hit yourself",
        DeathReason::ObstacleCollision => "Cause: hit obstacle",
    }
}

/// Centers a `width` x `height` rectangle in `area`, shrinking it to fit.
fn centered_popup(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);

    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use ratatui::layout::Rect;

    use super::centered_popup;

    #[test]
    fn popup_is_centered() {
        let popup = centered_popup(Rect::new(0, 0, 42, 22), 34, 9);

        assert_eq!(popup, Rect::new(4, 6, 34, 9));
    }

    #[test]
    fn popup_shrinks_to_small_area() {
        let popup = centered_popup(Rect::new(2, 1, 20, 4), 34, 9);

        assert_eq!(popup, Rect::new(2, 1, 20, 4));
    }
}
