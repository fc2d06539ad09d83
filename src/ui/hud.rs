use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

use crate::config::Theme;
use crate::session::Snapshot;

const SEPARATOR: &str = " │ ";

/// Renders the one-line HUD at the bottom and returns the play area above it.
#[must_use]
pub fn render_hud(frame: &mut Frame<'_>, area: Rect, snapshot: &Snapshot<'_>, theme: &Theme) -> Rect {
    let [play_area, hud_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(area);

    let compact = hud_width(snapshot, false) > usize::from(hud_area.width);
    frame.render_widget(
        Paragraph::new(hud_line(snapshot, theme, compact)).alignment(Alignment::Center),
        hud_area,
    );

    play_area
}

fn hud_line<'a>(snapshot: &Snapshot<'a>, theme: &Theme, compact: bool) -> Line<'a> {
    let label_style = Style::default().fg(theme.hud_label);
    let value_style = Style::default().fg(theme.hud_value);

    let mut spans = Vec::new();
    for (index, (label, value)) in hud_fields(snapshot, compact).into_iter().enumerate() {
        if index > 0 {
            spans.push(Span::styled(SEPARATOR.to_string(), label_style));
        }
        spans.push(Span::styled(format!("{label}: "), label_style));
        spans.push(Span::styled(value, value_style));
    }

    Line::from(spans)
}

fn hud_width(snapshot: &Snapshot<'_>, compact: bool) -> usize {
    let fields = hud_fields(snapshot, compact);
    let mut width = SEPARATOR.width() * (fields.len() - 1);
    for (label, value) in fields {
        width += label.width() + 2 + value.width();
    }
    width
}

fn hud_fields(snapshot: &Snapshot<'_>, compact: bool) -> Vec<(&'static str, String)> {
    vec![
        (
            if compact { "L" } else { "Length" },
            snapshot.snake.len().to_string(),
        ),
        (
            if compact { "S" } else { "Score" },
            snapshot.score.to_string(),
        ),
        (
            if compact { "H" } else { "Hi" },
            snapshot.high_score.to_string(),
        ),
        (
            if compact { "T" } else { "Tick" },
            format!("{}ms", snapshot.tick_interval_ms),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use crate::config::{GridSize, THEME_CLASSIC};
    use crate::game::GameState;
    use crate::input::Direction;
    use crate::session::{SessionPhase, Snapshot};
    use crate::snake::{Position, Snake};

    use super::{hud_line, hud_width};

    fn snapshot(snake: &Snake) -> Snapshot<'_> {
        Snapshot {
            grid: GridSize {
                width: 20,
                height: 20,
            },
            snake,
            food: Position { x: 1, y: 1 },
            direction: Direction::Right,
            phase: SessionPhase::Running,
            score: 12,
            high_score: 40,
            tick_interval_ms: 126,
            death_reason: None,
        }
    }

    #[test]
    fn compact_labels_are_narrower() {
        let mut rng = StdRng::seed_from_u64(1);
        let snake = GameState::new(
            GridSize {
                width: 20,
                height: 20,
            },
            &mut rng,
        )
        .snake;
        let snapshot = snapshot(&snake);

        assert!(hud_width(&snapshot, true) < hud_width(&snapshot, false));
    }

    #[test]
    fn hud_line_contains_all_session_metrics() {
        let snake = Snake::from_segments(vec![Position { x: 3, y: 3 }]);
        let snapshot = snapshot(&snake);

        let line = hud_line(&snapshot, &THEME_CLASSIC, false);
        let text: String = line.spans.iter().map(|span| span.content.as_ref()).collect();

        assert!(text.contains("Score: 12"));
        assert!(text.contains("Hi: 40"));
        assert!(text.contains("Tick: 126ms"));
        assert!(text.contains("Length: 1"));
    }
}
