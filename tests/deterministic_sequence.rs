use std::time::Duration;

use stage_snake::config::GridSize;
use stage_snake::game::{GameState, GameStatus, TickOutcome};
use stage_snake::input::{Direction, Heading};
use stage_snake::snake::Position;
use stage_snake::stage::Stage;

#[test]
fn stepwise_food_collection_stage_change_and_wall_collision() {
    let mut state = GameState::new_with_seed(GridSize::with_tile_count(20), 42);

    state.apply_input(Direction::Down);
    for _ in 0..5 {
        assert_eq!(state.tick(), TickOutcome::Moved);
    }
    assert_eq!(state.snake.head(), Position { x: 10, y: 15 });

    state.apply_input(Direction::Right);
    for _ in 0..4 {
        assert_eq!(state.tick(), TickOutcome::Moved);
    }
    assert_eq!(state.tick(), TickOutcome::Ate { promoted: None });
    assert_eq!(state.score, 10);
    assert_eq!(state.snake.len(), 2);

    state.food = Position { x: 16, y: 15 };
    assert_eq!(state.tick(), TickOutcome::Ate { promoted: None });

    state.food = Position { x: 17, y: 15 };
    assert_eq!(
        state.tick(),
        TickOutcome::Ate {
            promoted: Some(Stage::Two)
        }
    );
    assert_eq!(state.score, 30);
    assert_eq!(state.snake.len(), 4);
    assert_eq!(state.obstacles.len(), 3);
    assert_eq!(state.tick_interval(), Duration::from_millis(80));

    state.apply_input(Direction::Left);
    assert_eq!(state.heading, Heading { dx: 1, dy: 0 });

    let mut report = None;
    for _ in 0..3 {
        if let TickOutcome::GameOver(ended) = state.tick() {
            report = Some(ended);
            break;
        }
    }

    let report = report.expect("snake should have hit the right wall or an obstacle");
    assert_eq!(state.status, GameStatus::GameOver);
    assert_eq!(report.stage, Stage::Two);
    assert!(report.score >= 30);
    assert!(report.to_string().contains(&report.summary()));
}
