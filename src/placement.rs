//! Randomised placement of food and obstacles.
//!
//! Both operations sample uniformly over the grid and give up after
//! [`MAX_PLACEMENT_ATTEMPTS`] samples instead of stalling on a crowded board.

use rand::Rng;

use crate::config::{GridSize, MAX_PLACEMENT_ATTEMPTS};
use crate::snake::{Position, Snake};

/// Samples one uniformly random cell inside `bounds`.
#[must_use]
pub fn random_cell<R: Rng + ?Sized>(rng: &mut R, bounds: GridSize) -> Position {
    let limit = i32::from(bounds.tile_count());
    Position {
        x: rng.gen_range(0..limit),
        y: rng.gen_range(0..limit),
    }
}

/// Picks a food cell outside the snake and the obstacles.
///
/// When every attempt lands on an occupied cell the last sample is returned
/// anyway.
#[must_use]
pub fn place_food<R: Rng + ?Sized>(
    rng: &mut R,
    bounds: GridSize,
    snake: &Snake,
    obstacles: &[Position],
) -> Position {
    let is_occupied = |cell: Position| snake.occupies(cell) || obstacles.contains(&cell);

    let mut candidate = random_cell(rng, bounds);
    let mut attempts = 1;
    while is_occupied(candidate) && attempts < MAX_PLACEMENT_ATTEMPTS {
        candidate = random_cell(rng, bounds);
        attempts += 1;
    }

    if is_occupied(candidate) {
        log::warn!(
            "no free cell for food after {attempts} attempts, placing at ({}, {})",
            candidate.x,
            candidate.y
        );
    }

    candidate
}

/// Generates up to `count` distinct obstacle cells avoiding the snake and `food`.
///
/// Returns fewer than `count` cells when the attempt cap runs out.
#[must_use]
pub fn place_obstacles<R: Rng + ?Sized>(
    rng: &mut R,
    bounds: GridSize,
    count: usize,
    snake: &Snake,
    food: Position,
) -> Vec<Position> {
    let mut obstacles = Vec::with_capacity(count);
    let mut attempts = 0;

    while obstacles.len() < count && attempts < MAX_PLACEMENT_ATTEMPTS {
        let candidate = random_cell(rng, bounds);
        attempts += 1;

        if candidate != food && !snake.occupies(candidate) && !obstacles.contains(&candidate) {
            obstacles.push(candidate);
        }
    }

    if obstacles.len() < count {
        log::warn!(
            "placed {} of {count} obstacles before running out of attempts",
            obstacles.len()
        );
    }

    obstacles
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::{place_food, place_obstacles, random_cell};
    use crate::config::GridSize;
    use crate::snake::{Position, Snake};

    fn row_snake() -> Snake {
        Snake::from_segments(vec![
            Position { x: 2, y: 0 },
            Position { x: 1, y: 0 },
            Position { x: 0, y: 0 },
        ])
    }

    fn full_board_snake(bounds: GridSize) -> Snake {
        let limit = i32::from(bounds.tile_count());
        let cells = (0..limit)
            .flat_map(|y| (0..limit).map(move |x| Position { x, y }))
            .collect();
        Snake::from_segments(cells)
    }

    #[test]
    fn random_cells_stay_in_bounds() {
        let mut rng = StdRng::seed_from_u64(3);
        let bounds = GridSize::with_tile_count(4);

        for _ in 0..200 {
            assert!(bounds.contains(random_cell(&mut rng, bounds)));
        }
    }

    #[test]
    fn same_seed_gives_same_placement() {
        let bounds = GridSize::with_tile_count(20);
        let snake = row_snake();

        let first = place_food(&mut StdRng::seed_from_u64(11), bounds, &snake, &[]);
        let second = place_food(&mut StdRng::seed_from_u64(11), bounds, &snake, &[]);

        assert_eq!(first, second);
    }

    #[test]
    fn food_on_saturated_board_still_returns_a_cell() {
        let mut rng = StdRng::seed_from_u64(5);
        let bounds = GridSize::with_tile_count(3);
        let snake = full_board_snake(bounds);

        let food = place_food(&mut rng, bounds, &snake, &[]);

        assert!(bounds.contains(food));
        assert!(snake.occupies(food));
    }

    #[test]
    fn obstacles_on_saturated_board_come_back_short() {
        let mut rng = StdRng::seed_from_u64(5);
        let bounds = GridSize::with_tile_count(3);
        let snake = full_board_snake(bounds);

        let obstacles = place_obstacles(&mut rng, bounds, 5, &snake, Position { x: 9, y: 9 });

        assert!(obstacles.is_empty());
    }

    #[test]
    fn obstacles_fill_the_only_free_cells() {
        let mut rng = StdRng::seed_from_u64(8);
        let bounds = GridSize::with_tile_count(2);
        let snake = Snake::from_segments(vec![Position { x: 0, y: 0 }]);
        let food = Position { x: 1, y: 1 };

        let mut obstacles = place_obstacles(&mut rng, bounds, 3, &snake, food);
        obstacles.sort_by_key(|cell| (cell.x, cell.y));

        assert_eq!(
            obstacles,
            vec![Position { x: 0, y: 1 }, Position { x: 1, y: 0 }]
        );
    }

    proptest! {
        #[test]
        fn food_avoids_snake_and_obstacles(seed in any::<u64>()) {
            let mut rng = StdRng::seed_from_u64(seed);
            let bounds = GridSize::with_tile_count(20);
            let snake = row_snake();
            let obstacles = [Position { x: 5, y: 5 }, Position { x: 6, y: 6 }];

            let food = place_food(&mut rng, bounds, &snake, &obstacles);

            prop_assert!(bounds.contains(food));
            prop_assert!(!snake.occupies(food));
            prop_assert!(!obstacles.contains(&food));
        }

        #[test]
        fn obstacles_are_distinct_and_clear_of_snake_and_food(
            seed in any::<u64>(),
            count in 0usize..8,
        ) {
            let mut rng = StdRng::seed_from_u64(seed);
            let bounds = GridSize::with_tile_count(20);
            let snake = row_snake();
            let food = Position { x: 15, y: 15 };

            let obstacles = place_obstacles(&mut rng, bounds, count, &snake, food);

            prop_assert_eq!(obstacles.len(), count);
            for (index, cell) in obstacles.iter().enumerate() {
                prop_assert!(bounds.contains(*cell));
                prop_assert!(!snake.occupies(*cell));
                prop_assert_ne!(*cell, food);
                prop_assert!(!obstacles[index + 1..].contains(cell));
            }
        }
    }
}
