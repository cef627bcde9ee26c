use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Canonical movement directions for snake input.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Returns the unit heading for this direction.
    #[must_use]
    pub fn heading(self) -> Heading {
        match self {
            Self::Up => Heading { dx: 0, dy: -1 },
            Self::Down => Heading { dx: 0, dy: 1 },
            Self::Left => Heading { dx: -1, dy: 0 },
            Self::Right => Heading { dx: 1, dy: 0 },
        }
    }
}

/// Per-tick movement vector. `(0, 0)` means the snake has not started moving.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub struct Heading {
    pub dx: i32,
    pub dy: i32,
}

impl Heading {
    pub const STILL: Self = Self { dx: 0, dy: 0 };

    #[must_use]
    pub fn is_still(self) -> bool {
        self == Self::STILL
    }

    /// Returns the heading after `direction` is pressed.
    ///
    /// A vertical press is ignored while already moving vertically, and a
    /// horizontal press while moving horizontally, so the snake can never
    /// reverse into its own neck.
    #[must_use]
    pub fn steered(self, direction: Direction) -> Self {
        if direction_change_is_valid(self, direction) {
            direction.heading()
        } else {
            self
        }
    }
}

/// High-level input events consumed by the game loop.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameInput {
    Direction(Direction),
    Quit,
}

/// Returns whether `next` may replace `current` (perpendicular turns only).
#[must_use]
pub fn direction_change_is_valid(current: Heading, next: Direction) -> bool {
    match next {
        Direction::Up | Direction::Down => current.dy == 0,
        Direction::Left | Direction::Right => current.dx == 0,
    }
}

/// Maps a terminal key event to a game input. Unmapped keys yield `None`.
#[must_use]
pub fn map_key(key: KeyEvent) -> Option<GameInput> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(GameInput::Quit);
    }

    match key.code {
        KeyCode::Up => Some(GameInput::Direction(Direction::Up)),
        KeyCode::Down => Some(GameInput::Direction(Direction::Down)),
        KeyCode::Left => Some(GameInput::Direction(Direction::Left)),
        KeyCode::Right => Some(GameInput::Direction(Direction::Right)),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(GameInput::Quit),
        _ => None,
    }
}

/// Polls crossterm for keyboard input.
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Waits up to `timeout` for one event and maps it.
    ///
    /// Returns `Ok(None)` on timeout or when the event is not a game input.
    pub fn poll_input(&mut self, timeout: Duration) -> io::Result<Option<GameInput>> {
        if !event::poll(timeout)? {
            return Ok(None);
        }

        match event::read()? {
            Event::Key(key) => Ok(map_key(key)),
            _ => Ok(None),
        }
    }
}
