pub mod config;
pub mod error;
pub mod game;
pub mod game_loop;
pub mod input;
pub mod placement;
pub mod renderer;
pub mod snake;
pub mod stage;
pub mod terminal_runtime;
pub mod ui;
