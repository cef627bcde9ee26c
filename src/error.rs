use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Invalid fixed board configuration.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Error)]
pub enum ConfigError {
    #[error("cell size must be non-zero")]
    ZeroCellSize,
    #[error("a {board_px}px board cannot hold a single {cell_px}px cell")]
    BoardSmallerThanCell { board_px: u16, cell_px: u16 },
    #[error("reset cell ({x}, {y}) lies outside the {tile_count}x{tile_count} grid")]
    ResetCellOutsideGrid { x: i32, y: i32, tile_count: u16 },
}

/// Top-level failures surfaced by the binary.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),
    #[error("invalid board configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("cannot open log file {}: {source}", path.display())]
    LogFile { path: PathBuf, source: io::Error },
}
