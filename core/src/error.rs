use thiserror::Error;

use crate::{CellCount, Coord, Coord2};

#[derive(Error, Debug, Copy, Clone, PartialEq)]
pub enum GameError {
    #[error("Board must have at least one row and one column, got {width}x{height}")]
    EmptyBoard { width: Coord, height: Coord },
    #[error("Mine density must be in [0, 1), got {0}")]
    InvalidDensity(f64),
    #[error("Too many mines, requested {mines} but only {available} fit outside the safe start")]
    TooManyMines {
        mines: CellCount,
        available: CellCount,
    },
    #[error("Coordinates {coords:?} are outside of the {size:?} board")]
    OutOfBounds { coords: Coord2, size: Coord2 },
}

impl GameError {
    /// Whether the error came from invalid board parameters rather than a bad move.
    pub const fn is_config_error(&self) -> bool {
        !matches!(self, Self::OutOfBounds { .. })
    }
}

pub type Result<T> = core::result::Result<T, GameError>;
