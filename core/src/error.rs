use thiserror::Error;

use crate::Coord;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum FieldError {
    #[error("Invalid dimensions {height}x{width}, both must be at least 1")]
    InvalidDimensions { height: usize, width: usize },
    #[error("Coordinates ({x}, {y}) are outside the field")]
    OutOfBounds { x: Coord, y: Coord },
    #[error("Cell rows do not form a rectangle")]
    InvalidShape,
    #[error("Cell at ({x}, {y}) does not match its neighboring mines")]
    InconsistentCount { x: Coord, y: Coord },
}

pub type Result<T> = core::result::Result<T, FieldError>;
