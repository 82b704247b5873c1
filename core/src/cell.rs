use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Content of a single field position, fixed once the field is built.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cell {
    Mine,
    /// Safe cell carrying the number of mines among its neighbors.
    Safe(u8),
}

impl Cell {
    pub const fn contains_mine(self) -> bool {
        matches!(self, Self::Mine)
    }

    /// `None` for mines, which have no meaningful count.
    pub const fn neighbor_mine_count(self) -> Option<u8> {
        match self {
            Self::Mine => None,
            Self::Safe(count) => Some(count),
        }
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::Safe(0)
    }
}

/// Player-visible state of a cell, owned by presentation code.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellState {
    /// Content is hidden to the player
    Hidden,
    /// Content is visible to the player
    Revealed,
    /// Player marked this cell as a possible mine
    Flagged,
    /// The mine in this cell was triggered
    Exploded,
}

impl CellState {
    pub const fn is_hidden(self) -> bool {
        matches!(self, Self::Hidden | Self::Flagged)
    }
}

impl Default for CellState {
    fn default() -> Self {
        Self::Hidden
    }
}

/// Grid of [`CellState`] kept alongside a [`Field`].
///
/// It only borrows the field's shape, never the field itself, so marking cells cannot change where mines are or
/// what the counts say.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CellStates {
    states: Array2<CellState>,
}

impl CellStates {
    pub fn for_field(field: &Field) -> Self {
        Self::new(field.dimensions())
    }

    pub fn new(dimensions: Dimensions) -> Self {
        Self {
            states: Array2::default(dimensions.to_nd_shape()),
        }
    }

    pub fn get(&self, (x, y): Coord2) -> Result<CellState> {
        self.states
            .get((x, y).to_nd_index())
            .copied()
            .ok_or(FieldError::OutOfBounds { x, y })
    }

    pub fn set(&mut self, (x, y): Coord2, state: CellState) -> Result<CellState> {
        let slot = self
            .states
            .get_mut((x, y).to_nd_index())
            .ok_or(FieldError::OutOfBounds { x, y })?;
        Ok(core::mem::replace(slot, state))
    }

    pub fn count(&self, state: CellState) -> usize {
        self.states.iter().filter(|&&s| s == state).count()
    }
}
