use alloc::vec::Vec;

use crate::*;
pub use random::*;

mod random;

/// Chooses where mines go on a field of the given size.
pub trait MinePlacer {
    /// Returns `min(mines, dimensions.total_cells())` distinct in-bounds coordinates.
    fn place(&mut self, mines: CellCount, dimensions: Dimensions) -> Vec<Coord2>;
}
