use alloc::collections::BTreeSet;
use ndarray::Array2;

use crate::*;

/// Lays out the cell grid for the given mines and derives every safe cell's neighbor count.
///
/// Duplicate coordinates are collapsed, and the result does not depend on the order of `mines`. A coordinate
/// outside `dimensions` is rejected.
pub fn build_cells(dimensions: Dimensions, mines: &[Coord2]) -> Result<Array2<Cell>> {
    let mines = mines
        .iter()
        .map(|&coords| dimensions.validate_coords(coords))
        .collect::<Result<BTreeSet<_>>>()?;

    let mut cells: Array2<Cell> = Array2::default(dimensions.to_nd_shape());
    for &coords in &mines {
        cells[coords.to_nd_index()] = Cell::Mine;
    }

    for &coords in &mines {
        for neighbor in dimensions.iter_neighbors(coords) {
            if let Cell::Safe(count) = &mut cells[neighbor.to_nd_index()] {
                *count += 1;
            }
        }
    }

    log::debug!(
        "Built {}x{} cells with {} mines",
        dimensions.height(),
        dimensions.width(),
        mines.len()
    );
    Ok(cells)
}
