#![no_std]

extern crate alloc;

use serde::{Deserialize, Serialize};

pub use builder::*;
pub use cell::*;
pub use error::*;
pub use field::*;
pub use generator::*;
pub use random::*;
pub use types::*;

mod builder;
mod cell;
mod error;
mod field;
mod generator;
mod random;
mod types;

/// Size of a field in cells, always at least 1 × 1.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawDimensions")]
pub struct Dimensions {
    height: Coord,
    width: Coord,
}

#[derive(Deserialize)]
struct RawDimensions {
    height: Coord,
    width: Coord,
}

impl TryFrom<RawDimensions> for Dimensions {
    type Error = FieldError;

    fn try_from(raw: RawDimensions) -> Result<Self> {
        Self::new(raw.height, raw.width)
    }
}

impl Dimensions {
    pub fn new(height: Coord, width: Coord) -> Result<Self> {
        if height == 0 || width == 0 {
            return Err(FieldError::InvalidDimensions {
                height: height.into(),
                width: width.into(),
            });
        }
        Ok(Self { height, width })
    }

    pub const fn height(&self) -> Coord {
        self.height
    }

    pub const fn width(&self) -> Coord {
        self.width
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.height, self.width)
    }

    pub const fn contains(&self, (x, y): Coord2) -> bool {
        x < self.width && y < self.height
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        if self.contains(coords) {
            Ok(coords)
        } else {
            Err(FieldError::OutOfBounds {
                x: coords.0,
                y: coords.1,
            })
        }
    }

    /// Bounds in `(x, y)` order, as used by [`NeighborIter`].
    pub const fn bounds(&self) -> Coord2 {
        (self.width, self.height)
    }

    pub fn iter_neighbors(&self, coords: Coord2) -> NeighborIter {
        NeighborIter::new(coords, self.bounds())
    }

    /// Every coordinate in row-major order.
    pub fn iter_coords(&self) -> impl Iterator<Item = Coord2> + use<> {
        let (width, height) = self.bounds();
        (0..height).flat_map(move |y| (0..width).map(move |x| (x, y)))
    }

    pub(crate) fn to_nd_shape(self) -> [usize; 2] {
        [self.height.into(), self.width.into()]
    }
}

/// What to generate: a size and a requested mine count.
///
/// The mine count is not checked against the size, placement clamps it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldConfig {
    pub dimensions: Dimensions,
    pub mines: CellCount,
}

impl FieldConfig {
    pub fn new(height: Coord, width: Coord, mines: CellCount) -> Result<Self> {
        Ok(Self {
            dimensions: Dimensions::new(height, width)?,
            mines,
        })
    }

    pub const fn total_cells(&self) -> CellCount {
        self.dimensions.total_cells()
    }

    /// Mines that will actually be placed.
    pub fn effective_mines(&self) -> CellCount {
        self.mines.min(self.total_cells())
    }

    pub const fn beginner() -> Self {
        Self::preset(9, 9, 10)
    }

    pub const fn intermediate() -> Self {
        Self::preset(16, 16, 40)
    }

    pub const fn expert() -> Self {
        Self::preset(16, 30, 99)
    }

    pub const fn classic() -> Self {
        Self::preset(20, 30, 99)
    }

    const fn preset(height: Coord, width: Coord, mines: CellCount) -> Self {
        Self {
            dimensions: Dimensions { height, width },
            mines,
        }
    }
}
