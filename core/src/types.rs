/// Column or row index, also used for a field's height and width (at most 255 cells per axis).
pub type Coord = u8;

/// Wide enough for the cell count of the largest field, 255 × 255.
pub type CellCount = u16;

/// A cell position `(x, y)`: column first, then row.
pub type Coord2 = (Coord, Coord);

/// Converts a cell position into an index into the cell grid.
pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

/// Grids are stored row-major, so `(x, y)` maps to `[y, x]`.
impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.1.into(), self.0.into()]
    }
}

/// Area of an `a` × `b` rectangle of cells.
pub const fn mult(a: Coord, b: Coord) -> CellCount {
    let a = a as CellCount;
    let b = b as CellCount;
    a.saturating_mul(b)
}

const DISPLACEMENTS: [(i8, i8); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Neighbor of `coords` in direction `delta`, or `None` past any edge of `bounds`.
fn apply_delta(coords: Coord2, delta: (i8, i8), bounds: Coord2) -> Option<Coord2> {
    let (x, y) = coords;
    let (dx, dy) = delta;
    let (width, height) = bounds;

    let next_x = x.checked_add_signed(dx)?;
    if next_x >= width {
        return None;
    }

    let next_y = y.checked_add_signed(dy)?;
    if next_y >= height {
        return None;
    }

    Some((next_x, next_y))
}

/// Iterates over the up to 8 cells surrounding `center`, clipped to `bounds` given as `(width, height)`.
#[derive(Debug, Clone)]
pub struct NeighborIter {
    center: Coord2,
    bounds: Coord2,
    index: u8,
}

impl NeighborIter {
    pub fn new(center: Coord2, bounds: Coord2) -> Self {
        Self {
            center,
            bounds,
            index: 0,
        }
    }
}

impl Iterator for NeighborIter {
    type Item = Coord2;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let delta = *DISPLACEMENTS.get(usize::from(self.index))?;
            self.index += 1;

            if let Some(next_item) = apply_delta(self.center, delta, self.bounds) {
                return Some(next_item);
            }
        }
    }
}
