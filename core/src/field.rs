use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;
use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// A finished minefield: every cell is either a mine or a safe cell with its neighbor count.
///
/// Mine placement and counts never change after construction.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Array2<Cell>", into = "Array2<Cell>")]
pub struct Field {
    cells: Array2<Cell>,
    mine_count: CellCount,
}

impl Field {
    /// Places `config.mines` mines at random (clamped to the field size) and derives the counts.
    pub fn generate<R: RandomSource>(config: FieldConfig, rng: R) -> Result<Self> {
        Self::with_placer(config, &mut RandomMinePlacer::new(rng))
    }

    /// Same as [`Field::generate`] with a reproducible generator.
    pub fn with_seed(config: FieldConfig, seed: u64) -> Result<Self> {
        log::debug!("Generating field with seed {seed}");
        Self::with_placer(config, &mut RandomMinePlacer::from_seed(seed))
    }

    pub fn with_placer(config: FieldConfig, placer: &mut impl MinePlacer) -> Result<Self> {
        let mines = placer.place(config.mines, config.dimensions);
        Self::from_mines(config.dimensions, &mines)
    }

    pub fn from_mines(dimensions: Dimensions, mines: &[Coord2]) -> Result<Self> {
        let cells = build_cells(dimensions, mines)?;
        Ok(Self::from_cells_unchecked(cells))
    }

    /// Takes over an existing grid, e.g. one restored from storage, without placing anything.
    ///
    /// The grid must be non-empty, at most [`Coord::MAX`] along each axis, and every safe cell must carry the
    /// number of mines around it.
    pub fn adopt(cells: Array2<Cell>) -> Result<Self> {
        let (height, width) = cells.dim();
        if height == 0 || width == 0 || height > Coord::MAX.into() || width > Coord::MAX.into() {
            return Err(FieldError::InvalidDimensions { height, width });
        }

        let field = Self::from_cells_unchecked(cells);
        field.check_counts()?;
        Ok(field)
    }

    /// Like [`Field::adopt`], from a list of rows.
    pub fn adopt_rows(rows: Vec<Vec<Cell>>) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        if rows.iter().any(|row| row.len() != width) {
            return Err(FieldError::InvalidShape);
        }

        let flat: Vec<Cell> = rows.into_iter().flatten().collect();
        let cells =
            Array2::from_shape_vec([height, width], flat).map_err(|_| FieldError::InvalidShape)?;
        Self::adopt(cells)
    }

    fn from_cells_unchecked(cells: Array2<Cell>) -> Self {
        let mine_count = cells
            .iter()
            .filter(|cell| cell.contains_mine())
            .count() as CellCount;
        Self { cells, mine_count }
    }

    fn check_counts(&self) -> Result<()> {
        let dimensions = self.dimensions();
        for ((x, y), cell) in self.iter() {
            let Cell::Safe(count) = cell else {
                continue;
            };
            let actual = dimensions
                .iter_neighbors((x, y))
                .filter(|&pos| self[pos].contains_mine())
                .count();
            if usize::from(count) != actual {
                return Err(FieldError::InconsistentCount { x, y });
            }
        }
        Ok(())
    }

    pub fn dimensions(&self) -> Dimensions {
        let (height, width) = self.cells.dim();
        Dimensions {
            height: height as Coord,
            width: width as Coord,
        }
    }

    pub fn at(&self, x: Coord, y: Coord) -> Result<Cell> {
        self.get((x, y)).ok_or(FieldError::OutOfBounds { x, y })
    }

    pub fn get(&self, coords: Coord2) -> Option<Cell> {
        self.cells.get(coords.to_nd_index()).copied()
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn total_cells(&self) -> CellCount {
        self.cells.len() as CellCount
    }

    pub fn safe_cell_count(&self) -> CellCount {
        self.total_cells() - self.mine_count
    }

    /// All cells with their coordinates, in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Coord2, Cell)> + '_ {
        self.cells
            .indexed_iter()
            .map(|((y, x), &cell)| ((x as Coord, y as Coord), cell))
    }

    pub fn mines(&self) -> impl Iterator<Item = Coord2> + '_ {
        self.iter()
            .filter(|(_, cell)| cell.contains_mine())
            .map(|(coords, _)| coords)
    }

    pub fn cells(&self) -> &Array2<Cell> {
        &self.cells
    }

    /// Framed text dump, one line per row: `*` for mines, blank for zero, the count otherwise.
    pub fn render(&self) -> String {
        alloc::format!("{self}")
    }
}

impl Index<Coord2> for Field {
    type Output = Cell;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.cells[coords.to_nd_index()]
    }
}

impl TryFrom<Array2<Cell>> for Field {
    type Error = FieldError;

    fn try_from(cells: Array2<Cell>) -> Result<Self> {
        Self::adopt(cells)
    }
}

impl From<Field> for Array2<Cell> {
    fn from(field: Field) -> Self {
        field.cells
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let border = |f: &mut fmt::Formatter<'_>| {
            f.write_str("+")?;
            for _ in 0..self.cells.ncols() {
                f.write_str("-")?;
            }
            f.write_str("+\n")
        };

        border(f)?;
        for row in self.cells.rows() {
            f.write_str("|")?;
            for cell in row {
                match *cell {
                    Cell::Mine => f.write_str("*")?,
                    Cell::Safe(0) => f.write_str(" ")?,
                    Cell::Safe(count) => write!(f, "{count}")?,
                }
            }
            f.write_str("|\n")?;
        }
        border(f)
    }
}
