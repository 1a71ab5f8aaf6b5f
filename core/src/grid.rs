use alloc::sync::Arc;
use alloc::vec::Vec;
use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Row-major board of cells.
///
/// The cells sit behind an [`Arc`], so cloning a grid is cheap and mutation copies the cells
/// only while another grid still shares them. A grid handed out by the engine is therefore never
/// changed underneath its holder.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    cells: Arc<Array2<Cell>>,
}

impl Grid {
    /// All cells hidden, no mines laid yet.
    pub fn empty(height: Coord, width: Coord) -> Self {
        Self::from_array(Array2::default((usize::from(height), usize::from(width))))
    }

    pub(crate) fn from_array(cells: Array2<Cell>) -> Self {
        Self {
            cells: Arc::new(cells),
        }
    }

    /// Rebuilds a grid from rows, as produced by [`Grid::to_rows`].
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Result<Self> {
        if rows.iter().all(|row| row.is_empty()) {
            return Ok(Self::default());
        }

        let height = rows.len();
        let width = rows[0].len();
        if rows.iter().any(|row| row.len() != width)
            || Coord::try_from(height).is_err()
            || Coord::try_from(width).is_err()
        {
            return Err(GameError::InvalidBoardShape);
        }

        let flat: Vec<Cell> = rows.into_iter().flatten().collect();
        if flat
            .iter()
            .any(|cell| !(Cell::MINE..=8).contains(&cell.mine_count))
        {
            return Err(GameError::InvalidBoardShape);
        }

        let cells = Array2::from_shape_vec((height, width), flat)
            .map_err(|_| GameError::InvalidBoardShape)?;
        Ok(Self::from_array(cells))
    }

    /// Hidden grid with mines at `mine_coords` and the matching adjacency counts.
    pub fn from_mine_coords(height: Coord, width: Coord, mine_coords: &[Coord2]) -> Result<Self> {
        let grid = Self::empty(height, width);
        for &coords in mine_coords {
            grid.validate_coords(coords)?;
        }
        Ok(grid.lay_mines(mine_coords))
    }

    pub fn to_rows(&self) -> Vec<Vec<Cell>> {
        self.cells.rows().into_iter().map(|row| row.to_vec()).collect()
    }

    pub fn height(&self) -> Coord {
        self.size().1
    }

    pub fn width(&self) -> Coord {
        self.size().0
    }

    /// `(width, height)`, matching the `(x, y)` order of coordinates.
    pub fn size(&self) -> Coord2 {
        bounds_of(&self.cells)
    }

    pub fn total_cells(&self) -> CellCount {
        self.cells.len().try_into().unwrap_or(CellCount::MAX)
    }

    /// Whether both dimensions can be addressed with [`Coord`].
    pub(crate) fn fits_coords(&self) -> bool {
        let (rows, cols) = self.cells.dim();
        Coord::try_from(rows).is_ok() && Coord::try_from(cols).is_ok()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        let size = self.size();
        if coords.0 < size.0 && coords.1 < size.1 {
            Ok(coords)
        } else {
            Err(GameError::InvalidCoords)
        }
    }

    /// The cell at `coords`, or `None` when out of bounds.
    pub fn get(&self, coords: Coord2) -> Option<Cell> {
        let coords = self.validate_coords(coords).ok()?;
        Some(self[coords])
    }

    pub fn iter_neighbors(&self, coords: Coord2) -> NeighborIter {
        self.cells.iter_neighbors(coords)
    }

    /// Every coordinate in row-major order.
    pub fn iter_coords(&self) -> impl Iterator<Item = Coord2> + use<> {
        let (width, height) = self.size();
        (0..height).flat_map(move |y| (0..width).map(move |x| (x, y)))
    }

    pub fn iter_cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    pub fn mine_count(&self) -> CellCount {
        self.cells
            .iter()
            .filter(|cell| cell.is_mine())
            .count()
            .try_into()
            .unwrap_or(CellCount::MAX)
    }

    pub fn has_mines(&self) -> bool {
        self.cells.iter().any(|cell| cell.is_mine())
    }

    /// Whether both grids point at the same cell storage, i.e. neither was modified since one
    /// was cloned from the other.
    pub fn shares_cells_with(&self, other: &Grid) -> bool {
        Arc::ptr_eq(&self.cells, &other.cells)
    }

    /// Copy of this grid with mines at `mine_coords` and every other cell's adjacency count
    /// recomputed. Statuses carry over unchanged.
    pub fn lay_mines(&self, mine_coords: &[Coord2]) -> Self {
        let mut cells = self.cells.map(|cell| cell.with_mine_count(0));
        for &coords in mine_coords {
            cells[coords.to_nd_index()].mine_count = Cell::MINE;
        }

        for coords in self.iter_coords() {
            if cells[coords.to_nd_index()].is_mine() {
                continue;
            }
            let adjacent = cells
                .iter_neighbors(coords)
                .filter(|&pos| cells[pos.to_nd_index()].is_mine())
                .count();
            cells[coords.to_nd_index()].mine_count = adjacent as i8;
        }

        Self::from_array(cells)
    }

    /// Mutable access to the cells, detaching them from any other grid first.
    pub(crate) fn cells_mut(&mut self) -> &mut Array2<Cell> {
        Arc::make_mut(&mut self.cells)
    }

    pub(crate) fn set_status(&mut self, coords: Coord2, status: CellStatus) {
        self.cells_mut()[coords.to_nd_index()].status = status;
    }
}

impl Index<Coord2> for Grid {
    type Output = Cell;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.cells[coords.to_nd_index()]
    }
}
