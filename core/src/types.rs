use ndarray::Array2;

/// Single coordinate axis used for board width, height, and positions.
pub type Coord = u8;

/// Count type used for mine counts and total-cell counts.
pub type CellCount = u16;

/// Two-dimensional coordinates `(x, y)`, `x` being the column and `y` the row.
pub type Coord2 = (Coord, Coord);

/// Grids are stored row-major, so `(x, y)` maps to the ndarray index `[y, x]`.
pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.1.into(), self.0.into()]
    }
}

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    let a = a as CellCount;
    let b = b as CellCount;
    a.saturating_mul(b)
}

/// Bounds `(width, height)` of a row-major array.
pub(crate) fn bounds_of<T>(array: &Array2<T>) -> Coord2 {
    let (rows, cols) = array.dim();
    (
        cols.try_into().unwrap_or(Coord::MAX),
        rows.try_into().unwrap_or(Coord::MAX),
    )
}

pub trait NeighborIterExt {
    fn iter_neighbors(&self, index: Coord2) -> NeighborIter;
}

impl<T> NeighborIterExt for Array2<T> {
    fn iter_neighbors(&self, index: Coord2) -> NeighborIter {
        NeighborIter::new(index, bounds_of(self))
    }
}

/// Offsets of the eight surrounding cells, row by row.
const NEIGHBOR_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Moore neighborhood of a cell, clipped to the grid edges.
#[derive(Clone, Debug)]
pub struct NeighborIter {
    center: Coord2,
    width: Coord,
    height: Coord,
    offsets: core::slice::Iter<'static, (i8, i8)>,
}

impl NeighborIter {
    pub(crate) fn new(center: Coord2, (width, height): Coord2) -> Self {
        Self {
            center,
            width,
            height,
            offsets: NEIGHBOR_OFFSETS.iter(),
        }
    }

    fn shifted(&self, (dx, dy): (i8, i8)) -> Option<Coord2> {
        let x = self.center.0.checked_add_signed(dx).filter(|&x| x < self.width)?;
        let y = self.center.1.checked_add_signed(dy).filter(|&y| y < self.height)?;
        Some((x, y))
    }
}

impl Iterator for NeighborIter {
    type Item = Coord2;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(&offset) = self.offsets.next() {
            if let Some(coords) = self.shifted(offset) {
                return Some(coords);
            }
        }
        None
    }
}

/// Diagonal-aware distance: `√2` per diagonal step plus one per straight step.
pub fn point_distance(a: Coord2, b: Coord2) -> f64 {
    let dx = a.0.abs_diff(b.0);
    let dy = a.1.abs_diff(b.1);
    let diagonal = dx.min(dy);
    let straight = dx.max(dy) - diagonal;
    core::f64::consts::SQRT_2 * f64::from(diagonal) + f64::from(straight)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[test]
    fn center_has_eight_neighbors() {
        let neighbors: Vec<_> = NeighborIter::new((4, 4), (9, 9)).collect();
        assert_eq!(neighbors.len(), 8);
        assert!(!neighbors.contains(&(4, 4)));
    }

    #[test]
    fn corners_and_edges_are_clipped() {
        assert_eq!(NeighborIter::new((0, 0), (9, 9)).count(), 3);
        assert_eq!(NeighborIter::new((8, 8), (9, 9)).count(), 3);
        assert_eq!(NeighborIter::new((4, 0), (9, 9)).count(), 5);
        assert_eq!(NeighborIter::new((0, 0), (1, 1)).count(), 0);
    }

    #[test]
    fn neighbors_respect_non_square_bounds() {
        let neighbors: Vec<_> = NeighborIter::new((3, 0), (4, 2)).collect();
        assert_eq!(neighbors, [(2, 0), (2, 1), (3, 1)]);
    }

    #[test]
    fn neighbors_come_in_row_order() {
        let neighbors: Vec<_> = NeighborIter::new((1, 1), (3, 3)).collect();
        assert_eq!(
            neighbors,
            [(0, 0), (1, 0), (2, 0), (0, 1), (2, 1), (0, 2), (1, 2), (2, 2)]
        );
    }

    #[test]
    fn nd_index_is_row_major() {
        assert_eq!((3, 1).to_nd_index(), [1, 3]);
    }

    #[test]
    fn distance_counts_diagonals_as_sqrt_two() {
        assert_eq!(point_distance((0, 0), (0, 0)), 0.0);
        assert_eq!(point_distance((0, 0), (2, 0)), 2.0);
        assert_eq!(point_distance((1, 1), (2, 2)), core::f64::consts::SQRT_2);
        let knight = point_distance((0, 0), (1, 2));
        assert!(knight > 2.0 && knight < 2.5);
    }
}
