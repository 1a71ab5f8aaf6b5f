use crate::*;

impl Grid {
    /// Flips a cell between hidden and flagged. Anything else is left alone.
    pub fn toggle_flag(&mut self, coords: Coord2) -> MarkOutcome {
        use CellStatus::*;

        let Some(cell) = self.get(coords) else {
            log::debug!("Ignoring flag outside the grid at {:?}", coords);
            return MarkOutcome::NoChange;
        };

        let status = match cell.status {
            Hidden => Flagged,
            Flagged => Hidden,
            Revealed | Detonated => return MarkOutcome::NoChange,
        };
        self.set_status(coords, status);
        MarkOutcome::Changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggles_between_hidden_and_flagged() {
        let mut grid = Grid::from_mine_coords(2, 2, &[(0, 0)]).unwrap();

        assert_eq!(grid.toggle_flag((0, 0)), MarkOutcome::Changed);
        assert_eq!(grid[(0, 0)], Cell::new(CellStatus::Flagged, Cell::MINE));

        assert_eq!(grid.toggle_flag((0, 0)), MarkOutcome::Changed);
        assert_eq!(grid[(0, 0)], Cell::hidden(Cell::MINE));
    }

    #[test]
    fn revealed_cells_cannot_be_flagged() {
        let mut grid = Grid::from_mine_coords(2, 2, &[(0, 0)]).unwrap();
        grid.reveal((1, 1));
        let before = grid.clone();

        assert_eq!(grid.toggle_flag((1, 1)), MarkOutcome::NoChange);
        assert!(grid.shares_cells_with(&before));
    }

    #[test]
    fn detonated_cells_cannot_be_flagged() {
        let mut grid = Grid::from_mine_coords(2, 2, &[(0, 0)]).unwrap();
        grid.reveal((0, 0));

        assert_eq!(grid.toggle_flag((0, 0)), MarkOutcome::NoChange);
        assert_eq!(grid[(0, 0)].status, CellStatus::Detonated);
    }

    #[test]
    fn out_of_bounds_flag_is_ignored() {
        let mut grid = Grid::empty(2, 2);
        assert_eq!(grid.toggle_flag((2, 0)), MarkOutcome::NoChange);
    }
}
