use alloc::collections::{BTreeSet, VecDeque};

use crate::*;

impl Grid {
    /// Reveals a hidden or flagged cell.
    ///
    /// A mine detonates: every mine is shown and the clicked one becomes
    /// [`CellStatus::Detonated`]. A safe cell opens with a breadth-first flood fill that spreads
    /// through zero-count cells and stops at numbered ones. Once every safe cell is open the
    /// remaining cells are revealed too.
    ///
    /// Already revealed cells and out-of-bounds coordinates leave the grid untouched, so it keeps
    /// sharing its cells with any clone.
    pub fn reveal(&mut self, coords: Coord2) -> RevealOutcome {
        let Some(cell) = self.get(coords) else {
            log::debug!("Ignoring reveal outside the grid at {:?}", coords);
            return RevealOutcome::NoChange;
        };

        if !cell.status.is_unrevealed() {
            return RevealOutcome::NoChange;
        }

        if cell.is_mine() {
            log::debug!("Mine detonated at {:?}", coords);
            self.detonate(coords);
            return RevealOutcome::HitMine;
        }

        self.flood_fill(coords);

        if self.is_won() {
            self.reveal_all();
            RevealOutcome::Won
        } else {
            RevealOutcome::Revealed
        }
    }

    /// Whether every safe cell has been revealed.
    pub fn is_won(&self) -> bool {
        !self.is_empty()
            && self
                .iter_cells()
                .all(|cell| cell.is_mine() || cell.status == CellStatus::Revealed)
    }

    fn flood_fill(&mut self, start: Coord2) {
        let mut visited = BTreeSet::from([start]);
        let mut to_visit = VecDeque::from([start]);
        log::debug!("Open cell at {:?}, mine count: {}", start, self[start].mine_count);

        while let Some(visit_coords) = to_visit.pop_front() {
            let cell = self[visit_coords];
            if cell.status != CellStatus::Revealed {
                self.set_status(visit_coords, CellStatus::Revealed);
                log::trace!(
                    "Flood opened cell at {:?}, mine count: {}",
                    visit_coords,
                    cell.mine_count
                );
            }

            // numbered cells border the region without extending it
            if cell.mine_count != 0 {
                continue;
            }

            for pos in self.iter_neighbors(visit_coords) {
                if visited.insert(pos) {
                    to_visit.push_back(pos);
                }
            }
        }
    }

    fn detonate(&mut self, detonated: Coord2) {
        let cells = self.cells_mut();
        for cell in cells.iter_mut().filter(|cell| cell.is_mine()) {
            cell.status = CellStatus::Revealed;
        }
        cells[detonated.to_nd_index()].status = CellStatus::Detonated;
    }

    fn reveal_all(&mut self) {
        for cell in self.cells_mut().iter_mut() {
            if cell.status.is_unrevealed() {
                cell.status = CellStatus::Revealed;
            }
        }
    }
}
