use ndarray::Array2;

use super::*;

/// Upper bound on sampled candidates before falling back to a deterministic sweep.
pub const MAX_PLACEMENT_ATTEMPTS: u32 = 100_000;

/// Reproducible generation strategy that keeps an opening around the first revealed cell.
///
/// Candidates are drawn from [`Lcg`] and rejected when they fall too close to `start` or onto an
/// existing mine. Boards smaller than 4x4 on both axes only keep `start` itself clear; larger
/// boards also keep its eight neighbors clear.
#[derive(Clone, Debug, PartialEq)]
pub struct SeededMinefieldGenerator {
    seed: u32,
    start: Coord2,
}

impl SeededMinefieldGenerator {
    pub fn new(seed: u32, start: Coord2) -> Self {
        Self { seed, start }
    }

    fn min_distance(difficulty: &Difficulty) -> f64 {
        if difficulty.height < 4 && difficulty.width < 4 {
            1.0
        } else {
            2.0
        }
    }
}

impl MinefieldGenerator for SeededMinefieldGenerator {
    fn generate(self, difficulty: Difficulty) -> Vec<Coord2> {
        let wanted = usize::from(difficulty.mines);
        let min_distance = Self::min_distance(&difficulty);
        let is_clear_of_start = |coords: Coord2| point_distance(self.start, coords) >= min_distance;

        let mut rng = Lcg::new(self.seed);
        let mut taken: Array2<bool> =
            Array2::default((usize::from(difficulty.height), usize::from(difficulty.width)));
        let mut mines = Vec::with_capacity(wanted);

        let mut attempts = 0;
        while mines.len() < wanted && attempts < MAX_PLACEMENT_ATTEMPTS {
            attempts += 1;
            let x = rng.next_below(difficulty.width);
            let y = rng.next_below(difficulty.height);
            let coords = (x, y);

            if !is_clear_of_start(coords) || taken[coords.to_nd_index()] {
                continue;
            }
            taken[coords.to_nd_index()] = true;
            mines.push(coords);
        }

        if mines.len() < wanted {
            log::warn!(
                "Mine placement gave up after {} attempts with {} of {} mines, sweeping for the rest",
                attempts,
                mines.len(),
                wanted
            );
            let grid = Grid::empty(difficulty.height, difficulty.width);
            for coords in grid.iter_coords() {
                if mines.len() == wanted {
                    break;
                }
                if is_clear_of_start(coords) && !taken[coords.to_nd_index()] {
                    taken[coords.to_nd_index()] = true;
                    mines.push(coords);
                }
            }
        }

        if mines.len() < wanted {
            log::warn!(
                "Minefield cannot fit the requested mines around {:?}, requested {} but only fits {}",
                self.start,
                wanted,
                mines.len()
            );
        }
        mines
    }
}
