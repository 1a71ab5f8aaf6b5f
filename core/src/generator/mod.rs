use alloc::vec::Vec;

use crate::*;
pub use lcg::*;
pub use seeded::*;

mod lcg;
mod seeded;

pub trait MinefieldGenerator {
    /// Picks the mine positions for a board of the given difficulty.
    fn generate(self, difficulty: Difficulty) -> Vec<Coord2>;
}
