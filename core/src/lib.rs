#![no_std]

extern crate alloc;

use serde::{Deserialize, Serialize};

pub use action::*;
pub use cell::*;
pub use engine::*;
pub use error::*;
pub use generator::*;
pub use grid::*;
pub use render::*;
pub use status::*;
pub use types::*;

mod action;
mod cell;
mod engine;
mod error;
mod flag;
mod generator;
mod grid;
mod render;
mod reveal;
mod status;
mod types;

/// Board dimensions and mine count.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Difficulty {
    pub height: Coord,
    pub width: Coord,
    pub mines: CellCount,
}

impl Difficulty {
    pub const EASY: Self = Self::new_unchecked(9, 9, 10);
    pub const MEDIUM: Self = Self::new_unchecked(16, 16, 40);
    pub const HARD: Self = Self::new_unchecked(30, 16, 99);

    pub const fn new_unchecked(height: Coord, width: Coord, mines: CellCount) -> Self {
        Self {
            height,
            width,
            mines,
        }
    }

    /// Dimensions must be positive and there must be at least one mine and one safe cell.
    pub fn new(height: Coord, width: Coord, mines: CellCount) -> Result<Self> {
        let difficulty = Self::new_unchecked(height, width, mines);
        if difficulty.is_valid() {
            Ok(difficulty)
        } else {
            Err(GameError::InvalidDifficulty)
        }
    }

    /// Like [`Difficulty::new`], falling back to [`Difficulty::EASY`] when the values are invalid.
    pub fn new_or_easy(height: Coord, width: Coord, mines: CellCount) -> Self {
        Self::new_unchecked(height, width, mines).validated()
    }

    /// Itself when valid, otherwise [`Difficulty::EASY`].
    pub fn validated(self) -> Self {
        if self.is_valid() {
            self
        } else {
            log::warn!(
                "height, width and mines must be positive with fewer mines than cells, got {:?}, defaulting to easy",
                self
            );
            Self::EASY
        }
    }

    pub fn is_valid(&self) -> bool {
        self.height > 0 && self.width > 0 && self.mines > 0 && self.mines < self.total_cells()
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.height, self.width)
    }

    /// Dimensions and mine count read back from an existing grid.
    pub fn of_grid(grid: &Grid) -> Self {
        Self::new_unchecked(grid.height(), grid.width(), grid.mine_count())
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum MarkOutcome {
    NoChange,
    Changed,
}

impl MarkOutcome {
    pub const fn has_update(self) -> bool {
        match self {
            Self::NoChange => false,
            Self::Changed => true,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum RevealOutcome {
    NoChange,
    Revealed,
    HitMine,
    Won,
}

impl RevealOutcome {
    pub const fn has_update(self) -> bool {
        use RevealOutcome::*;
        match self {
            NoChange => false,
            Revealed => true,
            HitMine => true,
            Won => true,
        }
    }
}
