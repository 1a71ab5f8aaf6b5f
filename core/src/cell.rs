use serde::{Deserialize, Serialize};

/// Player-visible state of a single cell.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CellStatus {
    #[default]
    Hidden,
    Flagged,
    Revealed,
    /// The mine that was clicked to lose the game.
    Detonated,
}

impl CellStatus {
    pub const fn is_unrevealed(self) -> bool {
        matches!(self, Self::Hidden | Self::Flagged)
    }
}

/// A cell pairs its status with the number of adjacent mines, `-1` marking a mine.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cell {
    pub status: CellStatus,
    pub mine_count: i8,
}

impl Cell {
    pub const MINE: i8 = -1;

    pub const fn new(status: CellStatus, mine_count: i8) -> Self {
        Self { status, mine_count }
    }

    pub const fn hidden(mine_count: i8) -> Self {
        Self::new(CellStatus::Hidden, mine_count)
    }

    pub const fn is_mine(self) -> bool {
        self.mine_count == Self::MINE
    }

    /// Same mine count, different status.
    pub const fn with_status(self, status: CellStatus) -> Self {
        Self::new(status, self.mine_count)
    }

    pub(crate) const fn with_mine_count(self, mine_count: i8) -> Self {
        Self::new(self.status, mine_count)
    }
}
