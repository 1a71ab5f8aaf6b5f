use serde::{Deserialize, Serialize};

use crate::*;

/// Valid transitions:
/// - Waiting -> Ready
/// - Ready -> Running
/// - Ready -> Win
/// - Running -> Win
/// - Running -> Loss
/// - Loss -> Running (undo)
///
/// Any status returns to Waiting on reset and to Ready on a new game.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameStatus {
    /// No board yet
    #[default]
    Waiting,
    /// Board sized but nothing revealed, mines are laid on the first reveal
    Ready,
    Running,
    Win,
    Loss,
}

impl GameStatus {
    /// Derives the status from cell counts alone.
    pub const fn from_counts(counts: &CellCounts) -> Self {
        if counts.total == 0 {
            Self::Waiting
        } else if counts.revealed == 0 {
            Self::Ready
        } else if counts.detonated > 0 {
            Self::Loss
        } else if counts.total == counts.revealed {
            Self::Win
        } else {
            Self::Running
        }
    }

    pub const fn is_playable(self) -> bool {
        matches!(self, Self::Ready | Self::Running)
    }

    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Win | Self::Loss)
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellCounts {
    pub total: CellCount,
    /// Revealed and detonated cells
    pub revealed: CellCount,
    pub flagged: CellCount,
    pub detonated: CellCount,
}

impl CellCounts {
    pub fn of_grid(grid: &Grid) -> Self {
        let mut counts = Self {
            total: grid.total_cells(),
            ..Self::default()
        };
        for cell in grid.iter_cells() {
            match cell.status {
                CellStatus::Hidden => {}
                CellStatus::Flagged => counts.flagged += 1,
                CellStatus::Revealed => counts.revealed += 1,
                CellStatus::Detonated => {
                    counts.revealed += 1;
                    counts.detonated += 1;
                }
            }
        }
        counts
    }
}

/// Read-only summary of a game, recomputed from the grid on every call.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameView {
    pub status: GameStatus,
    pub counts: CellCounts,
    /// Mines minus flags. Negative when over-flagged, zero once the game is over.
    pub remaining_flags: i32,
}

impl GameView {
    pub fn new(difficulty: &Difficulty, grid: &Grid) -> Self {
        let counts = CellCounts::of_grid(grid);
        let status = GameStatus::from_counts(&counts);
        let remaining_flags = if status.is_finished() {
            0
        } else {
            i32::from(difficulty.mines) - i32::from(counts.flagged)
        };
        Self {
            status,
            counts,
            remaining_flags,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counts(total: CellCount, revealed: CellCount, detonated: CellCount) -> CellCounts {
        CellCounts {
            total,
            revealed,
            flagged: 0,
            detonated,
        }
    }

    #[test]
    fn status_from_counts() {
        assert_eq!(GameStatus::from_counts(&counts(0, 0, 0)), GameStatus::Waiting);
        assert_eq!(GameStatus::from_counts(&counts(9, 0, 0)), GameStatus::Ready);
        assert_eq!(GameStatus::from_counts(&counts(9, 4, 0)), GameStatus::Running);
        assert_eq!(GameStatus::from_counts(&counts(9, 9, 0)), GameStatus::Win);
        assert_eq!(GameStatus::from_counts(&counts(9, 4, 1)), GameStatus::Loss);
    }

    #[test]
    fn counts_group_detonated_with_revealed() {
        let mut grid = Grid::from_mine_coords(2, 2, &[(0, 0), (1, 1)]).unwrap();
        grid.toggle_flag((1, 1));
        grid.reveal((1, 0));
        grid.reveal((0, 0));

        let counts = CellCounts::of_grid(&grid);

        assert_eq!(
            counts,
            CellCounts {
                total: 4,
                revealed: 3,
                flagged: 0,
                detonated: 1,
            }
        );
    }

    #[test]
    fn over_flagging_goes_negative_until_finished() {
        let difficulty = Difficulty::new_unchecked(2, 2, 1);
        let mut grid = Grid::from_mine_coords(2, 2, &[(0, 0)]).unwrap();
        grid.reveal((1, 1));
        grid.toggle_flag((0, 0));
        grid.toggle_flag((1, 0));
        grid.toggle_flag((0, 1));

        let view = GameView::new(&difficulty, &grid);
        assert_eq!(view.status, GameStatus::Running);
        assert_eq!(view.remaining_flags, -2);

        grid.reveal((0, 0));
        let view = GameView::new(&difficulty, &grid);
        assert_eq!(view.status, GameStatus::Loss);
        assert_eq!(view.remaining_flags, 0);
    }
}
