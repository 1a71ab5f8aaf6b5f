use serde::{Deserialize, Serialize};

use crate::*;

const DEFAULT_SEED: u32 = 1;

/// Complete state of one game.
///
/// Every transition borrows the current state and returns the next one; a state that was handed
/// out is never modified afterwards. Rejected transitions return a clone whose grid still shares
/// its cells with the input.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawGameState")]
pub struct GameState {
    difficulty: Difficulty,
    grid: Grid,
    saved_grid: Option<Grid>,
    rand_seed: u32,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::default(),
            grid: Grid::default(),
            saved_grid: None,
            rand_seed: DEFAULT_SEED,
        }
    }
}

/// A [`GameState`] as read from a save, before its parts are checked against each other.
#[derive(Deserialize)]
struct RawGameState {
    difficulty: Difficulty,
    grid: Grid,
    saved_grid: Option<Grid>,
    rand_seed: u32,
}

impl TryFrom<RawGameState> for GameState {
    type Error = GameError;

    /// The grid is authoritative: the difficulty must have its dimensions, and once mines are laid
    /// their count is read back from it.
    fn try_from(raw: RawGameState) -> Result<Self> {
        let RawGameState {
            mut difficulty,
            grid,
            saved_grid,
            rand_seed,
        } = raw;

        if !grid.fits_coords() || (difficulty.width, difficulty.height) != grid.size() {
            return Err(GameError::InvalidBoardShape);
        }
        if saved_grid
            .as_ref()
            .is_some_and(|saved| !saved.fits_coords() || saved.size() != grid.size())
        {
            return Err(GameError::InvalidBoardShape);
        }

        if grid.has_mines() {
            difficulty.mines = grid.mine_count();
        } else if !grid.is_empty() && difficulty.mines >= grid.total_cells() {
            let capped = grid.total_cells() - 1;
            log::warn!(
                "Saved game asks for {} mines on {} cells, capping to {}",
                difficulty.mines,
                grid.total_cells(),
                capped
            );
            difficulty.mines = capped;
        }

        Ok(Self {
            difficulty,
            grid,
            saved_grid,
            rand_seed,
        })
    }
}

impl GameState {
    /// Sizes an empty board. Mines are laid on the first reveal so that it is always safe.
    pub fn start(difficulty: Difficulty, rand_seed: u32) -> Self {
        let difficulty = difficulty.validated();
        log::debug!("Starting game {:?} with seed {}", difficulty, rand_seed);
        Self {
            difficulty,
            grid: Grid::empty(difficulty.height, difficulty.width),
            saved_grid: None,
            rand_seed,
        }
    }

    /// Adopts a previously emitted grid, reading the difficulty back from its contents.
    pub fn load(grid: Grid, rand_seed: u32) -> Self {
        Self {
            difficulty: Difficulty::of_grid(&grid),
            grid,
            saved_grid: None,
            rand_seed,
        }
    }

    /// Back to waiting, with no board at all.
    pub fn reset() -> Self {
        Self::default()
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Board as it was right before the last losing move, if that move has not been undone.
    pub fn saved_grid(&self) -> Option<&Grid> {
        self.saved_grid.as_ref()
    }

    pub fn rand_seed(&self) -> u32 {
        self.rand_seed
    }

    pub fn view(&self) -> GameView {
        GameView::new(&self.difficulty, &self.grid)
    }

    pub fn status(&self) -> GameStatus {
        self.view().status
    }

    pub fn remaining_flags(&self) -> i32 {
        self.view().remaining_flags
    }

    pub fn cell_at(&self, coords: Coord2) -> Option<Cell> {
        self.grid.get(coords)
    }

    pub fn reveal_cell(&self, coords: Coord2) -> Self {
        match self.try_reveal_cell(coords) {
            Ok(next) => next,
            Err(err) => {
                log::debug!("Reveal at {:?} ignored: {}", coords, err);
                self.clone()
            }
        }
    }

    fn try_reveal_cell(&self, coords: Coord2) -> Result<Self> {
        let coords = self.grid.validate_coords(coords)?;
        let status = self.status();
        if !status.is_playable() {
            return Err(GameError::NotRunning);
        }
        if !self.grid[coords].status.is_unrevealed() {
            return Ok(self.clone());
        }

        let mut next = self.clone();
        if status == GameStatus::Ready && !self.grid.has_mines() {
            next.lay_mines_around(coords);
        }

        match next.grid.reveal(coords) {
            RevealOutcome::HitMine => {
                next.saved_grid = Some(self.grid.clone());
            }
            RevealOutcome::Won => log::debug!("Game won with {:?}", coords),
            RevealOutcome::Revealed | RevealOutcome::NoChange => {}
        }
        Ok(next)
    }

    fn lay_mines_around(&mut self, start: Coord2) {
        let mines = SeededMinefieldGenerator::new(self.rand_seed, start).generate(self.difficulty);
        self.grid = self.grid.lay_mines(&mines);

        let laid = self.grid.mine_count();
        if laid != self.difficulty.mines {
            log::warn!(
                "Laid {} mines instead of the requested {}",
                laid,
                self.difficulty.mines
            );
            self.difficulty.mines = laid;
        }
    }

    pub fn toggle_flag(&self, coords: Coord2) -> Self {
        if !self.status().is_playable() {
            log::debug!("Flag at {:?} ignored: {}", coords, GameError::NotRunning);
            return self.clone();
        }

        let mut next = self.clone();
        if next.grid.toggle_flag(coords).has_update() {
            log::debug!("Flag toggled at {:?}", coords);
        }
        next
    }

    /// Restores the board from right before the losing move. Only the latest loss can be undone.
    pub fn undo_losing_move(&self) -> Self {
        let status = self.status();
        match (&self.saved_grid, status) {
            (Some(saved), GameStatus::Loss) => {
                log::debug!("Undoing losing move");
                Self {
                    grid: saved.clone(),
                    saved_grid: None,
                    ..self.clone()
                }
            }
            _ => {
                log::warn!(
                    "Nothing to undo, game status is {:?} and must be {:?} with a saved board",
                    status,
                    GameStatus::Loss
                );
                self.clone()
            }
        }
    }
}
