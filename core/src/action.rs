use serde::{Deserialize, Serialize};

use crate::*;

/// Every event a caller can feed into [`reduce`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Action {
    Start { difficulty: Difficulty, seed: u32 },
    Reveal(Coord2),
    ToggleFlag(Coord2),
    UndoLosingMove,
    Load { grid: Grid, seed: u32 },
    Reset,
}

/// Applies one action, returning the next state. The input is never modified.
pub fn reduce(state: &GameState, action: Action) -> GameState {
    match action {
        Action::Start { difficulty, seed } => GameState::start(difficulty, seed),
        Action::Reveal(coords) => state.reveal_cell(coords),
        Action::ToggleFlag(coords) => state.toggle_flag(coords),
        Action::UndoLosingMove => state.undo_losing_move(),
        Action::Load { grid, seed } => GameState::load(grid, seed),
        Action::Reset => GameState::reset(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use alloc::vec::Vec;

    #[test]
    fn replays_a_game() {
        let actions = vec![
            Action::Start {
                difficulty: Difficulty::new_unchecked(4, 4, 2),
                seed: 6,
            },
            Action::ToggleFlag((1, 0)),
            Action::Reveal((3, 0)),
            Action::Reveal((1, 2)),
        ];

        let states: Vec<GameState> = actions
            .into_iter()
            .scan(GameState::default(), |state, action| {
                *state = reduce(state, action);
                Some(state.clone())
            })
            .collect();

        let statuses: Vec<GameStatus> = states.iter().map(GameState::status).collect();
        assert_eq!(
            statuses,
            [
                GameStatus::Ready,
                GameStatus::Ready,
                GameStatus::Running,
                GameStatus::Loss,
            ]
        );

        let undone = reduce(&states[3], Action::UndoLosingMove);
        assert_eq!(undone.grid(), states[2].grid());
        assert_eq!(reduce(&undone, Action::Reset), GameState::default());
    }

    #[test]
    fn load_action_adopts_grid() {
        let grid = Grid::from_mine_coords(2, 3, &[(2, 1)]).unwrap();

        let state = reduce(
            &GameState::default(),
            Action::Load {
                grid: grid.clone(),
                seed: 9,
            },
        );

        assert_eq!(state.grid(), &grid);
        assert_eq!(state.rand_seed(), 9);
        assert_eq!(state.difficulty().mines, 1);
    }
}
