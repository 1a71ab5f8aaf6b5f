use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("Board needs positive dimensions and fewer mines than cells")]
    InvalidDifficulty,
    #[error("Board rows must be non-empty and of equal length")]
    InvalidBoardShape,
    #[error("Game is not in progress, move ignored")]
    NotRunning,
}

pub type Result<T> = core::result::Result<T, GameError>;
