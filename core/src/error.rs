use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Board must have at least one row and one column")]
    EmptyBoard,
    #[error("Too many mines: {mines} requested but the board only has {cells} cells")]
    TooManyMines { mines: u32, cells: u32 },
    #[error("Invalid coordinates")]
    InvalidCoords,
}

pub type Result<T> = core::result::Result<T, GameError>;
