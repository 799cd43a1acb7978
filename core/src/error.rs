use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("Tile exponent must not be negative")]
    NegativeExponent,
    #[error("Tile exponent exceeds the supported maximum")]
    ExponentTooLarge,
    #[error("Board has no empty cell left")]
    BoardFull,
    #[error("Board shape does not match the field size")]
    InvalidBoardShape,
}

pub type Result<T> = core::result::Result<T, GameError>;
