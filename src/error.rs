//! Error types for the engine

use thiserror::Error;

use crate::point::Point;

#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("illegal move: {point} is {reason}")]
    IllegalMove { point: Point, reason: &'static str },

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("game already over")]
    GameOver,

    #[error("no valid moves available")]
    NoValidMoves,

    #[error("it is not the human player's turn")]
    NotYourTurn,

    #[error("user {id} is already in a game")]
    AlreadyInGame { id: u64 },
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn invalid<S: Into<String>>(message: S) -> Self {
        Error::InvalidArgument(message.into())
    }
}
