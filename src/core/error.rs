//! Error types surfaced by sessions and the session store.
//!
//! Exhausted games are not errors: running out of guesses or cards is a
//! normal terminal turn.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ArcadeError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArcadeError {
    #[error("invalid game type: {selector:?}")]
    InvalidGameType { selector: String },

    #[error("no game selected")]
    NoActiveGame,

    #[error("session lock poisoned")]
    LockPoisoned,

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
