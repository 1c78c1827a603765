//! Bot player trait for game implementations.
//!
//! Each game implements `BotPlayer` to define how the bot picks a move and
//! which outcomes end the game. The session layer calls into `BotPlayer`
//! but never interprets game-specific state directly.

pub mod engine;

pub use engine::{BotPlayer, Feedback, MoveOutcome};
