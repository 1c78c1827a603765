//! Number guess: the bot binary-searches a hidden number.

mod game;

pub use game::{NumberGuess, NumberView};
