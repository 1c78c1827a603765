//! Bot player trait for game implementations.
//!
//! Games implement `BotPlayer` to define:
//! - How the bot picks its next move
//! - When a move ends the game

use serde::{Deserialize, Serialize};

use crate::core::rng::RandomSource;

/// Feedback attached to every bot move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Feedback {
    /// Memory match: pair completed from previously seen cards.
    MatchFromMemory,
    /// Memory match: two blind flips showed the same symbol.
    Match,
    /// Memory match: two blind flips differed.
    NoMatch,
    /// Memory match: fewer than two face-down cards remain.
    NotEnoughCards,
    /// Number guess: target is higher.
    TooLow,
    /// Number guess: target is lower.
    TooHigh,
    /// Number guess or word scramble: solved.
    Correct,
    /// Number guess: budget exhausted.
    MaxGuesses,
    /// Word scramble: candidate was not the word.
    Wrong,
    /// Word scramble: budget exhausted.
    MaxAttempts,
}

impl Feedback {
    /// Text shown to the player.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Feedback::MatchFromMemory => "Match found from memory!",
            Feedback::Match => "Match found!",
            Feedback::NoMatch => "No match!",
            Feedback::NotEnoughCards => "Not enough cards to flip!",
            Feedback::TooLow => "Too low!",
            Feedback::TooHigh => "Too high!",
            Feedback::Correct => "Correct!",
            Feedback::MaxGuesses => "Max guesses reached!",
            Feedback::Wrong => "Wrong!",
            Feedback::MaxAttempts => "Max attempts reached!",
        }
    }
}

impl std::fmt::Display for Feedback {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of a single bot move.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveOutcome<M> {
    /// The move made, or `None` when no move was available.
    pub played: Option<M>,
    pub feedback: Feedback,
    /// Memory match: the move matched a pair. Other games: the game was solved.
    pub success: bool,
}

impl<M> MoveOutcome<M> {
    /// A move was made.
    pub fn played(mv: M, feedback: Feedback, success: bool) -> Self {
        Self {
            played: Some(mv),
            feedback,
            success,
        }
    }

    /// No move was available.
    pub fn exhausted(feedback: Feedback) -> Self {
        Self {
            played: None,
            feedback,
            success: false,
        }
    }
}

/// Bot player trait.
///
/// ## Implementation Notes
///
/// - `bot_move`: Draw all randomness from `rng` so games replay under a fixed seed
/// - `bot_move` on a finished game returns a terminal outcome again instead of panicking
/// - `finishes`: Defaults to "nothing left to play, or solved"
pub trait BotPlayer {
    /// The move representation for this game.
    type Move: Clone + std::fmt::Debug;

    /// Pick and apply the bot's next move.
    fn bot_move<R: RandomSource>(&mut self, rng: &mut R) -> MoveOutcome<Self::Move>;

    /// Does this outcome end the game?
    fn finishes(&self, outcome: &MoveOutcome<Self::Move>) -> bool {
        outcome.played.is_none() || outcome.success
    }
}
