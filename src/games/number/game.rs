//! Number guess implementation.

use serde::{Deserialize, Serialize};

use crate::core::{ArcadeError, NumberConfig, RandomSource, Result};
use crate::rules::{BotPlayer, Feedback, MoveOutcome};

/// Number guess state.
#[derive(Clone, Debug)]
pub struct NumberGuess {
    target: u32,
    low: u32,
    high: u32,
    guesses: u32,
    max_guesses: u32,
}

/// Rendering snapshot of a number guess game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberView {
    pub guesses: u32,
    pub max_guesses: u32,
    /// Current search interval (inclusive).
    pub low: u32,
    pub high: u32,
    pub target: u32,
}

impl NumberGuess {
    /// Create a game with a target drawn uniformly from the configured range.
    pub fn new<R: RandomSource>(config: &NumberConfig, rng: &mut R) -> Result<Self> {
        if config.low > config.high {
            return Err(ArcadeError::InvalidConfig(format!(
                "number range {}..={} is empty",
                config.low, config.high
            )));
        }
        let span = (config.high - config.low) as usize + 1;
        let target = config.low + rng.next_index(span) as u32;
        Ok(Self::with_target(config, target))
    }

    /// Create a game with a fixed target.
    ///
    /// # Panics
    ///
    /// Panics if `target` is outside the configured range.
    pub fn with_target(config: &NumberConfig, target: u32) -> Self {
        assert!(
            (config.low..=config.high).contains(&target),
            "Target must lie in {}..={}",
            config.low,
            config.high
        );
        Self {
            target,
            low: config.low,
            high: config.high,
            guesses: 0,
            max_guesses: config.max_guesses,
        }
    }

    pub fn target(&self) -> u32 {
        self.target
    }

    /// Current search interval (inclusive).
    pub fn bounds(&self) -> (u32, u32) {
        (self.low, self.high)
    }

    pub fn guesses(&self) -> u32 {
        self.guesses
    }

    pub fn max_guesses(&self) -> u32 {
        self.max_guesses
    }

    /// Snapshot for rendering.
    pub fn view(&self) -> NumberView {
        NumberView {
            guesses: self.guesses,
            max_guesses: self.max_guesses,
            low: self.low,
            high: self.high,
            target: self.target,
        }
    }
}

impl BotPlayer for NumberGuess {
    type Move = u32;

    fn bot_move<R: RandomSource>(&mut self, _rng: &mut R) -> MoveOutcome<u32> {
        if self.guesses >= self.max_guesses {
            return MoveOutcome::exhausted(Feedback::MaxGuesses);
        }

        // floor((low + high) / 2) without overflow
        let guess = self.low + (self.high - self.low) / 2;
        self.guesses += 1;
        tracing::debug!(guess, low = self.low, high = self.high, "number: guess");

        if guess < self.target {
            self.low = guess + 1;
            MoveOutcome::played(guess, Feedback::TooLow, false)
        } else if guess > self.target {
            self.high = guess - 1;
            MoveOutcome::played(guess, Feedback::TooHigh, false)
        } else {
            MoveOutcome::played(guess, Feedback::Correct, true)
        }
    }
}
