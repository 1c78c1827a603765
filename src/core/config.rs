//! Arcade configuration types.
//!
//! Callers configure the arcade at startup by providing:
//! - `MemoryConfig`: The symbols laid out in pairs on the memory board
//! - `NumberConfig`: The hidden number range and guess budget
//! - `ScrambleConfig`: The vocabulary and attempt budget
//! - `ArcadeConfig`: Combines all configuration with the master seed
//!
//! Defaults reproduce the classic games: 6 fruit pairs, 1-100 in 10 guesses,
//! five words in 5 attempts.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::error::{ArcadeError, Result};

/// Memory-match board configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoryConfig {
    /// Distinct symbols. Each appears exactly twice on the board.
    pub symbols: Vec<String>,
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            symbols: ["🍎", "🍊", "🍋", "🍇", "🍓", "🍍"]
                .into_iter()
                .map(String::from)
                .collect(),
        }
    }
}

impl MemoryConfig {
    /// Number of cards on the board.
    #[must_use]
    pub fn board_size(&self) -> usize {
        self.symbols.len() * 2
    }
}

/// Number-guess configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberConfig {
    /// Smallest possible target (inclusive).
    pub low: u32,
    /// Largest possible target (inclusive).
    pub high: u32,
    /// Guesses allowed before the game is exhausted.
    pub max_guesses: u32,
}

impl Default for NumberConfig {
    fn default() -> Self {
        Self {
            low: 1,
            high: 100,
            max_guesses: 10,
        }
    }
}

/// Word-scramble configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScrambleConfig {
    /// Words the target is drawn from.
    pub vocabulary: Vec<String>,
    /// Attempts allowed before the game is exhausted.
    pub max_attempts: u32,
}

impl Default for ScrambleConfig {
    fn default() -> Self {
        Self {
            vocabulary: ["python", "robot", "coding", "game", "brain"]
                .into_iter()
                .map(String::from)
                .collect(),
            max_attempts: 5,
        }
    }
}

/// Complete arcade configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArcadeConfig {
    pub memory: MemoryConfig,
    pub number: NumberConfig,
    pub scramble: ScrambleConfig,

    /// Master seed. Every new session receives a fork of this stream.
    pub seed: u64,
}

impl ArcadeConfig {
    /// Create the default configuration with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            ..Self::default()
        }
    }

    /// Replace the memory-match symbols.
    #[must_use]
    pub fn with_symbols<S: Into<String>>(mut self, symbols: impl IntoIterator<Item = S>) -> Self {
        self.memory.symbols = symbols.into_iter().map(Into::into).collect();
        self
    }

    /// Set the number-guess range (inclusive).
    #[must_use]
    pub fn with_number_range(mut self, low: u32, high: u32) -> Self {
        self.number.low = low;
        self.number.high = high;
        self
    }

    /// Set the number-guess budget.
    #[must_use]
    pub fn with_max_guesses(mut self, max_guesses: u32) -> Self {
        self.number.max_guesses = max_guesses;
        self
    }

    /// Replace the word-scramble vocabulary.
    #[must_use]
    pub fn with_vocabulary<S: Into<String>>(mut self, words: impl IntoIterator<Item = S>) -> Self {
        self.scramble.vocabulary = words.into_iter().map(Into::into).collect();
        self
    }

    /// Set the word-scramble budget.
    #[must_use]
    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.scramble.max_attempts = max_attempts;
        self
    }

    /// Set the master seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Check that every game can be set up with this configuration.
    pub fn validate(&self) -> Result<()> {
        if self.memory.symbols.is_empty() {
            return Err(ArcadeError::InvalidConfig("memory board needs at least one symbol".into()));
        }
        let distinct: FxHashSet<&str> = self.memory.symbols.iter().map(String::as_str).collect();
        if distinct.len() != self.memory.symbols.len() {
            return Err(ArcadeError::InvalidConfig("memory symbols must be distinct".into()));
        }
        if self.number.low > self.number.high {
            return Err(ArcadeError::InvalidConfig(format!(
                "number range {}..={} is empty",
                self.number.low, self.number.high
            )));
        }
        if self.number.max_guesses == 0 {
            return Err(ArcadeError::InvalidConfig("max_guesses must be positive".into()));
        }
        if self.scramble.vocabulary.is_empty() {
            return Err(ArcadeError::InvalidConfig("scramble vocabulary is empty".into()));
        }
        if self.scramble.vocabulary.iter().any(String::is_empty) {
            return Err(ArcadeError::InvalidConfig("scramble vocabulary contains an empty word".into()));
        }
        if self.scramble.max_attempts == 0 {
            return Err(ArcadeError::InvalidConfig("max_attempts must be positive".into()));
        }
        Ok(())
    }
}
