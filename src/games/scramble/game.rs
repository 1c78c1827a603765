//! Word scramble implementation.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::core::{ArcadeError, RandomSource, Result, ScrambleConfig};
use crate::rules::{BotPlayer, Feedback, MoveOutcome};

/// Word scramble state.
#[derive(Clone, Debug)]
pub struct WordScramble {
    word: String,
    scrambled: String,
    attempts: u32,
    max_attempts: u32,
    tried: FxHashSet<String>,
    /// Distinct rearrangements of `scrambled`, saturating.
    arrangements: usize,
}

/// Rendering snapshot of a word scramble game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScrambleView {
    pub attempts: u32,
    pub max_attempts: u32,
    pub scrambled: String,
    pub solution: String,
}

/// Random rearrangement of the characters of `text`.
fn permute<R: RandomSource>(text: &str, rng: &mut R) -> String {
    let mut chars: Vec<char> = text.chars().collect();
    rng.shuffle(&mut chars);
    chars.into_iter().collect()
}

/// Number of distinct rearrangements of `text` (n! / k1!k2!...), saturating.
fn distinct_arrangements(text: &str) -> usize {
    let mut counts: Vec<(char, u128)> = Vec::new();
    for c in text.chars() {
        match counts.iter_mut().find(|(seen, _)| *seen == c) {
            Some((_, n)) => *n += 1,
            None => counts.push((c, 1)),
        }
    }

    let mut total: u128 = 1;
    let mut placed: u128 = 0;
    for (_, count) in counts {
        for i in 1..=count {
            placed += 1;
            // Running product of binomials stays integral
            total = match total.checked_mul(placed) {
                Some(product) => product / i,
                None => return usize::MAX,
            };
        }
    }
    usize::try_from(total).unwrap_or(usize::MAX)
}

impl WordScramble {
    /// Pick a word from the vocabulary and scramble it.
    pub fn new<R: RandomSource>(config: &ScrambleConfig, rng: &mut R) -> Result<Self> {
        let word = rng
            .choose(&config.vocabulary)
            .ok_or_else(|| ArcadeError::InvalidConfig("scramble vocabulary is empty".into()))?
            .clone();
        let scrambled = permute(&word, rng);
        Ok(Self::with_word(config, word, scrambled))
    }

    /// Create a game with a fixed word and scrambled form.
    pub fn with_word(config: &ScrambleConfig, word: impl Into<String>, scrambled: impl Into<String>) -> Self {
        let scrambled = scrambled.into();
        Self {
            word: word.into(),
            arrangements: distinct_arrangements(&scrambled),
            scrambled,
            attempts: 0,
            max_attempts: config.max_attempts,
            tried: FxHashSet::default(),
        }
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn scrambled(&self) -> &str {
        &self.scrambled
    }

    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Has the bot already produced this candidate?
    pub fn has_tried(&self, candidate: &str) -> bool {
        self.tried.contains(candidate)
    }

    pub fn tried_len(&self) -> usize {
        self.tried.len()
    }

    /// Snapshot for rendering.
    pub fn view(&self) -> ScrambleView {
        ScrambleView {
            attempts: self.attempts,
            max_attempts: self.max_attempts,
            scrambled: self.scrambled.clone(),
            solution: self.word.clone(),
        }
    }
}

impl BotPlayer for WordScramble {
    type Move = String;

    fn bot_move<R: RandomSource>(&mut self, rng: &mut R) -> MoveOutcome<String> {
        if self.attempts >= self.max_attempts {
            return MoveOutcome::exhausted(Feedback::MaxAttempts);
        }

        // Stop avoiding repeats once the budget or every arrangement is used up
        let fresh_limit = (self.max_attempts as usize).min(self.arrangements);
        let mut guess = permute(&self.scrambled, rng);
        while self.tried.contains(&guess) && self.tried.len() < fresh_limit {
            guess = permute(&self.scrambled, rng);
        }
        self.tried.insert(guess.clone());
        self.attempts += 1;
        tracing::debug!(%guess, attempt = self.attempts, "scramble: guess");

        if guess.to_lowercase() == self.word.to_lowercase() {
            MoveOutcome::played(guess, Feedback::Correct, true)
        } else {
            MoveOutcome::played(guess, Feedback::Wrong, false)
        }
    }
}
