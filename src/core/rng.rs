//! Random sources for the bot engines.
//!
//! ## Key Features
//!
//! - **Pluggable**: Engines draw through the `RandomSource` trait, never a global RNG
//! - **Deterministic**: Same seed produces identical games
//! - **Forkable**: The session store hands each new session its own branch
//! - **Scriptable**: `ScriptedRng` replays a fixed sequence of draws for tests
//!
//! ## Usage
//!
//! ```
//! use bot_arcade::core::{GameRng, RandomSource};
//!
//! let mut rng = GameRng::new(42);
//!
//! // Fork for a new session
//! let mut session_rng = rng.fork();
//!
//! let mut cards = vec![1, 1, 2, 2, 3, 3];
//! session_rng.shuffle(&mut cards);
//! assert_eq!(cards.len(), 6);
//! assert!(rng.next_index(10) < 10);
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Uniform random draws used for shuffles, permutations and choices.
///
/// Only `next_index` is required; `shuffle` and `choose` are built on top of
/// it so a deterministic implementation controls every draw an engine makes.
pub trait RandomSource {
    /// Draw an index uniformly from `0..bound`. `bound` is never zero.
    fn next_index(&mut self, bound: usize) -> usize;

    /// Shuffle a slice in place (Fisher-Yates, highest index first).
    fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.next_index(i + 1);
            slice.swap(i, j);
        }
    }

    /// Choose a random element from a slice.
    fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        if slice.is_empty() {
            return None;
        }
        let index = self.next_index(slice.len());
        slice.get(index)
    }
}

/// Seeded RNG with forking for per-session streams.
///
/// Uses ChaCha8 for speed while keeping a well-distributed sequence.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
    fork_counter: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            fork_counter: 0,
        }
    }

    /// Fork this RNG to create an independent branch.
    ///
    /// Each fork produces a different but deterministic sequence.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        let fork_seed = self.seed.wrapping_add(self.fork_counter.wrapping_mul(0x9E3779B97F4A7C15));
        Self {
            inner: ChaCha8Rng::seed_from_u64(fork_seed),
            seed: fork_seed,
            fork_counter: 0,
        }
    }

    /// The seed this stream was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RandomSource for GameRng {
    fn next_index(&mut self, bound: usize) -> usize {
        self.inner.gen_range(0..bound)
    }

    fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.inner);
    }
}

/// Replays a fixed script of draws.
///
/// Each draw takes the next scripted value modulo the requested bound and the
/// script wraps around when exhausted. An empty script always yields 0.
#[derive(Clone, Debug, Default)]
pub struct ScriptedRng {
    script: Vec<usize>,
    cursor: usize,
}

impl ScriptedRng {
    /// Create a scripted source from a sequence of draws.
    #[must_use]
    pub fn new(script: impl Into<Vec<usize>>) -> Self {
        Self {
            script: script.into(),
            cursor: 0,
        }
    }

    /// Number of draws taken so far.
    #[must_use]
    pub fn draws(&self) -> usize {
        self.cursor
    }
}

impl RandomSource for ScriptedRng {
    fn next_index(&mut self, bound: usize) -> usize {
        let value = if self.script.is_empty() {
            0
        } else {
            self.script[self.cursor % self.script.len()]
        };
        self.cursor += 1;
        value % bound
    }
}
