//! # bot-arcade
//!
//! An autonomous bot that plays mini-games on a user's behalf, one observable
//! move at a time.
//!
//! ## Games
//!
//! 1. **Memory Match**: Flip pairs on a shuffled board, remembering every card
//!    seen and cashing in known pairs first.
//!
//! 2. **Number Guess**: Binary-search a hidden number in 1..=100.
//!
//! 3. **Word Scramble**: Try random rearrangements of a scrambled word,
//!    avoiding repeats within the attempt budget.
//!
//! ## Architecture
//!
//! - **Injected Randomness**: Engines draw through `RandomSource`; sessions use
//!   a seeded ChaCha8 stream, tests can script every draw.
//!
//! - **One Game Per Session**: A session holds at most one `ActiveGame` and
//!   counts each finished game exactly once.
//!
//! - **Shared Store**: `SessionStore` maps users to mutex-guarded sessions so
//!   turns for one user are serialized while different users proceed
//!   independently.
//!
//! ## Modules
//!
//! - `core`: RNG, configuration, errors
//! - `rules`: `BotPlayer` trait and move outcomes
//! - `games`: Memory match, number guess, word scramble
//! - `session`: Per-user sessions and the session store
//!
//! ## Example
//!
//! ```
//! use bot_arcade::{ArcadeConfig, GameKind, SessionStore};
//!
//! let store = SessionStore::new(ArcadeConfig::new(42))?;
//! let turns = store.with_session("alice", |session| {
//!     session.start_game(GameKind::NumberGuess)?;
//!     let mut turns = 0;
//!     while !session.play_turn()?.complete {
//!         turns += 1;
//!     }
//!     Ok(turns)
//! })?;
//! assert!(turns < 7);
//! # Ok::<(), bot_arcade::ArcadeError>(())
//! ```

pub mod core;
pub mod rules;
pub mod games;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    ArcadeConfig, MemoryConfig, NumberConfig, ScrambleConfig,
    ArcadeError, Result,
    GameRng, RandomSource, ScriptedRng,
};

pub use crate::rules::{BotPlayer, Feedback, MoveOutcome};

pub use crate::games::{
    ActiveGame, BotMove, GameKind, GameView,
    memory::{MemoryMatch, MemoryView},
    number::{NumberGuess, NumberView},
    scramble::{ScrambleView, WordScramble},
};

pub use crate::session::{GameSession, InitialView, SessionHandle, SessionStore, TurnResult};
