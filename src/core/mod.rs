//! Core arcade types: random sources, configuration, errors.
//!
//! These are shared by every game engine and by the session layer.

pub mod rng;
pub mod config;
pub mod error;

pub use rng::{GameRng, RandomSource, ScriptedRng};
pub use config::{ArcadeConfig, MemoryConfig, NumberConfig, ScrambleConfig};
pub use error::{ArcadeError, Result};
