//! Word scramble: the bot tries random rearrangements of a scrambled word.
//!
//! Candidates are resampled to avoid repeats, but only while the set of
//! tried candidates is smaller than the attempt budget, so short words with
//! few arrangements still terminate.

mod game;

pub use game::{ScrambleView, WordScramble};
