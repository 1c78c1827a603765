//! Memory match: the bot flips pairs of face-down cards.
//!
//! - The board holds every symbol exactly twice, shuffled
//! - Each move flips two cards; equal symbols stay face up
//! - The bot remembers every card it has flipped and cashes in known pairs
//!   before flipping anything new
//!
//! The bot is not optimal: blind picks may land on cards it already knows.

mod game;

pub use game::{MemoryMatch, MemoryView, Pair};
