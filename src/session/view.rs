//! What a session hands back to its caller for rendering.

use serde::{Deserialize, Serialize};

use crate::games::{BotMove, GameKind, GameView};
use crate::rules::Feedback;

/// Result of starting a game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InitialView {
    pub kind: GameKind,
    pub message: String,
    pub view: GameView,
    pub score: u32,
    pub games_played: u32,
}

/// Result of one bot turn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnResult {
    pub kind: GameKind,
    /// The move made, or `None` when the game had nothing left to play.
    pub played: Option<BotMove>,
    pub feedback: Feedback,
    /// Display message. Usually the feedback text; `"Game over!"` when the
    /// memory board has no cards left to flip.
    pub message: String,
    pub complete: bool,
    /// Memory match only: whether this move matched a pair.
    pub matched: Option<bool>,
    pub view: GameView,
    pub score: u32,
    pub games_played: u32,
}

impl TurnResult {
    /// Memory match positions shown face up for this turn only.
    ///
    /// A flipped pair that did not match is shown once and turned back over;
    /// matched pairs are already part of the revealed set.
    #[must_use]
    pub fn temporarily_revealed(&self) -> Vec<usize> {
        match (&self.played, self.matched) {
            (Some(BotMove::Pair(a, b)), Some(false)) => vec![*a, *b],
            _ => Vec::new(),
        }
    }
}
