//! The three bot games and the tagged union a session holds.
//!
//! - `memory`: Memory match over pairs of symbols
//! - `number`: Binary-search number guessing
//! - `scramble`: Word unscrambling by resampling

pub mod memory;
pub mod number;
pub mod scramble;

use serde::{Deserialize, Serialize};

use crate::core::{ArcadeConfig, ArcadeError, RandomSource, Result};
use crate::rules::{BotPlayer, Feedback, MoveOutcome};

use self::memory::{MemoryMatch, MemoryView};
use self::number::{NumberGuess, NumberView};
use self::scramble::{ScrambleView, WordScramble};

/// Game selector.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameKind {
    MemoryMatch,
    NumberGuess,
    WordScramble,
}

impl GameKind {
    /// All game kinds.
    pub const ALL: [GameKind; 3] = [GameKind::MemoryMatch, GameKind::NumberGuess, GameKind::WordScramble];

    /// Selector value used by the game menu.
    #[must_use]
    pub const fn selector(self) -> &'static str {
        match self {
            GameKind::MemoryMatch => "memory",
            GameKind::NumberGuess => "number",
            GameKind::WordScramble => "scramble",
        }
    }
}

impl std::str::FromStr for GameKind {
    type Err = ArcadeError;

    fn from_str(s: &str) -> Result<Self> {
        GameKind::ALL
            .into_iter()
            .find(|kind| kind.selector() == s)
            .ok_or_else(|| ArcadeError::InvalidGameType { selector: s.to_string() })
    }
}

impl std::fmt::Display for GameKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            GameKind::MemoryMatch => "Memory Match",
            GameKind::NumberGuess => "Number Guess",
            GameKind::WordScramble => "Word Scramble",
        };
        f.write_str(name)
    }
}

/// A move made by the bot in any game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BotMove {
    /// Memory match: two flipped positions.
    Pair(usize, usize),
    /// Number guess: the guessed number.
    Number(u32),
    /// Word scramble: the candidate word.
    Word(String),
}

/// Rendering snapshot of whichever game is active.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameView {
    Memory(MemoryView),
    Number(NumberView),
    Scramble(ScrambleView),
}

/// One bot move lifted out of its game, with the game's verdict on completion.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Turn {
    pub played: Option<BotMove>,
    pub feedback: Feedback,
    pub success: bool,
    /// The game cannot or need not continue.
    pub finished: bool,
}

fn take_turn<G, R>(game: &mut G, rng: &mut R, lift: impl FnOnce(G::Move) -> BotMove) -> Turn
where
    G: BotPlayer,
    R: RandomSource,
{
    let outcome: MoveOutcome<G::Move> = game.bot_move(rng);
    let finished = game.finishes(&outcome);
    Turn {
        played: outcome.played.map(lift),
        feedback: outcome.feedback,
        success: outcome.success,
        finished,
    }
}

/// The game a session is playing.
#[derive(Clone, Debug)]
pub enum ActiveGame {
    Memory(MemoryMatch),
    Number(NumberGuess),
    Scramble(WordScramble),
}

impl ActiveGame {
    /// Set up a fresh game of the given kind.
    pub fn start<R: RandomSource>(kind: GameKind, config: &ArcadeConfig, rng: &mut R) -> Result<Self> {
        Ok(match kind {
            GameKind::MemoryMatch => ActiveGame::Memory(MemoryMatch::new(&config.memory, rng)),
            GameKind::NumberGuess => ActiveGame::Number(NumberGuess::new(&config.number, rng)?),
            GameKind::WordScramble => ActiveGame::Scramble(WordScramble::new(&config.scramble, rng)?),
        })
    }

    #[must_use]
    pub fn kind(&self) -> GameKind {
        match self {
            ActiveGame::Memory(_) => GameKind::MemoryMatch,
            ActiveGame::Number(_) => GameKind::NumberGuess,
            ActiveGame::Scramble(_) => GameKind::WordScramble,
        }
    }

    /// Let the bot make its next move.
    pub fn play<R: RandomSource>(&mut self, rng: &mut R) -> Turn {
        match self {
            ActiveGame::Memory(game) => take_turn(game, rng, |(a, b)| BotMove::Pair(a, b)),
            ActiveGame::Number(game) => take_turn(game, rng, BotMove::Number),
            ActiveGame::Scramble(game) => take_turn(game, rng, BotMove::Word),
        }
    }

    /// Snapshot for rendering.
    #[must_use]
    pub fn view(&self) -> GameView {
        match self {
            ActiveGame::Memory(game) => GameView::Memory(game.view()),
            ActiveGame::Number(game) => GameView::Number(game.view()),
            ActiveGame::Scramble(game) => GameView::Scramble(game.view()),
        }
    }

    /// Message shown when the game starts.
    #[must_use]
    pub fn start_message(&self) -> String {
        match self {
            ActiveGame::Memory(_) => "Memory Match started!".to_string(),
            ActiveGame::Number(_) => "Number Guess started! Bot will guess the number.".to_string(),
            ActiveGame::Scramble(game) => {
                format!("Word Scramble started! Bot will try to unscramble: {}", game.scrambled())
            }
        }
    }
}
