//! Memory match implementation.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{MemoryConfig, RandomSource};
use crate::rules::{BotPlayer, Feedback, MoveOutcome};

/// Board positions flipped by one move.
pub type Pair = (usize, usize);

/// Face-down positions, inline for the classic 12-card board.
type Positions = SmallVec<[usize; 12]>;

/// Memory match state.
#[derive(Clone, Debug)]
pub struct MemoryMatch {
    /// Distinct symbols; each is laid out twice.
    symbols: Vec<String>,
    board: Vec<String>,
    revealed: Vec<bool>,
    /// Symbols seen at positions the bot has flipped.
    recall: FxHashMap<usize, String>,
}

/// Rendering snapshot of a memory match board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoryView {
    /// Every card as `(position, symbol)`.
    pub board: Vec<(usize, String)>,
    /// Positions that belong to confirmed pairs.
    pub revealed: Vec<usize>,
}

impl MemoryMatch {
    /// Create a shuffled board from the configured symbols.
    pub fn new<R: RandomSource>(config: &MemoryConfig, rng: &mut R) -> Self {
        let mut game = Self {
            symbols: config.symbols.clone(),
            board: Vec::new(),
            revealed: Vec::new(),
            recall: FxHashMap::default(),
        };
        game.setup(rng);
        game
    }

    /// Create a game over a fixed board layout (no shuffle).
    pub fn with_board<S: Into<String>>(board: impl IntoIterator<Item = S>) -> Self {
        let board: Vec<String> = board.into_iter().map(Into::into).collect();
        let mut symbols: Vec<String> = Vec::new();
        for symbol in &board {
            if !symbols.contains(symbol) {
                symbols.push(symbol.clone());
            }
        }
        Self {
            revealed: vec![false; board.len()],
            symbols,
            board,
            recall: FxHashMap::default(),
        }
    }

    /// Lay out every symbol twice, shuffle, and forget everything seen.
    pub fn setup<R: RandomSource>(&mut self, rng: &mut R) {
        self.board = self
            .symbols
            .iter()
            .flat_map(|symbol| [symbol.clone(), symbol.clone()])
            .collect();
        rng.shuffle(&mut self.board);
        self.revealed = vec![false; self.board.len()];
        self.recall.clear();
    }

    /// Get the board layout.
    pub fn board(&self) -> &[String] {
        &self.board
    }

    /// Get the revealed flag for every position.
    pub fn revealed(&self) -> &[bool] {
        &self.revealed
    }

    /// Symbol the bot remembers at a position, if it has flipped it.
    pub fn recalled(&self, position: usize) -> Option<&str> {
        self.recall.get(&position).map(String::as_str)
    }

    /// Number of positions the bot remembers.
    pub fn recall_len(&self) -> usize {
        self.recall.len()
    }

    /// Check if every pair has been found.
    pub fn is_complete(&self) -> bool {
        self.revealed.iter().all(|&r| r)
    }

    /// Snapshot for rendering.
    pub fn view(&self) -> MemoryView {
        MemoryView {
            board: self.board.iter().cloned().enumerate().collect(),
            revealed: self.revealed_positions().collect(),
        }
    }

    fn revealed_positions(&self) -> impl Iterator<Item = usize> + '_ {
        self.revealed
            .iter()
            .enumerate()
            .filter(|(_, r)| **r)
            .map(|(i, _)| i)
    }

    fn unrevealed_positions(&self) -> Positions {
        self.revealed
            .iter()
            .enumerate()
            .filter(|(_, r)| !**r)
            .map(|(i, _)| i)
            .collect()
    }

    /// First remembered candidate holding the same symbol as `position`.
    fn recalled_partner(&self, position: usize, candidates: &[usize]) -> Option<usize> {
        let symbol = self.recall.get(&position)?;
        candidates
            .iter()
            .copied()
            .find(|&other| other != position && self.recall.get(&other) == Some(symbol))
    }

    /// Lowest remembered position that has a remembered partner.
    fn recalled_pair(&self, unrevealed: &[usize]) -> Option<Pair> {
        unrevealed
            .iter()
            .copied()
            .filter(|p| self.recall.contains_key(p))
            .find_map(|p| self.recalled_partner(p, unrevealed).map(|q| (p, q)))
    }

    fn reveal(&mut self, (a, b): Pair) {
        self.revealed[a] = true;
        self.revealed[b] = true;
    }
}

impl BotPlayer for MemoryMatch {
    type Move = Pair;

    fn bot_move<R: RandomSource>(&mut self, rng: &mut R) -> MoveOutcome<Pair> {
        let mut unrevealed = self.unrevealed_positions();
        if unrevealed.len() < 2 {
            return MoveOutcome::exhausted(Feedback::NotEnoughCards);
        }

        // Exploit pairs already seen without flipping anything new
        if let Some(pair) = self.recalled_pair(&unrevealed) {
            self.reveal(pair);
            tracing::debug!(?pair, "memory: pair from recall");
            return MoveOutcome::played(pair, Feedback::MatchFromMemory, true);
        }

        let first = unrevealed.remove(rng.next_index(unrevealed.len()));
        if let Some(second) = self.recalled_partner(first, &unrevealed) {
            let pair = (first, second);
            self.reveal(pair);
            tracing::debug!(?pair, "memory: first pick completed from recall");
            return MoveOutcome::played(pair, Feedback::MatchFromMemory, true);
        }

        let second = unrevealed[rng.next_index(unrevealed.len())];
        let pair = (first, second);
        self.recall.insert(first, self.board[first].clone());
        self.recall.insert(second, self.board[second].clone());

        if self.board[first] == self.board[second] {
            self.reveal(pair);
            tracing::debug!(?pair, "memory: blind match");
            MoveOutcome::played(pair, Feedback::Match, true)
        } else {
            tracing::debug!(?pair, "memory: no match");
            MoveOutcome::played(pair, Feedback::NoMatch, false)
        }
    }

    fn finishes(&self, outcome: &MoveOutcome<Pair>) -> bool {
        outcome.played.is_none() || self.is_complete()
    }
}
