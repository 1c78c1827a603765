//! Per-user game session.

use std::sync::Arc;

use crate::core::{ArcadeConfig, ArcadeError, GameRng, RandomSource, Result};
use crate::games::{ActiveGame, GameKind, GameView};

use super::view::{InitialView, TurnResult};

/// Message shown when the memory board has nothing left to flip.
const GAME_OVER: &str = "Game over!";

/// One user's arcade session: counters plus at most one active game.
///
/// The session owns its random source so every game it starts draws from a
/// single reproducible stream.
#[derive(Debug)]
pub struct GameSession<R: RandomSource = GameRng> {
    user: String,
    config: Arc<ArcadeConfig>,
    rng: R,
    /// Never incremented; kept for display.
    score: u32,
    games_played: u32,
    active: Option<ActiveGame>,
    /// The active game's completion has already been counted.
    completion_counted: bool,
}

impl<R: RandomSource> GameSession<R> {
    /// Create an empty session.
    pub fn new(user: impl Into<String>, config: Arc<ArcadeConfig>, rng: R) -> Self {
        Self {
            user: user.into(),
            config,
            rng,
            score: 0,
            games_played: 0,
            active: None,
            completion_counted: false,
        }
    }

    pub fn user(&self) -> &str {
        &self.user
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn games_played(&self) -> u32 {
        self.games_played
    }

    /// Kind of the active game, if any.
    pub fn active_kind(&self) -> Option<GameKind> {
        self.active.as_ref().map(ActiveGame::kind)
    }

    /// The active game, if any.
    pub fn active_game(&self) -> Option<&ActiveGame> {
        self.active.as_ref()
    }

    /// Snapshot of the active game for rendering.
    pub fn view(&self) -> Option<GameView> {
        self.active.as_ref().map(ActiveGame::view)
    }

    /// Start a game from its menu selector (`"memory"`, `"number"`, `"scramble"`).
    ///
    /// An unknown selector leaves the session untouched.
    pub fn start_game_named(&mut self, selector: &str) -> Result<InitialView> {
        let kind = selector.parse::<GameKind>()?;
        self.start_game(kind)
    }

    /// Discard any active game and start a fresh one.
    pub fn start_game(&mut self, kind: GameKind) -> Result<InitialView> {
        let game = ActiveGame::start(kind, &self.config, &mut self.rng)?;
        let message = game.start_message();
        let view = game.view();

        self.active = Some(game);
        self.completion_counted = false;
        tracing::info!(user = %self.user, %kind, "game started");

        Ok(InitialView {
            kind,
            message,
            view,
            score: self.score,
            games_played: self.games_played,
        })
    }

    /// Let the bot take one turn in the active game.
    ///
    /// The game stays active after it finishes; further turns replay its
    /// terminal outcome without counting another completed game.
    pub fn play_turn(&mut self) -> Result<TurnResult> {
        let game = self.active.as_mut().ok_or(ArcadeError::NoActiveGame)?;
        let kind = game.kind();
        let turn = game.play(&mut self.rng);
        let view = game.view();

        if turn.finished && !self.completion_counted {
            self.completion_counted = true;
            self.games_played += 1;
            tracing::info!(
                user = %self.user,
                %kind,
                games_played = self.games_played,
                "game complete"
            );
        }

        let (message, matched) = match kind {
            GameKind::MemoryMatch if turn.played.is_none() => (GAME_OVER.to_string(), Some(turn.success)),
            GameKind::MemoryMatch => (turn.feedback.to_string(), Some(turn.success)),
            _ => (turn.feedback.to_string(), None),
        };

        Ok(TurnResult {
            kind,
            played: turn.played,
            feedback: turn.feedback,
            message,
            complete: turn.finished,
            matched,
            view,
            score: self.score,
            games_played: self.games_played,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ScriptedRng;
    use crate::games::{BotMove, GameView};
    use crate::rules::Feedback;

    fn session(config: ArcadeConfig) -> GameSession<GameRng> {
        GameSession::new("user", Arc::new(config), GameRng::new(42))
    }

    #[test]
    fn test_new_session_is_empty() {
        let session = session(ArcadeConfig::default());

        assert_eq!(session.user(), "user");
        assert_eq!(session.score(), 0);
        assert_eq!(session.games_played(), 0);
        assert_eq!(session.active_kind(), None);
        assert!(session.view().is_none());
    }

    #[test]
    fn test_play_without_game() {
        let mut session = session(ArcadeConfig::default());
        assert_eq!(session.play_turn(), Err(ArcadeError::NoActiveGame));
    }

    #[test]
    fn test_invalid_selector_keeps_session() {
        let mut session = session(ArcadeConfig::default());
        session.start_game(GameKind::NumberGuess).unwrap();
        session.play_turn().unwrap();

        let err = session.start_game_named("poker").unwrap_err();

        assert_eq!(err, ArcadeError::InvalidGameType { selector: "poker".to_string() });
        assert_eq!(session.active_kind(), Some(GameKind::NumberGuess));
        match session.view() {
            Some(GameView::Number(view)) => assert_eq!(view.guesses, 1),
            other => panic!("unexpected view {:?}", other),
        }
    }

    #[test]
    fn test_start_game_initial_view() {
        let mut session = session(ArcadeConfig::default());

        let initial = session.start_game_named("memory").unwrap();
        assert_eq!(initial.kind, GameKind::MemoryMatch);
        assert_eq!(initial.message, "Memory Match started!");
        match initial.view {
            GameView::Memory(view) => {
                assert_eq!(view.board.len(), 12);
                assert!(view.revealed.is_empty());
            }
            other => panic!("unexpected view {:?}", other),
        }

        let initial = session.start_game(GameKind::WordScramble).unwrap();
        match &initial.view {
            GameView::Scramble(view) => {
                assert_eq!(view.attempts, 0);
                assert_eq!(
                    initial.message,
                    format!("Word Scramble started! Bot will try to unscramble: {}", view.scrambled)
                );
            }
            other => panic!("unexpected view {:?}", other),
        }
    }

    #[test]
    fn test_completion_counted_once() {
        // Single guess budget: solved on the first turn or exhausted on the second
        let mut session = session(ArcadeConfig::default().with_max_guesses(1));
        session.start_game(GameKind::NumberGuess).unwrap();

        let first = session.play_turn().unwrap();
        let finished = if first.complete {
            first
        } else {
            assert_eq!(first.games_played, 0);
            session.play_turn().unwrap()
        };
        assert!(finished.complete);
        assert_eq!(finished.games_played, 1);

        let again = session.play_turn().unwrap();
        assert!(again.complete);
        assert_eq!(again.played, None);
        assert_eq!(again.feedback, Feedback::MaxGuesses);
        assert_eq!(again.message, "Max guesses reached!");
        assert_eq!(session.games_played(), 1);

        // A new game can be counted again; one guess either solves it or
        // the next turn reports the exhausted budget
        session.start_game(GameKind::NumberGuess).unwrap();
        let turns = (1..=2).find(|_| session.play_turn().unwrap().complete);
        assert!(turns.is_some());
        assert_eq!(session.games_played(), 2);
        assert_eq!(session.score(), 0);
    }

    #[test]
    fn test_unplayable_config_is_an_error() {
        let mut session = session(ArcadeConfig::default().with_number_range(10, 1));

        let result = session.start_game(GameKind::NumberGuess);

        assert!(matches!(result, Err(ArcadeError::InvalidConfig(_))));
        assert_eq!(session.active_kind(), None);
        assert_eq!(session.games_played(), 0);

        // Other games remain playable with the same config
        session.start_game(GameKind::MemoryMatch).unwrap();
        assert_eq!(session.active_kind(), Some(GameKind::MemoryMatch));
    }

    #[test]
    fn test_memory_turn_fields() {
        let config = Arc::new(ArcadeConfig::default().with_symbols(["A"]));
        // Two-card board: the first turn always matches
        let mut session = GameSession::new("user", config, ScriptedRng::new(vec![0]));
        session.start_game(GameKind::MemoryMatch).unwrap();

        let turn = session.play_turn().unwrap();
        assert_eq!(turn.played, Some(BotMove::Pair(0, 1)));
        assert_eq!(turn.matched, Some(true));
        assert_eq!(turn.message, "Match found!");
        assert!(turn.complete);
        assert!(turn.temporarily_revealed().is_empty());

        let over = session.play_turn().unwrap();
        assert_eq!(over.played, None);
        assert_eq!(over.feedback, Feedback::NotEnoughCards);
        assert_eq!(over.message, "Game over!");
        assert_eq!(over.matched, Some(false));
        assert!(over.complete);
        assert_eq!(session.games_played(), 1);
    }
}
