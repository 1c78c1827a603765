//! Engine integration tests: scenarios and properties of the three bots.

use proptest::prelude::*;

use bot_arcade::{
    BotPlayer, Feedback, GameRng, MemoryConfig, MemoryMatch, NumberConfig, NumberGuess, ScrambleConfig,
    ScriptedRng, WordScramble,
};

/// Play a memory game to the end, returning (moves made, matching moves).
fn play_memory_out(game: &mut MemoryMatch, rng: &mut GameRng, limit: usize) -> (usize, usize) {
    let mut moves = 0;
    let mut matches = 0;
    for _ in 0..limit {
        let before = game.revealed().iter().filter(|r| **r).count();
        let outcome = game.bot_move(rng);
        let after = game.revealed().iter().filter(|r| **r).count();

        assert!(after - before <= 2, "revealed {} cards in one move", after - before);
        assert_eq!(after - before, if outcome.success { 2 } else { 0 });

        if outcome.played.is_some() {
            moves += 1;
        }
        if outcome.success {
            matches += 1;
        }
        if game.finishes(&outcome) {
            return (moves, matches);
        }
    }
    panic!("memory game did not finish within {} moves", limit);
}

// =============================================================================
// Memory Match Scenarios
// =============================================================================

/// Test that the first move on a fresh board never comes from recall.
#[test]
fn test_memory_first_move_never_from_recall() {
    for seed in 0..100 {
        let mut game = MemoryMatch::with_board(["A", "B", "A", "C", "B", "C"]);
        let outcome = game.bot_move(&mut GameRng::new(seed));

        assert_ne!(outcome.feedback, Feedback::MatchFromMemory, "seed {}", seed);
        assert_eq!(game.recall_len(), 2);
    }
}

/// Test that a three-pair board completes after exactly three matching moves.
#[test]
fn test_memory_three_pairs_complete_after_three_matches() {
    for seed in 0..100 {
        let mut game = MemoryMatch::with_board(["A", "B", "A", "C", "B", "C"]);
        let mut rng = GameRng::new(seed);

        let (_, matches) = play_memory_out(&mut game, &mut rng, 200);

        assert_eq!(matches, 3);
        assert!(game.is_complete());
    }
}

/// Test that a finished board keeps reporting there is nothing left to flip.
#[test]
fn test_memory_game_over_after_completion() {
    let mut rng = GameRng::new(9);
    let mut game = MemoryMatch::new(&MemoryConfig::default(), &mut rng);
    let (_, matches) = play_memory_out(&mut game, &mut rng, 500);
    assert_eq!(matches, 6);

    for _ in 0..3 {
        let outcome = game.bot_move(&mut rng);
        assert_eq!(outcome.played, None);
        assert_eq!(outcome.feedback, Feedback::NotEnoughCards);
    }
}

/// Test that the same seed yields the same board and moves.
#[test]
fn test_memory_deterministic_with_seed() {
    let config = MemoryConfig::default();
    let mut rng1 = GameRng::new(1234);
    let mut rng2 = GameRng::new(1234);
    let mut game1 = MemoryMatch::new(&config, &mut rng1);
    let mut game2 = MemoryMatch::new(&config, &mut rng2);

    assert_eq!(game1.board(), game2.board());
    for _ in 0..10 {
        assert_eq!(game1.bot_move(&mut rng1), game2.bot_move(&mut rng2));
    }
}

// =============================================================================
// Number Guess Scenarios
// =============================================================================

/// Test that a target below the midpoint lowers the upper bound.
#[test]
fn test_number_target_42() {
    let mut game = NumberGuess::with_target(&NumberConfig::default(), 42);
    let mut rng = ScriptedRng::default();

    let first = game.bot_move(&mut rng);
    assert_eq!(first.played, Some(50));
    assert_eq!(first.feedback, Feedback::TooHigh);
    assert_eq!(game.bounds(), (1, 49));

    let second = game.bot_move(&mut rng);
    assert_eq!(second.played, Some(25));
    assert_eq!(second.feedback, Feedback::TooLow);
    assert_eq!(game.bounds(), (26, 49));
}

/// Test that a target above the midpoint raises the lower bound.
#[test]
fn test_number_target_73() {
    let mut game = NumberGuess::with_target(&NumberConfig::default(), 73);

    let first = game.bot_move(&mut ScriptedRng::default());
    assert_eq!(first.played, Some(50));
    assert_eq!(first.feedback, Feedback::TooLow);
    assert_eq!(game.bounds(), (51, 100));
}

// =============================================================================
// Word Scramble Scenarios
// =============================================================================

/// Test that the correct word succeeds at whichever attempt it is produced.
#[test]
fn test_scramble_correct_at_any_attempt() {
    let config = ScrambleConfig::default();

    // "game" scrambled as "emag": guess i is "game" only when the scripted
    // shuffle reverses the word
    let reverse = vec![0, 1, 1];
    let identity = vec![3, 2, 1];

    for wrong_first in 0..4 {
        let mut game = WordScramble::with_word(&config, "game", "emag");
        let mut script = Vec::new();
        // Distinct wrong guesses: identity gives "emag", then swaps of the tail
        let wrong = [identity.clone(), vec![3, 2, 0], vec![3, 1, 1], vec![3, 1, 0]];
        for w in wrong.iter().take(wrong_first) {
            script.extend(w.iter().copied());
        }
        script.extend(reverse.iter().copied());
        let mut rng = ScriptedRng::new(script);

        for _ in 0..wrong_first {
            let outcome = game.bot_move(&mut rng);
            assert_eq!(outcome.feedback, Feedback::Wrong);
        }
        let outcome = game.bot_move(&mut rng);
        assert_eq!(outcome.played.as_deref(), Some("game"));
        assert!(outcome.success);
        assert_eq!(game.attempts() as usize, wrong_first + 1);
    }
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    /// Test that binary search finds any target within seven guesses.
    #[test]
    fn number_found_within_seven(target in 1..=100u32) {
        let mut game = NumberGuess::with_target(&NumberConfig::default(), target);
        let mut rng = ScriptedRng::default();

        let mut calls = 0;
        loop {
            let outcome = game.bot_move(&mut rng);
            calls += 1;
            prop_assert!(outcome.played.is_some());
            let (low, high) = game.bounds();
            prop_assert!(low <= target && target <= high);
            if outcome.success {
                prop_assert_eq!(outcome.played, Some(target));
                break;
            }
        }
        prop_assert!(calls <= 7, "target {} took {} guesses", target, calls);
    }

    /// Test that every shuffled board is cleared with exactly six matches.
    #[test]
    fn memory_games_always_finish(seed in any::<u64>()) {
        let mut rng = GameRng::new(seed);
        let mut game = MemoryMatch::new(&MemoryConfig::default(), &mut rng);

        let (moves, matches) = play_memory_out(&mut game, &mut rng, 500);

        prop_assert!(game.is_complete());
        prop_assert_eq!(matches, 6);
        prop_assert!(moves >= 6);
        prop_assert!(game.recall_len() <= 12);
    }

    /// Test that the scramble bot never exceeds its attempt budget.
    #[test]
    fn scramble_respects_budget(seed in any::<u64>()) {
        let mut rng = GameRng::new(seed);
        let mut game = WordScramble::new(&ScrambleConfig::default(), &mut rng).unwrap();

        let mut finished_at = None;
        for call in 1..=6 {
            let outcome = game.bot_move(&mut rng);
            prop_assert!(game.attempts() <= 5);
            prop_assert!(game.tried_len() <= 5);
            // Every vocabulary word has more than 5 arrangements, so no repeats
            prop_assert_eq!(game.tried_len(), game.attempts() as usize);
            if game.finishes(&outcome) {
                finished_at = Some(call);
                break;
            }
        }
        prop_assert!(finished_at.is_some());
    }
}
