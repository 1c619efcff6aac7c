//! Property tests for dealing, shuffling and pick sequences.

use proptest::prelude::*;

use memory_match::core::{shuffle, DeckBuilder, GameConfig, GameEngine, PickOutcome, SimpleRng};
use memory_match::types::{CardId, Phase, SYMBOL_ALPHABET};

proptest! {
    #[test]
    fn deck_has_every_value_twice(pairs in 0usize..=SYMBOL_ALPHABET.len(), seed in any::<u32>()) {
        let mut rng = SimpleRng::new(seed);
        let deck = DeckBuilder::new(&SYMBOL_ALPHABET).build(pairs, &mut rng).unwrap();

        prop_assert_eq!(deck.len(), pairs * 2);

        let mut ids: Vec<u32> = deck.iter().map(|c| c.id.get()).collect();
        ids.sort_unstable();
        prop_assert_eq!(ids, (1..=pairs as u32 * 2).collect::<Vec<_>>());

        for symbol in &SYMBOL_ALPHABET[..pairs] {
            prop_assert_eq!(deck.iter().filter(|c| c.value == *symbol).count(), 2);
        }
        prop_assert!(deck.iter().all(|c| !c.matched));
    }

    #[test]
    fn too_many_pairs_is_an_error(extra in 1usize..20) {
        let mut rng = SimpleRng::new(1);
        let result =
            DeckBuilder::new(&SYMBOL_ALPHABET).build(SYMBOL_ALPHABET.len() + extra, &mut rng);
        prop_assert!(result.is_err());
    }

    #[test]
    fn shuffle_is_a_permutation(
        mut items in prop::collection::vec(any::<u8>(), 0..64),
        seed in any::<u32>(),
    ) {
        let mut before = items.clone();
        shuffle(&mut items, &mut SimpleRng::new(seed));
        before.sort_unstable();
        items.sort_unstable();
        prop_assert_eq!(before, items);
    }

    #[test]
    fn counters_stay_consistent(
        seed in any::<u32>(),
        difficulty in prop::sample::select(vec!["easy", "medium", "hard"]),
        steps in prop::collection::vec((1u32..=17, 0u32..800), 0..120),
    ) {
        let mut engine = GameEngine::new(GameConfig::default(), seed);
        engine.start(Some(difficulty), "Ann").unwrap();
        let total = engine.status().total_pairs;

        let mut completed = 0u32;
        for (id, wait) in steps {
            let before = engine.status();
            let outcome = engine.pick(CardId(id));
            let after = engine.status();

            match outcome {
                PickOutcome::Rejected(_) => prop_assert_eq!(before, after),
                PickOutcome::Flipped => prop_assert_eq!(after.move_count, before.move_count),
                PickOutcome::Matched | PickOutcome::Mismatched | PickOutcome::Finished(_) => {
                    completed += 1;
                    prop_assert_eq!(after.move_count, before.move_count + 1);
                }
            }
            prop_assert!(after.pairs_matched <= total);
            prop_assert_eq!(after.move_count, completed);

            engine.advance(wait);
            if engine.phase() == Phase::Finished {
                prop_assert_eq!(engine.status().pairs_matched, total);
                break;
            }
        }
    }

    #[test]
    fn reset_always_lands_idle(
        seed in any::<u32>(),
        picks in prop::collection::vec(1u32..=6, 0..8),
        wait in 0u32..2000,
    ) {
        let mut engine = GameEngine::new(GameConfig::default(), seed);
        engine.start(Some("easy"), "Ann").unwrap();
        for id in picks {
            engine.pick(CardId(id));
        }
        engine.reset();

        prop_assert_eq!(engine.phase(), Phase::Idle);
        prop_assert_eq!(engine.pending_tasks(), 0);
        engine.advance(wait);
        prop_assert_eq!(engine.phase(), Phase::Idle);
        prop_assert_eq!(engine.status(), Default::default());
    }
}
