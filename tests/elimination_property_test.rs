//! Property-based tests for the elimination game.
//!
//! The game is checked against a plain `Vec` simulation that recounts from
//! an index after every removal.

use counting_circle::{CircleInvariants, CircularSequence, CountingGame, InvariantSet};
use proptest::prelude::*;

/// Reference elimination: remove index `(start + k - 1) % len`, resume there.
fn naive_elimination(children: usize, count: usize) -> (usize, Vec<usize>) {
    let mut circle: Vec<usize> = (0..children).collect();
    let mut evicted = Vec::with_capacity(children - 1);
    let mut start = 0;

    while circle.len() > 1 {
        let index = (start + count - 1) % circle.len();
        evicted.push(circle.remove(index));
        start = index % circle.len();
    }

    (circle[0], evicted)
}

proptest! {
    #[test]
    fn matches_naive_simulation(children in 2usize..60, count in 1usize..200) {
        let outcome = CountingGame::new(children as i64, count as i64)
            .unwrap()
            .play()
            .unwrap();
        let (survivor, evicted) = naive_elimination(children, count);

        prop_assert_eq!(outcome.survivor(), survivor);
        prop_assert_eq!(outcome.evicted_in_order(), evicted.as_slice());
    }

    #[test]
    fn evictions_and_survivor_cover_all_ids(children in 2i64..120, count in 1i64..1_000) {
        let outcome = CountingGame::new(children, count).unwrap().play().unwrap();

        prop_assert_eq!(outcome.rounds() as i64, children - 1);

        let mut ids = outcome.evicted_in_order().to_vec();
        ids.push(outcome.survivor());
        ids.sort_unstable();
        prop_assert_eq!(ids, (0..children as usize).collect::<Vec<_>>());
    }

    #[test]
    fn replay_is_always_rejected(children in 2i64..30, count in 1i64..30) {
        let mut game = CountingGame::new(children, count).unwrap();
        prop_assert!(game.play().is_ok());
        prop_assert!(game.play().is_err());
    }

    #[test]
    fn reads_never_change_size(values in prop::collection::vec(any::<i32>(), 1..20), k in 1i64..100) {
        let mut circle = CircularSequence::new(values.clone());
        let read = circle.circulate(k, |_, _| {}).unwrap();

        let expected = values[((k - 1) as usize) % values.len()];
        prop_assert_eq!(read, Some(expected));
        prop_assert_eq!(circle.len(), values.len());
    }

    #[test]
    fn invariants_hold_under_mixed_operations(
        steps in prop::collection::vec((1i64..50, any::<bool>()), 0..40),
    ) {
        let mut circle = CircularSequence::new(0..25);
        for (k, remove) in steps {
            circle
                .circulate(k, |visit, _| if remove { visit.remove() })
                .unwrap();
            prop_assert!(CircleInvariants::check_all(&circle).is_ok());
        }
    }
}
