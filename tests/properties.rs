//! Property-based tests for dice, rounds and scoring.

use proptest::prelude::*;

use yahtzee::{Category, Game, GameOptions, GameSnapshot, Objective};

#[derive(Debug, Clone, Copy)]
enum Op {
    Throw,
    Lock(usize),
    Round,
    Commit(usize),
}

/// Strategy: generate a valid hand (each die 1-6).
fn faces_strategy() -> impl Strategy<Value = [u8; 5]> {
    prop::array::uniform5(1..=6u8)
}

/// Strategy: one host call, including out-of-range lock indices.
fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => Just(Op::Throw),
        3 => (0usize..7).prop_map(Op::Lock),
        1 => Just(Op::Round),
        2 => (0usize..15).prop_map(Op::Commit),
    ]
}

fn apply(game: &mut Game, op: Op) {
    match op {
        Op::Throw => {
            game.throw_dice();
        }
        Op::Lock(index) => {
            let _ = game.lock_dice(index);
        }
        Op::Round => {
            game.round();
        }
        Op::Commit(index) => {
            let _ = game.commit(Category::ALL[index]);
        }
    }
}

fn committed_sum(game: &Game) -> u16 {
    game.objectives().iter().filter_map(Objective::points).sum()
}

proptest! {
    // Invariants hold after every host call.
    #[test]
    fn invariants_hold_during_play(
        seed in any::<u64>(),
        ops in prop::collection::vec(op_strategy(), 0..80),
    ) {
        let mut game = Game::new(GameOptions::default(), seed);
        for op in ops {
            let before = game.faces();
            let locked: Vec<bool> = game.dice().iter().map(|die| die.is_locked()).collect();
            let rounds = game.rounds();

            apply(&mut game, op);

            prop_assert!(game.faces().iter().all(|face| (1..=6).contains(face)));
            prop_assert!(game.dice_rolled() <= game.max_rolls());
            prop_assert_eq!(game.score(), committed_sum(&game));

            if let Op::Throw = op {
                for (index, was_locked) in locked.into_iter().enumerate() {
                    if was_locked {
                        prop_assert_eq!(game.faces()[index], before[index]);
                    }
                }
            }
            if let Op::Round = op {
                if rounds > 0 {
                    prop_assert_eq!(game.rounds(), rounds - 1);
                    prop_assert_eq!(game.dice_rolled(), 0);
                    prop_assert_eq!(game.max_rolls(), 3);
                    prop_assert!(game.dice().iter().all(|die| !die.is_locked()));
                } else {
                    prop_assert_eq!(game.rounds(), 0);
                    prop_assert_eq!(game.faces(), before);
                }
            }
        }
    }

    // Snapshots survive a JSON round trip.
    #[test]
    fn snapshot_json_round_trip(
        seed in any::<u64>(),
        ops in prop::collection::vec(op_strategy(), 0..40),
    ) {
        let mut game = Game::new(GameOptions::default(), seed);
        for op in ops {
            apply(&mut game, op);
        }

        let json = serde_json::to_string(&game.snapshot()).unwrap();
        let parsed: GameSnapshot = serde_json::from_str(&json).unwrap();
        let restored = Game::from_snapshot(parsed, GameOptions::default(), seed).unwrap();
        prop_assert_eq!(restored.snapshot(), game.snapshot());
    }

    // The upper section partitions the sum of the dice.
    #[test]
    fn upper_section_sums_to_dice_total(faces in faces_strategy()) {
        let upper: u16 = Category::ALL[..6].iter().map(|category| category.score(&faces)).sum();
        let total: u16 = faces.iter().map(|&face| u16::from(face)).sum();
        prop_assert_eq!(upper, total);
    }

    // Scores do not depend on dice order.
    #[test]
    fn scores_ignore_order(faces in faces_strategy()) {
        let mut reversed = faces;
        reversed.reverse();
        let mut sorted = faces;
        sorted.sort_unstable();
        for category in Category::ALL {
            prop_assert_eq!(category.score(&faces), category.score(&reversed));
            prop_assert_eq!(category.score(&faces), category.score(&sorted));
        }
    }

    // Stronger hands imply the weaker categories they contain.
    #[test]
    fn category_implications(faces in faces_strategy()) {
        let score = |category: Category| category.score(&faces);

        if score(Category::Yahtzee) > 0 {
            prop_assert!(score(Category::FourOfAKind) > 0);
            prop_assert_eq!(score(Category::FullHouse), 0);
        }
        if score(Category::FourOfAKind) > 0 {
            prop_assert_eq!(score(Category::ThreeOfAKind), score(Category::FourOfAKind));
        }
        if score(Category::LargeStraight) > 0 {
            prop_assert_eq!(score(Category::SmallStraight), 30);
        }
        if score(Category::FullHouse) > 0 {
            prop_assert!(score(Category::ThreeOfAKind) > 0);
        }
        prop_assert_eq!(score(Category::Pair), 0);
        prop_assert_eq!(score(Category::TwoPairs), 0);
        prop_assert_eq!(score(Category::Chance), 0);
    }
}
