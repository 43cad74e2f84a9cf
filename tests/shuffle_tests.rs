//! Dealing and scoring properties.
//!
//! Shuffles must be permutations, roughly uniform, and reproducible from
//! the seed. Score is fully determined by match and mismatch counts.

use proptest::prelude::*;

use memory_match::board::Board;
use memory_match::cards::{Category, ImageCatalog, ImageId};
use memory_match::core::{EntityId, GameConfig, GameRng, PairId, PhaseTiming, RoundId};
use memory_match::session::{ClickOutcome, GameSession, GameStatus};

fn images(count: usize) -> Vec<ImageId> {
    (0..count).map(|i| ImageId::new(format!("img{}.jpg", i))).collect()
}

fn deal(pairs: usize, seed: u64) -> Board {
    let mut rng = GameRng::new(seed);
    Board::create_round(&images(pairs), PhaseTiming::default(), RoundId(1), &mut rng).unwrap()
}

fn entity_order(board: &Board) -> Vec<EntityId> {
    board.cards().map(|c| c.entity()).collect()
}

// =============================================================================
// Permutation and determinism
// =============================================================================

proptest! {
    #[test]
    fn prop_deal_is_permutation(pairs in 2usize..20, seed in any::<u64>()) {
        let board = deal(pairs, seed);

        let mut order = entity_order(&board);
        order.sort();
        let expected: Vec<EntityId> = (0..(pairs as u32 * 2)).map(EntityId).collect();
        prop_assert_eq!(order, expected);

        for raw in 0..pairs as u32 {
            let pair = PairId::new(raw);
            let members = board.cards().filter(|c| c.pair() == pair).count();
            prop_assert_eq!(members, 2);
        }
    }

    #[test]
    fn prop_deal_is_deterministic(pairs in 2usize..12, seed in any::<u64>()) {
        prop_assert_eq!(entity_order(&deal(pairs, seed)), entity_order(&deal(pairs, seed)));
    }

    #[test]
    fn prop_score_is_award_minus_penalty(plays in proptest::collection::vec(any::<bool>(), 0..10)) {
        let mut session = GameSession::new(
            GameConfig::default(),
            ImageCatalog::placeholder(6),
            Category::Animals,
            11,
        )
        .unwrap();
        for _ in 0..5 {
            session.tick();
        }

        let mut next_pair = 0u32;
        let mut matches = 0i64;
        let mut mismatches = 0i64;

        for matched in plays {
            if session.status().is_finished() {
                break;
            }
            let outcome = if matched && next_pair < 6 {
                let (a, b) = EntityId::pair_members(PairId::new(next_pair));
                next_pair += 1;
                session.on_card_clicked(a);
                session.on_card_clicked(b)
            } else if next_pair <= 4 {
                // Two cards from different unmatched pairs.
                let (a, _) = EntityId::pair_members(PairId::new(next_pair));
                let (_, b) = EntityId::pair_members(PairId::new(next_pair + 1));
                session.on_card_clicked(a);
                session.on_card_clicked(b)
            } else {
                continue;
            };
            match outcome {
                ClickOutcome::Matched => matches += 1,
                ClickOutcome::Mismatched => mismatches += 1,
                other => prop_assert!(false, "unexpected outcome {:?}", other),
            }
            for _ in 0..3 {
                session.tick();
            }
        }

        prop_assert_eq!(session.score(), 75 * matches - 15 * mismatches);
        prop_assert_eq!(session.attempts_remaining() as i64, 4 - mismatches);
        prop_assert_eq!(session.status() == GameStatus::Lost, mismatches > 4);
    }
}

// =============================================================================
// Uniformity
// =============================================================================

/// Position of one card over many deals should be close to uniform.
#[test]
fn test_shuffle_position_is_uniform() {
    const ROUNDS: usize = 1200;
    const SLOTS: usize = 12;

    let mut root = GameRng::new(2024);
    let mut counts = [0usize; SLOTS];
    for _ in 0..ROUNDS {
        let mut rng = root.fork();
        let board =
            Board::create_round(&images(6), PhaseTiming::default(), RoundId(1), &mut rng).unwrap();
        let index = board.index_of(EntityId(0)).unwrap();
        counts[index] += 1;
    }

    let expected = ROUNDS as f64 / SLOTS as f64;
    let chi_square: f64 = counts
        .iter()
        .map(|&observed| {
            let diff = observed as f64 - expected;
            diff * diff / expected
        })
        .sum();

    // 11 degrees of freedom; 31.3 is the 0.999 quantile.
    assert!(chi_square < 40.0, "chi-square {} for counts {:?}", chi_square, counts);
}

#[test]
fn test_restarts_deal_different_orders() {
    let mut session = GameSession::new(
        GameConfig::default(),
        ImageCatalog::placeholder(6),
        Category::Foods,
        99,
    )
    .unwrap();

    let mut orders = Vec::new();
    for _ in 0..5 {
        orders.push(entity_order(session.board()));
        session.restart().unwrap();
    }
    orders.sort();
    orders.dedup();
    assert_eq!(orders.len(), 5);
}
