//! Integration test: weighted draws through the public draw engine.
//!
//! Checks observed rarity shares against each profile's table, the effect of
//! the floor removal and divine unlock modifiers, and the reel invariants.

use giftspin::core::constants::{REEL_LENGTH, HIGH_TIER_REEL_LENGTH};
use giftspin::draw::{draw, roll_rarity, DrawKind, DrawRequest};
use giftspin::items::{get_items, non_divine_items, Rarity};
use giftspin::probability::{adjusted_weights, base_weights, WeightModifiers};
use giftspin::PlayerProfile;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::collections::HashSet;

const SAMPLES: usize = 100_000;

fn observed_shares(weights_for: WeightModifiers, profile: PlayerProfile, seed: u64) -> [f64; 7] {
    let weights = adjusted_weights(profile, weights_for);
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut counts = [0usize; 7];
    for _ in 0..SAMPLES {
        counts[roll_rarity(&weights, &mut rng) as usize] += 1;
    }
    counts.map(|c| c as f64 / SAMPLES as f64 * 100.0)
}

// =========================================================================
// Rarity odds
// =========================================================================

#[test]
fn test_every_profile_matches_its_table_without_divine() {
    for profile in PlayerProfile::ALL {
        let weights = adjusted_weights(profile, WeightModifiers::default());
        let total = weights.total();
        let shares = observed_shares(WeightModifiers::default(), profile, 11);

        assert_eq!(shares[Rarity::Divine as usize], 0.0, "{profile:?} rolled divine");
        for (rarity, weight) in weights.iter() {
            let expected = weight / total * 100.0;
            let share = shares[rarity as usize];
            assert!(
                (share - expected).abs() < 0.6,
                "{profile:?} {rarity:?}: observed {share:.2}%, expected {expected:.2}%"
            );
        }
    }
}

#[test]
fn test_floor_removal_makes_common_ten_times_rarer() {
    let before = observed_shares(WeightModifiers::default(), PlayerProfile::Hohoyks, 3);
    let after = observed_shares(
        WeightModifiers {
            rarity_floor_removed: true,
            divine_unlocked: false,
        },
        PlayerProfile::Hohoyks,
        3,
    );

    let common_before = before[Rarity::Common as usize];
    let common_after = after[Rarity::Common as usize];
    assert!(
        (common_after - common_before / 10.0).abs() < 0.5,
        "common went from {common_before:.2}% to {common_after:.2}%"
    );
    assert!(after[Rarity::Mythic as usize] > before[Rarity::Mythic as usize]);
}

#[test]
fn test_divine_unlock_restores_divine_weight() {
    let shares = observed_shares(
        WeightModifiers {
            rarity_floor_removed: false,
            divine_unlocked: true,
        },
        PlayerProfile::Moroz,
        5,
    );
    let expected = base_weights(PlayerProfile::Moroz)
        .get(Rarity::Divine)
        .unwrap_or(0.0);
    assert!((shares[Rarity::Divine as usize] - expected).abs() < 0.3);
}

// =========================================================================
// Full draws
// =========================================================================

#[test]
fn test_incomplete_collection_never_draws_divine() {
    let collected = HashSet::new();
    let mut outcome_rng = ChaCha8Rng::seed_from_u64(8);
    let mut cosmetic_rng = ChaCha8Rng::seed_from_u64(9);

    for profile in PlayerProfile::ALL {
        let request = DrawRequest {
            profile,
            collected: &collected,
            alternate_mode: false,
            rarity_floor_removed: false,
            kind: DrawKind::Weighted,
        };
        for _ in 0..2_000 {
            let outcome = draw(&request, &mut outcome_rng, &mut cosmetic_rng).unwrap();
            assert_ne!(outcome.rarity(), Rarity::Divine);
        }
    }
}

#[test]
fn test_complete_collection_can_draw_divine() {
    let profile = PlayerProfile::Snegurka;
    let collected: HashSet<&'static str> =
        non_divine_items(profile, false).iter().map(|i| i.id).collect();
    let request = DrawRequest {
        profile,
        collected: &collected,
        alternate_mode: false,
        rarity_floor_removed: false,
        kind: DrawKind::Weighted,
    };
    let mut outcome_rng = ChaCha8Rng::seed_from_u64(21);
    let mut cosmetic_rng = ChaCha8Rng::seed_from_u64(22);

    let divine_seen = (0..5_000)
        .filter_map(|_| draw(&request, &mut outcome_rng, &mut cosmetic_rng))
        .any(|o| o.rarity() == Rarity::Divine);
    assert!(divine_seen, "1% divine never showed up in 5000 draws");
}

#[test]
fn test_reel_holds_winner_once_inside_window() {
    let collected = HashSet::new();
    let mut outcome_rng = ChaCha8Rng::seed_from_u64(1);
    let mut cosmetic_rng = ChaCha8Rng::seed_from_u64(2);
    let request = DrawRequest {
        profile: PlayerProfile::Klenko,
        collected: &collected,
        alternate_mode: false,
        rarity_floor_removed: false,
        kind: DrawKind::Weighted,
    };
    let catalog: HashSet<&str> = get_items(PlayerProfile::Klenko, false)
        .iter()
        .map(|i| i.id)
        .collect();

    for _ in 0..500 {
        let outcome = draw(&request, &mut outcome_rng, &mut cosmetic_rng).unwrap();
        let expected_len = if outcome.rarity().is_high_tier() {
            HIGH_TIER_REEL_LENGTH
        } else {
            REEL_LENGTH
        };
        assert_eq!(outcome.reel.len(), expected_len);
        assert_eq!(outcome.reel[outcome.winning_index].id, outcome.item.id);
        assert_eq!(
            outcome.reel.iter().filter(|i| i.id == outcome.item.id).count(),
            1
        );
        assert!(outcome.reel.iter().all(|i| catalog.contains(i.id)));
    }
}

#[test]
fn test_cosmetic_stream_does_not_change_winners() {
    let collected = HashSet::new();
    let request = DrawRequest {
        profile: PlayerProfile::Hohoyks,
        collected: &collected,
        alternate_mode: false,
        rarity_floor_removed: false,
        kind: DrawKind::Weighted,
    };

    let winners = |cosmetic_seed: u64| -> Vec<&'static str> {
        let mut outcome_rng = ChaCha8Rng::seed_from_u64(77);
        let mut cosmetic_rng = ChaCha8Rng::seed_from_u64(cosmetic_seed);
        (0..200)
            .filter_map(|_| draw(&request, &mut outcome_rng, &mut cosmetic_rng))
            .map(|o| o.item.id)
            .collect()
    };
    assert_eq!(winners(1), winners(999));
}
