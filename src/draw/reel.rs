//! Decorative reel shown while a draw spins. Cosmetic only: the winner is
//! chosen before the reel is built and the reel carries no odds.

use crate::core::constants::{
    FILLER_COMMON_THRESHOLD, FILLER_EPIC_THRESHOLD, FILLER_RARE_THRESHOLD,
    FILLER_UNCOMMON_THRESHOLD, HIGH_TIER_REEL_LENGTH, HIGH_TIER_WIN_WINDOW_SPAN,
    HIGH_TIER_WIN_WINDOW_START, REEL_LENGTH, REEL_WIN_WINDOW_SPAN, REEL_WIN_WINDOW_START,
};
use crate::items::{get_items_of_rarity, Item, Rarity};
use crate::profiles::PlayerProfile;
use rand::Rng;

/// Tiers filler is drawn from.
const FILLER_TIERS: [Rarity; 5] = [
    Rarity::Common,
    Rarity::Uncommon,
    Rarity::Rare,
    Rarity::Epic,
    Rarity::Legendary,
];

#[derive(Debug, Clone, PartialEq)]
pub struct Reel {
    pub items: Vec<&'static Item>,
    pub winning_index: usize,
}

/// `(length, first winning slot, window size)` for a winner of `rarity`.
pub fn reel_shape(rarity: Rarity) -> (usize, usize, usize) {
    if rarity.is_high_tier() {
        (
            HIGH_TIER_REEL_LENGTH,
            HIGH_TIER_WIN_WINDOW_START,
            HIGH_TIER_WIN_WINDOW_SPAN,
        )
    } else {
        (REEL_LENGTH, REEL_WIN_WINDOW_START, REEL_WIN_WINDOW_SPAN)
    }
}

/// Filler rarity, biased heavily toward the bottom tiers.
pub fn roll_filler_rarity(rng: &mut impl Rng) -> Rarity {
    let roll = rng.gen::<f64>();
    if roll < FILLER_COMMON_THRESHOLD {
        Rarity::Common
    } else if roll < FILLER_UNCOMMON_THRESHOLD {
        Rarity::Uncommon
    } else if roll < FILLER_RARE_THRESHOLD {
        Rarity::Rare
    } else if roll < FILLER_EPIC_THRESHOLD {
        Rarity::Epic
    } else {
        Rarity::Legendary
    }
}

/// Build a reel with `winner` at exactly one slot inside the tier's window.
/// Filler comes from the player's current catalog and never repeats the winner.
pub fn build_reel(
    winner: &'static Item,
    profile: PlayerProfile,
    alternate: bool,
    rng: &mut impl Rng,
) -> Reel {
    let pools: Vec<(Rarity, Vec<&'static Item>)> = FILLER_TIERS
        .iter()
        .map(|&rarity| {
            let pool = get_items_of_rarity(rarity, profile, alternate)
                .into_iter()
                .filter(|item| item.id != winner.id)
                .collect();
            (rarity, pool)
        })
        .collect();

    // Lowest non-empty tier backs up any rolled tier with nothing to offer.
    let Some(fallback) = pools
        .iter()
        .map(|(_, pool)| pool.as_slice())
        .find(|pool| !pool.is_empty())
    else {
        log::warn!("no filler available for {}, reel holds only the winner", profile.id());
        return Reel {
            items: vec![winner],
            winning_index: 0,
        };
    };

    let (length, window_start, window_span) = reel_shape(winner.rarity);
    let winning_index = window_start + rng.gen_range(0..window_span);

    let items = (0..length)
        .map(|slot| {
            if slot == winning_index {
                winner
            } else {
                filler_item(&pools, fallback, rng)
            }
        })
        .collect();

    Reel {
        items,
        winning_index,
    }
}

fn filler_item(
    pools: &[(Rarity, Vec<&'static Item>)],
    fallback: &[&'static Item],
    rng: &mut impl Rng,
) -> &'static Item {
    let wanted = roll_filler_rarity(rng);
    let pool = pools
        .iter()
        .find(|(rarity, pool)| *rarity == wanted && !pool.is_empty())
        .map(|(_, pool)| pool.as_slice())
        .unwrap_or(fallback);
    pool[rng.gen_range(0..pool.len())]
}
