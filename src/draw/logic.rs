//! Winner selection: weighted rarity roll, then a uniform pick within the tier.

use super::reel::build_reel;
use crate::items::{get_items_of_rarity, is_collection_complete, Item, Rarity};
use crate::probability::{adjusted_weights, RarityWeights, WeightModifiers};
use crate::profiles::PlayerProfile;
use rand::Rng;
use std::collections::HashSet;

/// How the winner of the next draw is decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawKind {
    Weighted,
    /// Scripted draw: the rarity is fixed, the item is still rolled.
    GuaranteedRarity(Rarity),
    /// Bonus draw: the winner is fixed.
    GuaranteedItem(&'static Item),
}

/// Everything the engine needs to know about the player for one draw.
#[derive(Debug, Clone, Copy)]
pub struct DrawRequest<'a> {
    pub profile: PlayerProfile,
    pub collected: &'a HashSet<&'static str>,
    pub alternate_mode: bool,
    pub rarity_floor_removed: bool,
    pub kind: DrawKind,
}

impl DrawRequest<'_> {
    pub fn modifiers(&self) -> WeightModifiers {
        WeightModifiers {
            rarity_floor_removed: self.rarity_floor_removed,
            divine_unlocked: is_collection_complete(
                self.collected,
                self.profile,
                self.alternate_mode,
            ),
        }
    }
}

/// A prepared draw: the winner plus what the presentation layer shows.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawOutcome {
    pub item: &'static Item,
    pub reel: Vec<&'static Item>,
    pub winning_index: usize,
    /// Suggested spin animation length.
    pub duration_ms: u64,
    pub kind: DrawKind,
}

impl DrawOutcome {
    pub fn rarity(&self) -> Rarity {
        self.item.rarity
    }
}

/// Walk tiers lowest first and return the one whose cumulative weight first
/// exceeds a uniform roll in `[0, total)`.
///
/// If rounding leaves the roll at or past the final cumulative sum (or the
/// table carries no mass), the lowest tier in the table wins.
pub fn roll_rarity(weights: &RarityWeights, rng: &mut impl Rng) -> Rarity {
    let total = weights.total();
    let roll = rng.gen::<f64>() * total;

    let mut cumulative = 0.0;
    for (rarity, weight) in weights.iter() {
        cumulative += weight;
        if roll < cumulative {
            return rarity;
        }
    }

    let fallback = weights
        .iter()
        .next()
        .map(|(rarity, _)| rarity)
        .unwrap_or(Rarity::Common);
    log::warn!(
        "rarity roll {roll} fell outside cumulative weight {cumulative}, using {}",
        fallback.as_str()
    );
    fallback
}

/// Uniform pick over index.
pub fn pick_item(pool: &[&'static Item], rng: &mut impl Rng) -> Option<&'static Item> {
    if pool.is_empty() {
        return None;
    }
    Some(pool[rng.gen_range(0..pool.len())])
}

/// Choose the winning item. Only touches the gameplay RNG.
pub fn select_winner(request: &DrawRequest<'_>, rng: &mut impl Rng) -> Option<&'static Item> {
    let profile = request.profile;
    let alternate = request.alternate_mode;

    let rarity = match request.kind {
        DrawKind::GuaranteedItem(item) => return Some(item),
        DrawKind::GuaranteedRarity(rarity)
            if !get_items_of_rarity(rarity, profile, alternate).is_empty() =>
        {
            rarity
        }
        DrawKind::GuaranteedRarity(rarity) => {
            log::warn!(
                "{} has no {} items for a guaranteed draw, rolling instead",
                profile.id(),
                rarity.as_str()
            );
            roll_rarity(&adjusted_weights(profile, request.modifiers()), rng)
        }
        DrawKind::Weighted => roll_rarity(&adjusted_weights(profile, request.modifiers()), rng),
    };

    pick_item(&get_items_of_rarity(rarity, profile, alternate), rng)
}

/// Select a winner with `outcome_rng` and dress it with a reel built from
/// `cosmetic_rng`. `None` only when the catalog cannot serve the rolled tier.
pub fn draw(
    request: &DrawRequest<'_>,
    outcome_rng: &mut impl Rng,
    cosmetic_rng: &mut impl Rng,
) -> Option<DrawOutcome> {
    let item = select_winner(request, outcome_rng)?;
    let reel = build_reel(item, request.profile, request.alternate_mode, cosmetic_rng);

    Some(DrawOutcome {
        item,
        reel: reel.items,
        winning_index: reel.winning_index,
        duration_ms: item.rarity.animation_duration_ms(),
        kind: request.kind,
    })
}
