//! Per-profile rarity weights and the adjustments modifiers apply to them.

use crate::core::constants::FLOOR_REMOVAL_RETAIN_FACTOR;
use crate::items::Rarity;
use crate::profiles::PlayerProfile;

/// Tiers shrunk by the rarity-floor removal.
pub const FLOOR_TIERS: [Rarity; 2] = [Rarity::Common, Rarity::Uncommon];

/// Percentage weight per rarity, kept in ascending rarity order.
///
/// A tier missing from the table cannot be selected at all, which is how the
/// divine tier stays out of reach before the collection is complete.
#[derive(Debug, Clone, PartialEq)]
pub struct RarityWeights {
    entries: Vec<(Rarity, f64)>,
}

impl RarityWeights {
    pub fn from_entries(entries: &[(Rarity, f64)]) -> Self {
        let mut entries = entries.to_vec();
        entries.sort_by_key(|(rarity, _)| *rarity);
        entries.dedup_by_key(|(rarity, _)| *rarity);
        Self { entries }
    }

    pub fn get(&self, rarity: Rarity) -> Option<f64> {
        self.entries
            .iter()
            .find(|(r, _)| *r == rarity)
            .map(|(_, w)| *w)
    }

    pub fn contains(&self, rarity: Rarity) -> bool {
        self.get(rarity).is_some()
    }

    pub fn total(&self) -> f64 {
        self.entries.iter().map(|(_, w)| w).sum()
    }

    /// Entries lowest tier first.
    pub fn iter(&self) -> impl Iterator<Item = (Rarity, f64)> + '_ {
        self.entries.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop a tier from the selection space entirely.
    pub fn without(mut self, rarity: Rarity) -> Self {
        self.entries.retain(|(r, _)| *r != rarity);
        self
    }
}

/// Modifiers that reshape a profile's base table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WeightModifiers {
    pub rarity_floor_removed: bool,
    /// Collection complete, so the divine tier joins the table.
    pub divine_unlocked: bool,
}

/// The profile's full table, divine included.
pub fn base_weights(profile: PlayerProfile) -> RarityWeights {
    RarityWeights::from_entries(profile.rules().base_weights)
}

/// The table a draw actually rolls against.
pub fn adjusted_weights(profile: PlayerProfile, modifiers: WeightModifiers) -> RarityWeights {
    let mut weights = base_weights(profile);
    if !modifiers.divine_unlocked {
        weights = weights.without(Rarity::Divine);
    }
    if modifiers.rarity_floor_removed {
        weights = remove_rarity_floor(&weights, &FLOOR_TIERS, FLOOR_REMOVAL_RETAIN_FACTOR);
    }
    weights
}

/// Keep `retain` of each floor tier's weight and hand the removed mass to
/// every other tier present, proportionally to its own weight. Total mass is
/// unchanged. A table with no mass above the floor is returned as-is.
pub fn remove_rarity_floor(weights: &RarityWeights, floor: &[Rarity], retain: f64) -> RarityWeights {
    let removed_mass: f64 = weights
        .iter()
        .filter(|(r, _)| floor.contains(r))
        .map(|(_, w)| w * (1.0 - retain))
        .sum();
    let total_higher_base: f64 = weights
        .iter()
        .filter(|(r, _)| !floor.contains(r))
        .map(|(_, w)| w)
        .sum();

    if total_higher_base <= 0.0 {
        return weights.clone();
    }

    let entries: Vec<(Rarity, f64)> = weights
        .iter()
        .map(|(rarity, weight)| {
            if floor.contains(&rarity) {
                (rarity, weight * retain)
            } else {
                (rarity, weight + removed_mass * (weight / total_higher_base))
            }
        })
        .collect();
    RarityWeights { entries }
}
