//! Achievement conditions, evaluated as a pure view over progression state.

use super::types::AchievementId;
use crate::items::data::COAL_ITEM_IDS;
use crate::items::Rarity;
use crate::profiles::PlayerProfile;
use crate::progression::{is_collection_complete, ProgressionState};
use std::collections::{BTreeSet, HashSet};

const TEN_SPINS: u32 = 10;
const RAINBOW_RARITIES: usize = 5;
const COAL_MAGNATE_KINDS: usize = 5;
const UNLUCKY_STREAK: usize = 3;
const UNEXPECTED_LUCK_WITHIN: usize = 10;
const LUCKY_WITHIN: usize = 5;

/// Every achievement `state` currently satisfies for `profile`.
pub fn evaluate(profile: PlayerProfile, state: &ProgressionState) -> BTreeSet<AchievementId> {
    let mut earned = BTreeSet::new();
    let inventory = state.inventory();

    if state.spin_index() >= 1 {
        earned.insert(AchievementId::FirstSpin);
    }
    if state.spin_index() >= TEN_SPINS {
        earned.insert(AchievementId::TenSpins);
    }

    let rarities: HashSet<Rarity> = inventory.iter().map(|r| r.item.rarity).collect();
    if rarities.len() >= RAINBOW_RARITIES {
        earned.insert(AchievementId::Rainbow);
    }
    if rarities.contains(&Rarity::Divine) {
        earned.insert(AchievementId::DivineDrop);
    }
    if !inventory.is_empty() && is_collection_complete(profile, state) {
        earned.insert(AchievementId::Collector);
    }

    match profile {
        PlayerProfile::Klenko => {
            let coal: HashSet<&str> = inventory
                .iter()
                .map(|r| r.item.id)
                .filter(|id| COAL_ITEM_IDS.contains(id))
                .collect();
            if coal.len() >= COAL_MAGNATE_KINDS {
                earned.insert(AchievementId::CoalMagnate);
            }

            let streak = inventory
                .windows(UNLUCKY_STREAK)
                .any(|w| w.iter().all(|r| r.item.rarity == Rarity::Common));
            if streak {
                earned.insert(AchievementId::Unlucky);
            }

            if inventory
                .iter()
                .take(UNEXPECTED_LUCK_WITHIN)
                .any(|r| r.item.rarity >= Rarity::Legendary)
            {
                earned.insert(AchievementId::UnexpectedLuck);
            }

            if state.alternate_mode_active() {
                earned.insert(AchievementId::HellTourist);
            }
        }
        PlayerProfile::Hohoyks => {
            if state.infinite_spins_unlocked() {
                earned.insert(AchievementId::Infinity);
            }
            if inventory
                .iter()
                .take(LUCKY_WITHIN)
                .any(|r| r.item.rarity >= Rarity::Epic)
            {
                earned.insert(AchievementId::Lucky);
            }
        }
        PlayerProfile::Snegurka | PlayerProfile::Moroz => {}
    }

    earned
}
