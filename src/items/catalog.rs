//! Catalog lookups, alternate pairing and content validation.

use super::data::{ALL_CATALOGS, SECRET_ITEMS};
use super::types::{CatalogSet, Item, Rarity};
use crate::core::constants::{WEIGHT_SUM_TOLERANCE, WEIGHT_TOTAL};
use crate::error::ContentError;
use crate::profiles::PlayerProfile;
use std::collections::HashSet;

/// The catalog set in effect for `profile`. Profiles without an alternate
/// catalog ignore `alternate`.
pub fn catalog_set(profile: PlayerProfile, alternate: bool) -> &'static CatalogSet {
    let rules = profile.rules();
    match (alternate, rules.alternate_catalog) {
        (true, Some(alt)) => alt,
        _ => rules.catalog,
    }
}

/// All items of a profile's current catalog, divine last.
pub fn get_items(profile: PlayerProfile, alternate: bool) -> Vec<&'static Item> {
    let set = catalog_set(profile, alternate);
    set.items.iter().chain(set.divine.iter()).collect()
}

/// Items of one rarity, in catalog order.
pub fn get_items_of_rarity(
    rarity: Rarity,
    profile: PlayerProfile,
    alternate: bool,
) -> Vec<&'static Item> {
    partition(catalog_set(profile, alternate), rarity)
}

/// Everything except the divine partition.
pub fn non_divine_items(profile: PlayerProfile, alternate: bool) -> Vec<&'static Item> {
    catalog_set(profile, alternate)
        .items
        .iter()
        .filter(|item| item.rarity != Rarity::Divine)
        .collect()
}

fn partition(set: &'static CatalogSet, rarity: Rarity) -> Vec<&'static Item> {
    let source = if rarity == Rarity::Divine {
        set.divine
    } else {
        set.items
    };
    source.iter().filter(|item| item.rarity == rarity).collect()
}

/// Find any known item (every profile, alternate and secret items included).
pub fn find_item(id: &str) -> Option<&'static Item> {
    ALL_CATALOGS
        .iter()
        .flat_map(|set| set.items.iter().chain(set.divine.iter()))
        .chain(SECRET_ITEMS.iter().copied())
        .find(|item| item.id == id)
}

/// Find an item `profile` can hold in the given mode: its current catalog
/// (divine included) plus its bonus and infinity items.
pub fn find_profile_item(
    id: &str,
    profile: PlayerProfile,
    alternate: bool,
) -> Option<&'static Item> {
    let milestones = &profile.rules().milestones;
    let extras = milestones
        .infinity
        .as_ref()
        .map(|rule| rule.item)
        .into_iter()
        .chain(milestones.notice.as_ref().and_then(|notice| notice.bonus_item));

    get_items(profile, alternate)
        .into_iter()
        .chain(extras)
        .find(|item| item.id == id)
}

/// Pair a regular-catalog item with the alternate item at the same index
/// within its rarity partition. Returns `None` for items outside the regular
/// catalog (already-alternate or secret items) and for profiles without an
/// alternate catalog.
pub fn alternate_counterpart(item: &Item, profile: PlayerProfile) -> Option<&'static Item> {
    let rules = profile.rules();
    let alt = rules.alternate_catalog?;
    let position = partition(rules.catalog, item.rarity)
        .iter()
        .position(|candidate| candidate.id == item.id)?;
    partition(alt, item.rarity).get(position).copied()
}

/// Collected vs. total counts for one rarity partition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RarityProgress {
    pub rarity: Rarity,
    pub unlocked: usize,
    pub total: usize,
}

/// Collection completion for a profile's current catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionProgress {
    pub by_rarity: Vec<RarityProgress>,
    /// Non-divine items collected.
    pub unlocked: usize,
    /// Non-divine items in the catalog.
    pub total: usize,
}

impl CollectionProgress {
    pub fn is_complete(&self) -> bool {
        self.unlocked == self.total
    }

    /// Completion percentage over non-divine items (0 - 100).
    pub fn percent(&self) -> u32 {
        if self.total == 0 {
            return 0;
        }
        (self.unlocked * 100 / self.total) as u32
    }
}

/// True once every non-divine item of the current catalog has been collected.
/// Unlocks the divine tier.
pub fn is_collection_complete(
    collected: &HashSet<&str>,
    profile: PlayerProfile,
    alternate: bool,
) -> bool {
    non_divine_items(profile, alternate)
        .iter()
        .all(|item| collected.contains(item.id))
}

pub fn collection_progress(
    collected: &HashSet<&str>,
    profile: PlayerProfile,
    alternate: bool,
) -> CollectionProgress {
    let set = catalog_set(profile, alternate);
    let by_rarity: Vec<RarityProgress> = Rarity::ALL
        .iter()
        .map(|&rarity| {
            let items = partition(set, rarity);
            RarityProgress {
                rarity,
                unlocked: items.iter().filter(|i| collected.contains(i.id)).count(),
                total: items.len(),
            }
        })
        .collect();

    let (unlocked, total) = by_rarity
        .iter()
        .filter(|p| p.rarity != Rarity::Divine)
        .fold((0, 0), |(u, t), p| (u + p.unlocked, t + p.total));

    CollectionProgress {
        by_rarity,
        unlocked,
        total,
    }
}

/// Check every profile's static content. Called once before a session starts.
pub fn validate_content() -> Result<(), ContentError> {
    let mut seen = HashSet::new();
    for set in ALL_CATALOGS {
        for item in set.items.iter().chain(set.divine.iter()) {
            if !seen.insert(item.id) {
                return Err(ContentError::DuplicateItemId(item.id));
            }
        }
    }
    for item in SECRET_ITEMS {
        if !seen.insert(item.id) {
            return Err(ContentError::DuplicateItemId(item.id));
        }
    }

    for profile in PlayerProfile::ALL {
        validate_profile(profile)?;
    }
    Ok(())
}

fn validate_profile(profile: PlayerProfile) -> Result<(), ContentError> {
    let rules = profile.rules();
    validate_table(
        profile.nickname(),
        rules.base_weights,
        rules.catalog,
        rules.alternate_catalog,
    )
}

fn validate_table(
    name: &'static str,
    weights: &[(Rarity, f64)],
    catalog: &'static CatalogSet,
    alternate: Option<&'static CatalogSet>,
) -> Result<(), ContentError> {
    let mut sum = 0.0;
    for &(rarity, weight) in weights {
        if !weight.is_finite() || weight < 0.0 {
            return Err(ContentError::InvalidWeight {
                profile: name,
                rarity,
            });
        }
        sum += weight;
        if weight > 0.0 && partition(catalog, rarity).is_empty() {
            return Err(ContentError::EmptyPartition {
                profile: name,
                rarity,
            });
        }
    }
    if (sum - WEIGHT_TOTAL).abs() > WEIGHT_SUM_TOLERANCE {
        return Err(ContentError::WeightSum { profile: name, sum });
    }

    if let Some(alt) = alternate {
        for rarity in Rarity::ALL {
            if partition(catalog, rarity).len() != partition(alt, rarity).len() {
                return Err(ContentError::AlternateShape {
                    profile: name,
                    rarity,
                });
            }
        }
    }
    Ok(())
}
