//! Progression state machine: eligibility, milestone evaluation and the
//! transitions a completed draw applies.

use super::types::{DrawResult, Milestone, MilestoneEvent, ProgressionState};
use crate::draw::DrawKind;
use crate::items::{alternate_counterpart, Item};
use crate::profiles::{MilestoneRules, PlayerProfile, SpinPolicy};
use rand::Rng;
use std::collections::HashSet;

/// Whether another draw may be requested.
pub fn can_draw(profile: PlayerProfile, state: &ProgressionState) -> bool {
    if state.pending_bonus_draw {
        return true;
    }
    match profile.rules().policy {
        SpinPolicy::Unlimited | SpinPolicy::Overdraft { .. } => true,
        SpinPolicy::Capped { cap } => state.infinite_spins_unlocked || state.spin_index < cap,
    }
}

/// Remaining draws for display. `None` means unlimited. Overdraft profiles
/// keep counting below zero past the cap.
pub fn spins_remaining(profile: PlayerProfile, state: &ProgressionState) -> Option<i64> {
    if state.infinite_spins_unlocked {
        return None;
    }
    match profile.rules().policy {
        SpinPolicy::Unlimited => None,
        SpinPolicy::Overdraft { cap } => Some(i64::from(cap) - i64::from(state.spin_index)),
        SpinPolicy::Capped { cap } => Some((i64::from(cap) - i64::from(state.spin_index)).max(0)),
    }
}

/// How the next draw's winner will be decided.
pub fn next_draw_kind(profile: PlayerProfile, state: &ProgressionState) -> DrawKind {
    let milestones = &profile.rules().milestones;

    if state.pending_bonus_draw {
        if let Some(item) = milestones.notice.as_ref().and_then(|n| n.bonus_item) {
            return DrawKind::GuaranteedItem(item);
        }
    }
    match milestones.guaranteed_rarity {
        Some((draw_number, rarity)) if state.spin_index + 1 == draw_number => {
            DrawKind::GuaranteedRarity(rarity)
        }
        _ => DrawKind::Weighted,
    }
}

pub fn collected_ids(state: &ProgressionState) -> HashSet<&'static str> {
    state.inventory.iter().map(|result| result.item.id).collect()
}

/// Recomputed on every call: the catalog it checks against changes when
/// alternate mode flips.
pub fn is_collection_complete(profile: PlayerProfile, state: &ProgressionState) -> bool {
    crate::items::is_collection_complete(
        &collected_ids(state),
        profile,
        state.alternate_mode_active,
    )
}

/// Decide which milestone, if any, the draw that just brought the state to
/// `state.spin_index` triggers. First match wins. `rng` only feeds the flavor
/// roll.
pub fn evaluate_milestone(
    profile: PlayerProfile,
    state: &ProgressionState,
    item: &Item,
    rng: &mut impl Rng,
) -> Option<Milestone> {
    let rules: &MilestoneRules = &profile.rules().milestones;
    let spin = state.spin_index;

    if let Some(infinity) = &rules.infinity {
        if item.id == infinity.item.id && !state.infinite_spins_unlocked {
            return Some(Milestone {
                event: MilestoneEvent::InfinityUnlocked,
                message: infinity.message,
            });
        }
    }

    if let Some(notice) = &rules.notice {
        if spin == notice.at_spin {
            return Some(Milestone {
                event: MilestoneEvent::SpinMilestone {
                    spin,
                    bonus_armed: notice.bonus_item.is_some(),
                },
                message: notice.message,
            });
        }
    }

    if let Some(floor) = &rules.floor_removal {
        if spin == floor.at_spin && !state.rarity_floor_removed {
            return Some(Milestone {
                event: MilestoneEvent::RarityFloorRemoved,
                message: floor.message,
            });
        }
    }

    if let Some(flavor) = &rules.flavor {
        if spin > flavor.after_spin && !flavor.messages.is_empty() && rng.gen_bool(flavor.chance) {
            let message = flavor.messages[rng.gen_range(0..flavor.messages.len())];
            return Some(Milestone {
                event: MilestoneEvent::LuckyFlavor,
                message,
            });
        }
    }

    if let (Some(escalation), Some(cap)) = (&rules.escalation, profile.rules().policy.cap()) {
        if spin > cap && !state.alternate_mode_active {
            let offset = spin - cap;
            if offset == escalation.alternate_at_offset {
                return Some(Milestone {
                    event: MilestoneEvent::AlternateModeActivated,
                    message: escalation.alternate_message,
                });
            }
            if let Some(step) = escalation.warnings.iter().find(|w| w.offset == offset) {
                return Some(Milestone {
                    event: MilestoneEvent::OverdraftWarning { offset },
                    message: step.message,
                });
            }
        }
    }

    None
}

/// Apply the state change a milestone carries.
pub fn apply_milestone(profile: PlayerProfile, state: &mut ProgressionState, event: MilestoneEvent) {
    match event {
        MilestoneEvent::InfinityUnlocked => {
            log::info!("{}: infinite spins unlocked", profile.id());
            state.infinite_spins_unlocked = true;
        }
        MilestoneEvent::SpinMilestone {
            bonus_armed: true, ..
        } => {
            log::info!("{}: bonus draw armed", profile.id());
            state.pending_bonus_draw = true;
        }
        MilestoneEvent::RarityFloorRemoved => {
            log::info!("{}: rarity floor removed", profile.id());
            state.rarity_floor_removed = true;
        }
        MilestoneEvent::AlternateModeActivated => {
            log::info!("{}: alternate mode activated", profile.id());
            transform_to_alternate(profile, state);
        }
        MilestoneEvent::SpinMilestone { .. }
        | MilestoneEvent::LuckyFlavor
        | MilestoneEvent::OverdraftWarning { .. } => {}
    }
}

/// Switch to the alternate catalog and rewrite every collected item to its
/// counterpart (same rarity, same index within the partition). Items without
/// a counterpart, including ones already transformed, are kept as they are,
/// so a second call changes nothing.
pub fn transform_to_alternate(profile: PlayerProfile, state: &mut ProgressionState) {
    state.alternate_mode_active = true;
    for result in &mut state.inventory {
        if let Some(counterpart) = alternate_counterpart(result.item, profile) {
            *result = DrawResult {
                item: counterpart,
                timestamp: result.timestamp,
            };
        }
    }
}

/// Record a completed draw: consume a pending bonus, append to the
/// inventory, advance the counter, then evaluate and apply at most one
/// milestone.
pub fn record_draw(
    profile: PlayerProfile,
    state: &mut ProgressionState,
    result: DrawResult,
    rng: &mut impl Rng,
) -> Option<Milestone> {
    state.pending_bonus_draw = false;
    state.inventory.push(result);
    state.spin_index += 1;

    let milestone = evaluate_milestone(profile, state, result.item, rng);
    if let Some(milestone) = &milestone {
        apply_milestone(profile, state, milestone.event);
    }
    milestone
}
