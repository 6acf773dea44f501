//! Integration test: full player sessions through `GameSession`.
//!
//! Drives each profile draw by draw and checks the spin policy, milestone
//! ordering and the state flips they cause.

use giftspin::items::{find_item, Rarity};
use giftspin::progression::{DrawResult, MessageKind};
use giftspin::{DrawPhase, GachaError, GameSession, MemoryStore, Milestone, MilestoneEvent};

fn logged_in(nickname: &str, seed: u64) -> GameSession<MemoryStore> {
    let mut session = GameSession::with_seed(MemoryStore::new(), seed).unwrap();
    assert!(session.login(nickname), "{nickname} should be a known player");
    session
}

/// Request and complete one draw. Panics if the session refuses.
fn spin(session: &mut GameSession<MemoryStore>) -> Option<Milestone> {
    assert!(session.request_draw().is_some(), "draw refused");
    session.complete_draw().unwrap()
}

fn spin_until(session: &mut GameSession<MemoryStore>, spin_index: u32) -> Vec<Milestone> {
    let mut milestones = Vec::new();
    while session.state().unwrap().spin_index() < spin_index {
        milestones.extend(spin(session));
    }
    milestones
}

fn assert_inventory_matches(session: &GameSession<MemoryStore>) {
    let state = session.state().unwrap();
    assert_eq!(state.inventory().len(), state.spin_index() as usize);
}

// =========================================================================
// Basic draw cycle
// =========================================================================

#[test]
fn test_draw_cycle_ready_inflight_ready() {
    let mut session = logged_in("Moroz", 1);
    assert!(matches!(session.phase(), DrawPhase::Ready(_)));

    let item = session.request_draw().unwrap().item;
    assert!(session.is_draw_in_flight());
    assert!(session.request_draw().is_none(), "second request while in flight");

    session.report_draw_complete(DrawResult::new(item)).unwrap();
    assert!(matches!(session.phase(), DrawPhase::Ready(_)));
    assert_eq!(session.state().unwrap().spin_index(), 1);
    assert_eq!(session.state().unwrap().inventory()[0].item.id, item.id);
}

#[test]
fn test_mismatched_completion_changes_nothing() {
    let mut session = logged_in("HOHOYKS", 2);
    let winner = session.request_draw().unwrap().item;
    let other = session
        .current_draw()
        .unwrap()
        .reel
        .iter()
        .copied()
        .find(|i| i.id != winner.id)
        .unwrap();

    let err = session.report_draw_complete(DrawResult::new(other)).unwrap_err();
    assert!(matches!(err, GachaError::ResultMismatch { .. }));
    assert!(session.is_draw_in_flight());
    assert_eq!(session.state().unwrap().spin_index(), 0);
}

// =========================================================================
// Capped profile
// =========================================================================

#[test]
fn test_capped_profile_stops_after_thirty() {
    let mut session = logged_in("snegurka", 3);
    let milestones = spin_until(&mut session, 30);

    assert!(!session.has_more_draws());
    let before = session.state().unwrap().clone();
    assert!(session.request_draw().is_none());
    assert!(matches!(
        session.complete_draw(),
        Err(GachaError::NoDrawInFlight)
    ));
    assert_eq!(session.state(), Some(&before), "draw #31 must not mutate state");
    assert_eq!(session.spins_remaining(), Some(0));
    assert!(matches!(session.phase(), DrawPhase::Idle));
    assert!(milestones.iter().any(|m| matches!(
        m.event,
        MilestoneEvent::SpinMilestone {
            spin: 30,
            bonus_armed: false
        }
    )));
    assert_inventory_matches(&session);
}

// =========================================================================
// Bonus draw and infinity
// =========================================================================

#[test]
fn test_hohoyks_bonus_unlocks_infinity_then_floor_removal() {
    let mut session = logged_in("hohoyks", 4);
    spin_until(&mut session, 29);
    assert_eq!(session.spins_remaining(), Some(1));

    let milestone = spin(&mut session).unwrap();
    assert_eq!(
        milestone.event,
        MilestoneEvent::SpinMilestone {
            spin: 30,
            bonus_armed: true
        }
    );
    assert!(session.has_pending_bonus_draw());
    assert!(session.has_more_draws(), "bonus draw beyond the cap");

    let bonus = session.request_draw().unwrap();
    assert_eq!(bonus.item.id, "hohoyks_infinity_spin");
    assert_eq!(bonus.rarity(), Rarity::Legendary);
    let milestone = session.complete_draw().unwrap().unwrap();
    assert_eq!(milestone.event, MilestoneEvent::InfinityUnlocked);
    assert_eq!(milestone.message.kind, MessageKind::Success);

    let state = session.state().unwrap();
    assert!(state.infinite_spins_unlocked());
    assert!(!state.pending_bonus_draw());
    assert_eq!(session.spins_remaining(), None);

    let milestones = spin_until(&mut session, 40);
    assert_eq!(
        milestones.last().map(|m| m.event),
        Some(MilestoneEvent::RarityFloorRemoved)
    );
    assert!(session.state().unwrap().rarity_floor_removed());
    assert!(session.has_more_draws());
    assert_inventory_matches(&session);
}

#[test]
fn test_infinity_item_is_only_drawn_once() {
    let mut session = logged_in("hohoyks", 5);
    spin_until(&mut session, 120);
    let infinity_count = session
        .state()
        .unwrap()
        .inventory()
        .iter()
        .filter(|r| r.item.id == "hohoyks_infinity_spin")
        .count();
    assert_eq!(infinity_count, 1);
}

// =========================================================================
// Overdraft and hell mode
// =========================================================================

#[test]
fn test_klenko_overdraft_escalates_into_hell_mode() {
    let mut session = logged_in("klenko", 6);
    spin_until(&mut session, 30);
    assert_eq!(session.spins_remaining(), Some(0));
    assert!(session.has_more_draws());

    let mut events = Vec::new();
    for _ in 30..40 {
        if let Some(m) = spin(&mut session) {
            events.push(m.event);
        }
    }
    assert_eq!(
        events,
        vec![
            MilestoneEvent::OverdraftWarning { offset: 1 },
            MilestoneEvent::OverdraftWarning { offset: 3 },
            MilestoneEvent::OverdraftWarning { offset: 6 },
            MilestoneEvent::OverdraftWarning { offset: 9 },
            MilestoneEvent::AlternateModeActivated,
        ]
    );
    assert_eq!(session.spins_remaining(), Some(-10));

    let state = session.state().unwrap();
    assert!(state.alternate_mode_active());
    assert!(state
        .inventory()
        .iter()
        .all(|r| r.item.id.starts_with("klenko_hell")));

    // Later draws come from the hell catalog and never repeat the transition.
    for _ in 0..20 {
        if let Some(m) = spin(&mut session) {
            assert_ne!(m.event, MilestoneEvent::AlternateModeActivated);
        }
    }
    let state = session.state().unwrap();
    assert!(state
        .inventory()
        .iter()
        .all(|r| find_item(r.item.id).is_some() && r.item.id.starts_with("klenko_hell")));
    assert_inventory_matches(&session);
}

// =========================================================================
// Scripted rarity
// =========================================================================

#[test]
fn test_moroz_two_hundredth_draw_is_mythic() {
    let mut session = logged_in("MOROZ", 7);
    spin_until(&mut session, 199);
    let outcome = session.request_draw().unwrap();
    assert_eq!(outcome.rarity(), Rarity::Mythic);
    session.complete_draw().unwrap();
    assert_inventory_matches(&session);
}

// =========================================================================
// Achievements and reset
// =========================================================================

#[test]
fn test_first_draw_queues_achievement() {
    let mut session = logged_in("moroz", 8);
    assert!(session.take_unlocked_achievement().is_none());
    spin(&mut session);
    assert!(session.take_unlocked_achievement().is_some());
}

#[test]
fn test_reset_progress_keeps_player() {
    let mut session = logged_in("klenko", 9);
    spin_until(&mut session, 12);
    session.reset_progress();

    assert!(session.is_authenticated());
    assert_eq!(session.state().unwrap().spin_index(), 0);
    assert!(session.state().unwrap().inventory().is_empty());
    assert!(matches!(session.phase(), DrawPhase::Ready(_)));
}
