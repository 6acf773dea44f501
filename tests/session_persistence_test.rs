//! Integration test: session snapshots survive a restart and broken
//! snapshots are recovered from.

use giftspin::session::SaveFile;
use giftspin::{FileStore, GameSession, MemoryStore, PlayerProfile, SnapshotStore};

fn snapshot_json(spin_index: u32, item_ids: &[&str], player_id: &str) -> String {
    let inventory: Vec<serde_json::Value> = item_ids
        .iter()
        .map(|id| serde_json::json!({ "itemId": id, "timestamp": 1_700_000_000_000i64 }))
        .collect();
    serde_json::json!({
        "schemaVersion": 1,
        "isAuthenticated": true,
        "currentPlayer": {
            "id": player_id,
            "nickname": player_id.to_uppercase(),
            "currentSpinIndex": spin_index,
            "inventory": inventory,
            "hasInfinitySpin": false,
            "alternateModeActive": false,
            "rarityFloorRemoved": false
        }
    })
    .to_string()
}

fn stored(session: GameSession<MemoryStore>) -> SaveFile {
    let store = session.into_store();
    serde_json::from_str(store.snapshot().unwrap()).unwrap()
}

// =========================================================================
// Round trip
// =========================================================================

#[test]
fn test_progress_survives_restart() {
    let mut session = GameSession::with_seed(MemoryStore::new(), 10).unwrap();
    session.login("klenko");
    for _ in 0..35 {
        session.request_draw().unwrap();
        session.complete_draw().unwrap();
    }
    let before = session.state().unwrap().clone();
    let store = session.into_store();

    let restored = GameSession::with_seed(store, 11).unwrap();
    assert!(restored.is_authenticated());
    assert_eq!(restored.profile(), Some(PlayerProfile::Klenko));
    assert_eq!(restored.state(), Some(&before));
    assert_eq!(restored.spins_remaining(), Some(-5));
    assert!(!restored.is_draw_in_flight(), "in-flight draws are not restored");
}

#[test]
fn test_pending_bonus_survives_restart() {
    let mut session = GameSession::with_seed(MemoryStore::new(), 12).unwrap();
    session.login("hohoyks");
    for _ in 0..30 {
        session.request_draw().unwrap();
        session.complete_draw().unwrap();
    }
    assert!(session.has_pending_bonus_draw());

    let mut restored = GameSession::with_seed(session.into_store(), 13).unwrap();
    assert!(restored.has_pending_bonus_draw());
    assert_eq!(
        restored.request_draw().map(|o| o.item.id),
        Some("hohoyks_infinity_spin")
    );
}

#[test]
fn test_snapshot_never_contains_reel() {
    let mut session = GameSession::with_seed(MemoryStore::new(), 14).unwrap();
    session.login("moroz");
    session.request_draw().unwrap();
    session.complete_draw().unwrap();
    session.request_draw().unwrap();

    let json = session.store().snapshot().unwrap().to_string();
    assert!(!json.contains("reel"));
    assert!(json.contains("\"currentSpinIndex\": 1"));
}

#[test]
fn test_logout_persists_logged_out() {
    let mut session = GameSession::with_seed(MemoryStore::new(), 15).unwrap();
    session.login("snegurka");
    session.logout();
    assert_eq!(stored(session), SaveFile::logged_out());
}

// =========================================================================
// Recovery
// =========================================================================

#[test]
fn test_valid_handwritten_snapshot_loads() {
    let json = snapshot_json(2, &["hohoyks_snowflake", "hohoyks_mittens"], "hohoyks");
    let session = GameSession::with_seed(MemoryStore::with_snapshot(json), 1).unwrap();
    assert_eq!(session.profile(), Some(PlayerProfile::Hohoyks));
    assert_eq!(session.state().unwrap().spin_index(), 2);
    assert!(!session.has_pending_bonus_draw(), "missing field defaults to false");
}

#[test]
fn test_corrupt_json_is_replaced_with_logged_out() {
    let session = GameSession::with_seed(MemoryStore::with_snapshot("{ not json"), 1).unwrap();
    assert!(!session.is_authenticated());
    assert_eq!(stored(session), SaveFile::logged_out());
}

#[test]
fn test_unknown_schema_is_replaced() {
    let json = snapshot_json(0, &[], "hohoyks").replace("\"schemaVersion\":1", "\"schemaVersion\":99");
    let session = GameSession::with_seed(MemoryStore::with_snapshot(json), 1).unwrap();
    assert!(!session.is_authenticated());
    assert_eq!(stored(session), SaveFile::logged_out());
}

#[test]
fn test_unknown_player_is_replaced() {
    let json = snapshot_json(0, &[], "grinch");
    let session = GameSession::with_seed(MemoryStore::with_snapshot(json), 1).unwrap();
    assert!(!session.is_authenticated());
    assert_eq!(stored(session), SaveFile::logged_out());
}

#[test]
fn test_unknown_item_resets_that_player() {
    let json = snapshot_json(1, &["hohoyks_flux_capacitor"], "hohoyks");
    let session = GameSession::with_seed(MemoryStore::with_snapshot(json), 1).unwrap();
    assert_eq!(session.profile(), Some(PlayerProfile::Hohoyks));
    assert_eq!(session.state().unwrap().spin_index(), 0);

    let save = stored(session);
    let player = save.current_player.unwrap();
    assert_eq!(player.current_spin_index, 0);
    assert!(player.inventory.is_empty());
}

#[test]
fn test_inventory_mismatch_resets_that_player() {
    let json = snapshot_json(5, &["moroz_hot_cocoa"], "moroz");
    let session = GameSession::with_seed(MemoryStore::with_snapshot(json), 1).unwrap();
    assert_eq!(session.profile(), Some(PlayerProfile::Moroz));
    assert_eq!(session.state().unwrap().spin_index(), 0);
}

#[test]
fn test_other_players_items_reset_that_player() {
    let json = snapshot_json(
        2,
        &["hohoyks_snowflake", "hohoyks_infinity_spin"],
        "klenko",
    );
    let session = GameSession::with_seed(MemoryStore::with_snapshot(json), 1).unwrap();
    assert_eq!(session.profile(), Some(PlayerProfile::Klenko));
    assert_eq!(session.state().unwrap().spin_index(), 0);
    assert!(session.state().unwrap().inventory().is_empty());
    assert!(!session.state().unwrap().infinite_spins_unlocked());
}

#[test]
fn test_hell_mode_with_untransformed_inventory_resets() {
    let json = snapshot_json(1, &["klenko_coal_piece"], "klenko")
        .replace("\"alternateModeActive\":false", "\"alternateModeActive\":true");
    let session = GameSession::with_seed(MemoryStore::with_snapshot(json), 1).unwrap();
    assert_eq!(session.profile(), Some(PlayerProfile::Klenko));
    let state = session.state().unwrap();
    assert_eq!(state.spin_index(), 0);
    assert!(!state.alternate_mode_active());

    let player = stored(session).current_player.unwrap();
    assert!(player.inventory.is_empty());
    assert!(!player.alternate_mode_active);
}

#[test]
fn test_hell_mode_survives_restart() {
    let mut session = GameSession::with_seed(MemoryStore::new(), 16).unwrap();
    session.login("klenko");
    for _ in 0..45 {
        session.request_draw().unwrap();
        session.complete_draw().unwrap();
    }
    let before = session.state().unwrap().clone();
    assert!(before.alternate_mode_active());

    let restored = GameSession::with_seed(session.into_store(), 17).unwrap();
    assert_eq!(restored.state(), Some(&before));
}

// =========================================================================
// File store
// =========================================================================

#[test]
fn test_file_store_round_trip() {
    let dir = std::env::temp_dir().join(format!("giftspin-it-{}", std::process::id()));
    let path = dir.join("nested").join("session.json");
    let _ = std::fs::remove_dir_all(&dir);

    let store = FileStore::at(&path);
    assert_eq!(store.load().unwrap(), None);

    let mut session = GameSession::with_seed(store, 3).unwrap();
    session.login("moroz");
    session.request_draw().unwrap();
    session.complete_draw().unwrap();
    assert!(path.exists());
    assert!(!path.with_extension("json.tmp").exists());

    let restored = GameSession::with_seed(FileStore::at(&path), 4).unwrap();
    assert_eq!(restored.profile(), Some(PlayerProfile::Moroz));
    assert_eq!(restored.state().unwrap().spin_index(), 1);

    let _ = std::fs::remove_dir_all(&dir);
}
