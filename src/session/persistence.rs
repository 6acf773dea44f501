//! Session snapshot: the JSON document, where it is stored, and how it is
//! turned back into progression state.

use crate::core::constants::{SNAPSHOT_FILE_NAME, SNAPSHOT_SCHEMA_VERSION};
use crate::error::PersistenceError;
use crate::items::{find_item, find_profile_item};
use crate::profiles::PlayerProfile;
use crate::progression::{DrawResult, ProgressionState};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Persisted session document. Only progression is stored; prepared and
/// in-flight draws are rebuilt on load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveFile {
    pub schema_version: u32,
    pub is_authenticated: bool,
    pub current_player: Option<SavedPlayer>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedPlayer {
    pub id: String,
    pub nickname: String,
    pub current_spin_index: u32,
    pub inventory: Vec<DrawRecord>,
    pub has_infinity_spin: bool,
    pub alternate_mode_active: bool,
    pub rarity_floor_removed: bool,
    /// Absent in snapshots written before bonus draws were persisted.
    #[serde(default)]
    pub pending_bonus_draw: bool,
}

/// Inventory entry as stored: the item is referenced by id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DrawRecord {
    pub item_id: String,
    pub timestamp: i64,
}

impl SaveFile {
    pub fn logged_out() -> Self {
        Self {
            schema_version: SNAPSHOT_SCHEMA_VERSION,
            is_authenticated: false,
            current_player: None,
        }
    }

    pub fn for_player(profile: PlayerProfile, state: &ProgressionState) -> Self {
        Self {
            schema_version: SNAPSHOT_SCHEMA_VERSION,
            is_authenticated: true,
            current_player: Some(SavedPlayer::capture(profile, state)),
        }
    }
}

impl SavedPlayer {
    pub fn capture(profile: PlayerProfile, state: &ProgressionState) -> Self {
        Self {
            id: profile.id().to_string(),
            nickname: profile.nickname().to_string(),
            current_spin_index: state.spin_index(),
            inventory: state
                .inventory()
                .iter()
                .map(|result| DrawRecord {
                    item_id: result.item.id.to_string(),
                    timestamp: result.timestamp,
                })
                .collect(),
            has_infinity_spin: state.infinite_spins_unlocked(),
            alternate_mode_active: state.alternate_mode_active(),
            rarity_floor_removed: state.rarity_floor_removed(),
            pending_bonus_draw: state.pending_bonus_draw(),
        }
    }

    /// Resolve the stored profile id.
    pub fn profile(&self) -> Result<PlayerProfile, PersistenceError> {
        PlayerProfile::from_id(&self.id)
            .ok_or_else(|| PersistenceError::UnknownPlayer(self.id.clone()))
    }

    /// Rebuild progression. Every item must belong to the stored profile's
    /// catalog for the stored mode, so an alternate-mode snapshot only holds
    /// transformed items.
    pub fn restore_state(&self) -> Result<ProgressionState, PersistenceError> {
        let profile = self.profile()?;
        if self.inventory.len() != self.current_spin_index as usize {
            return Err(PersistenceError::InventoryMismatch {
                inventory: self.inventory.len(),
                spin_index: self.current_spin_index,
            });
        }

        let inventory = self
            .inventory
            .iter()
            .map(|record| {
                find_profile_item(&record.item_id, profile, self.alternate_mode_active)
                    .map(|item| DrawResult {
                        item,
                        timestamp: record.timestamp,
                    })
                    .ok_or_else(|| self.reject_item(&record.item_id, profile))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(ProgressionState {
            spin_index: self.current_spin_index,
            inventory,
            infinite_spins_unlocked: self.has_infinity_spin,
            alternate_mode_active: self.alternate_mode_active,
            rarity_floor_removed: self.rarity_floor_removed,
            pending_bonus_draw: self.pending_bonus_draw,
        })
    }

    fn reject_item(&self, id: &str, profile: PlayerProfile) -> PersistenceError {
        if find_item(id).is_none() {
            return PersistenceError::UnknownItem(id.to_string());
        }
        PersistenceError::ForeignItem {
            item: id.to_string(),
            profile: profile.nickname(),
            mode: if self.alternate_mode_active {
                "alternate"
            } else {
                "regular"
            },
        }
    }
}

pub fn encode(save: &SaveFile) -> Result<String, PersistenceError> {
    Ok(serde_json::to_string_pretty(save)?)
}

/// Parse a snapshot and check its schema version.
pub fn decode(json: &str) -> Result<SaveFile, PersistenceError> {
    let save: SaveFile = serde_json::from_str(json)?;
    if save.schema_version != SNAPSHOT_SCHEMA_VERSION {
        return Err(PersistenceError::SchemaMismatch {
            found: save.schema_version,
            expected: SNAPSHOT_SCHEMA_VERSION,
        });
    }
    Ok(save)
}

/// Get/set of the serialized session blob.
pub trait SnapshotStore {
    /// `Ok(None)` when nothing has been saved yet.
    fn load(&self) -> io::Result<Option<String>>;
    fn save(&mut self, snapshot: &str) -> io::Result<()>;
}

/// In-memory store for tests and the simulator.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    snapshot: Option<String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_snapshot(snapshot: impl Into<String>) -> Self {
        Self {
            snapshot: Some(snapshot.into()),
        }
    }

    pub fn snapshot(&self) -> Option<&str> {
        self.snapshot.as_deref()
    }
}

impl SnapshotStore for MemoryStore {
    fn load(&self) -> io::Result<Option<String>> {
        Ok(self.snapshot.clone())
    }

    fn save(&mut self, snapshot: &str) -> io::Result<()> {
        self.snapshot = Some(snapshot.to_string());
        Ok(())
    }
}

/// Snapshot file in the platform config directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Store under the platform config dir, e.g. `~/.config/giftspin/session.json`.
    pub fn new() -> io::Result<Self> {
        let project_dirs = ProjectDirs::from("", "", "giftspin").ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                "Could not determine config directory",
            )
        })?;
        let config_dir = project_dirs.config_dir();
        fs::create_dir_all(config_dir)?;
        Ok(Self {
            path: config_dir.join(SNAPSHOT_FILE_NAME),
        })
    }

    /// Store at an explicit path. The parent directory is created on save.
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Creates a FileStore for testing with a unique temporary directory
    #[cfg(test)]
    pub(crate) fn new_for_test() -> io::Result<Self> {
        use std::sync::atomic::{AtomicU64, Ordering};
        static TEST_COUNTER: AtomicU64 = AtomicU64::new(0);

        let test_id = TEST_COUNTER.fetch_add(1, Ordering::SeqCst);
        let temp_dir = std::env::temp_dir().join(format!(
            "giftspin-test-{}-{}",
            std::process::id(),
            test_id
        ));
        fs::create_dir_all(&temp_dir)?;
        Ok(Self {
            path: temp_dir.join(SNAPSHOT_FILE_NAME),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SnapshotStore for FileStore {
    fn load(&self) -> io::Result<Option<String>> {
        match fs::read_to_string(&self.path) {
            Ok(json) => Ok(Some(json)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Write to a sibling temp file, then rename over the real one so a
    /// crash mid-write never leaves a truncated snapshot.
    fn save(&mut self, snapshot: &str) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, snapshot)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::items::data::{HOHOYKS_INFINITY_SPIN, HOHOYKS_ITEMS};

    fn sample_state() -> ProgressionState {
        ProgressionState {
            spin_index: 2,
            inventory: vec![
                DrawResult {
                    item: &HOHOYKS_ITEMS[0],
                    timestamp: 100,
                },
                DrawResult {
                    item: &HOHOYKS_INFINITY_SPIN,
                    timestamp: 200,
                },
            ],
            infinite_spins_unlocked: true,
            ..Default::default()
        }
    }

    #[test]
    fn test_snapshot_uses_camel_case_keys() {
        let json = encode(&SaveFile::for_player(PlayerProfile::Hohoyks, &sample_state())).unwrap();
        for key in [
            "schemaVersion",
            "isAuthenticated",
            "currentPlayer",
            "currentSpinIndex",
            "hasInfinitySpin",
            "alternateModeActive",
            "rarityFloorRemoved",
            "itemId",
        ] {
            assert!(json.contains(key), "missing {key}");
        }
    }

    #[test]
    fn test_capture_then_restore() {
        let save = SaveFile::for_player(PlayerProfile::Hohoyks, &sample_state());
        let decoded = decode(&encode(&save).unwrap()).unwrap();
        let player = decoded.current_player.unwrap();
        assert_eq!(player.profile().unwrap(), PlayerProfile::Hohoyks);
        assert_eq!(player.restore_state().unwrap(), sample_state());
    }

    #[test]
    fn test_missing_bonus_flag_defaults_false() {
        let json = r#"{
            "schemaVersion": 1,
            "isAuthenticated": true,
            "currentPlayer": {
                "id": "snegurka", "nickname": "SNEGURKA", "currentSpinIndex": 0,
                "inventory": [], "hasInfinitySpin": false,
                "alternateModeActive": false, "rarityFloorRemoved": false
            }
        }"#;
        let player = decode(json).unwrap().current_player.unwrap();
        assert!(!player.pending_bonus_draw);
    }

    #[test]
    fn test_schema_mismatch_rejected() {
        let mut save = SaveFile::logged_out();
        save.schema_version = 99;
        let err = decode(&encode(&save).unwrap()).unwrap_err();
        assert!(matches!(
            err,
            PersistenceError::SchemaMismatch {
                found: 99,
                expected: 1
            }
        ));
    }

    #[test]
    fn test_corrupt_json_rejected() {
        assert!(matches!(decode("{not json"), Err(PersistenceError::Json(_))));
    }

    #[test]
    fn test_unknown_item_rejected() {
        let mut player = SavedPlayer::capture(PlayerProfile::Hohoyks, &sample_state());
        player.inventory[0].item_id = "gone".to_string();
        assert!(matches!(
            player.restore_state(),
            Err(PersistenceError::UnknownItem(ref id)) if id == "gone"
        ));
    }

    #[test]
    fn test_other_profiles_item_rejected() {
        let mut player = SavedPlayer::capture(PlayerProfile::Hohoyks, &sample_state());
        player.id = "klenko".to_string();
        assert!(matches!(
            player.restore_state(),
            Err(PersistenceError::ForeignItem { ref item, profile: "KLENKO", mode: "regular" })
                if item == "hohoyks_snowflake"
        ));
    }

    #[test]
    fn test_untransformed_item_in_alternate_mode_rejected() {
        let mut player = SavedPlayer::capture(PlayerProfile::Klenko, &ProgressionState::new());
        player.alternate_mode_active = true;
        player.current_spin_index = 1;
        player.inventory.push(DrawRecord {
            item_id: "klenko_coal_piece".to_string(),
            timestamp: 0,
        });
        assert!(matches!(
            player.restore_state(),
            Err(PersistenceError::ForeignItem { mode: "alternate", .. })
        ));

        player.inventory[0].item_id = "klenko_hell_coal_piece".to_string();
        assert!(player.restore_state().unwrap().alternate_mode_active());
    }

    #[test]
    fn test_inventory_mismatch_rejected() {
        let mut player = SavedPlayer::capture(PlayerProfile::Hohoyks, &sample_state());
        player.current_spin_index = 5;
        assert!(matches!(
            player.restore_state(),
            Err(PersistenceError::InventoryMismatch {
                inventory: 2,
                spin_index: 5
            })
        ));
    }

    #[test]
    fn test_file_store_roundtrip() {
        let mut store = FileStore::new_for_test().unwrap();
        assert_eq!(store.load().unwrap(), None);
        store.save("{\"a\":1}").unwrap();
        assert_eq!(store.load().unwrap().as_deref(), Some("{\"a\":1}"));
        store.save("{\"a\":2}").unwrap();
        assert_eq!(store.load().unwrap().as_deref(), Some("{\"a\":2}"));
        assert!(!store.path().with_extension("json.tmp").exists());
    }

    #[test]
    fn test_memory_store() {
        let mut store = MemoryStore::new();
        assert_eq!(store.load().unwrap(), None);
        store.save("x").unwrap();
        assert_eq!(store.snapshot(), Some("x"));
    }
}
