//! Error types for the reward engine.

use crate::items::Rarity;
use std::io;
use thiserror::Error;

/// Errors surfaced by the session controller.
#[derive(Error, Debug)]
pub enum GachaError {
    /// Nickname does not belong to any known profile.
    #[error("unknown player: {0}")]
    UnknownPlayer(String),

    /// A completion was reported while no draw was in flight.
    #[error("no draw in flight")]
    NoDrawInFlight,

    /// The reported item is not the one the engine selected.
    #[error("reported item {actual} does not match in-flight draw {expected}")]
    ResultMismatch {
        expected: &'static str,
        actual: String,
    },

    /// An operation that needs a logged-in player was called without one.
    #[error("no player is logged in")]
    NotAuthenticated,

    /// Static content failed validation.
    #[error(transparent)]
    Content(#[from] ContentError),

    /// Snapshot could not be read or written.
    #[error(transparent)]
    Persistence(#[from] PersistenceError),
}

/// Defects in the static catalog or probability tables.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ContentError {
    #[error("weights for {profile} sum to {sum}, expected 100")]
    WeightSum { profile: &'static str, sum: f64 },

    #[error("weight for {rarity:?} in {profile} is negative or not finite")]
    InvalidWeight {
        profile: &'static str,
        rarity: Rarity,
    },

    #[error("{profile} can select {rarity:?} but has no items of that rarity")]
    EmptyPartition {
        profile: &'static str,
        rarity: Rarity,
    },

    #[error("alternate catalog for {profile} does not mirror {rarity:?} partition size")]
    AlternateShape {
        profile: &'static str,
        rarity: Rarity,
    },

    #[error("duplicate item id: {0}")]
    DuplicateItemId(&'static str),
}

/// Failures while loading or saving a session snapshot.
#[derive(Error, Debug)]
pub enum PersistenceError {
    #[error("snapshot io: {0}")]
    Io(#[from] io::Error),

    #[error("malformed snapshot: {0}")]
    Json(#[from] serde_json::Error),

    #[error("snapshot schema {found} is not supported (expected {expected})")]
    SchemaMismatch { found: u32, expected: u32 },

    #[error("snapshot references unknown player {0}")]
    UnknownPlayer(String),

    #[error("snapshot references unknown item {0}")]
    UnknownItem(String),

    #[error("snapshot item {item} is not in {profile}'s {mode} catalog")]
    ForeignItem {
        item: String,
        profile: &'static str,
        mode: &'static str,
    },

    #[error("snapshot inventory has {inventory} entries but spin index {spin_index}")]
    InventoryMismatch { inventory: usize, spin_index: u32 },
}

/// Result type for session operations.
pub type GachaResult<T> = Result<T, GachaError>;
