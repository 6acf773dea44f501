//! Item system: rarity tiers, static catalogs and catalog lookups.

pub mod catalog;
pub mod data;
pub mod types;

pub use catalog::*;
pub use types::*;
