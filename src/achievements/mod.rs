//! Achievement system module.
//!
//! Achievements are a derived view over the active player's progression;
//! the session diffs the view after every draw and queues new unlocks.

pub mod data;
pub mod logic;
pub mod types;

pub use data::{achievements_for, get_achievement_def, ALL_ACHIEVEMENTS};
pub use logic::evaluate;
pub use types::{AchievementDef, AchievementId, Achievements};
