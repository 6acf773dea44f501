//! Giftspin - holiday gift-box reward engine.
//!
//! Weighted rarity draws, per-player progression rules and milestone events,
//! with a snapshot store so a session survives restarts. The presentation
//! layer drives everything through [`GameSession`].

pub mod achievements;
pub mod core;
pub mod draw;
pub mod error;
pub mod items;
pub mod probability;
pub mod profiles;
pub mod progression;
pub mod session;
pub mod simulator;

pub use draw::DrawOutcome;
pub use error::{GachaError, GachaResult};
pub use items::{Item, Rarity};
pub use profiles::PlayerProfile;
pub use progression::{DrawResult, Milestone, MilestoneEvent, SpecialMessage};
pub use session::{DrawPhase, FileStore, GameSession, MemoryStore, SnapshotStore};
