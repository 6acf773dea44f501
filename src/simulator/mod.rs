//! Balance simulator for Monte Carlo analysis.
//!
//! Plays many seeded sessions of one profile to check:
//! - observed rarity shares against the configured odds
//! - how often each milestone fires
//! - how many draws a full collection takes
//!
//! Runs go through `GameSession`, so results match real play.

mod config;
mod report;
mod runner;

pub use config::SimConfig;
pub use report::SimReport;
pub use runner::{run_simulation, RunStats};
