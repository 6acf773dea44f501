//! Draw engine: picks the winner and synthesizes the decorative reel.

pub mod logic;
pub mod reel;

pub use logic::*;
pub use reel::{build_reel, Reel};
