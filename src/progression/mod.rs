//! Per-player progression: spin counter, inventory, modifier flags and the
//! milestone rules that flip them.

pub mod logic;
pub mod types;

pub use logic::*;
pub use types::*;
