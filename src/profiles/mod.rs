//! Player profiles: identity, spin policy, odds and milestone rules.

pub mod data;
pub mod types;

pub use types::*;
