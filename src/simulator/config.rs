//! Simulation configuration.

use crate::profiles::PlayerProfile;

/// Configuration for a simulation run.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Profile every simulated session logs in as
    pub profile: PlayerProfile,

    /// Number of simulated sessions
    pub num_runs: u32,

    /// Draws attempted per session (fewer if the player runs out)
    pub draws_per_run: u32,

    /// Random seed for reproducibility (None = random)
    pub seed: Option<u64>,

    /// Log verbosity (0 = silent, 1 = summary, 2 = per run)
    pub verbosity: u8,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            profile: PlayerProfile::Hohoyks,
            num_runs: 1000,
            draws_per_run: 60,
            seed: None,
            verbosity: 1,
        }
    }
}

impl SimConfig {
    /// Quick config for checking odds on one profile
    pub fn quick(profile: PlayerProfile) -> Self {
        Self {
            profile,
            num_runs: 100,
            ..Default::default()
        }
    }

    /// Long Klenko sessions that always reach hell mode
    pub fn hell_run() -> Self {
        Self {
            profile: PlayerProfile::Klenko,
            num_runs: 200,
            draws_per_run: 80,
            ..Default::default()
        }
    }

    /// Moroz sessions long enough to hit the scripted mythic draw
    pub fn marathon() -> Self {
        Self {
            profile: PlayerProfile::Moroz,
            num_runs: 50,
            draws_per_run: 250,
            ..Default::default()
        }
    }
}
