//! Simulation runner. Every run drives a real `GameSession` backed by a
//! `MemoryStore`, so results follow the same code paths as live play.

use super::config::SimConfig;
use super::report::SimReport;
use crate::error::GachaResult;
use crate::progression::MilestoneEvent;
use crate::session::{GameSession, MemoryStore};
use std::collections::BTreeMap;

/// Stats from a single simulated session.
#[derive(Debug, Clone, Default)]
pub struct RunStats {
    pub draws: u32,
    /// Indexed by `Rarity as usize`.
    pub rarity_counts: [u32; 7],
    pub milestones: BTreeMap<&'static str, u32>,
    /// Draw on which every regular item had been collected.
    pub draws_to_complete: Option<u32>,
    /// Ran out of draws before `draws_per_run`.
    pub blocked: bool,
    pub infinite_spins_unlocked: bool,
    pub alternate_mode_active: bool,
    pub rarity_floor_removed: bool,
    pub achievements_unlocked: usize,
}

/// Run the full simulation and return a report.
pub fn run_simulation(config: &SimConfig) -> GachaResult<SimReport> {
    let mut all_runs = Vec::with_capacity(config.num_runs as usize);

    for run_idx in 0..config.num_runs {
        let session = match config.seed {
            Some(seed) => {
                GameSession::with_seed(MemoryStore::new(), seed.wrapping_add(run_idx as u64))?
            }
            None => GameSession::new(MemoryStore::new())?,
        };

        let run = simulate_single_run(config, session)?;
        if config.verbosity >= 2 {
            println!(
                "Run {}/{} - {} draws, complete at {}, infinite {}, hell {}, floor {}",
                run_idx + 1,
                config.num_runs,
                run.draws,
                run.draws_to_complete
                    .map_or_else(|| "-".to_string(), |d| d.to_string()),
                run.infinite_spins_unlocked,
                run.alternate_mode_active,
                run.rarity_floor_removed
            );
        }
        all_runs.push(run);
    }

    Ok(SimReport::from_runs(config, all_runs))
}

fn simulate_single_run(
    config: &SimConfig,
    mut session: GameSession<MemoryStore>,
) -> GachaResult<RunStats> {
    let mut stats = RunStats::default();
    session.login(config.profile.nickname());

    while stats.draws < config.draws_per_run {
        let Some(outcome) = session.request_draw() else {
            stats.blocked = true;
            break;
        };
        let rarity = outcome.rarity();

        let milestone = session.complete_draw()?;
        stats.draws += 1;
        stats.rarity_counts[rarity as usize] += 1;
        if let Some(milestone) = milestone {
            *stats.milestones.entry(event_label(milestone.event)).or_insert(0) += 1;
        }
        if stats.draws_to_complete.is_none()
            && session
                .collection_progress()
                .is_some_and(|p| p.is_complete())
        {
            stats.draws_to_complete = Some(stats.draws);
        }
    }

    if let Some(state) = session.state() {
        stats.infinite_spins_unlocked = state.infinite_spins_unlocked();
        stats.alternate_mode_active = state.alternate_mode_active();
        stats.rarity_floor_removed = state.rarity_floor_removed();
    }
    stats.achievements_unlocked = session.achievements().unlocked_count();
    Ok(stats)
}

fn event_label(event: MilestoneEvent) -> &'static str {
    match event {
        MilestoneEvent::InfinityUnlocked => "infinity_unlocked",
        MilestoneEvent::SpinMilestone {
            bonus_armed: true, ..
        } => "bonus_armed",
        MilestoneEvent::SpinMilestone { .. } => "spin_milestone",
        MilestoneEvent::RarityFloorRemoved => "rarity_floor_removed",
        MilestoneEvent::LuckyFlavor => "lucky_flavor",
        MilestoneEvent::OverdraftWarning { .. } => "overdraft_warning",
        MilestoneEvent::AlternateModeActivated => "alternate_mode",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::items::Rarity;
    use crate::profiles::PlayerProfile;

    fn config(profile: PlayerProfile, num_runs: u32, draws_per_run: u32) -> SimConfig {
        SimConfig {
            profile,
            num_runs,
            draws_per_run,
            seed: Some(7),
            verbosity: 0,
        }
    }

    #[test]
    fn test_capped_profile_is_blocked() {
        let report = run_simulation(&config(PlayerProfile::Snegurka, 5, 40)).unwrap();
        assert_eq!(report.runs_blocked, 5);
        assert!((report.avg_draws - 30.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_hohoyks_always_reaches_infinity_and_floor_removal() {
        let report = run_simulation(&config(PlayerProfile::Hohoyks, 10, 45)).unwrap();
        assert_eq!(report.runs_blocked, 0);
        assert_eq!(report.runs_infinite, 10);
        assert_eq!(report.runs_floor_removed, 10);
        assert_eq!(report.milestone_counts.get("bonus_armed"), Some(&10));
    }

    #[test]
    fn test_klenko_always_reaches_hell() {
        let report = run_simulation(&config(PlayerProfile::Klenko, 10, 40)).unwrap();
        assert_eq!(report.runs_alternate, 10);
        assert_eq!(report.milestone_counts.get("overdraft_warning"), Some(&40));
    }

    #[test]
    fn test_moroz_scripted_mythic() {
        let report = run_simulation(&config(PlayerProfile::Moroz, 2, 200)).unwrap();
        let mythic = report
            .rarity_totals
            .iter()
            .find(|(r, _)| *r == Rarity::Mythic)
            .map(|(_, n)| *n)
            .unwrap_or(0);
        assert!(mythic >= 2);
    }

    #[test]
    fn test_seeded_runs_are_reproducible() {
        let a = run_simulation(&config(PlayerProfile::Moroz, 3, 20)).unwrap();
        let b = run_simulation(&config(PlayerProfile::Moroz, 3, 20)).unwrap();
        assert_eq!(a.rarity_totals, b.rarity_totals);
    }
}
