//! Simulation report generation.

use super::config::SimConfig;
use super::runner::RunStats;
use crate::items::Rarity;
use crate::probability::base_weights;
use std::collections::BTreeMap;

/// Aggregated results from multiple simulation runs.
#[derive(Debug, Clone)]
pub struct SimReport {
    pub profile: &'static str,
    pub num_runs: u32,
    pub draws_per_run: u32,
    pub avg_draws: f64,

    // Odds
    pub total_draws: u64,
    pub rarity_totals: Vec<(Rarity, u64)>,
    /// Configured base weight per rarity, for comparison.
    pub base_weights: Vec<(Rarity, f64)>,

    // Progression
    pub milestone_counts: BTreeMap<&'static str, u32>,
    pub runs_blocked: u32,
    pub runs_infinite: u32,
    pub runs_alternate: u32,
    pub runs_floor_removed: u32,
    pub runs_completed_collection: u32,
    pub avg_draws_to_complete: Option<f64>,
    pub avg_achievements: f64,
}

impl SimReport {
    /// Create a new report from completed run stats.
    pub fn from_runs(config: &SimConfig, runs: Vec<RunStats>) -> Self {
        let num_runs = runs.len() as u32;
        let divisor = num_runs.max(1) as f64;

        let total_draws: u64 = runs.iter().map(|r| r.draws as u64).sum();
        let rarity_totals = Rarity::ALL
            .iter()
            .map(|&rarity| {
                let count = runs
                    .iter()
                    .map(|r| r.rarity_counts[rarity as usize] as u64)
                    .sum();
                (rarity, count)
            })
            .collect();

        let mut milestone_counts = BTreeMap::new();
        for run in &runs {
            for (&label, &count) in &run.milestones {
                *milestone_counts.entry(label).or_insert(0) += count;
            }
        }

        let completions: Vec<u32> = runs.iter().filter_map(|r| r.draws_to_complete).collect();
        let avg_draws_to_complete = if completions.is_empty() {
            None
        } else {
            Some(completions.iter().map(|&d| d as f64).sum::<f64>() / completions.len() as f64)
        };

        let count = |pred: fn(&RunStats) -> bool| runs.iter().filter(|r| pred(r)).count() as u32;

        Self {
            profile: config.profile.nickname(),
            num_runs,
            draws_per_run: config.draws_per_run,
            avg_draws: total_draws as f64 / divisor,
            total_draws,
            rarity_totals,
            base_weights: base_weights(config.profile).iter().collect(),
            milestone_counts,
            runs_blocked: count(|r| r.blocked),
            runs_infinite: count(|r| r.infinite_spins_unlocked),
            runs_alternate: count(|r| r.alternate_mode_active),
            runs_floor_removed: count(|r| r.rarity_floor_removed),
            runs_completed_collection: completions.len() as u32,
            avg_draws_to_complete,
            avg_achievements: runs.iter().map(|r| r.achievements_unlocked as f64).sum::<f64>()
                / divisor,
        }
    }

    /// Observed share of `rarity` across every draw, in percent.
    pub fn observed_share(&self, rarity: Rarity) -> f64 {
        if self.total_draws == 0 {
            return 0.0;
        }
        let count = self
            .rarity_totals
            .iter()
            .find(|(r, _)| *r == rarity)
            .map_or(0, |(_, n)| *n);
        count as f64 / self.total_draws as f64 * 100.0
    }

    pub fn to_text(&self) -> String {
        let mut report = String::new();

        report.push_str("═══════════════════════════════════════════════════════════════\n");
        report.push_str("                    SIMULATION REPORT\n");
        report.push_str(&format!("                    Profile: {}\n", self.profile));
        report.push_str("═══════════════════════════════════════════════════════════════\n\n");

        report.push_str(&format!(
            "Runs: {} x up to {} draws, {:.1} draws on average ({} blocked)\n\n",
            self.num_runs, self.draws_per_run, self.avg_draws, self.runs_blocked
        ));

        report.push_str("── RARITY ───────────────────────────────────────────────────────\n");
        report.push_str("  Rarity       Count    Observed    Base\n");
        for &(rarity, count) in &self.rarity_totals {
            let base = self
                .base_weights
                .iter()
                .find(|(r, _)| *r == rarity)
                .map_or(0.0, |(_, w)| *w);
            report.push_str(&format!(
                "  {:<10} {:>7}    {:>6.2}%    {:>5.1}%\n",
                rarity.name(),
                count,
                self.observed_share(rarity),
                base
            ));
        }
        report.push('\n');

        report.push_str("── MILESTONES ───────────────────────────────────────────────────\n");
        if self.milestone_counts.is_empty() {
            report.push_str("  (none)\n");
        }
        for (label, count) in &self.milestone_counts {
            report.push_str(&format!("  {:<22} {:>6}\n", label, count));
        }
        report.push('\n');

        report.push_str("── PROGRESSION ──────────────────────────────────────────────────\n");
        report.push_str(&format!(
            "  Infinite spins:      {}/{}\n",
            self.runs_infinite, self.num_runs
        ));
        report.push_str(&format!(
            "  Hell mode:           {}/{}\n",
            self.runs_alternate, self.num_runs
        ));
        report.push_str(&format!(
            "  Floor removed:       {}/{}\n",
            self.runs_floor_removed, self.num_runs
        ));
        report.push_str(&format!(
            "  Collection complete: {}/{}\n",
            self.runs_completed_collection, self.num_runs
        ));
        if let Some(avg) = self.avg_draws_to_complete {
            report.push_str(&format!("  Avg Draws to Complete: {:.1}\n", avg));
        }
        report.push_str(&format!(
            "  Avg Achievements:    {:.1}\n",
            self.avg_achievements
        ));

        report
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}

// Implement Serialize for JSON output
impl serde::Serialize for SimReport {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;

        let rarity_counts: BTreeMap<&str, u64> = self
            .rarity_totals
            .iter()
            .map(|(r, n)| (r.as_str(), *n))
            .collect();
        let rarity_share: BTreeMap<&str, f64> = self
            .rarity_totals
            .iter()
            .map(|(r, _)| (r.as_str(), self.observed_share(*r)))
            .collect();

        let mut state = serializer.serialize_struct("SimReport", 13)?;
        state.serialize_field("profile", &self.profile)?;
        state.serialize_field("num_runs", &self.num_runs)?;
        state.serialize_field("draws_per_run", &self.draws_per_run)?;
        state.serialize_field("avg_draws", &self.avg_draws)?;
        state.serialize_field("rarity_counts", &rarity_counts)?;
        state.serialize_field("rarity_share", &rarity_share)?;
        state.serialize_field("milestones", &self.milestone_counts)?;
        state.serialize_field("runs_blocked", &self.runs_blocked)?;
        state.serialize_field("runs_infinite", &self.runs_infinite)?;
        state.serialize_field("runs_alternate", &self.runs_alternate)?;
        state.serialize_field("runs_floor_removed", &self.runs_floor_removed)?;
        state.serialize_field("avg_draws_to_complete", &self.avg_draws_to_complete)?;
        state.serialize_field(
            "completion_rate",
            &((self.runs_completed_collection as f64 / self.num_runs.max(1) as f64) * 100.0),
        )?;
        state.end()
    }
}
