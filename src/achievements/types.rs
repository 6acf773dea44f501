//! Achievement types and the per-session tracker.

use crate::profiles::PlayerProfile;
use std::collections::{BTreeSet, HashMap, VecDeque};

/// Unique identifier for each achievement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AchievementId {
    // General
    FirstSpin,
    TenSpins,
    Rainbow,
    DivineDrop,
    Collector,
    // Klenko
    CoalMagnate,
    Unlucky,
    UnexpectedLuck,
    HellTourist,
    // Hohoyks
    Infinity,
    Lucky,
}

/// Static definition of an achievement.
#[derive(Debug, Clone)]
pub struct AchievementDef {
    pub id: AchievementId,
    pub name: &'static str,
    pub description: &'static str,
    /// `None` for achievements every profile can earn.
    pub profile: Option<PlayerProfile>,
    /// Hidden until unlocked.
    pub secret: bool,
    pub icon: &'static str,
}

impl AchievementDef {
    pub fn available_to(&self, profile: PlayerProfile) -> bool {
        self.profile.map_or(true, |p| p == profile)
    }
}

/// Record of an unlocked achievement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnlockedAchievement {
    pub unlocked_at: i64,
}

/// Unlocked achievements for the active player plus the queue of ones not
/// yet shown.
#[derive(Debug, Clone, Default)]
pub struct Achievements {
    unlocked: HashMap<AchievementId, UnlockedAchievement>,
    pending: VecDeque<AchievementId>,
}

impl Achievements {
    pub fn is_unlocked(&self, id: AchievementId) -> bool {
        self.unlocked.contains_key(&id)
    }

    pub fn unlocked_at(&self, id: AchievementId) -> Option<i64> {
        self.unlocked.get(&id).map(|u| u.unlocked_at)
    }

    /// Unlock an achievement. Returns true if newly unlocked.
    pub fn unlock(&mut self, id: AchievementId) -> bool {
        if self.is_unlocked(id) {
            return false;
        }
        self.unlocked.insert(
            id,
            UnlockedAchievement {
                unlocked_at: chrono::Utc::now().timestamp(),
            },
        );
        true
    }

    /// Mark everything in `earned` as unlocked without announcing it. Used
    /// when a session is restored.
    pub fn sync(&mut self, earned: &BTreeSet<AchievementId>) {
        for &id in earned {
            self.unlock(id);
        }
    }

    /// Unlock everything in `earned` and queue the new ones for display.
    /// Returns the newly unlocked ids.
    pub fn update(&mut self, earned: &BTreeSet<AchievementId>) -> Vec<AchievementId> {
        let fresh: Vec<AchievementId> = earned.iter().copied().filter(|&id| self.unlock(id)).collect();
        self.pending.extend(fresh.iter().copied());
        fresh
    }

    /// Next unlocked achievement the presentation layer hasn't shown yet.
    pub fn take_next(&mut self) -> Option<AchievementId> {
        self.pending.pop_front()
    }

    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }

    pub fn unlocked_count(&self) -> usize {
        self.unlocked.len()
    }

    /// Percentage of the achievements `profile` can earn.
    pub fn unlock_percentage(&self, profile: PlayerProfile) -> f32 {
        let total = super::data::achievements_for(profile).len();
        if total == 0 {
            return 0.0;
        }
        (self.unlocked_count() as f32 / total as f32) * 100.0
    }

    pub fn clear(&mut self) {
        self.unlocked.clear();
        self.pending.clear();
    }
}
