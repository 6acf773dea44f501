use crate::error::{GachaError, GachaResult};
use crate::items::{CatalogSet, Item, Rarity};
use crate::progression::SpecialMessage;
use serde::{Deserialize, Serialize};

/// Known player profiles. Resolved once at login.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerProfile {
    Klenko,
    Hohoyks,
    Snegurka,
    Moroz,
}

impl PlayerProfile {
    pub const ALL: [PlayerProfile; 4] = [
        PlayerProfile::Klenko,
        PlayerProfile::Hohoyks,
        PlayerProfile::Snegurka,
        PlayerProfile::Moroz,
    ];

    /// Case-insensitive nickname lookup; surrounding whitespace is ignored.
    pub fn from_nickname(nickname: &str) -> GachaResult<Self> {
        let wanted = nickname.trim();
        Self::ALL
            .into_iter()
            .find(|p| p.nickname().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| GachaError::UnknownPlayer(wanted.to_string()))
    }

    /// Resolve a stored profile id (`"klenko"`, ...).
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.id() == id)
    }

    pub fn id(&self) -> &'static str {
        match self {
            PlayerProfile::Klenko => "klenko",
            PlayerProfile::Hohoyks => "hohoyks",
            PlayerProfile::Snegurka => "snegurka",
            PlayerProfile::Moroz => "moroz",
        }
    }

    pub fn nickname(&self) -> &'static str {
        match self {
            PlayerProfile::Klenko => "KLENKO",
            PlayerProfile::Hohoyks => "HOHOYKS",
            PlayerProfile::Snegurka => "SNEGURKA",
            PlayerProfile::Moroz => "MOROZ",
        }
    }

    pub fn avatar(&self) -> &'static str {
        match self {
            PlayerProfile::Klenko => "🎅",
            PlayerProfile::Hohoyks => "🎄",
            PlayerProfile::Snegurka => "❄️",
            PlayerProfile::Moroz => "🧙",
        }
    }

    pub fn rules(&self) -> &'static ProfileRules {
        use super::data::*;
        match self {
            PlayerProfile::Klenko => &KLENKO_RULES,
            PlayerProfile::Hohoyks => &HOHOYKS_RULES,
            PlayerProfile::Snegurka => &SNEGURKA_RULES,
            PlayerProfile::Moroz => &MOROZ_RULES,
        }
    }
}

/// How many draws a profile gets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpinPolicy {
    /// Blocked once `cap` draws are done (unless a modifier says otherwise).
    Capped { cap: u32 },
    /// Never blocked; remaining count keeps going below zero past `cap`.
    Overdraft { cap: u32 },
    /// Never blocked, no remaining count.
    Unlimited,
}

impl SpinPolicy {
    pub fn cap(&self) -> Option<u32> {
        match self {
            SpinPolicy::Capped { cap } | SpinPolicy::Overdraft { cap } => Some(*cap),
            SpinPolicy::Unlimited => None,
        }
    }
}

/// Everything that differs between profiles.
#[derive(Debug)]
pub struct ProfileRules {
    pub policy: SpinPolicy,
    /// Percentage weights per rarity, lowest first; sums to 100 including divine.
    pub base_weights: &'static [(Rarity, f64)],
    pub catalog: &'static CatalogSet,
    /// Catalog swapped in once alternate mode is active.
    pub alternate_catalog: Option<&'static CatalogSet>,
    pub milestones: MilestoneRules,
}

/// Milestone triggers, evaluated in field order; the first match wins.
#[derive(Debug, Clone)]
pub struct MilestoneRules {
    pub infinity: Option<InfinityRule>,
    pub notice: Option<SpinNotice>,
    pub floor_removal: Option<FloorRemovalRule>,
    pub flavor: Option<FlavorRule>,
    pub escalation: Option<Escalation>,
    /// Draw number whose rarity is fixed ahead of time.
    pub guaranteed_rarity: Option<(u32, Rarity)>,
}

impl MilestoneRules {
    pub const NONE: MilestoneRules = MilestoneRules {
        infinity: None,
        notice: None,
        floor_removal: None,
        flavor: None,
        escalation: None,
        guaranteed_rarity: None,
    };
}

/// Winning `item` unlocks infinite spins.
#[derive(Debug, Clone)]
pub struct InfinityRule {
    pub item: &'static Item,
    pub message: SpecialMessage,
}

/// Exact spin count that shows a message and may arm a bonus draw.
#[derive(Debug, Clone)]
pub struct SpinNotice {
    pub at_spin: u32,
    pub bonus_item: Option<&'static Item>,
    pub message: SpecialMessage,
}

#[derive(Debug, Clone)]
pub struct FloorRemovalRule {
    pub at_spin: u32,
    pub message: SpecialMessage,
}

/// Display-only message with a small chance per draw after `after_spin`.
#[derive(Debug, Clone)]
pub struct FlavorRule {
    pub after_spin: u32,
    pub chance: f64,
    pub messages: &'static [SpecialMessage],
}

/// Warnings past the cap, ending in alternate mode.
#[derive(Debug, Clone)]
pub struct Escalation {
    pub warnings: &'static [EscalationStep],
    pub alternate_at_offset: u32,
    pub alternate_message: SpecialMessage,
}

#[derive(Debug, Clone)]
pub struct EscalationStep {
    /// Draws past the cap.
    pub offset: u32,
    pub message: SpecialMessage,
}
