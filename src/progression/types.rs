//! Progression state and milestone types.

use crate::items::Item;

/// One completed draw. Appended to the inventory, never edited afterwards
/// (alternate mode replaces whole entries, see `transform_to_alternate`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawResult {
    pub item: &'static Item,
    /// Unix milliseconds.
    pub timestamp: i64,
}

impl DrawResult {
    pub fn new(item: &'static Item) -> Self {
        Self {
            item,
            timestamp: chrono::Utc::now().timestamp_millis(),
        }
    }
}

/// A single player's progression: spin counter, inventory and modifier flags.
///
/// Only `progression::logic` mutates it; `inventory.len() == spin_index`
/// holds after every recorded draw.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProgressionState {
    pub(crate) spin_index: u32,
    pub(crate) inventory: Vec<DrawResult>,
    pub(crate) infinite_spins_unlocked: bool,
    pub(crate) alternate_mode_active: bool,
    pub(crate) rarity_floor_removed: bool,
    pub(crate) pending_bonus_draw: bool,
}

impl ProgressionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Completed draws.
    pub fn spin_index(&self) -> u32 {
        self.spin_index
    }

    pub fn inventory(&self) -> &[DrawResult] {
        &self.inventory
    }

    pub fn infinite_spins_unlocked(&self) -> bool {
        self.infinite_spins_unlocked
    }

    pub fn alternate_mode_active(&self) -> bool {
        self.alternate_mode_active
    }

    pub fn rarity_floor_removed(&self) -> bool {
        self.rarity_floor_removed
    }

    pub fn pending_bonus_draw(&self) -> bool {
        self.pending_bonus_draw
    }
}

/// Tone of a notification, used by the presentation layer for styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Info,
    Success,
    Warning,
    Danger,
}

/// One-shot notification shown after a draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpecialMessage {
    pub kind: MessageKind,
    pub title: &'static str,
    pub body: &'static str,
}

impl SpecialMessage {
    pub const fn new(kind: MessageKind, title: &'static str, body: &'static str) -> Self {
        Self { kind, title, body }
    }
}

/// What a completed draw triggered. At most one per draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MilestoneEvent {
    InfinityUnlocked,
    SpinMilestone { spin: u32, bonus_armed: bool },
    RarityFloorRemoved,
    LuckyFlavor,
    /// `offset` draws past the cap.
    OverdraftWarning { offset: u32 },
    AlternateModeActivated,
}

impl MilestoneEvent {
    /// Whether the event changes progression state (flavor and warnings don't).
    pub fn changes_state(&self) -> bool {
        match self {
            MilestoneEvent::InfinityUnlocked
            | MilestoneEvent::RarityFloorRemoved
            | MilestoneEvent::AlternateModeActivated => true,
            MilestoneEvent::SpinMilestone { bonus_armed, .. } => *bonus_armed,
            MilestoneEvent::LuckyFlavor | MilestoneEvent::OverdraftWarning { .. } => false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Milestone {
    pub event: MilestoneEvent,
    pub message: SpecialMessage,
}
