//! Per-profile rules: spin policy, base odds and milestones.

use super::types::{
    Escalation, EscalationStep, FlavorRule, FloorRemovalRule, InfinityRule, MilestoneRules,
    ProfileRules, SpinNotice, SpinPolicy,
};
use crate::core::constants::{BASE_SPIN_CAP, FLAVOR_AFTER_SPIN, FLOOR_REMOVAL_SPIN};
use crate::items::data::{
    HOHOYKS_CATALOG, HOHOYKS_INFINITY_SPIN, KLENKO_CATALOG, KLENKO_HELL_CATALOG, MOROZ_CATALOG,
    SNEGURKA_CATALOG,
};
use crate::items::Rarity;
use crate::progression::{MessageKind, SpecialMessage};

pub static LUCK_MESSAGES: &[SpecialMessage] = &[
    SpecialMessage::new(MessageKind::Info, "Feeling lucky", "The snow whispers of good fortune."),
    SpecialMessage::new(MessageKind::Info, "Something shiny", "The reel feels warmer than usual..."),
    SpecialMessage::new(MessageKind::Info, "Lucky streak", "Santa is watching. In a good way."),
];

// ═══════════════════════════════════════════════════════════════
// KLENKO
// ═══════════════════════════════════════════════════════════════

pub static KLENKO_WARNINGS: &[EscalationStep] = &[
    EscalationStep {
        offset: 1,
        message: SpecialMessage::new(
            MessageKind::Warning,
            "Minus one?",
            "The counter says -1 gifts left. That can't be right... can it?",
        ),
    },
    EscalationStep {
        offset: 3,
        message: SpecialMessage::new(
            MessageKind::Warning,
            "Something is off",
            "The gifts keep coming. The counter keeps falling.",
        ),
    },
    EscalationStep {
        offset: 6,
        message: SpecialMessage::new(
            MessageKind::Danger,
            "Reality is cracking",
            "The coal is getting warmer. Much warmer.",
        ),
    },
    EscalationStep {
        offset: 9,
        message: SpecialMessage::new(
            MessageKind::Danger,
            "Last warning",
            "One more gift and there is no way back.",
        ),
    },
];

pub static KLENKO_RULES: ProfileRules = ProfileRules {
    policy: SpinPolicy::Overdraft { cap: BASE_SPIN_CAP },
    base_weights: &[
        (Rarity::Common, 55.0),
        (Rarity::Uncommon, 22.0),
        (Rarity::Rare, 12.0),
        (Rarity::Epic, 6.0),
        (Rarity::Legendary, 3.0),
        (Rarity::Mythic, 1.5),
        (Rarity::Divine, 0.5),
    ],
    catalog: &KLENKO_CATALOG,
    alternate_catalog: Some(&KLENKO_HELL_CATALOG),
    milestones: MilestoneRules {
        notice: Some(SpinNotice {
            at_spin: BASE_SPIN_CAP,
            bonus_item: None,
            message: SpecialMessage::new(
                MessageKind::Info,
                "All gifts opened",
                "That was the last one... or was it?",
            ),
        }),
        escalation: Some(Escalation {
            warnings: KLENKO_WARNINGS,
            alternate_at_offset: 10,
            alternate_message: SpecialMessage::new(
                MessageKind::Danger,
                "Welcome to hell",
                "Everything you collected has been reforged in fire.",
            ),
        }),
        ..MilestoneRules::NONE
    },
};

// ═══════════════════════════════════════════════════════════════
// HOHOYKS
// ═══════════════════════════════════════════════════════════════

pub static HOHOYKS_RULES: ProfileRules = ProfileRules {
    policy: SpinPolicy::Capped { cap: BASE_SPIN_CAP },
    base_weights: &[
        (Rarity::Common, 35.0),
        (Rarity::Uncommon, 28.0),
        (Rarity::Rare, 18.0),
        (Rarity::Epic, 10.0),
        (Rarity::Legendary, 5.0),
        (Rarity::Mythic, 3.0),
        (Rarity::Divine, 1.0),
    ],
    catalog: &HOHOYKS_CATALOG,
    alternate_catalog: None,
    milestones: MilestoneRules {
        infinity: Some(InfinityRule {
            item: &HOHOYKS_INFINITY_SPIN,
            message: SpecialMessage::new(
                MessageKind::Success,
                "Infinity Spin!",
                "Time has no power over you. Your spins are now endless.",
            ),
        }),
        notice: Some(SpinNotice {
            at_spin: BASE_SPIN_CAP,
            bonus_item: Some(&HOHOYKS_INFINITY_SPIN),
            message: SpecialMessage::new(
                MessageKind::Success,
                "A gift from another universe",
                "A bonus spin has appeared. It is guaranteed to be something special.",
            ),
        }),
        floor_removal: Some(FloorRemovalRule {
            at_spin: FLOOR_REMOVAL_SPIN,
            message: SpecialMessage::new(
                MessageKind::Success,
                "The coal is gone",
                "Common and uncommon gifts are now ten times rarer.",
            ),
        }),
        flavor: Some(FlavorRule {
            after_spin: FLAVOR_AFTER_SPIN,
            chance: 0.05,
            messages: LUCK_MESSAGES,
        }),
        ..MilestoneRules::NONE
    },
};

// ═══════════════════════════════════════════════════════════════
// SNEGURKA
// ═══════════════════════════════════════════════════════════════

pub static SNEGURKA_RULES: ProfileRules = ProfileRules {
    policy: SpinPolicy::Capped { cap: BASE_SPIN_CAP },
    base_weights: &[
        (Rarity::Common, 45.0),
        (Rarity::Uncommon, 25.0),
        (Rarity::Rare, 15.0),
        (Rarity::Epic, 8.0),
        (Rarity::Legendary, 4.0),
        (Rarity::Mythic, 2.0),
        (Rarity::Divine, 1.0),
    ],
    catalog: &SNEGURKA_CATALOG,
    alternate_catalog: None,
    milestones: MilestoneRules {
        notice: Some(SpinNotice {
            at_spin: BASE_SPIN_CAP,
            bonus_item: None,
            message: SpecialMessage::new(
                MessageKind::Info,
                "All gifts opened",
                "Happy New Year!",
            ),
        }),
        ..MilestoneRules::NONE
    },
};

// ═══════════════════════════════════════════════════════════════
// MOROZ
// ═══════════════════════════════════════════════════════════════

pub static MOROZ_RULES: ProfileRules = ProfileRules {
    policy: SpinPolicy::Unlimited,
    base_weights: &[
        (Rarity::Common, 40.0),
        (Rarity::Uncommon, 26.0),
        (Rarity::Rare, 16.0),
        (Rarity::Epic, 9.0),
        (Rarity::Legendary, 5.0),
        (Rarity::Mythic, 3.0),
        (Rarity::Divine, 1.0),
    ],
    catalog: &MOROZ_CATALOG,
    alternate_catalog: None,
    milestones: MilestoneRules {
        flavor: Some(FlavorRule {
            after_spin: FLAVOR_AFTER_SPIN,
            chance: 0.03,
            messages: LUCK_MESSAGES,
        }),
        guaranteed_rarity: Some((200, Rarity::Mythic)),
        ..MilestoneRules::NONE
    },
};
