//! Static achievement definitions.

use super::types::{AchievementDef, AchievementId};
use crate::profiles::PlayerProfile;

/// All achievement definitions in display order.
pub const ALL_ACHIEVEMENTS: &[AchievementDef] = &[
    // ═══════════════════════════════════════════════════════════════
    // GENERAL
    // ═══════════════════════════════════════════════════════════════
    AchievementDef {
        id: AchievementId::FirstSpin,
        name: "First Time",
        description: "Make your first spin",
        profile: None,
        secret: false,
        icon: "🎰",
    },
    AchievementDef {
        id: AchievementId::TenSpins,
        name: "Warmed Up",
        description: "Make 10 spins",
        profile: None,
        secret: false,
        icon: "🔟",
    },
    AchievementDef {
        id: AchievementId::Rainbow,
        name: "Rainbow",
        description: "Collect items of 5 different rarities",
        profile: None,
        secret: false,
        icon: "🌈",
    },
    AchievementDef {
        id: AchievementId::DivineDrop,
        name: "Divine",
        description: "Win a divine item",
        profile: None,
        secret: false,
        icon: "👑",
    },
    AchievementDef {
        id: AchievementId::Collector,
        name: "Collector",
        description: "Collect every regular item in your catalog",
        profile: None,
        secret: false,
        icon: "📚",
    },
    // ═══════════════════════════════════════════════════════════════
    // KLENKO
    // ═══════════════════════════════════════════════════════════════
    AchievementDef {
        id: AchievementId::CoalMagnate,
        name: "Coal Magnate",
        description: "Collect 5 different kinds of coal",
        profile: Some(PlayerProfile::Klenko),
        secret: false,
        icon: "⛏️",
    },
    AchievementDef {
        id: AchievementId::Unlucky,
        name: "Unlucky",
        description: "Win 3 common items in a row",
        profile: Some(PlayerProfile::Klenko),
        secret: false,
        icon: "😭",
    },
    AchievementDef {
        id: AchievementId::UnexpectedLuck,
        name: "Unexpected!",
        description: "Win a legendary or better within the first 10 spins",
        profile: Some(PlayerProfile::Klenko),
        secret: false,
        icon: "🍀",
    },
    AchievementDef {
        id: AchievementId::HellTourist,
        name: "Hell Tourist",
        description: "Enter hell mode",
        profile: Some(PlayerProfile::Klenko),
        secret: true,
        icon: "😈",
    },
    // ═══════════════════════════════════════════════════════════════
    // HOHOYKS
    // ═══════════════════════════════════════════════════════════════
    AchievementDef {
        id: AchievementId::Infinity,
        name: "Infinity",
        description: "Win the Infinity Spin",
        profile: Some(PlayerProfile::Hohoyks),
        secret: true,
        icon: "♾️",
    },
    AchievementDef {
        id: AchievementId::Lucky,
        name: "Lucky",
        description: "Win an epic or better within the first 5 spins",
        profile: Some(PlayerProfile::Hohoyks),
        secret: false,
        icon: "⚡",
    },
];

/// Get the definition for a specific achievement.
pub fn get_achievement_def(id: AchievementId) -> Option<&'static AchievementDef> {
    ALL_ACHIEVEMENTS.iter().find(|a| a.id == id)
}

/// Achievements `profile` can earn, in display order.
pub fn achievements_for(profile: PlayerProfile) -> Vec<&'static AchievementDef> {
    ALL_ACHIEVEMENTS
        .iter()
        .filter(|a| a.available_to(profile))
        .collect()
}
