use serde::{Deserialize, Serialize};

/// Rarity tiers in ascending order. Ordering drives selection order,
/// reel length and presentation intensity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rarity {
    Common = 0,
    Uncommon = 1,
    Rare = 2,
    Epic = 3,
    Legendary = 4,
    Mythic = 5,
    Divine = 6,
}

impl Rarity {
    /// All tiers, lowest first.
    pub const ALL: [Rarity; 7] = [
        Rarity::Common,
        Rarity::Uncommon,
        Rarity::Rare,
        Rarity::Epic,
        Rarity::Legendary,
        Rarity::Mythic,
        Rarity::Divine,
    ];

    /// Returns the display name for this rarity tier.
    pub fn name(&self) -> &'static str {
        match self {
            Rarity::Common => "Common",
            Rarity::Uncommon => "Uncommon",
            Rarity::Rare => "Rare",
            Rarity::Epic => "Epic",
            Rarity::Legendary => "Legendary",
            Rarity::Mythic => "Mythic",
            Rarity::Divine => "Divine",
        }
    }

    /// Lowercase key, matching the serialized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Rarity::Common => "common",
            Rarity::Uncommon => "uncommon",
            Rarity::Rare => "rare",
            Rarity::Epic => "epic",
            Rarity::Legendary => "legendary",
            Rarity::Mythic => "mythic",
            Rarity::Divine => "divine",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            Rarity::Common => "#a8d5ba",
            Rarity::Uncommon => "#2dd4bf",
            Rarity::Rare => "#60a5fa",
            Rarity::Epic => "#c084fc",
            Rarity::Legendary => "#fbbf24",
            Rarity::Mythic => "#f43f5e",
            Rarity::Divine => "#ffffff",
        }
    }

    pub fn glow_color(&self) -> &'static str {
        match self {
            Rarity::Common => "rgba(168, 213, 186, 0.5)",
            Rarity::Uncommon => "rgba(45, 212, 191, 0.5)",
            Rarity::Rare => "rgba(96, 165, 250, 0.6)",
            Rarity::Epic => "rgba(192, 132, 252, 0.7)",
            Rarity::Legendary => "rgba(251, 191, 36, 0.8)",
            Rarity::Mythic => "rgba(244, 63, 94, 0.9)",
            Rarity::Divine => "rgba(255, 255, 255, 1.0)",
        }
    }

    /// Confetti pieces the presentation layer should burst on reveal.
    pub fn confetti_count(&self) -> u32 {
        match self {
            Rarity::Common => 0,
            Rarity::Uncommon => 20,
            Rarity::Rare => 50,
            Rarity::Epic => 100,
            Rarity::Legendary => 200,
            Rarity::Mythic => 500,
            Rarity::Divine => 1000,
        }
    }

    /// Reveal sound volume hint (0.0 - 1.0).
    pub fn sound_intensity(&self) -> f32 {
        match self {
            Rarity::Common => 0.3,
            Rarity::Uncommon => 0.4,
            Rarity::Rare => 0.6,
            Rarity::Epic => 0.8,
            Rarity::Legendary | Rarity::Mythic | Rarity::Divine => 1.0,
        }
    }

    /// Suggested reel animation length. Strictly increasing with tier.
    pub fn animation_duration_ms(&self) -> u64 {
        match self {
            Rarity::Common => 4000,
            Rarity::Uncommon => 4500,
            Rarity::Rare => 5000,
            Rarity::Epic => 6000,
            Rarity::Legendary => 7000,
            Rarity::Mythic => 8000,
            Rarity::Divine => 9500,
        }
    }

    /// High tiers get the long reel.
    pub fn is_high_tier(&self) -> bool {
        *self >= Rarity::Legendary
    }
}

/// Immutable catalog entry. Draw results reference items by `id`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Item {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub rarity: Rarity,
    /// Display glyph (emoji) standing in for artwork.
    pub glyph: &'static str,
}

impl Item {
    pub const fn new(
        id: &'static str,
        name: &'static str,
        description: &'static str,
        rarity: Rarity,
        glyph: &'static str,
    ) -> Self {
        Self {
            id,
            name,
            description,
            rarity,
            glyph,
        }
    }

    pub fn color(&self) -> &'static str {
        self.rarity.color()
    }

    pub fn glow_color(&self) -> &'static str {
        self.rarity.glow_color()
    }
}

/// One player's obtainable items: the regular pool plus the divine partition
/// that unlocks once the regular pool is fully collected.
#[derive(Debug)]
pub struct CatalogSet {
    pub items: &'static [Item],
    pub divine: &'static [Item],
}
