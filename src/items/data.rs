//! Static item catalogs.

use super::types::{CatalogSet, Item, Rarity};

// ═══════════════════════════════════════════════════════════════
// KLENKO - the unlucky one, mostly coal
// ═══════════════════════════════════════════════════════════════

pub static KLENKO_ITEMS: &[Item] = &[
    Item::new("klenko_coal_piece", "Lump of Coal", "For naughty children", Rarity::Common, "⬛"),
    Item::new("klenko_coal_chunk", "Coal Briquette", "Big and black", Rarity::Common, "🪨"),
    Item::new("klenko_coal_dust", "Coal Dust", "Gets all over your hands", Rarity::Common, "🖤"),
    Item::new("klenko_coal_small", "Tiny Ember", "Barely there at all", Rarity::Common, "◾"),
    Item::new("klenko_coal_shiny", "Shiny Coal", "Almost a diamond... almost", Rarity::Common, "💎"),
    Item::new("klenko_coal_old", "Old Coal", "Left over from last year", Rarity::Common, "⚫"),
    Item::new("klenko_coal_warm", "Warm Coal", "Still hasn't cooled down", Rarity::Common, "🔥"),
    Item::new("klenko_coal_gift", "Gift-Wrapped Coal", "A present? Surprise!", Rarity::Common, "🎁"),
    Item::new("klenko_christmas_ball", "Tree Bauble", "Sparkles in the garland light", Rarity::Uncommon, "🔴"),
    Item::new("klenko_gift_box", "Gift Box", "What could be inside?", Rarity::Uncommon, "🎁"),
    Item::new("klenko_wreath", "Christmas Wreath", "Decorated with red berries", Rarity::Uncommon, "💚"),
    Item::new("klenko_star_cookie", "Star Cookie", "Covered in icing", Rarity::Uncommon, "⭐"),
    Item::new("klenko_snow_globe", "Snow Globe", "A tiny winter inside", Rarity::Rare, "🔮"),
    Item::new("klenko_ice_skates", "Ice Skates", "Made for the frozen pond", Rarity::Rare, "⛸️"),
    Item::new("klenko_nutcracker", "Nutcracker", "A wooden soldier", Rarity::Rare, "🪖"),
    Item::new("klenko_magic_sleigh", "Magic Sleigh", "It flies across the sky!", Rarity::Epic, "🛷"),
    Item::new("klenko_aurora_bottle", "Aurora in a Bottle", "Shimmers in every colour", Rarity::Epic, "🌌"),
    Item::new("klenko_santas_hat", "Santa's Hat", "The real one. Warm and magical", Rarity::Legendary, "🎅"),
    Item::new("klenko_infinite_gift", "Endless Gift", "A new surprise every time", Rarity::Legendary, "🎁"),
    Item::new("klenko_santas_bag", "Santa's Sack", "Holds every gift in the world", Rarity::Mythic, "🎒"),
];

pub static KLENKO_DIVINE: &[Item] = &[Item::new(
    "klenko_minecraft_key",
    "Minecraft Key for KLENKO",
    "A special gift from the creator: a Minecraft Java Edition licence",
    Rarity::Divine,
    "🔑",
)];

/// Same shape as `KLENKO_ITEMS`; entry N of each rarity pairs with entry N here.
pub static KLENKO_HELL_ITEMS: &[Item] = &[
    Item::new("klenko_hell_coal_piece", "🔥 Hellfire Coal", "Burns with an eternal flame", Rarity::Common, "🔥"),
    Item::new("klenko_hell_coal_chunk", "🔥 Blazing Briquette", "Scorches the soul", Rarity::Common, "💀"),
    Item::new("klenko_hell_coal_dust", "🔥 Ashes of the Damned", "What is left of the sinners", Rarity::Common, "☠️"),
    Item::new("klenko_hell_coal_small", "🔥 Spark of Hell", "Small, but dangerous", Rarity::Common, "⚡"),
    Item::new("klenko_hell_coal_shiny", "🔥 Blood Diamond", "Soaked in suffering", Rarity::Common, "💎"),
    Item::new("klenko_hell_coal_old", "🔥 Ancient Ash", "From the first circle", Rarity::Common, "🌑"),
    Item::new("klenko_hell_coal_warm", "🔥 Heat of the Underworld", "It will never cool", Rarity::Common, "🌋"),
    Item::new("klenko_hell_coal_gift", "🔥 Cursed Gift", "A present from the devil himself", Rarity::Common, "👹"),
    Item::new("klenko_hell_christmas_ball", "🔥 Bauble of Curses", "Reflects your sins", Rarity::Uncommon, "🔴"),
    Item::new("klenko_hell_gift_box", "🔥 Pandora's Box", "Better left closed", Rarity::Uncommon, "📦"),
    Item::new("klenko_hell_wreath", "🔥 Wreath of Thorns", "Prickly and dangerous", Rarity::Uncommon, "🥀"),
    Item::new("klenko_hell_star_cookie", "🔥 Cookie of Despair", "Tastes bitter", Rarity::Uncommon, "🍪"),
    Item::new("klenko_hell_snow_globe", "🔥 Globe of Nightmares", "Eternal darkness inside", Rarity::Rare, "🌑"),
    Item::new("klenko_hell_ice_skates", "🔥 Skates of Suffering", "They cut the ice of hell", Rarity::Rare, "⛸️"),
    Item::new("klenko_hell_nutcracker", "🔥 Bonecracker", "Cracks more than nuts", Rarity::Rare, "💀"),
    Item::new("klenko_hell_magic_sleigh", "🔥 Chariot of Hell", "Rides straight to the underworld", Rarity::Epic, "🛷"),
    Item::new("klenko_hell_aurora_bottle", "🔥 Blood Aurora", "Northern lights from below", Rarity::Epic, "🩸"),
    Item::new("klenko_hell_santas_hat", "🔥 Krampus's Hat", "Worn by the Christmas demon", Rarity::Legendary, "👹"),
    Item::new("klenko_hell_infinite_gift", "🔥 Endless Curse", "Gives nothing but suffering", Rarity::Legendary, "💀"),
    Item::new("klenko_hell_santas_bag", "🔥 Sack of Souls", "Holds the souls of sinners", Rarity::Mythic, "👻"),
];

pub static KLENKO_HELL_DIVINE: &[Item] = &[Item::new(
    "klenko_hell_minecraft_key",
    "🔥 Cursed Minecraft Key",
    "Forged in hell: a Minecraft Java Edition licence... but at what price?",
    Rarity::Divine,
    "🗝️",
)];

/// Coal items counted by the coal magnate achievement.
pub const COAL_ITEM_IDS: &[&str] = &[
    "klenko_coal_piece",
    "klenko_coal_chunk",
    "klenko_coal_dust",
    "klenko_coal_shiny",
    "klenko_coal_gift",
];

// ═══════════════════════════════════════════════════════════════
// HOHOYKS - the lucky one
// ═══════════════════════════════════════════════════════════════

pub static HOHOYKS_ITEMS: &[Item] = &[
    Item::new("hohoyks_snowflake", "Snowflake", "Unique and beautiful", Rarity::Common, "❄️"),
    Item::new("hohoyks_candy_cane", "Candy Cane", "Minty and sweet", Rarity::Common, "🍬"),
    Item::new("hohoyks_mittens", "Mittens", "Warm and cosy", Rarity::Common, "🧤"),
    Item::new("hohoyks_ornament", "Tree Ornament", "Shiny and bright", Rarity::Common, "🎀"),
    Item::new("hohoyks_stocking", "Christmas Stocking", "Room for presents", Rarity::Common, "🧦"),
    Item::new("hohoyks_snowman_hat", "Snowman's Hat", "A little battered", Rarity::Uncommon, "🎩"),
    Item::new("hohoyks_jingle_bells", "Jingle Bells", "Ding-ding-ding!", Rarity::Uncommon, "🎶"),
    Item::new("hohoyks_christmas_lights", "Fairy Lights", "Blink in every colour", Rarity::Uncommon, "✨"),
    Item::new("hohoyks_eggnog", "Eggnog", "A festive drink", Rarity::Uncommon, "🥛"),
    Item::new("hohoyks_gingerbread", "Gingerbread Man", "Tasty and fragrant", Rarity::Uncommon, "🍪"),
    Item::new("hohoyks_reindeer_plush", "Plush Reindeer", "Soft and fluffy", Rarity::Rare, "🦌"),
    Item::new("hohoyks_christmas_sweater", "Holiday Sweater", "With reindeer and trees", Rarity::Rare, "🧥"),
    Item::new("hohoyks_music_box", "Music Box", "Plays 'Jingle Bells'", Rarity::Rare, "🎵"),
    Item::new("hohoyks_crystal_star", "Crystal Star", "For the top of the tree", Rarity::Rare, "💫"),
    Item::new("hohoyks_eternal_wreath", "Evergreen Wreath", "Never wilts", Rarity::Epic, "🌿"),
    Item::new("hohoyks_golden_bell", "Golden Bell", "Grants wishes when it rings", Rarity::Epic, "🔔"),
    Item::new("hohoyks_frost_wand", "Frost Staff", "Conjures snowflakes", Rarity::Epic, "🪄"),
    Item::new("hohoyks_reindeer_antlers", "Rudolph's Antlers", "They glow in the dark!", Rarity::Legendary, "✨"),
    Item::new("hohoyks_golden_tree", "Golden Tree", "Shines brighter than the sun", Rarity::Legendary, "🌟"),
    Item::new("hohoyks_time_crystal", "Time Crystal", "Stops midnight forever", Rarity::Mythic, "💎"),
];

pub static HOHOYKS_DIVINE: &[Item] = &[Item::new(
    "hohoyks_minecraft_key",
    "Minecraft Key for HOHOYKS",
    "A special gift from the creator: a Minecraft Java Edition licence",
    Rarity::Divine,
    "🔑",
)];

/// Secret legendary outside the regular pool; only obtainable as a bonus draw.
pub static HOHOYKS_INFINITY_SPIN: Item = Item::new(
    "hohoyks_infinity_spin",
    "⚡ Infinity Spin ⚡",
    "A legendary artifact from another universe. Grants endless spins!",
    Rarity::Legendary,
    "♾️",
);

// ═══════════════════════════════════════════════════════════════
// SNEGURKA - a plain thirty-gift run
// ═══════════════════════════════════════════════════════════════

pub static SNEGURKA_ITEMS: &[Item] = &[
    Item::new("snegurka_icicle", "Icicle", "Drips when the sun comes out", Rarity::Common, "🧊"),
    Item::new("snegurka_pinecone", "Pinecone", "Smells like the forest", Rarity::Common, "🌰"),
    Item::new("snegurka_tangerine", "Tangerine", "The taste of New Year", Rarity::Common, "🍊"),
    Item::new("snegurka_scarf", "Knitted Scarf", "A little too long", Rarity::Common, "🧣"),
    Item::new("snegurka_sled", "Wooden Sled", "Fast downhill, slow uphill", Rarity::Uncommon, "🛷"),
    Item::new("snegurka_tea", "Berry Tea", "Warms you from the inside", Rarity::Uncommon, "🍵"),
    Item::new("snegurka_lantern", "Paper Lantern", "Glows softly", Rarity::Uncommon, "🏮"),
    Item::new("snegurka_crown", "Frost Crown", "Made of woven snowflakes", Rarity::Rare, "👑"),
    Item::new("snegurka_harp", "Ice Harp", "Each string a different chill", Rarity::Rare, "🎼"),
    Item::new("snegurka_troika", "Silver Troika", "Three horses and a bell", Rarity::Epic, "🐎"),
    Item::new("snegurka_mirror", "Winter Mirror", "Shows next year's snow", Rarity::Epic, "🪞"),
    Item::new("snegurka_firebird", "Firebird Feather", "Warm even in a blizzard", Rarity::Legendary, "🪶"),
    Item::new("snegurka_heart", "Heart of Winter", "Beats once a year", Rarity::Mythic, "💙"),
];

pub static SNEGURKA_DIVINE: &[Item] = &[Item::new(
    "snegurka_northern_star",
    "Northern Star",
    "Guides every lost traveller home",
    Rarity::Divine,
    "🌠",
)];

// ═══════════════════════════════════════════════════════════════
// MOROZ - the creator, no spin limit
// ═══════════════════════════════════════════════════════════════

pub static MOROZ_ITEMS: &[Item] = &[
    Item::new("moroz_snowball", "Snowball", "Perfectly round", Rarity::Common, "⚪"),
    Item::new("moroz_boots", "Felt Boots", "Valenki, the real deal", Rarity::Common, "🥾"),
    Item::new("moroz_bell", "Sleigh Bell", "Rings on every bump", Rarity::Common, "🔔"),
    Item::new("moroz_beard_comb", "Beard Comb", "Carved from birch", Rarity::Uncommon, "🪮"),
    Item::new("moroz_list", "The List", "Naughty on one side, nice on the other", Rarity::Uncommon, "📜"),
    Item::new("moroz_lamp", "Workshop Lamp", "Burns all night in December", Rarity::Uncommon, "🪔"),
    Item::new("moroz_staff", "Crystal Staff", "Freezes rivers with a tap", Rarity::Rare, "🦯"),
    Item::new("moroz_coat", "Blue Fur Coat", "Embroidered with silver frost", Rarity::Rare, "🧥"),
    Item::new("moroz_workshop", "Toy Workshop", "Never stops humming", Rarity::Epic, "🏭"),
    Item::new("moroz_clock", "Midnight Clock", "Always five minutes to twelve", Rarity::Epic, "🕛"),
    Item::new("moroz_palace", "Ice Palace", "Built in a single night", Rarity::Legendary, "🏰"),
    Item::new("moroz_aurora", "Living Aurora", "It follows you home", Rarity::Mythic, "🌌"),
];

pub static MOROZ_DIVINE: &[Item] = &[Item::new(
    "moroz_first_snow",
    "The First Snow",
    "The snowflake every winter starts from",
    Rarity::Divine,
    "❄️",
)];

// ═══════════════════════════════════════════════════════════════
// Catalog sets
// ═══════════════════════════════════════════════════════════════

pub static KLENKO_CATALOG: CatalogSet = CatalogSet {
    items: KLENKO_ITEMS,
    divine: KLENKO_DIVINE,
};

pub static KLENKO_HELL_CATALOG: CatalogSet = CatalogSet {
    items: KLENKO_HELL_ITEMS,
    divine: KLENKO_HELL_DIVINE,
};

pub static HOHOYKS_CATALOG: CatalogSet = CatalogSet {
    items: HOHOYKS_ITEMS,
    divine: HOHOYKS_DIVINE,
};

pub static SNEGURKA_CATALOG: CatalogSet = CatalogSet {
    items: SNEGURKA_ITEMS,
    divine: SNEGURKA_DIVINE,
};

pub static MOROZ_CATALOG: CatalogSet = CatalogSet {
    items: MOROZ_ITEMS,
    divine: MOROZ_DIVINE,
};

/// Every catalog set, for id lookups across profiles.
pub static ALL_CATALOGS: &[&CatalogSet] = &[
    &KLENKO_CATALOG,
    &KLENKO_HELL_CATALOG,
    &HOHOYKS_CATALOG,
    &SNEGURKA_CATALOG,
    &MOROZ_CATALOG,
];

/// Items that exist outside every catalog set.
pub static SECRET_ITEMS: &[&Item] = &[&HOHOYKS_INFINITY_SPIN];
