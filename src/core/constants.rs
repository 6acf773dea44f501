// Persistence
pub const SNAPSHOT_SCHEMA_VERSION: u32 = 1;
pub const SNAPSHOT_FILE_NAME: &str = "session.json";

// Probability table
pub const WEIGHT_TOTAL: f64 = 100.0;
pub const WEIGHT_SUM_TOLERANCE: f64 = 0.01;
pub const FLOOR_REMOVAL_RETAIN_FACTOR: f64 = 0.10;

// Decorative reel (ordinary tiers)
pub const REEL_LENGTH: usize = 50;
pub const REEL_WIN_WINDOW_START: usize = 35;
pub const REEL_WIN_WINDOW_SPAN: usize = 10;

// Decorative reel (legendary and above get a longer spin)
pub const HIGH_TIER_REEL_LENGTH: usize = 200;
pub const HIGH_TIER_WIN_WINDOW_START: usize = 150;
pub const HIGH_TIER_WIN_WINDOW_SPAN: usize = 20;

// Reel filler tier thresholds (cumulative)
pub const FILLER_COMMON_THRESHOLD: f64 = 0.50;
pub const FILLER_UNCOMMON_THRESHOLD: f64 = 0.75;
pub const FILLER_RARE_THRESHOLD: f64 = 0.90;
pub const FILLER_EPIC_THRESHOLD: f64 = 0.96;

// Shared milestone spin counts
pub const BASE_SPIN_CAP: u32 = 30;
pub const FLOOR_REMOVAL_SPIN: u32 = 40;
pub const FLAVOR_AFTER_SPIN: u32 = 10;
