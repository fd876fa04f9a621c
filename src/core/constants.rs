// Experience curve
pub const BASE_EXP_PER_LEVEL: u64 = 100;
pub const EXP_STEP_PER_LEVEL: u64 = 50;

// Rank points
pub const RANK_POINTS_PER_LEVEL_UP: u32 = 10;
pub const RANK_POINTS_PER_COMPLETION: u32 = 5;

// Streaks
pub const STREAK_LOOKBACK_DAYS: u32 = 100;

// Task catalog
pub const TASK_EXP_MIN: u64 = 5;
pub const TASK_EXP_MAX: u64 = 200;

// Persistence
pub const SAVE_FILE_VERSION: u32 = 1;
pub const SAVE_FILE_NAME: &str = "tracker.json";

// Ledger day keys are ISO calendar dates
pub const DAY_KEY_FORMAT: &str = "%Y-%m-%d";
