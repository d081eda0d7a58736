// src/config/consts.rs

// Net config
pub const LEADERBOARD_URL: &str =
    "https://supermariomakerbookmark.nintendo.net/creators?type=mario_100_super_expert";
pub const USER_AGENT: &str = concat!("smm_ranking/", env!("CARGO_PKG_VERSION"));
pub const REQUEST_TIMEOUT_SECS: u64 = 15;

// Local snapshot
pub const DATA_DIR: &str = "data";
pub const DATA_FILE: &str = "leaderboard.json";

// Display
pub const DEFAULT_COUNT: usize = 10;

// On-disk marker for "no prior record matched"
pub const NEW_ENTRANT: i64 = -1;
