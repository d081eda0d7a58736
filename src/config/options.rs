// src/config/options.rs
use std::path::PathBuf;

use super::consts::*;

/// Where the leaderboard markup comes from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Source {
    /// Fetch the live page.
    Remote(String),
    /// Read a saved copy of the page.
    File(PathBuf),
}

impl Default for Source {
    fn default() -> Self {
        Source::Remote(s!(LEADERBOARD_URL))
    }
}

/// Everything one run needs, already parsed. The core never reads argv.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunOptions {
    pub source: Source,
    pub data_path: PathBuf,
    /// Rows to display.
    pub count: usize,
    /// Case-insensitive name to highlight.
    pub highlight: Option<String>,
    /// Persist the new snapshot when it changed.
    pub save: bool,
    pub color: bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            source: Source::default(),
            data_path: default_data_path(),
            count: DEFAULT_COUNT,
            highlight: None,
            save: true,
            color: true,
        }
    }
}

pub fn default_data_path() -> PathBuf {
    PathBuf::from(".").join(DATA_DIR).join(DATA_FILE)
}
