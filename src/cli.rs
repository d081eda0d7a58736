// src/cli.rs
use std::io::{self, IsTerminal, Write};
use std::path::PathBuf;

use clap::Parser;

use crate::config::consts::DEFAULT_COUNT;
use crate::config::options::{RunOptions, Source};
use crate::runner;

/// Show the Super Mario Maker 100 Mario Super Expert creator leaderboard,
/// with rank and win changes since the last run.
#[derive(Parser, Debug)]
#[command(name = "smm_ranking", version, about)]
pub struct Args {
    /// Number of rows to show
    #[arg(short = 'n', value_name = "COUNT", default_value_t = DEFAULT_COUNT)]
    pub count: usize,

    /// Highlight this creator (case-insensitive)
    #[arg(short = 'u', long = "username", value_name = "NAME")]
    pub username: Option<String>,

    /// Don't update the saved snapshot
    #[arg(long = "nosave", visible_alias = "no-save")]
    pub no_save: bool,

    /// Disable terminal colors
    #[arg(long)]
    pub no_color: bool,

    /// Snapshot file [default: ./data/leaderboard.json]
    #[arg(long, value_name = "PATH")]
    pub data: Option<PathBuf>,

    /// Read the page from a saved HTML file instead of fetching it
    #[arg(long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    pub fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }

    /// `color` is whether stdout can show it; `--no-color` always wins.
    pub fn into_options(self, color: bool) -> RunOptions {
        let mut opts = RunOptions {
            count: self.count,
            highlight: self.username.filter(|u| !u.is_empty()),
            save: !self.no_save,
            color: color && !self.no_color,
            ..RunOptions::default()
        };
        if let Some(path) = self.data {
            opts.data_path = path;
        }
        if let Some(path) = self.file {
            opts.source = Source::File(path);
        }
        opts
    }
}

pub fn run(args: Args) -> io::Result<()> {
    let opts = args.into_options(io::stdout().is_terminal());
    logd!("Options: {opts:?}");

    let summary = runner::run(&opts);

    let mut out = io::stdout().lock();
    writeln!(out)?;
    writeln!(out, "{}", summary.table)?;
    writeln!(out)?;
    out.flush()
}
