// src/runner.rs
// One run: get markup → extract → match against last snapshot → maybe save → render.

use std::fs;

use crate::{
    config::options::{RunOptions, Source},
    core::net,
    delta,
    ranking::Snapshot,
    specs::leaderboard,
    store,
    table::{self, Ansi, Paint, Plain},
};

/// What a run produced.
pub struct RunSummary {
    pub snapshot: Snapshot,
    /// The new ranking differs from the saved one.
    pub changed: bool,
    /// The new ranking was written to disk.
    pub saved: bool,
    pub table: String,
}

/// Fetch or read the page. Failures are logged and give an empty document, which
/// extracts to an empty ranking.
pub fn load_markup(source: &Source) -> String {
    let got = match source {
        Source::Remote(url) => net::http_get(url),
        Source::File(path) => fs::read_to_string(path).map_err(|e| crate::Error::io(path, e)),
    };
    match got {
        Ok(html) => html,
        Err(e) => {
            loge!("Failed to load HTML: {e}");
            s!()
        }
    }
}

/// Extract and match against `prior`. Pure; returns the new snapshot and whether it
/// differs from `prior`.
pub fn evaluate(html_doc: &str, prior: &Snapshot) -> (Snapshot, bool) {
    let entries = leaderboard::parse_doc(html_doc);
    let snapshot = Snapshot::matched(entries, prior);
    let changed = snapshot.differs_from(prior);
    (snapshot, changed)
}

/// Run the whole pipeline with the given markup. The snapshot file is read once and
/// written at most once.
pub fn run_with_markup(html_doc: &str, opts: &RunOptions) -> RunSummary {
    let prior = store::load_or_init(&opts.data_path);
    let (snapshot, changed) = evaluate(html_doc, &prior);
    logd!("{} entrants, changed: {changed}", snapshot.len());

    let mut saved = false;
    if !opts.save {
        logd!("Saving disabled");
    } else if changed {
        match store::save_snapshot(&opts.data_path, &snapshot) {
            Ok(()) => {
                logf!("Saved {} records to {}", snapshot.len(), opts.data_path.display());
                saved = true;
            }
            Err(e) => loge!("Failed to save snapshot: {e}"),
        }
    }

    let rows = delta::present(&snapshot, !prior.is_empty());
    let paint: &dyn Paint = if opts.color { &Ansi } else { &Plain };
    let table = table::render(&rows, opts.count, opts.highlight.as_deref(), paint);

    RunSummary { snapshot, changed, saved, table }
}

pub fn run(opts: &RunOptions) -> RunSummary {
    let html_doc = load_markup(&opts.source);
    run_with_markup(&html_doc, opts)
}
