// src/delta.rs
// What changed for one entrant since the last run, in display terms.

use crate::ranking::{PreviousPosition, RankingRecord, Snapshot};

/// Rank movement since the last run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Trend {
    /// Same rank, or nothing to compare against.
    Flat,
    New,
    Up,
    Down,
}

impl Trend {
    pub fn glyph(self) -> &'static str {
        match self {
            Trend::Flat => "",
            Trend::New => "+",
            Trend::Up => "↑",
            Trend::Down => "↓",
        }
    }
}

/// `has_history` is false when the run had no prior snapshot at all; then every
/// entrant would read as new, which says nothing.
pub fn position_change(position: u32, previous: PreviousPosition, has_history: bool) -> Trend {
    if !has_history {
        return Trend::Flat;
    }
    match previous {
        PreviousPosition::Unknown => Trend::Flat,
        PreviousPosition::New => Trend::New,
        PreviousPosition::Ranked(old) if position > old => Trend::Down,
        PreviousPosition::Ranked(old) if position < old => Trend::Up,
        PreviousPosition::Ranked(_) => Trend::Flat,
    }
}

/// Wins gained since the last run. Drops and unknowns are not shown.
pub fn score_change(score: Option<u32>, previous: Option<u32>) -> Option<u32> {
    match (score, previous) {
        (Some(now), Some(then)) if now > then => Some(now - then),
        _ => None,
    }
}

/// One table line before formatting.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Row {
    pub position: u32,
    pub trend: Trend,
    pub name: String,
    pub score: Option<u32>,
    pub gain: Option<u32>,
}

impl Row {
    pub fn from_record(r: &RankingRecord, has_history: bool) -> Self {
        Self {
            position: r.position,
            trend: position_change(r.position, r.previous_position, has_history),
            name: r.name.clone(),
            score: r.score,
            gain: score_change(r.score, r.previous_score),
        }
    }
}

pub fn present(snapshot: &Snapshot, has_history: bool) -> Vec<Row> {
    snapshot
        .records()
        .iter()
        .map(|r| Row::from_record(r, has_history))
        .collect()
}
