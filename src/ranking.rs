// src/ranking.rs
//! Ranking records, snapshots, and the two comparisons against the last saved run:
//! carrying prior rank/score over by name, and deciding whether a save is due.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::config::consts::NEW_ENTRANT;

/// One card as read from the page, before any comparison.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Entry {
    pub position: u32,
    pub name: String,
    /// `None` when the digit sprites could not be read.
    pub score: Option<u32>,
}

/// Where an entrant stood last time.
///
/// On disk this is the `oldPosition` number: a rank, or `-1` for a new entrant.
/// `Unknown` covers files that lack the field; it is never written back.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PreviousPosition {
    #[default]
    Unknown,
    New,
    Ranked(u32),
}

impl PreviousPosition {
    pub fn is_unknown(&self) -> bool {
        matches!(self, PreviousPosition::Unknown)
    }
}

impl Serialize for PreviousPosition {
    fn serialize<S: Serializer>(&self, ser: S) -> Result<S::Ok, S::Error> {
        match self {
            PreviousPosition::Unknown => ser.serialize_none(),
            PreviousPosition::New => ser.serialize_i64(NEW_ENTRANT),
            PreviousPosition::Ranked(p) => ser.serialize_i64(i64::from(*p)),
        }
    }
}

impl<'de> Deserialize<'de> for PreviousPosition {
    fn deserialize<D: Deserializer<'de>>(de: D) -> Result<Self, D::Error> {
        let raw = Option::<i64>::deserialize(de)?;
        Ok(match raw {
            Some(NEW_ENTRANT) => PreviousPosition::New,
            Some(p) if p > 0 => u32::try_from(p)
                .map(PreviousPosition::Ranked)
                .unwrap_or(PreviousPosition::Unknown),
            _ => PreviousPosition::Unknown,
        })
    }
}

/// One entrant's state at a point in time. Field names match the snapshot file.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankingRecord {
    pub position: u32,
    #[serde(
        rename = "oldPosition",
        default,
        skip_serializing_if = "PreviousPosition::is_unknown"
    )]
    pub previous_position: PreviousPosition,
    pub name: String,
    #[serde(rename = "wins", default)]
    pub score: Option<u32>,
    #[serde(rename = "oldWins", default)]
    pub previous_score: Option<u32>,
}

/// The complete ordered ranking of one run. Built whole, never edited.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Snapshot(Vec<RankingRecord>);

impl Snapshot {
    pub fn new(records: Vec<RankingRecord>) -> Self {
        Self(records)
    }

    pub fn records(&self) -> &[RankingRecord] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// First record carrying exactly this name (case-sensitive).
    pub fn find_by_name(&self, name: &str) -> Option<&RankingRecord> {
        self.0.iter().find(|r| r.name == name)
    }

    pub fn at_position(&self, position: u32) -> Option<&RankingRecord> {
        self.0.iter().find(|r| r.position == position)
    }

    /// Attach last run's rank and score to each fresh entry, matching on name.
    ///
    /// The first prior record with that name wins. Prior records are not consumed,
    /// so one of them can feed several new entries with the same name.
    pub fn matched(entries: Vec<Entry>, prior: &Snapshot) -> Self {
        let records = entries
            .into_iter()
            .map(|e| {
                let (previous_position, previous_score) = match prior.find_by_name(&e.name) {
                    Some(old) => (PreviousPosition::Ranked(old.position), old.score),
                    None => (PreviousPosition::New, None),
                };
                RankingRecord {
                    position: e.position,
                    previous_position,
                    name: e.name,
                    score: e.score,
                    previous_score,
                }
            })
            .collect();
        Self(records)
    }

    /// True when any position's `(name, score)` differs from `old` at the same
    /// position, or `old` has nobody there. Only decides whether to save.
    pub fn differs_from(&self, old: &Snapshot) -> bool {
        self.0.iter().any(|new| match old.at_position(new.position) {
            Some(prev) => prev.name != new.name || prev.score != new.score,
            None => true,
        })
    }
}
