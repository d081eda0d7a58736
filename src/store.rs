// src/store.rs
// Snapshot file: a pretty-printed JSON array, read once at start and written at most once.

use std::{fs, io, path::Path};

use crate::error::{Error, Result};
use crate::ranking::Snapshot;

/// Read the saved snapshot. A missing file is an `Io` error with `NotFound`.
pub fn load_snapshot(path: &Path) -> Result<Snapshot> {
    let text = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    serde_json::from_str(&text).map_err(|e| Error::json(path, e))
}

/// Write the whole snapshot, creating parent directories as needed.
pub fn save_snapshot(path: &Path, snapshot: &Snapshot) -> Result<()> {
    ensure_parent(path)?;
    let mut text = serde_json::to_string_pretty(snapshot).map_err(|e| Error::json(path, e))?;
    text.push('\n');
    fs::write(path, text).map_err(|e| Error::io(path, e))
}

/// Load the prior snapshot, or start over with an empty one.
///
/// Missing or unreadable files are logged and replaced by an empty array so the
/// next run finds a valid file. Never fails.
pub fn load_or_init(path: &Path) -> Snapshot {
    match load_snapshot(path) {
        Ok(snap) => {
            logd!("Loaded {} records from {}", snap.len(), path.display());
            snap
        }
        Err(e) => {
            match &e {
                Error::Io { source, .. } if source.kind() == io::ErrorKind::NotFound => {
                    logf!("No snapshot at {}; creating an empty one", path.display())
                }
                _ => logw!("Failed to open snapshot: {e}; starting from empty"),
            }
            let empty = Snapshot::default();
            if let Err(e) = save_snapshot(path, &empty) {
                loge!("Could not recreate snapshot file: {e}");
            }
            empty
        }
    }
}

fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
        }
    }
    Ok(())
}
