//! Durable, bounded comparison history.
//!
//! The list holds at most [`MAX_ENTRIES`] records, most recent first, and is
//! persisted as one serialized JSON array behind the [`HistoryStore`] trait.
//! Pairs are deduplicated without regard to order: recording (A,B) replaces
//! an earlier (B,A). History is best-effort: a corrupt blob reads as empty
//! and a failed write is logged and swallowed.

use std::fs;
use std::io;
use std::path::PathBuf;

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::core::model::Pokemon;

/// Maximum number of retained records; the oldest is evicted beyond this.
pub const MAX_ENTRIES: usize = 10;

/// File name of the persisted blob inside the data directory.
pub const STORAGE_FILE: &str = "comparison_history.json";

/// One recorded comparison.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub name_first: String,
    pub display_name_first: String,
    pub name_second: String,
    pub display_name_second: String,
    /// Milliseconds since the UNIX epoch, UTC.
    pub timestamp: i64,
}

impl HistoryEntry {
    /// Unordered pair equality: (A,B) collides with (B,A).
    fn same_pair(&self, first: &str, second: &str) -> bool {
        (self.name_first == first && self.name_second == second)
            || (self.name_first == second && self.name_second == first)
    }
}

// ============================================================================
// Storage Abstraction
// ============================================================================

/// Whole-blob storage collaborator. The history logic reads and replaces the
/// entire serialized list on every update.
pub trait HistoryStore {
    /// The stored blob, or `None` when nothing has been stored yet.
    fn load(&self) -> Option<String>;
    fn save(&self, blob: &str) -> io::Result<()>;
    fn clear(&self) -> io::Result<()>;
}

/// File-backed store under the configured data directory.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

impl HistoryStore for FileStore {
    fn load(&self) -> Option<String> {
        fs::read_to_string(&self.path).ok()
    }

    fn save(&self, blob: &str) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, blob)
    }

    fn clear(&self) -> io::Result<()> {
        match fs::remove_file(&self.path) {
            Err(err) if err.kind() != io::ErrorKind::NotFound => Err(err),
            _ => Ok(()),
        }
    }
}

// ============================================================================
// History
// ============================================================================

pub struct ComparisonHistory<S: HistoryStore> {
    store: S,
}

impl<S: HistoryStore> ComparisonHistory<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// All retained records, most recent first. A missing or corrupt blob
    /// reads as an empty history.
    pub fn entries(&self) -> Vec<HistoryEntry> {
        let Some(blob) = self.store.load() else {
            return Vec::new();
        };
        match serde_json::from_str(&blob) {
            Ok(entries) => entries,
            Err(err) => {
                log::warn!("history blob failed to parse, treating as empty: {err}");
                Vec::new()
            }
        }
    }

    /// Record one viewed comparison. Replaces any earlier record of the same
    /// unordered pair, prepends, then evicts beyond [`MAX_ENTRIES`]. Write
    /// failures are logged and swallowed.
    pub fn record(&self, first: &Pokemon, second: &Pokemon) {
        self.record_names(
            &first.name,
            &first.display_name,
            &second.name,
            &second.display_name,
        );
    }

    /// Name-level variant of [`record`](Self::record) for callers that hold
    /// only listing references.
    pub fn record_names(
        &self,
        name_first: &str,
        display_name_first: &str,
        name_second: &str,
        display_name_second: &str,
    ) {
        let mut entries = self.entries();
        entries.retain(|entry| !entry.same_pair(name_first, name_second));

        entries.insert(
            0,
            HistoryEntry {
                name_first: name_first.to_string(),
                display_name_first: display_name_first.to_string(),
                name_second: name_second.to_string(),
                display_name_second: display_name_second.to_string(),
                timestamp: Utc::now().timestamp_millis(),
            },
        );
        entries.truncate(MAX_ENTRIES);

        match serde_json::to_string(&entries) {
            Ok(blob) => {
                if let Err(err) = self.store.save(&blob) {
                    log::warn!("failed to save comparison history: {err}");
                }
            }
            Err(err) => log::warn!("failed to serialize comparison history: {err}"),
        }
    }
}
