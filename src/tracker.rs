//! Last-update tracking, used to skip runs when nothing new can exist
//! upstream yet.

use std::{fs, io, path::PathBuf};

use chrono::{DateTime, Duration, Utc};

/// Hours between upstream publishes; a successful update younger than this
/// cannot be stale.
pub const MIN_REFRESH_HOURS: i64 = 2;

/// Get/set capability over the timestamp of the last successful update.
pub trait LastUpdateTracker {
    /// Last recorded update time, or `None` when no usable record exists.
    fn get(&self) -> Option<DateTime<Utc>>;

    fn set(&self, when: DateTime<Utc>) -> io::Result<()>;
}

/// Whether the last recorded update is recent enough to skip this run.
/// A missing or unreadable record never blocks a run.
pub fn updated_recently(
    tracker: &impl LastUpdateTracker,
    now: DateTime<Utc>,
    max_age: Duration,
) -> bool {
    match tracker.get() {
        Some(last) => now.signed_duration_since(last) < max_age,
        None => false,
    }
}

/// File-backed tracker: one RFC 3339 timestamp stored next to the table.
pub struct FileTracker {
    path: PathBuf,
}

impl FileTracker {
    pub fn new(path: PathBuf) -> Self {
        FileTracker { path }
    }

    /// Tracker file sibling to the store resource.
    pub fn for_store(store_path: &std::path::Path) -> Self {
        FileTracker::new(store_path.with_extension("last_update"))
    }
}

impl LastUpdateTracker for FileTracker {
    fn get(&self) -> Option<DateTime<Utc>> {
        let text = fs::read_to_string(&self.path).ok()?;
        DateTime::parse_from_rfc3339(text.trim())
            .ok()
            .map(|t| t.with_timezone(&Utc))
    }

    fn set(&self, when: DateTime<Utc>) -> io::Result<()> {
        fs::write(&self.path, when.to_rfc3339())
    }
}

// -- Tests -------------------------------------------------------------------
