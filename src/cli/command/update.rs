//! The scheduler entry point: fetch, normalize, reconcile, persist.

use anyhow::Result;
use chrono::{DateTime, Duration, Local, Utc};

use crate::{
    cli::create_spinner,
    fetch::fetch_season_readings,
    reconcile::{reconcile, Reconciled},
    season::{munge, season_start_year},
    store::Store,
    tracker::{updated_recently, FileTracker, LastUpdateTracker, MIN_REFRESH_HOURS},
};

pub async fn update(store: &Store) -> Result<String> {
    let tracker = FileTracker::for_store(store.path());
    let now = Utc::now();

    if updated_recently(&tracker, now, Duration::hours(MIN_REFRESH_HOURS)) {
        return Ok("Store updated recently, nothing to do".to_string());
    }

    let today = Local::now().date_naive();

    let bar = create_spinner("Requesting data from UVM...".to_string());
    let readings = fetch_season_readings(season_start_year(today)).await?;
    bar.finish_with_message(format!("Fetched {} readings", readings.len()));

    let current = munge(&readings, today);
    let table = store.load_table()?;

    match reconcile(&table, &current)? {
        Reconciled::Unchanged => Ok("No new data".to_string()),
        Reconciled::Appended(merged) => {
            store.save_table(&merged)?;
            mark_updated(&tracker, now);
            Ok(format!("New season `{}` appended", current.label()))
        }
        Reconciled::Replaced(merged) => {
            store.save_table(&merged)?;
            mark_updated(&tracker, now);
            Ok(format!("Season `{}` updated", current.label()))
        }
    }
}

// A tracker write failure must not fail an otherwise successful update.
fn mark_updated(tracker: &impl LastUpdateTracker, now: DateTime<Utc>) {
    if let Err(e) = tracker.set(now) {
        eprintln!("Warning: could not record update time: {}", e);
    }
}
