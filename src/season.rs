//! Season record construction and normalization.
//!
//! A season spans the winter boundary: it starts in September and is
//! labelled "YYYY-YYYY+1". Records are built once from an ordered run of
//! readings and never mutated afterwards.

use chrono::{Datelike, NaiveDate};

use crate::reading::Reading;

/// Depth readings above this are treated as "deep snow" by the noise
/// filter: a zero reported right after them is a sensor artifact.
const DEEP_SNOW_THRESHOLD: u32 = 10;

/// First month of a winter season.
const SEASON_START_MONTH: u32 = 9;

/// One season's normalized date→depth mapping plus its label.
///
/// Date labels are season-local "M/D" strings without zero padding;
/// insertion order is chronological. `None` means "no reliable reading".
#[derive(Debug, Clone)]
pub struct SeasonRecord {
    label: String,
    depths: Vec<(String, Option<u32>)>,
}

impl SeasonRecord {
    /// Builds a record from ordered (date label, depth) pairs. A later pair
    /// for an existing label overwrites the value in place, keeping the
    /// label's original position.
    pub fn new(label: impl Into<String>, pairs: Vec<(String, Option<u32>)>) -> Self {
        let mut record = SeasonRecord {
            label: label.into(),
            depths: Vec::with_capacity(pairs.len()),
        };
        for (date_label, depth) in pairs {
            record.insert(date_label, depth);
        }

        record
    }

    fn insert(&mut self, date_label: String, depth: Option<u32>) {
        match self.depths.iter_mut().find(|(label, _)| *label == date_label) {
            Some(entry) => entry.1 = depth,
            None => self.depths.push((date_label, depth)),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Depth stored under a date label, or `None` if the label is absent.
    pub fn get(&self, date_label: &str) -> Option<Option<u32>> {
        self.depths
            .iter()
            .find(|(label, _)| label == date_label)
            .map(|(_, depth)| *depth)
    }

    /// Date labels in chronological (insertion) order.
    pub fn date_labels(&self) -> impl Iterator<Item = &str> {
        self.depths.iter().map(|(label, _)| label.as_str())
    }

    pub fn depths(&self) -> &[(String, Option<u32>)] {
        &self.depths
    }
}

/// Structural equality: same label, same key set, same values. Key order
/// does not matter; `None` and `Some(0)` are distinct values.
impl PartialEq for SeasonRecord {
    fn eq(&self, other: &Self) -> bool {
        self.label == other.label
            && self.depths.len() == other.depths.len()
            && self
                .depths
                .iter()
                .all(|(label, depth)| other.get(label) == Some(*depth))
    }
}

impl Eq for SeasonRecord {}

/// Season label for a given run date, e.g. "2024-2025".
pub fn season_label(today: NaiveDate) -> String {
    let year = today.year();
    if today.month() >= SEASON_START_MONTH {
        format!("{}-{}", year, year + 1)
    } else {
        format!("{}-{}", year - 1, year)
    }
}

/// Calendar year in which the season containing `today` started. This is
/// the year the upstream feed expects in its query string.
pub fn season_start_year(today: NaiveDate) -> i32 {
    if today.month() >= SEASON_START_MONTH {
        today.year()
    } else {
        today.year() - 1
    }
}

/// Normalizes a chronological run of readings into one season record.
///
/// Dates reduce to non-zero-padded "M/D" labels. A zero depth is kept only
/// when the previous raw reading shows shallow snow (≤ 10); a zero at the
/// start of the run or right after deep snow is a garbage reading and is
/// stored as `None`.
pub fn munge(readings: &[Reading], today: NaiveDate) -> SeasonRecord {
    let mut pairs = Vec::with_capacity(readings.len());
    let mut previous: Option<u32> = None;

    for reading in readings {
        let depth = match (reading.depth, previous) {
            (Some(0), None) => None,
            (Some(0), Some(p)) if p > DEEP_SNOW_THRESHOLD => None,
            (depth, _) => depth,
        };
        pairs.push((date_label(reading.date), depth));
        previous = reading.depth;
    }

    SeasonRecord::new(season_label(today), pairs)
}

fn date_label(date: NaiveDate) -> String {
    format!("{}/{}", date.month(), date.day())
}

// -- Tests -------------------------------------------------------------------
