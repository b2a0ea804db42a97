//! Upstream snow depth observation.

use chrono::NaiveDate;

/// One observation from the summit station feed. A missing or unparseable
/// depth is kept as `None` rather than dropped, so the noise filter can see
/// the gap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reading {
    pub date: NaiveDate,
    pub depth: Option<u32>,
}

impl Reading {
    /// Parses one data row of the feed, e.g. `("2024-01-05", "33")`.
    ///
    /// Returns `None` for rows that are not date-keyed data, such as the
    /// season-name banner row or trailing blank lines.
    pub fn from_row(date_field: &str, depth_field: &str) -> Option<Self> {
        let date = NaiveDate::parse_from_str(date_field.trim(), "%Y-%m-%d").ok()?;
        let depth = depth_field.trim().parse::<u32>().ok();

        Some(Reading { date, depth })
    }
}

// -- Tests -------------------------------------------------------------------

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn should_parse_row() {
        let reading = Reading::from_row("2024-01-05", "33").unwrap();

        assert_eq!(reading.date, NaiveDate::from_ymd_opt(2024, 1, 5).unwrap());
        assert_eq!(reading.depth, Some(33));
    }

    #[test]
    fn should_keep_empty_depth_as_none() {
        let reading = Reading::from_row("2024-01-05", "").unwrap();

        assert_eq!(reading.depth, None);
    }

    #[test]
    fn should_keep_unparseable_depth_as_none() {
        let reading = Reading::from_row("2024-01-05", "n/a").unwrap();

        assert_eq!(reading.depth, None);
    }

    #[test]
    fn should_skip_banner_row() {
        assert!(Reading::from_row("Mount Mansfield 2024-2025", "").is_none());
        assert!(Reading::from_row("Date", "Depth").is_none());
    }
}
