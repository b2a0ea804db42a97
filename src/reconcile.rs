//! Decides whether freshly fetched season data changes the historical table.

use crate::error::MissingHistoryError;
use crate::season::SeasonRecord;
use crate::table::HistoricalTable;

/// Outcome of reconciling the current season record against the table.
/// The changed variants carry the table to persist; `Unchanged` means
/// nothing should be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reconciled {
    /// The stored record already matches the current one.
    Unchanged,
    /// A new season has begun; the current record became the final row.
    Appended(HistoricalTable),
    /// The ongoing season gained data; the final row was replaced.
    Replaced(HistoricalTable),
}

/// Pure three-way merge decision.
///
/// The table's final record is the season most recently observed. A
/// different season label on `current` means a season rollover (append);
/// the same label with different content means an in-season update
/// (replace); full structural equality means a no-op.
pub fn reconcile(
    table: &HistoricalTable,
    current: &SeasonRecord,
) -> Result<Reconciled, MissingHistoryError> {
    let previous = table.last().ok_or(MissingHistoryError)?;

    if previous.label() != current.label() {
        let mut records = table.records().to_vec();
        records.push(current.clone());
        return Ok(Reconciled::Appended(HistoricalTable::new(records)));
    }

    if previous == current {
        return Ok(Reconciled::Unchanged);
    }

    let mut records = table.records().to_vec();
    records.pop();
    records.push(current.clone());
    Ok(Reconciled::Replaced(HistoricalTable::new(records)))
}

// -- Tests -------------------------------------------------------------------

#[cfg(test)]
mod tests {

    use super::*;

    fn record(label: &str, pairs: &[(&str, Option<u32>)]) -> SeasonRecord {
        SeasonRecord::new(
            label,
            pairs
                .iter()
                .map(|(date_label, depth)| (date_label.to_string(), *depth))
                .collect(),
        )
    }

    #[test]
    fn should_error_on_empty_table() {
        let table = HistoricalTable::new(vec![]);
        let current = record("2024-2025", &[("9/1", Some(5))]);

        assert!(reconcile(&table, &current).is_err());
    }

    #[test]
    fn should_be_idempotent_when_current_matches_last() {
        let current = record("2024-2025", &[("9/1", Some(5)), ("9/2", None)]);
        let table = HistoricalTable::new(vec![
            record("2023-2024", &[("9/1", Some(12))]),
            current.clone(),
        ]);

        assert_eq!(reconcile(&table, &current).unwrap(), Reconciled::Unchanged);
    }

    #[test]
    fn should_append_on_season_rollover() {
        let table = HistoricalTable::new(vec![record("2023-2024", &[("9/1", Some(12))])]);
        let current = record("2024-2025", &[("9/1", Some(5))]);

        match reconcile(&table, &current).unwrap() {
            Reconciled::Appended(merged) => {
                assert_eq!(merged.len(), table.len() + 1);
                assert_eq!(merged.last().unwrap(), &current);
            }
            other => panic!("expected append, got {:?}", other),
        }
    }

    #[test]
    fn should_replace_last_on_same_season_update() {
        let table = HistoricalTable::new(vec![
            record("2023-2024", &[("1/5", Some(30))]),
            record("2024-2025", &[("1/5", Some(10))]),
        ]);
        let current = record("2024-2025", &[("1/5", Some(12))]);

        match reconcile(&table, &current).unwrap() {
            Reconciled::Replaced(merged) => {
                assert_eq!(merged.len(), table.len());
                assert_eq!(merged.last().unwrap(), &current);
                assert_eq!(merged.records()[0], table.records()[0]);
            }
            other => panic!("expected replace, got {:?}", other),
        }
    }

    #[test]
    fn should_treat_null_versus_zero_as_a_change() {
        let table = HistoricalTable::new(vec![record("2024-2025", &[("9/1", None)])]);
        let current = record("2024-2025", &[("9/1", Some(0))]);

        assert!(matches!(
            reconcile(&table, &current).unwrap(),
            Reconciled::Replaced(_)
        ));
    }
}
