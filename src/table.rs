//! The persisted table of season records and its CSV form.

use csv::{ReaderBuilder, StringRecord, WriterBuilder};

use crate::error::{StoreReadError, StoreWriteError};
use crate::season::SeasonRecord;

/// Reserved header cell holding the season label column.
const LABEL_COLUMN: &str = "year";

/// Ordered sequence of season records, oldest first. At most one record per
/// season label; the last record is the most recent season.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoricalTable {
    records: Vec<SeasonRecord>,
}

impl HistoricalTable {
    pub fn new(records: Vec<SeasonRecord>) -> Self {
        HistoricalTable { records }
    }

    pub fn records(&self) -> &[SeasonRecord] {
        &self.records
    }

    pub fn last(&self) -> Option<&SeasonRecord> {
        self.records.last()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Parses the stored CSV text: a header row of date labels behind the
    /// `year` column, then one row per season. Empty and unparseable cells
    /// read back as `None`.
    pub fn from_csv(text: &str) -> Result<Self, StoreReadError> {
        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(text.as_bytes());

        let mut rows = reader.records();
        let header: StringRecord = match rows.next() {
            Some(row) => row?,
            None => return Err(StoreReadError::MissingHeader),
        };
        if header.is_empty() || header.get(0) != Some(LABEL_COLUMN) {
            return Err(StoreReadError::MissingHeader);
        }

        let mut records = Vec::new();
        for row in rows {
            let row = row?;
            if row.iter().all(|cell| cell.is_empty()) {
                continue;
            }

            let label = row.get(0).unwrap_or_default().to_string();
            let pairs = header
                .iter()
                .enumerate()
                .skip(1)
                .map(|(i, date_label)| {
                    let depth = row.get(i).and_then(|cell| cell.parse::<u32>().ok());
                    (date_label.to_string(), depth)
                })
                .collect();

            records.push(SeasonRecord::new(label, pairs));
        }

        Ok(HistoricalTable::new(records))
    }

    /// Serializes back to CSV text. The column set comes from the FIRST
    /// record's date labels only; date labels present only in later records
    /// are dropped. `None` depths serialize as empty cells.
    pub fn to_csv(&self) -> Result<String, StoreWriteError> {
        let first = self.records.first().ok_or(StoreWriteError::EmptyTable)?;

        let mut writer = WriterBuilder::new().from_writer(Vec::new());

        let mut header = vec![LABEL_COLUMN.to_string()];
        header.extend(first.date_labels().map(str::to_string));
        writer.write_record(&header)?;

        for record in &self.records {
            let mut row = vec![record.label().to_string()];
            for date_label in &header[1..] {
                let cell = match record.get(date_label) {
                    Some(Some(depth)) => depth.to_string(),
                    _ => String::new(),
                };
                row.push(cell);
            }
            writer.write_record(&row)?;
        }

        let bytes = writer.into_inner().map_err(|e| e.into_error())?;

        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

// -- Tests -------------------------------------------------------------------
