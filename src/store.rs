//! Durable storage for the historical table.
//!
//! The table lives at a single path as gzip-compressed CSV, the framing the
//! published dataset has always used. Reads and writes are wholesale; there
//! is no partial or streaming update.

use std::{
    fs::{self, File},
    io::{Read, Write},
    path::{Path, PathBuf},
};

use flate2::{read::GzDecoder, write::GzEncoder, Compression};

use crate::error::{StoreReadError, StoreWriteError};
use crate::table::HistoricalTable;

pub struct Store {
    path: PathBuf,
}

impl Store {
    pub fn new(path: PathBuf) -> Self {
        Store { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Default store location under the user data directory.
    pub fn default_path() -> PathBuf {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("snowdepth")
            .join("snowDepth.csv.gz")
    }

    /// Loads and parses the full historical table.
    pub fn load_table(&self) -> Result<HistoricalTable, StoreReadError> {
        let text = self.read_text()?;
        HistoricalTable::from_csv(&text)
    }

    /// Serializes and persists the full historical table.
    pub fn save_table(&self, table: &HistoricalTable) -> Result<(), StoreWriteError> {
        let text = table.to_csv()?;
        self.write_text(&text)
    }

    /// Reads the stored resource and gunzips it to CSV text.
    pub fn read_text(&self) -> Result<String, StoreReadError> {
        let file = File::open(&self.path)?;
        let mut decoder = GzDecoder::new(file);
        let mut text = String::new();
        decoder.read_to_string(&mut text)?;

        Ok(text)
    }

    /// Gzips the given CSV text and writes it wholesale to the store path,
    /// creating parent directories on first use.
    pub fn write_text(&self, text: &str) -> Result<(), StoreWriteError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(text.as_bytes())?;
        let compressed = encoder.finish()?;
        fs::write(&self.path, compressed)?;

        Ok(())
    }
}

// -- Tests -------------------------------------------------------------------

#[cfg(test)]
mod tests {

    use super::*;
    use crate::season::SeasonRecord;
    use tempfile::TempDir;

    #[test]
    fn should_round_trip_text_through_gzip_framing() {
        let tmp_dir = TempDir::new().unwrap();
        let store = Store::new(tmp_dir.path().join("snowDepth.csv.gz"));

        let text = "year,9/1\n2024-2025,5\n";
        store.write_text(text).unwrap();

        assert_eq!(store.read_text().unwrap(), text);
    }

    #[test]
    fn should_round_trip_table() {
        let tmp_dir = TempDir::new().unwrap();
        let store = Store::new(tmp_dir.path().join("snowDepth.csv.gz"));

        let table = HistoricalTable::new(vec![SeasonRecord::new(
            "2024-2025",
            vec![("9/1".to_string(), Some(5)), ("9/2".to_string(), None)],
        )]);

        store.save_table(&table).unwrap();

        assert_eq!(store.load_table().unwrap(), table);
    }

    #[test]
    fn should_error_when_store_is_missing() {
        let tmp_dir = TempDir::new().unwrap();
        let store = Store::new(tmp_dir.path().join("missing.csv.gz"));

        assert!(matches!(
            store.load_table(),
            Err(StoreReadError::Io(_))
        ));
    }

    #[test]
    fn should_error_on_bad_gzip_framing() {
        let tmp_dir = TempDir::new().unwrap();
        let path = tmp_dir.path().join("snowDepth.csv.gz");
        fs::write(&path, b"not gzip at all").unwrap();

        let store = Store::new(path);

        assert!(store.read_text().is_err());
    }
}
