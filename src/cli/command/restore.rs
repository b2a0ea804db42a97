//! Push a local plain CSV file into the store.

use std::{fs, path::Path};

use anyhow::{Context, Result};

use crate::{store::Store, table::HistoricalTable};

pub fn restore(store: &Store, file: &Path) -> Result<String> {
    let text = fs::read_to_string(file)
        .with_context(|| format!("failed to read `{}`", file.display()))?;

    // Refuse to push a file the updater could not load back.
    let table = HistoricalTable::from_csv(&text)
        .with_context(|| format!("`{}` is not a valid season table", file.display()))?;

    store.write_text(&text)?;

    Ok(format!(
        "Restored {} seasons to `{}`",
        table.len(),
        store.path().display()
    ))
}
