//! Download the store to a date-stamped local backup file.

use std::fs;

use anyhow::Result;

use crate::{cli::create_spinner, store::Store};

use super::make_backup_file_name;

pub fn backup(store: &Store) -> Result<String> {
    let bar = create_spinner("Reading store...".to_string());
    let text = store.read_text()?;
    bar.finish_with_message("Store read");

    let file_name = make_backup_file_name();
    fs::write(&file_name, text)?;

    Ok(file_name.to_string_lossy().to_string())
}
