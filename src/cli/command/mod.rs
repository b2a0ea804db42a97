pub mod backup;
pub mod restore;
pub mod update;

use std::path::PathBuf;

use chrono::{Datelike, Local};
pub use backup::backup;
pub use restore::restore;
pub use update::update;

pub fn make_backup_file_name() -> PathBuf {
    let today = Local::now();
    let file_name = format!(
        "snowDepth-{}{:02}{:02}.csv.bak",
        today.year(),
        today.month(),
        today.day()
    );

    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(file_name)
}

// -- Tests -------------------------------------------------------------------

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn should_date_stamp_backup_file_name() {
        let today = Local::now();
        let expected = format!(
            "snowDepth-{}{:02}{:02}.csv.bak",
            today.year(),
            today.month(),
            today.day()
        );

        let file_name = make_backup_file_name();

        assert_eq!(
            file_name.file_name().unwrap().to_string_lossy(),
            expected
        );
    }
}
