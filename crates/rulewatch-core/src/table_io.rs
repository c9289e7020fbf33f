//! Flat-file persistence for tables.

use std::path::Path;

use crate::error::CoreError;
use crate::record::{Table, STANDARD_COLUMNS};

/// Writes `table` to `path` as comma-delimited CSV.
///
/// The header row is always written, so an empty table still yields a file
/// with the standard column names. Null values become empty fields.
///
/// # Errors
///
/// Returns [`CoreError::Csv`] if the file cannot be created or written.
pub fn write_csv(table: &Table, path: &Path) -> Result<(), CoreError> {
    let csv_err = |source: csv::Error| CoreError::Csv {
        path: path.to_path_buf(),
        source,
    };

    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)
        .map_err(csv_err)?;
    writer.write_record(STANDARD_COLUMNS).map_err(csv_err)?;
    for record in table {
        writer.serialize(record).map_err(csv_err)?;
    }
    writer.flush().map_err(|source| CoreError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::debug!(path = %path.display(), rows = table.len(), "wrote CSV");
    Ok(())
}
