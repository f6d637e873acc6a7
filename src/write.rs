// src/write.rs

use std::{fs, path::Path};

use csv::WriterBuilder;
use tracing::{debug, instrument};

use crate::error::EtlError;
use crate::types::{NormalizedRecord, COLUMNS};

/// Write `table` to `path` as a delimited file with a header row, creating
/// missing parent directories and replacing any existing file.
///
/// Absent values become empty fields and dates are written as `YYYY-MM-DD`.
#[instrument(level = "info", skip(table, path), fields(path = %path.as_ref().display(), rows = table.len()))]
pub fn write_table<P: AsRef<Path>>(
    table: &[NormalizedRecord],
    path: P,
    delimiter: u8,
) -> Result<(), EtlError> {
    let path = path.as_ref();
    let wrap = |source: csv::Error| EtlError::Write {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| wrap(e.into()))?;
        }
    }

    // header written by hand so an empty table still gets one
    let mut wtr = WriterBuilder::new()
        .delimiter(delimiter)
        .has_headers(false)
        .from_path(path)
        .map_err(wrap)?;
    wtr.write_record(COLUMNS).map_err(wrap)?;
    for rec in table {
        wtr.serialize(rec).map_err(wrap)?;
    }
    wtr.flush().map_err(|e| wrap(e.into()))?;

    debug!("wrote output table");
    Ok(())
}
