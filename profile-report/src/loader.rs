//! Profile loading
//!
//! Reads a comma-separated method profile into a [`Dataset`]. The header row
//! is checked against [`REQUIRED_COLUMNS`] before any data row is read, and
//! every row is validated as it is deserialized, so a bad file fails at load
//! time rather than somewhere in the report.

use crate::types::{Dataset, MethodRecord, ReportError, Result};
use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

/// Columns every profile must provide (matched by header name, in any order)
pub const REQUIRED_COLUMNS: [&str; 5] = [
    "method_name",
    "call_count",
    "total_time_ms",
    "avg_time_ms",
    "percentage",
];

/// Outcome of loading a profile for a report run.
///
/// Only `Loaded` carries data. `Missing` and `Failed` are not fatal: the run
/// goes on and every report step reports that no data is available.
#[derive(Debug)]
pub enum LoadOutcome {
    /// The profile was read (it may contain zero rows)
    Loaded(Dataset),
    /// The input file does not exist
    Missing(PathBuf),
    /// The input exists but could not be read or parsed
    Failed(ReportError),
}

impl LoadOutcome {
    /// The loaded dataset, if any
    pub fn dataset(&self) -> Option<&Dataset> {
        match self {
            LoadOutcome::Loaded(dataset) => Some(dataset),
            LoadOutcome::Missing(_) | LoadOutcome::Failed(_) => None,
        }
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, LoadOutcome::Loaded(_))
    }
}

/// Load a profile, folding every failure into a [`LoadOutcome`]
pub fn load_dataset(path: &Path) -> LoadOutcome {
    match read_dataset(path) {
        Ok(dataset) => LoadOutcome::Loaded(dataset),
        Err(ReportError::InputNotFound(path)) => {
            log::warn!("Method profile not found: {:?}", path);
            LoadOutcome::Missing(path)
        }
        Err(e) => {
            log::error!("Failed to load method profile {:?}: {}", path, e);
            LoadOutcome::Failed(e)
        }
    }
}

/// Read a profile from disk
///
/// # Returns
/// * `Err(ReportError::InputNotFound)` if the file does not exist
/// * any other error from [`read_from`]
pub fn read_dataset(path: &Path) -> Result<Dataset> {
    log::info!("Loading method profile: {:?}", path);

    let file = File::open(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => ReportError::InputNotFound(path.to_path_buf()),
        _ => ReportError::Io(e),
    })?;

    let dataset = read_from(file)?;
    log::info!("Loaded {} method(s) from {:?}", dataset.len(), path);
    Ok(dataset)
}

/// Read a profile from any CSV source
pub fn read_from<R: Read>(reader: R) -> Result<Dataset> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    check_schema(reader.headers()?)?;

    let mut records = Vec::new();
    for (index, row) in reader.deserialize::<MethodRecord>().enumerate() {
        let record = row?;
        record
            .validate()
            .map_err(|reason| ReportError::InvalidRecord {
                row: index + 1,
                reason,
            })?;
        records.push(record);
    }

    log::debug!("Parsed {} profile row(s)", records.len());
    Ok(Dataset::new(records))
}

fn check_schema(headers: &csv::StringRecord) -> Result<()> {
    let missing: Vec<String> = REQUIRED_COLUMNS
        .iter()
        .filter(|column| !headers.iter().any(|h| h == **column))
        .map(|column| column.to_string())
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(ReportError::SchemaMismatch { missing })
    }
}
