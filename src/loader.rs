use crate::error::{DashboardError, Result};
use crate::types::{ImpactRecord, REQUIRED_COLUMNS};
use csv::ReaderBuilder;
use std::fs::File;

/// Summary of a completed load, for the console confirmation line.
#[derive(Debug, Clone)]
pub struct LoadReport {
    pub total_rows: usize,
}

/// Load the uploaded CSV into the in-memory impact table.
///
/// The header row is validated against [`REQUIRED_COLUMNS`] before any
/// record is read; the first absent column fails the load. Row parsing is
/// strict: a malformed row (non-numeric metric, short row) fails the whole
/// load rather than being skipped, so the table is either complete or
/// absent. A new successful load replaces the previous table entirely.
pub fn load_table(path: &str) -> Result<(Vec<ImpactRecord>, LoadReport)> {
    let file = File::open(path)?;
    let mut rdr = ReaderBuilder::new().from_reader(file);

    let headers = rdr.headers()?.clone();
    for required in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == required) {
            return Err(DashboardError::MissingColumn(required.to_string()));
        }
    }

    let mut records: Vec<ImpactRecord> = Vec::new();
    for result in rdr.deserialize::<ImpactRecord>() {
        records.push(result?);
    }

    let report = LoadReport {
        total_rows: records.len(),
    };
    Ok((records, report))
}
