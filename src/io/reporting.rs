// src/io/reporting.rs

use crate::error::SimResult;
use crate::model::trace::DailyRecord;
use log::info;
use std::io::Write;
use std::path::Path;

/// Writes the trace as CSV with the header `time,demand,order,receipt,ioh`.
pub fn write_trace<W: Write>(writer: W, data: &[DailyRecord]) -> SimResult<()> {
    let mut wtr = csv::Writer::from_writer(writer);

    for record in data {
        wtr.serialize(record)?;
    }

    wtr.flush()?;
    Ok(())
}

/// Writes the trace to a CSV file.
///
/// # Arguments
/// * `file_path` - The path to save the file (e.g., "results/run_1.csv").
/// * `data` - The rounded records from the simulation engine.
pub fn write_trace_to_path<P: AsRef<Path>>(file_path: P, data: &[DailyRecord]) -> SimResult<()> {
    let path = file_path.as_ref();
    let file = std::fs::File::create(path)?;
    write_trace(file, data)?;

    info!("exported {} rows to '{}'", data.len(), path.display());
    Ok(())
}
