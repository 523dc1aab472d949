//! The results table is a CSV file with one row per [`RunResult`], in the
//! order the harness produced them.

use crate::experiment::{ExperimentError, RunResult};
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;
use tracing::info;

pub fn write_results<W: Write>(writer: W, results: &[RunResult]) -> Result<(), ExperimentError> {
    let mut writer = csv::Writer::from_writer(writer);
    for result in results {
        writer.serialize(result)?;
    }
    writer.flush().map_err(csv::Error::from)?;
    Ok(())
}

pub fn write_results_to_path(path: &Path, results: &[RunResult]) -> Result<(), ExperimentError> {
    let file = File::create(path).map_err(|source| ExperimentError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    write_results(file, results)?;
    info!(results = results.len(), path = %path.display(), "wrote results");
    Ok(())
}

pub fn read_results<R: Read>(reader: R) -> Result<Vec<RunResult>, ExperimentError> {
    let mut reader = csv::Reader::from_reader(reader);
    let results = reader.deserialize().collect::<Result<Vec<RunResult>, _>>()?;
    Ok(results)
}
