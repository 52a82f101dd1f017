//! JSON evaluation-record loading

use anyhow::{Context, Result};
use crate::data::EvaluationRecord;
use std::fs::File;
use std::io::BufReader;

/// Load an evaluation record from a JSON file.
///
/// Fetch and parse failures are returned to the caller; retry policy lives
/// upstream, not in this core.
pub fn load_evaluation(path: &str) -> Result<EvaluationRecord> {
    log::info!("Reading evaluation record: {}", path);

    let file = File::open(path)
        .with_context(|| format!("failed to open evaluation file {}", path))?;
    let record: EvaluationRecord = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("failed to parse evaluation file {}", path))?;

    log::info!(
        "Loaded group '{}' with {} individuals and {} nominations",
        record.group_name,
        record.roster.len(),
        record.nominations.len()
    );

    Ok(record)
}
