use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing::info;

use crate::models::ProductRecord;

/// Load a snapshot of product records from a JSON file. Used both for the
/// sample-data path and for the cached-output fallback.
pub fn load(path: &Path) -> Result<Vec<ProductRecord>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read snapshot file {}", path.display()))?;
    let records: Vec<ProductRecord> = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse snapshot file {}", path.display()))?;

    info!("Loaded {} products from {}", records.len(), path.display());
    Ok(records)
}

/// Write the run's records as pretty-printed JSON, overwriting any
/// previous snapshot.
pub fn save(path: &Path, records: &[ProductRecord]) -> Result<()> {
    let json = serde_json::to_string_pretty(records)?;
    fs::write(path, json)
        .with_context(|| format!("Failed to write snapshot file {}", path.display()))?;

    info!("Results saved to {}", path.display());
    Ok(())
}
