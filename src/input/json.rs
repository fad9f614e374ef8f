//! JSON import and export.
//!
//! Format: an array of `{"cidr": "...", "description": "...", "color": "..."}`.

use crate::error::{Result, SubnetError};
use crate::models::SubnetRecord;

/// Parse a JSON array of records, reporting the JSON path on failure.
pub fn parse_subnet_json(input: &str) -> Result<Vec<SubnetRecord>> {
    let mut deserializer = serde_json::Deserializer::from_str(input);
    let records: Vec<SubnetRecord> = serde_path_to_error::deserialize(&mut deserializer)
        .map_err(|e| {
            log::error!("Error parsing subnet JSON at path={}", e.path());
            SubnetError::Import(format!("path={} error={}", e.path(), e.inner()))
        })?;
    log::debug!("parse_subnet_json: {} records", records.len());
    Ok(records)
}

/// Pretty printed JSON array of records.
pub fn to_subnet_json(records: &[SubnetRecord]) -> Result<String> {
    serde_json::to_string_pretty(records)
        .map_err(|e| SubnetError::Import(format!("Error serializing JSON: {e}")))
}
