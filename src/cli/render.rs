//! Output renderer: resource records to output maps.
//!
//! Terminal output maps identifier to display name for scanability; json
//! output keys the full records by collection name for downstream tools.

use crate::cli::output::{OutputMap, OutputMode};
use crate::error::CliError;
use crate::models::Resource;
use serde_json::Value;

/// Render one record.
pub fn render<R: Resource>(resource: &R, mode: OutputMode) -> Result<OutputMap, CliError> {
    render_all(std::slice::from_ref(resource), mode)
}

/// Render a set of records (list commands).
pub fn render_all<R: Resource>(resources: &[R], mode: OutputMode) -> Result<OutputMap, CliError> {
    match mode {
        OutputMode::Terminal => Ok(resources
            .iter()
            .map(|r| (r.id_string(), Value::String(r.display_name().to_string())))
            .collect()),
        OutputMode::Json => {
            let records = serde_json::to_value(resources)
                .map_err(|e| CliError::Render(format!("{} records: {}", R::NOUN, e)))?;
            Ok(std::iter::once((R::COLLECTION, records)).collect())
        }
    }
}
