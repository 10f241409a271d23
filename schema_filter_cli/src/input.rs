//! Reading the described schema.

use camino::Utf8Path;
use schema_filter::DescribedObject;

use crate::error::CliError;

/// Read a JSON array of described objects from `path`.
pub fn read_schema(path: &Utf8Path) -> Result<Vec<DescribedObject>, CliError> {
    let data = std::fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let objects: Vec<DescribedObject> =
        serde_json::from_str(&data).map_err(|source| CliError::Schema {
            path: path.to_path_buf(),
            source,
        })?;
    tracing::debug!(path = %path, objects = objects.len(), "read schema");
    Ok(objects)
}
