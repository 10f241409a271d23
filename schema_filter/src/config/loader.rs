//! Reading filter configuration files through figment.

use std::path::Path;

use figment::{
    Figment,
    providers::{Format, Json, Toml},
};

use crate::error::{FilterError, FilterResult};

use super::FilterConfig;

/// Load a [`FilterConfig`] from `path`, choosing the parser by extension.
///
/// Files ending in `.json` are read as JSON; `.toml` files and files without
/// an extension are read as TOML.
///
/// # Examples
///
/// ```rust,no_run
/// use schema_filter::{PatternSource, load_filter_config};
/// use std::path::Path;
///
/// # fn run() -> schema_filter::FilterResult<()> {
/// let config = load_filter_config(Path::new("codegen-filter.toml"))?;
/// assert!(config.has_key("Account"));
/// # Ok(())
/// # }
/// ```
///
/// # Errors
///
/// Returns [`FilterError::File`] when the file cannot be read,
/// [`FilterError::UnsupportedFormat`] for an unknown extension and
/// [`FilterError::Gathering`] when the contents do not parse into a mapping of
/// string lists and tables.
pub fn load_filter_config(path: &Path) -> FilterResult<FilterConfig> {
    let data = std::fs::read_to_string(path).map_err(|e| file_error(path, e))?;
    let figment = parse_config_by_format(path, &data)?;
    let config = FilterConfig::from_figment(&figment)?;
    tracing::debug!(path = %path.display(), keys = config.len(), "loaded filter configuration");
    Ok(config)
}

fn parse_config_by_format(path: &Path, data: &str) -> FilterResult<Figment> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    match ext.as_deref() {
        Some("json") => Ok(Figment::from(Json::string(data))),
        Some("toml") | None => Ok(Figment::from(Toml::string(data))),
        Some(other) => Err(FilterError::UnsupportedFormat {
            path: path.to_path_buf(),
            extension: other.to_owned(),
        }),
    }
}

fn file_error(
    path: &Path,
    err: impl Into<Box<dyn std::error::Error + Send + Sync>>,
) -> FilterError {
    FilterError::File {
        path: path.to_path_buf(),
        source: err.into(),
    }
}
