//! Loading filter configuration files written into a [`figment::Jail`].
//!
//! Every call runs in a private working directory, so relative file names in
//! one test never see files written by another.

use std::path::Path;

use anyhow::{Result, anyhow};
use figment::Jail;
use schema_filter::{FilterConfig, FilterResult, load_filter_config};

/// Write `contents` to `file_name` inside a fresh jail, then load it.
///
/// Pass `None` to load a file that does not exist. The loader's outcome is
/// returned as-is so tests can match on [`schema_filter::FilterError`].
///
/// # Errors
///
/// Returns an error when the jail cannot be set up or the file cannot be
/// written.
pub fn load_in_jail(
    file_name: &str,
    contents: Option<&str>,
) -> Result<FilterResult<FilterConfig>> {
    let mut outcome = None;
    Jail::try_with(|jail| {
        if let Some(text) = contents {
            jail.create_file(file_name, text)?;
        }
        outcome = Some(load_filter_config(Path::new(file_name)));
        Ok(())
    })
    .map_err(|err| anyhow!("jail setup failed: {err}"))?;
    outcome.ok_or_else(|| anyhow!("jail closure did not run"))
}

/// Like [`load_in_jail`] for a file expected to load cleanly.
///
/// # Errors
///
/// Returns an error when the jail cannot be set up or the loader rejects the
/// file.
pub fn load_config_file(file_name: &str, contents: &str) -> Result<FilterConfig> {
    let config = load_in_jail(file_name, Some(contents))??;
    Ok(config)
}
