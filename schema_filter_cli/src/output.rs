//! Output writers for `schema-filter`.

use std::io::Write;

use serde::Serialize;

use crate::error::CliError;

/// Serialize `payload` as JSON to `out`, followed by a newline.
pub fn write_json<W: Write, T: Serialize + ?Sized>(
    out: &mut W,
    payload: &T,
    should_pretty_print: bool,
) -> Result<(), CliError> {
    let content = if should_pretty_print {
        serde_json::to_string_pretty(payload)?
    } else {
        serde_json::to_string(payload)?
    };
    out.write_all(content.as_bytes()).map_err(CliError::Output)?;
    out.write_all(b"\n").map_err(CliError::Output)?;
    out.flush().map_err(CliError::Output)
}
