//! Command-line interface definitions for `schema-filter`.

use camino::Utf8PathBuf;
use clap::Parser;

/// Parsed CLI arguments for `schema-filter`.
#[derive(Debug, Parser)]
#[command(name = "schema-filter")]
#[command(about = "Filter a described schema against allow/deny name patterns")]
#[command(version)]
pub struct Args {
    /// Filter configuration file (`.toml` or `.json`).
    #[arg(long, value_name = "path")]
    pub config: Utf8PathBuf,
    /// Described schema: a JSON array of `{name, fields}` objects.
    #[arg(long, value_name = "path")]
    pub schema: Utf8PathBuf,
    /// Emit only the names of kept objects, skipping field selection.
    #[arg(long = "objects-only")]
    pub is_objects_only: bool,
    /// Pretty-print the JSON output.
    #[arg(long = "pretty")]
    pub should_pretty_print: bool,
    /// Log every object and field decision.
    #[arg(short, long = "verbose")]
    pub is_verbose: bool,
}
