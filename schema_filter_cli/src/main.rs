//! CLI entrypoint for `schema-filter`.
//!
//! Loads a filter configuration and a described schema, keeps the configured
//! objects and their selected fields, and prints the result as JSON.

mod cli;
mod error;
mod input;
mod logging;
mod output;
mod select;

use clap::Parser;
use schema_filter::load_filter_config;

use crate::cli::Args;
use crate::error::CliError;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    run().map_err(color_eyre::eyre::Report::from)
}

fn run() -> Result<(), CliError> {
    let args = Args::parse();
    logging::init(args.is_verbose)?;

    let config = load_filter_config(args.config.as_std_path())?;
    let schema = input::read_schema(&args.schema)?;
    let mut stdout = std::io::stdout().lock();

    if args.is_objects_only {
        let names: Vec<String> = select::select_objects(&config, schema)
            .into_iter()
            .map(|object| object.name)
            .collect();
        output::write_json(&mut stdout, &names, args.should_pretty_print)
    } else {
        let selected = select::select_schema(&config, schema);
        output::write_json(&mut stdout, &selected, args.should_pretty_print)
    }
}
