//! Test helpers shared across crates.
//!
//! Provides described-schema fixtures and loaders that read configuration
//! files from a private `figment::Jail` directory.

pub mod fixtures;
pub mod jail;

pub use fixtures::{account, field, object};
pub use jail::{load_config_file, load_in_jail};
