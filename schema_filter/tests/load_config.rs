//! Tests for reading filter configuration files.

use anyhow::{Result, ensure};
use figment::Figment;
use figment::providers::{Format, Json, Toml};
use rstest::rstest;
use schema_filter::{FilterConfig, FilterError, PatternSource};
use test_helpers::{load_config_file, load_in_jail};

fn list(config: &FilterConfig, key: &str) -> Vec<String> {
    config.string_list(key).map(<[String]>::to_vec).unwrap_or_default()
}

#[rstest]
#[case::toml(
    "filters.toml",
    r#"
    _ = ["name", "~systemmodstamp"]
    Account = ["name", "_", "~createddate"]
    Invoice = ["amount"]
    "#
)]
#[case::json(
    "filters.json",
    r#"{"_": ["name", "~systemmodstamp"], "Account": ["name", "_", "~createddate"], "Invoice": ["amount"]}"#
)]
#[case::uppercase_extension(
    "FILTERS.JSON",
    r#"{"_": ["name", "~systemmodstamp"], "Account": ["name", "_", "~createddate"], "Invoice": ["amount"]}"#
)]
fn loads_supported_formats(#[case] file: &str, #[case] contents: &str) -> Result<()> {
    let config = load_config_file(file, contents)?;
    ensure!(config.len() == 3, "expected three keys");
    ensure!(
        list(&config, "_") == ["name", "~systemmodstamp"],
        "global list mismatch"
    );
    ensure!(
        list(&config, "Account") == ["name", "_", "~createddate"],
        "Account list mismatch"
    );
    ensure!(
        list(&config, "Invoice") == ["amount"],
        "Invoice list mismatch"
    );
    Ok(())
}

#[test]
fn missing_file_is_a_file_error() -> Result<()> {
    let err = load_in_jail("absent.toml", None)?
        .err()
        .ok_or_else(|| anyhow::anyhow!("expected an error"))?;
    ensure!(
        matches!(err, FilterError::File { .. }),
        "unexpected error {err}"
    );
    Ok(())
}

#[test]
fn unknown_extension_is_rejected() -> Result<()> {
    let result = load_in_jail("filters.ini", Some("Account = name"))?;
    match result {
        Err(FilterError::UnsupportedFormat { extension, .. }) => {
            ensure!(extension == "ini", "unexpected extension {extension}");
            Ok(())
        }
        other => Err(anyhow::anyhow!("expected UnsupportedFormat, got {other:?}")),
    }
}

#[test]
fn malformed_toml_reports_gathering_error() -> Result<()> {
    let result = load_in_jail("filters.toml", Some("Account = [\"name\""))?;
    ensure!(
        matches!(result, Err(FilterError::Gathering(_))),
        "expected a gathering error, got {result:?}"
    );
    Ok(())
}

#[test]
fn later_providers_override_earlier_lists() -> Result<()> {
    let figment = Figment::from(Toml::string(
        r#"
        _ = ["name"]
        Account = ["name"]
        "#,
    ))
    .merge(Json::string(r#"{"Account": ["_", "~fax"]}"#));
    let config = FilterConfig::from_figment(&figment)?;
    ensure!(
        list(&config, "Account") == ["_", "~fax"],
        "merge did not override"
    );
    ensure!(list(&config, "_") == ["name"], "global list lost");
    Ok(())
}
