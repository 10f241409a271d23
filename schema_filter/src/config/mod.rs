//! Configuration mapping consulted by the filters.
//!
//! Top-level keys name objects; each value is the list of field patterns for
//! that object. The reserved key `_` holds the global wildcard list.
//!
//! ```toml
//! _ = ["name", "~systemmodstamp"]
//! Account = ["name", "_", "~createddate"]
//! Invoice = ["amount", "ownerid"]
//! ```
//!
//! Keys are matched lowercased with underscores removed. The trailing `__c`
//! is stripped from object names, not from keys, so the object `Invoice__c`
//! is selected by `Invoice` while a key spelled `Invoice__c` selects nothing.

mod loader;

pub use loader::load_filter_config;

use std::collections::BTreeMap;

use figment::Figment;
use serde::Deserialize;

use crate::error::FilterResult;

/// Read access to a parsed configuration mapping.
///
/// The filters only read through this trait; they never write.
pub trait PatternSource {
    /// Whether `key` is present at the top level.
    fn has_key(&self, key: &str) -> bool;

    /// The string list stored under `key`, or `None` when the key is absent
    /// or holds something other than a list.
    fn string_list(&self, key: &str) -> Option<&[String]>;

    /// Top-level keys.
    fn keys(&self) -> impl Iterator<Item = &str>;
}

/// A configuration value: either a pattern list or a nested mapping.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum ConfigValue {
    /// Ordered list of patterns.
    List(Vec<String>),
    /// Nested mapping. The filters never descend into these.
    Table(BTreeMap<String, ConfigValue>),
}

/// Parsed filter configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct FilterConfig {
    entries: BTreeMap<String, ConfigValue>,
}

impl FilterConfig {
    /// Build a configuration from `(key, patterns)` pairs.
    ///
    /// # Examples
    ///
    /// ```
    /// use schema_filter::{FilterConfig, PatternSource};
    ///
    /// let config = FilterConfig::from_lists([("Account", vec!["name", "_"])]);
    /// assert!(config.has_key("Account"));
    /// assert_eq!(config.string_list("Account").map(<[String]>::len), Some(2));
    /// ```
    #[must_use]
    pub fn from_lists<I, K, V, S>(lists: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let entries = lists
            .into_iter()
            .map(|(key, values)| {
                let list = values.into_iter().map(Into::into).collect();
                (key.into(), ConfigValue::List(list))
            })
            .collect();
        Self { entries }
    }

    /// Extract a configuration from an assembled [`Figment`].
    ///
    /// Use this to layer extra providers, such as environment overrides, over
    /// a file before extraction.
    ///
    /// # Errors
    ///
    /// Returns [`crate::FilterError::Gathering`] when a provider fails or a
    /// value is neither a list of strings nor a table.
    pub fn from_figment(figment: &Figment) -> FilterResult<Self> {
        Ok(figment.extract()?)
    }

    /// Insert or replace the value stored under `key`.
    pub fn insert(&mut self, key: impl Into<String>, value: ConfigValue) {
        self.entries.insert(key.into(), value);
    }

    /// Value stored under `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&ConfigValue> {
        self.entries.get(key)
    }

    /// Number of top-level keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether there are no top-level keys.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl PatternSource for FilterConfig {
    fn has_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    fn string_list(&self, key: &str) -> Option<&[String]> {
        match self.entries.get(key)? {
            ConfigValue::List(list) => Some(list),
            ConfigValue::Table(_) => None,
        }
    }

    fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

impl PatternSource for BTreeMap<String, Vec<String>> {
    fn has_key(&self, key: &str) -> bool {
        self.contains_key(key)
    }

    fn string_list(&self, key: &str) -> Option<&[String]> {
        self.get(key).map(Vec::as_slice)
    }

    fn keys(&self) -> impl Iterator<Item = &str> {
        BTreeMap::keys(self).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::{Result, ensure};
    use figment::providers::{Format, Toml};

    use crate::object_filter::ObjectFilter;
    use crate::schema::DescribedObject;

    #[test]
    fn nested_tables_are_not_lists() -> Result<()> {
        let figment = Figment::from(Toml::string(
            r#"
            Account = ["name"]

            [Contact]
            email = ["x"]
            "#,
        ));
        let config = FilterConfig::from_figment(&figment)?;
        ensure!(config.has_key("Contact"), "Contact should be a key");
        ensure!(
            config.string_list("Contact").is_none(),
            "tables have no list"
        );
        ensure!(
            config.string_list("Account") == Some(&["name".to_owned()][..]),
            "Account list mismatch"
        );
        Ok(())
    }

    #[test]
    fn scalar_values_are_rejected() {
        let figment = Figment::from(Toml::string("Account = 3"));
        assert!(FilterConfig::from_figment(&figment).is_err());
    }

    #[test]
    fn keys_lists_every_top_level_entry() {
        let mut config = FilterConfig::default();
        assert!(config.is_empty());
        assert_eq!(config.len(), 0);

        config = FilterConfig::from_lists([("_", vec!["name"]), ("Account", vec![])]);
        config.insert("Nested", ConfigValue::Table(BTreeMap::new()));
        let keys: Vec<_> = config.keys().collect();
        assert_eq!(keys, ["Account", "Nested", "_"]);
        assert_eq!(config.len(), 3);
        assert!(!config.is_empty());
    }

    #[test]
    fn documented_keys_select_custom_objects() -> Result<()> {
        let figment = Figment::from(Toml::string(
            r#"
            _ = ["name", "~systemmodstamp"]
            Account = ["name", "_", "~createddate"]
            Invoice = ["amount", "ownerid"]
            "#,
        ));
        let config = FilterConfig::from_figment(&figment)?;
        let objects = vec![
            DescribedObject::new("Invoice__c", Vec::new()),
            DescribedObject::new("Account", Vec::new()),
        ];
        let kept = ObjectFilter::new(&config).filter_owned(objects);
        let names: Vec<_> = kept.iter().map(|o| o.name.as_str()).collect();
        ensure!(
            names == ["Invoice__c", "Account"],
            "unexpected objects {names:?}"
        );
        Ok(())
    }

    #[test]
    fn suffixed_key_does_not_select_custom_object() -> Result<()> {
        let figment = Figment::from(Toml::string(r#"Invoice__c = ["amount"]"#));
        let config = FilterConfig::from_figment(&figment)?;
        let objects = vec![DescribedObject::new("Invoice__c", Vec::new())];
        let kept = ObjectFilter::new(&config).filter_owned(objects);
        ensure!(kept.is_empty(), "suffixed key must not match");
        Ok(())
    }

    #[test]
    fn map_source_reads_lists() {
        let map = BTreeMap::from([("Lead".to_owned(), vec!["email".to_owned()])]);
        assert!(map.has_key("Lead"));
        assert!(!PatternSource::has_key(&map, "Contact"));
        assert_eq!(map.string_list("Lead").map(<[String]>::len), Some(1));
        assert_eq!(PatternSource::keys(&map).collect::<Vec<_>>(), ["Lead"]);
    }
}
