//! Per-object field selection.
//!
//! Each object's own pattern list is merged with the global wildcard list
//! stored under [`GLOBAL_KEY`]. When the object's list contains the `_` flag
//! every field is kept unless excluded; otherwise only included fields are
//! kept and exclusions have no effect.
//!
//! A field matches a pattern by its lowercased name or by that name with a
//! trailing `id` removed, so `OwnerId` is selected by `owner` as well as by
//! `ownerid`.

use std::collections::BTreeSet;

use crate::config::PatternSource;
use crate::normalize::{NameForm, config_lookup_key, normalize};
use crate::pattern::{FieldPatterns, GLOBAL_KEY, PatternSet};
use crate::schema::{DescribedField, DescribedObject};

/// Include and exclude patterns that apply to every object.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GlobalPatterns {
    patterns: PatternSet,
}

impl GlobalPatterns {
    /// Wrap an already parsed set.
    #[must_use]
    pub const fn new(patterns: PatternSet) -> Self {
        Self { patterns }
    }

    /// Read the global wildcard list from `source`. An absent key yields
    /// empty sets.
    #[must_use]
    pub fn from_source<C: PatternSource>(source: &C) -> Self {
        if !source.has_key(GLOBAL_KEY) {
            tracing::info!("no wildcard fields");
            return Self::default();
        }
        let entries = source.string_list(GLOBAL_KEY).unwrap_or_default();
        let patterns = PatternSet::from_global(entries);
        tracing::info!("has wildcard fields");
        if !patterns.includes().is_empty() {
            tracing::info!(fields = %patterns.include_summary(), "including wildcard fields");
        }
        if !patterns.excludes().is_empty() {
            tracing::info!(fields = %patterns.exclude_summary(), "excluding wildcard fields");
        }
        Self { patterns }
    }

    /// The parsed global set.
    #[must_use]
    pub const fn patterns(&self) -> &PatternSet {
        &self.patterns
    }
}

/// Selects the fields of one object at a time.
///
/// Holds a borrowed configuration and the global patterns computed once at
/// construction. Both are read-only afterwards, so one filter may be shared
/// across threads when `C` is `Sync`.
#[derive(Debug, Clone)]
pub struct FieldFilter<'c, C> {
    source: &'c C,
    globals: GlobalPatterns,
}

impl<'c, C: PatternSource> FieldFilter<'c, C> {
    /// Create a filter from a configuration and explicit global patterns.
    #[must_use]
    pub const fn new(source: &'c C, globals: GlobalPatterns) -> Self {
        Self { source, globals }
    }

    /// Create a filter whose global patterns are read from `source`.
    #[must_use]
    pub fn from_source(source: &'c C) -> Self {
        Self::new(source, GlobalPatterns::from_source(source))
    }

    /// The global patterns in effect.
    #[must_use]
    pub const fn globals(&self) -> &GlobalPatterns {
        &self.globals
    }

    /// The pattern list configured for `object_name`.
    ///
    /// The exact name is tried first, then the name with a trailing `__c` and
    /// underscores removed. Missing keys and non-list values give an empty
    /// list.
    #[must_use]
    pub fn patterns_for(&self, object_name: &str) -> &'c [String] {
        let list = if self.source.has_key(object_name) {
            self.source.string_list(object_name)
        } else {
            self.source.string_list(&config_lookup_key(object_name))
        };
        list.unwrap_or_default()
    }

    /// Select the fields of `object`, in declaration order.
    ///
    /// When the object has patterns, every combobox field of `object` is
    /// rewritten to picklist, whether or not it is selected. Selected fields
    /// are returned as copies; `object` keeps all of its fields.
    pub fn filter(&self, object: &mut DescribedObject) -> Vec<DescribedField> {
        let entries = self.patterns_for(&object.name);
        if entries.is_empty() {
            tracing::warn!(object = %object.name, "no fields matched, skipping");
            return Vec::new();
        }

        let parsed = FieldPatterns::parse(entries);
        report_patterns(&object.name, &parsed);
        let effective = parsed.local().union(self.globals.patterns());

        let mut kept = Vec::new();
        for field in &mut object.fields {
            field.coerce_combobox();
            let keep = should_keep_field(
                field,
                parsed.include_all(),
                effective.includes(),
                effective.excludes(),
            );
            tracing::debug!(object = %object.name, field = %field.name, keep, "field decision");
            if keep {
                kept.push(field.clone());
            }
        }
        kept
    }

    /// Like [`FieldFilter::filter`], passing an absent object through as
    /// `None`.
    pub fn filter_optional(
        &self,
        object: Option<&mut DescribedObject>,
    ) -> Option<Vec<DescribedField>> {
        object.map(|described| self.filter(described))
    }
}

fn report_patterns(object_name: &str, parsed: &FieldPatterns) {
    tracing::info!(
        object = %object_name,
        include_all = parsed.include_all(),
        "include everything not explicitly excluded"
    );
    let local = parsed.local();
    if !local.includes().is_empty() {
        tracing::info!(
            object = %object_name,
            fields = %local.include_summary(),
            "including fields"
        );
    }
    if !local.excludes().is_empty() {
        tracing::info!(
            object = %object_name,
            fields = %local.exclude_summary(),
            "excluding fields"
        );
    }
}

/// Decide whether `field` is kept.
///
/// With `include_all` set the field is kept unless its lowercased name, or
/// that name without a trailing `id`, is in `excludes`. Without it the field
/// is kept only when one of those forms is in `includes`; `excludes` is not
/// consulted.
///
/// # Examples
///
/// ```
/// use std::collections::BTreeSet;
/// use schema_filter::{DescribedField, FieldType, should_keep_field};
///
/// let owner = DescribedField::new("OwnerId", FieldType::Reference);
/// let includes = BTreeSet::from(["owner".to_owned()]);
/// assert!(should_keep_field(&owner, false, &includes, &BTreeSet::new()));
/// assert!(!should_keep_field(&owner, true, &BTreeSet::new(), &includes));
/// ```
#[must_use]
pub fn should_keep_field(
    field: &DescribedField,
    include_all: bool,
    includes: &BTreeSet<String>,
    excludes: &BTreeSet<String>,
) -> bool {
    let plain = normalize(&field.name, NameForm::Plain);
    let sans_id = normalize(&field.name, NameForm::SansId);
    if include_all {
        !excludes.contains(&plain) && !excludes.contains(&sans_id)
    } else {
        includes.contains(&plain) || includes.contains(&sans_id)
    }
}
