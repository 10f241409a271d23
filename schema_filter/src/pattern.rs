//! Field patterns parsed from configuration lists.
//!
//! Every entry is lowercased. A leading `~` marks an exclusion and is removed
//! before comparison. Inside an object's own list the bare entry `_` is the
//! include-all flag rather than a name.

use std::collections::BTreeSet;

/// Configuration key holding the global wildcard pattern list.
pub const GLOBAL_KEY: &str = "_";

/// List entry meaning "keep every field that is not excluded".
pub const INCLUDE_ALL: &str = "_";

const EXCLUDE_PREFIX: char = '~';

/// A single configuration list entry after parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Pattern {
    /// Keep fields whose normalized name equals this value.
    Include(String),
    /// Drop fields whose normalized name equals this value.
    Exclude(String),
    /// Keep every field not excluded.
    IncludeAll,
}

impl Pattern {
    /// Parse an entry from an object's own pattern list, where `_` is the
    /// include-all flag.
    #[must_use]
    pub fn parse_local(entry: &str) -> Self {
        let lower = entry.to_lowercase();
        if lower == INCLUDE_ALL {
            Self::IncludeAll
        } else {
            Self::parse_lowered(lower)
        }
    }

    /// Parse an entry from the global wildcard list. The global list has no
    /// include-all flag, so `_` is an ordinary include pattern there.
    #[must_use]
    pub fn parse_global(entry: &str) -> Self {
        Self::parse_lowered(entry.to_lowercase())
    }

    fn parse_lowered(lower: String) -> Self {
        match lower.strip_prefix(EXCLUDE_PREFIX) {
            Some(name) => Self::Exclude(name.to_owned()),
            None => Self::Include(lower),
        }
    }
}

/// Include and exclude name sets.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PatternSet {
    includes: BTreeSet<String>,
    excludes: BTreeSet<String>,
}

impl PatternSet {
    /// Build a set from global wildcard entries.
    #[must_use]
    pub fn from_global<S: AsRef<str>>(entries: &[S]) -> Self {
        let mut set = Self::default();
        for entry in entries {
            set.insert(Pattern::parse_global(entry.as_ref()));
        }
        set
    }

    fn insert(&mut self, pattern: Pattern) {
        match pattern {
            Pattern::Include(name) => {
                self.includes.insert(name);
            }
            Pattern::Exclude(name) => {
                self.excludes.insert(name);
            }
            Pattern::IncludeAll => {}
        }
    }

    /// Names whose fields are kept.
    #[must_use]
    pub const fn includes(&self) -> &BTreeSet<String> {
        &self.includes
    }

    /// Names whose fields are dropped when include-all is set.
    #[must_use]
    pub const fn excludes(&self) -> &BTreeSet<String> {
        &self.excludes
    }

    /// Whether both sets are empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.includes.is_empty() && self.excludes.is_empty()
    }

    /// Union of `self` and `other`, side by side.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        Self {
            includes: self.includes.union(&other.includes).cloned().collect(),
            excludes: self.excludes.union(&other.excludes).cloned().collect(),
        }
    }

    /// Comma-joined, sorted include names for diagnostics.
    pub(crate) fn include_summary(&self) -> String {
        join(&self.includes)
    }

    /// Comma-joined, sorted exclude names for diagnostics.
    pub(crate) fn exclude_summary(&self) -> String {
        join(&self.excludes)
    }
}

fn join(names: &BTreeSet<String>) -> String {
    names.iter().map(String::as_str).collect::<Vec<_>>().join(", ")
}

/// Patterns parsed from one object's own list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldPatterns {
    include_all: bool,
    local: PatternSet,
}

impl FieldPatterns {
    /// Parse an object's pattern list.
    ///
    /// # Examples
    ///
    /// ```
    /// use schema_filter::FieldPatterns;
    ///
    /// let patterns = FieldPatterns::parse(&["Name", "_", "~CreatedDate"]);
    /// assert!(patterns.include_all());
    /// assert!(patterns.local().excludes().contains("createddate"));
    /// ```
    #[must_use]
    pub fn parse<S: AsRef<str>>(entries: &[S]) -> Self {
        let mut patterns = Self::default();
        for entry in entries {
            match Pattern::parse_local(entry.as_ref()) {
                Pattern::IncludeAll => patterns.include_all = true,
                pattern => patterns.local.insert(pattern),
            }
        }
        patterns
    }

    /// Whether the list contained the `_` flag.
    #[must_use]
    pub const fn include_all(&self) -> bool {
        self.include_all
    }

    /// The object's own include and exclude names.
    #[must_use]
    pub const fn local(&self) -> &PatternSet {
        &self.local
    }
}
