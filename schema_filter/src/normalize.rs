//! Name normalization used for matching configuration against schema names.
//!
//! Normalized names only ever feed comparisons. Stored object and field names
//! are never rewritten.

/// Suffix carried by custom object names, such as `Invoice__c`.
pub const CUSTOM_SUFFIX: &str = "__c";

/// Suffix carried by reference field names, such as `OwnerId`.
pub const ID_SUFFIX: &str = "id";

/// The shape a name is normalized into before comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameForm {
    /// Lowercase only.
    Plain,
    /// Lowercase with every underscore removed. Applied to top-level
    /// configuration keys.
    ConfigKey,
    /// Lowercase with a trailing `__c` removed, then every underscore removed.
    /// Applied to object names.
    ObjectKey,
    /// Lowercase with a trailing `id` removed. Applied to field names so that
    /// `OwnerId` matches the pattern `owner`.
    SansId,
}

/// Normalize `name` into the requested [`NameForm`].
///
/// # Examples
///
/// ```
/// use schema_filter::normalize::{NameForm, normalize};
///
/// assert_eq!(normalize("Line_Item__c", NameForm::ObjectKey), "lineitem");
/// assert_eq!(normalize("OwnerId", NameForm::SansId), "owner");
/// ```
#[must_use]
pub fn normalize(name: &str, form: NameForm) -> String {
    let lower = name.to_lowercase();
    match form {
        NameForm::Plain => lower,
        NameForm::ConfigKey => remove_underscores(&lower),
        NameForm::ObjectKey => remove_underscores(strip_suffix(&lower, CUSTOM_SUFFIX)),
        NameForm::SansId => strip_suffix(&lower, ID_SUFFIX).to_owned(),
    }
}

/// Fallback key used to find an object's pattern list when its exact name is
/// not a configuration key.
///
/// Case is preserved: `Line_Item__c` becomes `LineItem`.
#[must_use]
pub fn config_lookup_key(name: &str) -> String {
    remove_underscores(strip_suffix(name, CUSTOM_SUFFIX))
}

fn strip_suffix<'a>(name: &'a str, suffix: &str) -> &'a str {
    name.strip_suffix(suffix).unwrap_or(name)
}

fn remove_underscores(name: &str) -> String {
    name.replace('_', "")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::plain_lowercases("Account", NameForm::Plain, "account")]
    #[case::plain_keeps_suffixes("Invoice__c", NameForm::Plain, "invoice__c")]
    #[case::config_key_drops_underscores("Line_Item__c", NameForm::ConfigKey, "lineitemc")]
    #[case::config_key_sentinel_collapses("_", NameForm::ConfigKey, "")]
    #[case::object_key_strips_custom_suffix("Line_Item__c", NameForm::ObjectKey, "lineitem")]
    #[case::object_key_suffix_is_case_insensitive("Invoice__C", NameForm::ObjectKey, "invoice")]
    #[case::object_key_only_trailing_suffix("My__cThing", NameForm::ObjectKey, "mycthing")]
    #[case::sans_id_strips_reference_suffix("OwnerId", NameForm::SansId, "owner")]
    #[case::sans_id_strips_once("IdId", NameForm::SansId, "id")]
    #[case::sans_id_bare_id("Id", NameForm::SansId, "")]
    #[case::sans_id_keeps_underscores("Parent_Id", NameForm::SansId, "parent_")]
    #[case::sans_id_untouched_without_suffix("Name", NameForm::SansId, "name")]
    fn normalizes_names(#[case] name: &str, #[case] form: NameForm, #[case] expected: &str) {
        assert_eq!(normalize(name, form), expected);
    }

    #[test]
    fn normalize_is_unicode_aware() {
        assert_eq!(normalize("Ünïcode__c", NameForm::ObjectKey), "ünïcode");
    }

    #[rstest]
    #[case("Line_Item__c", "LineItem")]
    #[case("Account", "Account")]
    #[case("Invoice__C", "InvoiceC")]
    #[case("__c", "")]
    fn lookup_key_preserves_case(#[case] name: &str, #[case] expected: &str) {
        assert_eq!(config_lookup_key(name), expected);
    }
}
