//! Described objects and fields as supplied by a schema provider.

use serde::{Deserialize, Serialize};

/// Declared type of a described field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum FieldType {
    /// Free text.
    String,
    /// Single-select list of fixed values.
    Picklist,
    /// Multi-select list of fixed values.
    Multipicklist,
    /// Picklist that also accepts free text. Generated code treats it as a
    /// [`FieldType::Picklist`].
    Combobox,
    /// Reference to another object.
    Reference,
    /// Base64-encoded binary.
    Base64,
    /// Boolean flag.
    Boolean,
    /// Monetary amount.
    Currency,
    /// Multi-line text.
    Textarea,
    /// 32-bit integer.
    Int,
    /// 64-bit integer.
    Long,
    /// Floating point number.
    Double,
    /// Percentage.
    Percent,
    /// Phone number.
    Phone,
    /// Record identifier.
    Id,
    /// Calendar date.
    Date,
    /// Date and time.
    Datetime,
    /// Time of day.
    Time,
    /// URL.
    Url,
    /// Email address.
    Email,
    /// Encrypted text.
    Encryptedstring,
    /// Reference to a data category group.
    Datacategorygroupreference,
    /// Geolocation compound.
    Location,
    /// Postal address compound.
    Address,
    /// Structured value.
    Complexvalue,
    /// JSON document.
    Json,
    /// Polymorphic value.
    #[serde(rename = "anyType")]
    AnyType,
    /// Any type tag not listed above. Filtering never inspects it.
    #[serde(other)]
    Other,
}

/// A field of a described object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DescribedField {
    /// Field name as declared by the schema.
    pub name: String,
    /// Declared type.
    #[serde(rename = "type")]
    pub field_type: FieldType,
}

impl DescribedField {
    /// Create a field.
    #[must_use]
    pub fn new(name: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            name: name.into(),
            field_type,
        }
    }

    /// Rewrite a combobox type to picklist. Other types are left alone.
    pub(crate) const fn coerce_combobox(&mut self) {
        if matches!(self.field_type, FieldType::Combobox) {
            self.field_type = FieldType::Picklist;
        }
    }
}

/// A described remote object and its fields, in declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DescribedObject {
    /// Object name as declared by the schema, for example `Account` or
    /// `Invoice__c`.
    pub name: String,
    /// Fields in declaration order.
    #[serde(default)]
    pub fields: Vec<DescribedField>,
}

impl DescribedObject {
    /// Create an object.
    #[must_use]
    pub fn new(name: impl Into<String>, fields: Vec<DescribedField>) -> Self {
        Self {
            name: name.into(),
            fields,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use rstest::rstest;

    #[rstest]
    #[case(FieldType::Combobox, FieldType::Picklist)]
    #[case(FieldType::Picklist, FieldType::Picklist)]
    #[case(FieldType::Multipicklist, FieldType::Multipicklist)]
    #[case(FieldType::Reference, FieldType::Reference)]
    fn coerces_only_combobox(#[case] declared: FieldType, #[case] expected: FieldType) {
        let mut field = DescribedField::new("Status", declared);
        field.coerce_combobox();
        assert_eq!(field.field_type, expected);
    }

    #[test]
    fn deserializes_describe_payload() -> Result<()> {
        let object: DescribedObject = serde_json::from_str(
            r#"{"name": "Case", "fields": [
                {"name": "Id", "type": "id"},
                {"name": "Origin", "type": "combobox"},
                {"name": "What", "type": "anyType"}
            ]}"#,
        )?;
        anyhow::ensure!(object.name == "Case", "unexpected name {}", object.name);
        let types: Vec<_> = object.fields.iter().map(|f| f.field_type).collect();
        anyhow::ensure!(
            types == [FieldType::Id, FieldType::Combobox, FieldType::AnyType],
            "unexpected types {types:?}"
        );
        Ok(())
    }

    #[test]
    fn unknown_type_tags_fall_back_to_other() -> Result<()> {
        let object: DescribedObject = serde_json::from_str(
            r#"{"name": "Asset", "fields": [
                {"name": "Geo", "type": "geolocation"},
                {"name": "Name", "type": "string"}
            ]}"#,
        )?;
        let types: Vec<_> = object.fields.iter().map(|f| f.field_type).collect();
        anyhow::ensure!(
            types == [FieldType::Other, FieldType::String],
            "unexpected types {types:?}"
        );
        Ok(())
    }

    #[test]
    fn fields_default_to_empty() -> Result<()> {
        let object: DescribedObject = serde_json::from_str(r#"{"name": "Empty"}"#)?;
        anyhow::ensure!(object.fields.is_empty(), "expected no fields");
        Ok(())
    }
}
