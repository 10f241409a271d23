//! Builders for described objects used across test suites.

use schema_filter::{DescribedField, DescribedObject, FieldType};

/// A field with the given name and type.
#[must_use]
pub fn field(name: &str, field_type: FieldType) -> DescribedField {
    DescribedField::new(name, field_type)
}

/// An object whose fields are all plain strings.
#[must_use]
pub fn object(name: &str, field_names: &[&str]) -> DescribedObject {
    DescribedObject::new(
        name,
        field_names
            .iter()
            .map(|field_name| field(field_name, FieldType::String))
            .collect(),
    )
}

/// The standard `Account` object with a representative field mix.
///
/// Fields: `Id`, `Name`, `OwnerId`, `Type` (combobox), `CreatedDate`,
/// `SystemModstamp`, `Rating__c`.
#[must_use]
pub fn account() -> DescribedObject {
    DescribedObject::new(
        "Account",
        vec![
            field("Id", FieldType::Id),
            field("Name", FieldType::String),
            field("OwnerId", FieldType::Reference),
            field("Type", FieldType::Combobox),
            field("CreatedDate", FieldType::Datetime),
            field("SystemModstamp", FieldType::Datetime),
            field("Rating__c", FieldType::Picklist),
        ],
    )
}
