//! Runs object selection, then field selection for each kept object.

use schema_filter::{DescribedField, DescribedObject, FieldFilter, ObjectFilter, PatternSource};
use serde::Serialize;

/// An object as emitted after filtering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilteredObject {
    pub name: String,
    pub fields: Vec<DescribedField>,
}

/// Keep the configured objects, in schema order.
pub fn select_objects<C: PatternSource>(
    source: &C,
    schema: Vec<DescribedObject>,
) -> Vec<DescribedObject> {
    ObjectFilter::new(source).filter_owned(schema)
}

/// Keep the configured objects and, for each, its selected fields.
pub fn select_schema<C: PatternSource>(
    source: &C,
    schema: Vec<DescribedObject>,
) -> Vec<FilteredObject> {
    let fields = FieldFilter::from_source(source);
    select_objects(source, schema)
        .into_iter()
        .map(|mut object| {
            let selected = fields.filter(&mut object);
            FilteredObject {
                name: object.name,
                fields: selected,
            }
        })
        .collect()
}
