//! Name-pattern filtering for schema-driven code generation.
//!
//! Given a described set of remote objects and a hierarchical allow/deny
//! configuration, this crate decides which objects, and which fields of each
//! kept object, a generator should emit.
//!
//! - [`ObjectFilter`] narrows a list of [`DescribedObject`] values to those
//!   named as top-level configuration keys.
//! - [`FieldFilter`] selects the fields of one object from that object's
//!   pattern list merged with the global wildcard list stored under `_`.
//!
//! Both filters are pure over their inputs and never fail. Decisions are
//! reported through `tracing`; without a subscriber those events are dropped.
//!
//! ```
//! use schema_filter::{
//!     DescribedField, DescribedObject, FieldFilter, FieldType, FilterConfig, ObjectFilter,
//! };
//!
//! let config = FilterConfig::from_lists([
//!     ("_", vec!["~systemmodstamp"]),
//!     ("Account", vec!["name", "_", "~createddate"]),
//! ]);
//! let objects = vec![DescribedObject::new(
//!     "Account",
//!     vec![
//!         DescribedField::new("Name", FieldType::String),
//!         DescribedField::new("CreatedDate", FieldType::Datetime),
//!         DescribedField::new("SystemModstamp", FieldType::Datetime),
//!         DescribedField::new("Id", FieldType::Id),
//!     ],
//! )];
//!
//! let kept = ObjectFilter::new(&config).filter_owned(objects);
//! let fields = FieldFilter::from_source(&config);
//! let mut account = kept.into_iter().next().expect("Account is configured");
//! let names: Vec<_> = fields
//!     .filter(&mut account)
//!     .into_iter()
//!     .map(|field| field.name)
//!     .collect();
//! assert_eq!(names, ["Name", "Id"]);
//! ```

pub mod config;
mod error;
mod field_filter;
pub mod normalize;
mod object_filter;
mod pattern;
mod schema;

pub use config::{ConfigValue, FilterConfig, PatternSource, load_filter_config};
pub use error::{FilterError, FilterResult};
pub use field_filter::{FieldFilter, GlobalPatterns, should_keep_field};
pub use object_filter::ObjectFilter;
pub use pattern::{FieldPatterns, GLOBAL_KEY, INCLUDE_ALL, Pattern, PatternSet};
pub use schema::{DescribedField, DescribedObject, FieldType};
