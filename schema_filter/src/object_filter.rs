//! Selection of described objects named by configuration keys.

use std::collections::HashSet;

use crate::config::PatternSource;
use crate::normalize::{NameForm, normalize};
use crate::schema::DescribedObject;

/// Keeps the objects whose names appear as top-level configuration keys.
///
/// Configuration keys are compared lowercased with underscores removed.
/// Object names match either lowercased as-is or lowercased with a trailing
/// `__c` and every underscore removed, so the key `LineItem` selects the
/// object `Line_Item__c`.
#[derive(Debug, Clone)]
pub struct ObjectFilter {
    configured: HashSet<String>,
}

impl ObjectFilter {
    /// Precompute the configured-object set from `source`'s top-level keys.
    #[must_use]
    pub fn new<C: PatternSource>(source: &C) -> Self {
        let configured = source
            .keys()
            .map(|key| normalize(key, NameForm::ConfigKey))
            .collect();
        Self { configured }
    }

    /// Whether `object` would be kept. Reports the decision.
    #[must_use]
    pub fn keeps(&self, object: &DescribedObject) -> bool {
        let plain = normalize(&object.name, NameForm::Plain);
        let keep = self.configured.contains(&plain)
            || self
                .configured
                .contains(&normalize(&object.name, NameForm::ObjectKey));
        if keep {
            tracing::info!(object = %object.name, "generating for object");
        } else {
            tracing::debug!(object = %object.name, "skipping object");
        }
        keep
    }

    /// Borrow the kept objects, preserving their relative order.
    #[must_use]
    pub fn filter<'a>(&self, objects: &'a [DescribedObject]) -> Vec<&'a DescribedObject> {
        objects.iter().filter(|object| self.keeps(object)).collect()
    }

    /// Consume `objects` and return the kept ones in their original order.
    #[must_use]
    pub fn filter_owned(&self, objects: Vec<DescribedObject>) -> Vec<DescribedObject> {
        objects
            .into_iter()
            .filter(|object| self.keeps(object))
            .collect()
    }

    /// Like [`ObjectFilter::filter_owned`], passing an absent list through as
    /// `None`.
    #[must_use]
    pub fn filter_optional(
        &self,
        objects: Option<Vec<DescribedObject>>,
    ) -> Option<Vec<DescribedObject>> {
        objects.map(|list| self.filter_owned(list))
    }
}
