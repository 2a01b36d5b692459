//! Module: resource
//! Responsibility: property identifiers and property-bag resources.
//! Does not own: predicate semantics or backend access.
//! Boundary: the row shape every predicate is evaluated against.

use crate::value::Value;
use derive_more::Deref;
use serde::{Deserialize, Serialize};
use std::{borrow::Borrow, collections::BTreeMap, fmt};

const CATEGORY_SEPARATOR: char = '/';

///
/// PropertyId
///
/// Fully qualified property identifier such as `Hosts/host_name` or
/// `ServiceInfo/state`. The category is everything before the last `/`.
///

#[derive(
    Clone, Debug, Deref, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize,
)]
#[serde(transparent)]
pub struct PropertyId(String);

impl PropertyId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Build an id from a category and a property name.
    #[must_use]
    pub fn with_category(category: &str, name: &str) -> Self {
        if category.is_empty() {
            return Self::new(name);
        }

        Self(format!("{category}{CATEGORY_SEPARATOR}{name}"))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Category portion of the id, if any.
    #[must_use]
    pub fn category(&self) -> Option<&str> {
        self.0
            .rfind(CATEGORY_SEPARATOR)
            .map(|idx| &self.0[..idx])
    }

    /// Property name with the category stripped.
    #[must_use]
    pub fn name(&self) -> &str {
        match self.0.rfind(CATEGORY_SEPARATOR) {
            Some(idx) => &self.0[idx + 1..],
            None => &self.0,
        }
    }
}

impl fmt::Display for PropertyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for PropertyId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for PropertyId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for PropertyId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&PropertyId> for PropertyId {
    fn from(id: &PropertyId) -> Self {
        id.clone()
    }
}

///
/// PropertyPresence
///
/// Result of reading a property from a resource during evaluation.
/// Distinguishes a missing property from one explicitly set to `Null`.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum PropertyPresence<'a> {
    Present(&'a Value),
    Missing,
}

///
/// PropertySource
///
/// Abstraction over anything that exposes properties by id.
/// Decouples predicate evaluation from the concrete resource type.
///

pub trait PropertySource {
    fn property(&self, id: &PropertyId) -> PropertyPresence<'_>;
}

///
/// Resource
///
/// Generic property-bag resource returned by backends and filtered by
/// predicates.
///

#[derive(Clone, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub struct Resource {
    kind: String,
    properties: BTreeMap<PropertyId, Value>,
}

impl Resource {
    #[must_use]
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            properties: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn kind(&self) -> &str {
        &self.kind
    }

    #[must_use]
    pub fn with_property(mut self, id: impl Into<PropertyId>, value: impl Into<Value>) -> Self {
        self.set_property(id, value);
        self
    }

    /// Set a property, returning the previous value if one was set.
    pub fn set_property(
        &mut self,
        id: impl Into<PropertyId>,
        value: impl Into<Value>,
    ) -> Option<Value> {
        self.properties.insert(id.into(), value.into())
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Value> {
        self.properties.get(id)
    }

    #[must_use]
    pub const fn properties(&self) -> &BTreeMap<PropertyId, Value> {
        &self.properties
    }

    /// Properties belonging to a single category, keyed by bare name.
    pub fn category_properties<'a>(
        &'a self,
        category: &'a str,
    ) -> impl Iterator<Item = (&'a str, &'a Value)> + 'a {
        self.properties
            .iter()
            .filter(move |(id, _)| id.category() == Some(category))
            .map(|(id, value)| (id.name(), value))
    }
}

impl PropertySource for Resource {
    fn property(&self, id: &PropertyId) -> PropertyPresence<'_> {
        match self.properties.get(id) {
            Some(value) => PropertyPresence::Present(value),
            None => PropertyPresence::Missing,
        }
    }
}

impl PropertySource for BTreeMap<PropertyId, Value> {
    fn property(&self, id: &PropertyId) -> PropertyPresence<'_> {
        match self.get(id) {
            Some(value) => PropertyPresence::Present(value),
            None => PropertyPresence::Missing,
        }
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn property_id_splits_on_last_separator() {
        let id = PropertyId::from("Hosts/disk_info/available");
        assert_eq!(id.category(), Some("Hosts/disk_info"));
        assert_eq!(id.name(), "available");

        let bare = PropertyId::from("cluster_name");
        assert_eq!(bare.category(), None);
        assert_eq!(bare.name(), "cluster_name");
    }

    #[test]
    fn with_category_skips_empty_category() {
        assert_eq!(PropertyId::with_category("", "state").as_str(), "state");
        assert_eq!(
            PropertyId::with_category("ServiceInfo", "state").as_str(),
            "ServiceInfo/state"
        );
    }

    #[test]
    fn resource_distinguishes_null_from_missing() {
        let resource = Resource::new("Host")
            .with_property("Hosts/host_name", "h1")
            .with_property("Hosts/rack", Value::Null);

        assert_eq!(resource.kind(), "Host");
        assert_eq!(
            resource.property(&PropertyId::from("Hosts/rack")),
            PropertyPresence::Present(&Value::Null)
        );
        assert_eq!(
            resource.property(&PropertyId::from("Hosts/ip")),
            PropertyPresence::Missing
        );
    }

    #[test]
    fn category_properties_filters_by_category() {
        let resource = Resource::new("Host")
            .with_property("Hosts/host_name", "h1")
            .with_property("Hosts/rack", "r1")
            .with_property("metrics/cpu", 5);

        let names: Vec<_> = resource
            .category_properties("Hosts")
            .map(|(name, _)| name)
            .collect();
        assert_eq!(names, vec!["host_name", "rack"]);
    }
}
