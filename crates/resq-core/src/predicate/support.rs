use crate::resource::PropertyId;
use std::{
    collections::{BTreeSet, HashSet},
    hash::BuildHasher,
};

///
/// SupportedProperties
///
/// Oracle answering whether a backend can filter on a property directly.
/// Only equality on supported properties is pushed down.
///

pub trait SupportedProperties {
    fn supports(&self, property: &PropertyId) -> bool;
}

impl SupportedProperties for BTreeSet<PropertyId> {
    fn supports(&self, property: &PropertyId) -> bool {
        self.contains(property)
    }
}

impl<H: BuildHasher> SupportedProperties for HashSet<PropertyId, H> {
    fn supports(&self, property: &PropertyId) -> bool {
        self.contains(property)
    }
}

impl SupportedProperties for [PropertyId] {
    fn supports(&self, property: &PropertyId) -> bool {
        self.contains(property)
    }
}

impl<T: SupportedProperties + ?Sized> SupportedProperties for &T {
    fn supports(&self, property: &PropertyId) -> bool {
        (**self).supports(property)
    }
}
