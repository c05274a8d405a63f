use super::PropertySpecifier;
use itertools::Itertools;
use std::fmt;

/// The deduplicated set of required fields collected along a traversal.
///
/// Fields keep the order in which they were first seen, which is what
/// display and iteration use. Equality ignores that order.
pub struct RequiredFields<T> {
    fields: Vec<PropertySpecifier<T>>,
}

impl<T> RequiredFields<T> {
    pub fn new() -> Self {
        Self { fields: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Whether a field with this property name is present.
    pub fn contains(&self, property_name: &str) -> bool {
        self.fields
            .iter()
            .any(|f| f.property_name() == property_name)
    }

    pub fn names(&self) -> Vec<&str> {
        self.fields.iter().map(|f| f.property_name()).collect()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PropertySpecifier<T>> {
        self.fields.iter()
    }

    pub fn into_vec(self) -> Vec<PropertySpecifier<T>> {
        self.fields
    }
}

impl<T> Default for RequiredFields<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<PropertySpecifier<T>> for RequiredFields<T> {
    fn from_iter<I: IntoIterator<Item = PropertySpecifier<T>>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().unique().collect(),
        }
    }
}

impl<'a, T> IntoIterator for &'a RequiredFields<T> {
    type Item = &'a PropertySpecifier<T>;
    type IntoIter = std::slice::Iter<'a, PropertySpecifier<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}

impl<T> Clone for RequiredFields<T> {
    fn clone(&self) -> Self {
        Self {
            fields: self.fields.clone(),
        }
    }
}

impl<T> fmt::Debug for RequiredFields<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.names()).finish()
    }
}

impl<T> fmt::Display for RequiredFields<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.fields.iter().join(", "))
    }
}

// Both sides are already deduplicated, so equal length plus containment is set equality.
impl<T> PartialEq for RequiredFields<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.fields.iter().all(|f| other.fields.contains(f))
    }
}

impl<T> Eq for RequiredFields<T> {}
