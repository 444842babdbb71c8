use std::collections::{BTreeMap, BTreeSet};

use serde_json::Value as Json;

use super::key::{AttributeType, Key};

/// Parsed configuration of one rule document.
///
/// Values are removed as they are consumed; whatever is left once a rule has
/// pulled every key it understands is reported as unknown. Keys the rule
/// kind does not recognize are only remembered by name and can never be
/// consumed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AttributeMap {
    values: BTreeMap<String, Vec<Json>>,
    unknown: BTreeSet<String>,
}

impl AttributeMap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn insert_raw(&mut self, name: &str, values: Vec<Json>) {
        self.values.insert(name.to_owned(), values);
    }

    pub(crate) fn insert_unknown(&mut self, name: &str) {
        self.unknown.insert(name.to_owned());
    }

    /// Append a value under `key`.
    pub fn insert<T>(&mut self, key: &Key<T>, value: Json) {
        self.values
            .entry(key.name().to_owned())
            .or_default()
            .push(value);
    }

    #[must_use]
    pub fn contains<T>(&self, key: &Key<T>) -> bool {
        self.values.contains_key(key.name())
    }

    /// Peek at the first value under `key` without consuming it.
    #[must_use]
    pub fn get<T: AttributeType>(&self, key: &Key<T>) -> Option<T> {
        self.values
            .get(key.name())
            .and_then(|values| values.first())
            .and_then(T::extract)
    }

    /// Peek at every value under `key`.
    #[must_use]
    pub fn get_list<T: AttributeType>(&self, key: &Key<T>) -> Vec<T> {
        self.values
            .get(key.name())
            .map(|values| values.iter().filter_map(T::extract).collect())
            .unwrap_or_default()
    }

    /// Remove `key` and return its first value.
    pub fn take<T: AttributeType>(&mut self, key: &Key<T>) -> Option<T> {
        self.values
            .remove(key.name())
            .and_then(|values| values.first().and_then(T::extract))
    }

    /// Remove `key` and return all of its values, even if it was declared
    /// single-valued.
    pub fn take_list<T: AttributeType>(&mut self, key: &Key<T>) -> Option<Vec<T>> {
        self.values
            .remove(key.name())
            .map(|values| values.iter().filter_map(T::extract).collect())
    }

    /// Run `handler` with the value of `key` if it is present.
    pub fn consume<T: AttributeType>(&mut self, key: &Key<T>, handler: impl FnOnce(T)) {
        if let Some(value) = self.take(key) {
            handler(value);
        }
    }

    pub fn consume_or_else<T: AttributeType>(
        &mut self,
        key: &Key<T>,
        handler: impl FnOnce(T),
        otherwise: impl FnOnce(),
    ) {
        match self.take(key) {
            Some(value) => handler(value),
            None => otherwise(),
        }
    }

    pub fn consume_as_list<T: AttributeType>(
        &mut self,
        key: &Key<T>,
        handler: impl FnOnce(Vec<T>),
    ) {
        if let Some(values) = self.take_list(key) {
            handler(values);
        }
    }

    /// Remove `key`, returning its value, so that a check can read a
    /// companion key that must not be reported as unknown.
    pub fn consume_and_fetch<T: AttributeType>(&mut self, key: &Key<T>) -> Option<T> {
        self.take(key)
    }

    /// True once every key has been consumed and none was unknown.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty() && self.unknown.is_empty()
    }

    /// Names of the unknown keys and of those not consumed yet, sorted.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        let mut keys: Vec<&str> = self
            .values
            .keys()
            .chain(&self.unknown)
            .map(String::as_str)
            .collect();
        keys.sort_unstable();
        keys.into_iter()
    }
}
