use std::collections::BTreeMap;

use serde_json::Value as Json;

use super::key::{AttributeType, Key, ValueType};
use super::map::AttributeMap;
use crate::ConfigError;

/// Whether a key takes one value or a list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    Single,
    /// Accepts a list, or a scalar that is read as a one-element list.
    Multi,
}

/// One recognized configuration key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Attribute {
    pub name: &'static str,
    pub shape: Shape,
    pub value_type: ValueType,
}

/// The keys a rule kind recognizes, built once and shared by reference.
#[derive(Debug, Clone, Default)]
pub struct DescriptorSet {
    attributes: BTreeMap<&'static str, Attribute>,
}

impl DescriptorSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn single<T: AttributeType>(mut self, key: &Key<T>) -> Self {
        self.add(key, Shape::Single);
        self
    }

    #[must_use]
    pub fn multi<T: AttributeType>(mut self, key: &Key<T>) -> Self {
        self.add(key, Shape::Multi);
        self
    }

    fn add<T: AttributeType>(&mut self, key: &Key<T>, shape: Shape) {
        self.attributes.insert(
            key.name(),
            Attribute {
                name: key.name(),
                shape,
                value_type: T::VALUE_TYPE,
            },
        );
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Attribute> {
        self.attributes.get(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    /// Match a rule document against the recognized keys.
    ///
    /// Keys this set does not know are kept untouched so that they surface
    /// as leftovers once the rule has been built.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the document is not an object, a
    /// single-valued key is given a list, or a value has the wrong type.
    pub fn parse(&self, document: &Json) -> Result<AttributeMap, ConfigError> {
        let object = document.as_object().ok_or(ConfigError::NotAnObject)?;
        let mut map = AttributeMap::new();

        for (name, value) in object {
            let Some(attribute) = self.get(name) else {
                map.insert_unknown(name);
                continue;
            };
            let values = match (attribute.shape, value) {
                (Shape::Single, Json::Array(_)) if attribute.value_type != ValueType::Json => {
                    return Err(ConfigError::ExpectedSingle { key: name.clone() });
                }
                (Shape::Multi, Json::Array(items)) => items.clone(),
                _ => vec![value.clone()],
            };
            for v in &values {
                if !attribute.value_type.accepts(v) {
                    return Err(ConfigError::InvalidValue {
                        key: name.clone(),
                        expected: attribute.value_type,
                        found: v.to_string(),
                    });
                }
            }
            map.insert_raw(name, values);
        }

        Ok(map)
    }
}
