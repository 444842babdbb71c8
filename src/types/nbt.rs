use std::collections::BTreeMap;

use serde_json::Value as Json;

/// A node of a named binary tag tree, as attached to items and entities.
#[derive(Debug, Clone, PartialEq)]
pub enum Tag {
    Byte(i8),
    Short(i16),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    String(String),
    List(Vec<Tag>),
    Compound(Compound),
}

impl Tag {
    /// Integer view of a numeric tag, truncating wider values the way the
    /// game's own `getInt` does.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn as_int(&self) -> Option<i32> {
        match self {
            Tag::Byte(v) => Some(i32::from(*v)),
            Tag::Short(v) => Some(i32::from(*v)),
            Tag::Int(v) => Some(*v),
            Tag::Long(v) => Some(*v as i32),
            Tag::Float(v) => Some(*v as i32),
            Tag::Double(v) => Some(*v as i32),
            Tag::String(_) | Tag::List(_) | Tag::Compound(_) => None,
        }
    }

    #[must_use]
    pub fn as_compound(&self) -> Option<&Compound> {
        match self {
            Tag::Compound(c) => Some(c),
            _ => None,
        }
    }

    /// Convert a JSON value into a tag. `null` has no tag representation.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn from_json(value: &Json) -> Option<Tag> {
        match value {
            Json::Null => None,
            Json::Bool(b) => Some(Tag::Byte(i8::from(*b))),
            Json::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Some(i32::try_from(i).map_or(Tag::Long(i), Tag::Int))
                } else {
                    n.as_f64().map(Tag::Double)
                }
            }
            Json::String(s) => Some(Tag::String(s.clone())),
            Json::Array(items) => {
                Some(Tag::List(items.iter().filter_map(Tag::from_json).collect()))
            }
            Json::Object(_) => Compound::from_json(value).map(Tag::Compound),
        }
    }
}

/// A string-keyed tag map.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Compound(BTreeMap<String, Tag>);

impl Compound {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    #[must_use]
    pub fn with(mut self, key: &str, tag: Tag) -> Self {
        self.insert(key, tag);
        self
    }

    pub fn insert(&mut self, key: &str, tag: Tag) {
        self.0.insert(key.to_owned(), tag);
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Tag> {
        self.0.get(key)
    }

    /// Integer stored under `key`; missing or non-numeric tags read as `0`.
    #[must_use]
    pub fn get_int(&self, key: &str) -> i32 {
        self.get(key).and_then(Tag::as_int).unwrap_or(0)
    }

    /// Compound elements of the list stored under `key`.
    pub fn compound_list(&self, key: &str) -> impl Iterator<Item = &Compound> {
        let items: &[Tag] = match self.get(key) {
            Some(Tag::List(items)) => items,
            _ => &[],
        };
        items.iter().filter_map(Tag::as_compound)
    }

    /// Merge `other` into `self`; nested compounds are merged recursively,
    /// everything else is overwritten.
    pub fn merge(&mut self, other: &Compound) {
        for (key, tag) in &other.0 {
            match (self.0.get_mut(key), tag) {
                (Some(Tag::Compound(mine)), Tag::Compound(theirs)) => mine.merge(theirs),
                _ => {
                    self.0.insert(key.clone(), tag.clone());
                }
            }
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Build a compound from a JSON object. Returns `None` for non-objects.
    #[must_use]
    pub fn from_json(value: &Json) -> Option<Compound> {
        let object = value.as_object()?;
        let map = object
            .iter()
            .filter_map(|(k, v)| Tag::from_json(v).map(|t| (k.clone(), t)))
            .collect();
        Some(Compound(map))
    }
}
