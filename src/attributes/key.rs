use std::fmt;
use std::marker::PhantomData;

use serde_json::Value as Json;

/// Semantic type of a configuration value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueType {
    Integer,
    Float,
    Boolean,
    String,
    /// Arbitrary structured JSON, interpreted later by the check that owns it.
    Json,
}

impl ValueType {
    pub(crate) fn accepts(self, value: &Json) -> bool {
        match self {
            ValueType::Integer => i32::extract(value).is_some(),
            ValueType::Float => f32::extract(value).is_some(),
            ValueType::Boolean => bool::extract(value).is_some(),
            ValueType::String => String::extract(value).is_some(),
            ValueType::Json => !value.is_null(),
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueType::Integer => write!(f, "an integer"),
            ValueType::Float => write!(f, "a number"),
            ValueType::Boolean => write!(f, "a boolean"),
            ValueType::String => write!(f, "a string"),
            ValueType::Json => write!(f, "a JSON value"),
        }
    }
}

/// Rust types that configuration values can be read as.
pub trait AttributeType: Sized {
    const VALUE_TYPE: ValueType;

    fn extract(value: &Json) -> Option<Self>;
}

impl AttributeType for i32 {
    const VALUE_TYPE: ValueType = ValueType::Integer;

    fn extract(value: &Json) -> Option<Self> {
        match value {
            Json::Number(n) => n.as_i64().and_then(|i| i32::try_from(i).ok()),
            Json::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }
}

impl AttributeType for f32 {
    const VALUE_TYPE: ValueType = ValueType::Float;

    #[allow(clippy::cast_possible_truncation)]
    fn extract(value: &Json) -> Option<Self> {
        match value {
            Json::Number(n) => n.as_f64().map(|f| f as f32),
            Json::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }
}

impl AttributeType for bool {
    const VALUE_TYPE: ValueType = ValueType::Boolean;

    fn extract(value: &Json) -> Option<Self> {
        match value {
            Json::Bool(b) => Some(*b),
            Json::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }
}

impl AttributeType for String {
    const VALUE_TYPE: ValueType = ValueType::String;

    fn extract(value: &Json) -> Option<Self> {
        match value {
            Json::String(s) => Some(s.clone()),
            Json::Number(n) => Some(n.to_string()),
            Json::Bool(b) => Some(b.to_string()),
            _ => None,
        }
    }
}

impl AttributeType for Json {
    const VALUE_TYPE: ValueType = ValueType::Json;

    fn extract(value: &Json) -> Option<Self> {
        (!value.is_null()).then(|| value.clone())
    }
}

/// A typed configuration key name.
pub struct Key<T> {
    name: &'static str,
    _type: PhantomData<fn() -> T>,
}

impl<T> Key<T> {
    #[must_use]
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            _type: PhantomData,
        }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }
}

impl<T> Clone for Key<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Key<T> {}

impl<T: AttributeType> fmt::Debug for Key<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Key")
            .field("name", &self.name)
            .field("type", &T::VALUE_TYPE)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn integers_accept_numeric_strings() {
        assert_eq!(i32::extract(&json!(12)), Some(12));
        assert_eq!(i32::extract(&json!("12")), Some(12));
        assert_eq!(i32::extract(&json!(1.5)), None);
        assert_eq!(i32::extract(&json!(true)), None);
    }

    #[test]
    fn floats_accept_integers() {
        assert_eq!(f32::extract(&json!(2)), Some(2.0));
        assert_eq!(f32::extract(&json!(0.25)), Some(0.25));
    }

    #[test]
    fn strings_accept_scalars() {
        assert_eq!(String::extract(&json!(3)), Some("3".to_owned()));
        assert_eq!(String::extract(&json!({"a": 1})), None);
    }

    #[test]
    fn booleans() {
        assert_eq!(bool::extract(&json!(false)), Some(false));
        assert_eq!(bool::extract(&json!("true")), Some(true));
        assert_eq!(bool::extract(&json!(1)), None);
    }

    #[test]
    fn json_rejects_null() {
        assert!(Json::extract(&Json::Null).is_none());
        assert!(ValueType::Json.accepts(&json!({"block": "minecraft:stone"})));
    }
}
