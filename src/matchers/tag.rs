use serde::Deserialize;
use serde_json::Value as Json;

use super::RangeExpr;
use crate::ConfigError;
use crate::types::Compound;

/// Constraint on a tag compound.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagMatcher {
    /// The integer stored under `tag` satisfies `expr`.
    Value { tag: String, expr: RangeExpr },
    /// Some compound in the list stored under `tag` satisfies every nested
    /// matcher.
    Contains { tag: String, matchers: Vec<TagMatcher> },
}

#[derive(Deserialize)]
struct TagDoc {
    tag: String,
    #[serde(default)]
    value: Option<Json>,
    #[serde(default)]
    contains: Option<Vec<TagDoc>>,
}

impl TagMatcher {
    /// A missing compound never matches.
    #[must_use]
    pub fn test(&self, compound: Option<&Compound>) -> bool {
        let Some(compound) = compound else {
            return false;
        };
        match self {
            TagMatcher::Value { tag, expr } => expr.test(i64::from(compound.get_int(tag))),
            TagMatcher::Contains { tag, matchers } => compound
                .compound_list(tag)
                .any(|element| matchers.iter().all(|m| m.test(Some(element)))),
        }
    }

    /// Parse a JSON array of `{tag, value}` / `{tag, contains: [...]}`
    /// entries.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if an entry is malformed or carries a bad
    /// range expression.
    pub fn list_from_json(value: &Json) -> Result<Vec<TagMatcher>, ConfigError> {
        let docs: Vec<TagDoc> = serde_json::from_value(value.clone())
            .map_err(|_| ConfigError::BadTagMatcher(value.to_string()))?;
        docs.into_iter().map(Self::from_doc).collect()
    }

    fn from_doc(doc: TagDoc) -> Result<Self, ConfigError> {
        match (doc.contains, doc.value) {
            (Some(nested), _) => Ok(TagMatcher::Contains {
                tag: doc.tag,
                matchers: nested
                    .into_iter()
                    .map(Self::from_doc)
                    .collect::<Result<_, _>>()?,
            }),
            (None, Some(value)) => Ok(TagMatcher::Value {
                tag: doc.tag,
                expr: RangeExpr::from_json(&value)?,
            }),
            (None, None) => Err(ConfigError::BadTagMatcher(doc.tag)),
        }
    }
}
