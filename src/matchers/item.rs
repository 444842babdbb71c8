use serde_json::Value as Json;

use super::{RangeExpr, TagMatcher};
use crate::ConfigError;
use crate::diagnostics::Reporter;
use crate::host::Registry;
use crate::parse::parse_item;
use crate::types::{Compound, ItemStack, ResourceId};

/// Predicate over an item stack.
#[derive(Debug, Clone, PartialEq)]
pub enum ItemMatcher {
    /// `{"empty": bool}`
    Empty(bool),
    /// `id`, `id@damage`, `id/{tag}` or `id@damage/{tag}`.
    Stack {
        item: ResourceId,
        damage: Option<i32>,
        tag: Option<Compound>,
    },
    /// Object form; every present constraint must hold.
    Structured {
        item: ResourceId,
        damage: Option<RangeExpr>,
        count: Option<RangeExpr>,
        namespace: Option<String>,
        nbt: Vec<TagMatcher>,
        energy: Option<RangeExpr>,
    },
    /// Ore dictionary lookup; no longer available and never matches.
    OreDictionary(String),
}

impl ItemMatcher {
    #[must_use]
    pub fn test(&self, stack: &ItemStack) -> bool {
        match self {
            ItemMatcher::Empty(empty) => stack.is_empty() == *empty,
            ItemMatcher::Stack { item, damage, tag } => {
                stack.item() == item
                    && damage.is_none_or(|d| stack.damage() == d)
                    && tag.as_ref().is_none_or(|t| stack.tag() == Some(t))
            }
            ItemMatcher::Structured {
                item,
                damage,
                count,
                namespace,
                nbt,
                energy,
            } => {
                stack.item() == item
                    && damage.is_none_or(|e| e.test(i64::from(stack.damage())))
                    && count.is_none_or(|e| e.test(i64::from(stack.count())))
                    && namespace
                        .as_deref()
                        .is_none_or(|ns| stack.item().namespace() == ns)
                    && nbt.iter().all(|m| m.test(stack.tag()))
                    && energy.is_none_or(|e| e.test(stack.energy().unwrap_or(0)))
            }
            ItemMatcher::OreDictionary(_) => false,
        }
    }

    /// Compile one item description.
    ///
    /// Problems with optional constraints (`count`, `nbt`, `energy`) are
    /// reported and the constraint is left out; an unknown item or a bad
    /// `damage` drops the whole matcher.
    pub(crate) fn from_json(
        value: &Json,
        registry: &dyn Registry,
        reporter: &mut Reporter<'_>,
    ) -> Result<Self, ConfigError> {
        match value {
            Json::String(text) => Self::from_descriptor(text, registry),
            Json::Object(obj) => {
                if let Some(empty) = obj.get("empty") {
                    return empty
                        .as_bool()
                        .map(ItemMatcher::Empty)
                        .ok_or_else(|| ConfigError::BadItemDescription(value.to_string()));
                }
                let name = obj
                    .get("item")
                    .and_then(Json::as_str)
                    .ok_or_else(|| ConfigError::BadItemDescription(value.to_string()))?;
                let item = ResourceId::parse(name);
                if !registry.has_item(&item) {
                    return Err(ConfigError::UnknownItem(name.to_owned()));
                }
                if let Some(ore) = obj.get("ore") {
                    let ore = ore.as_str().unwrap_or_default().to_owned();
                    reporter.warn(ConfigError::OreDictionary(ore.clone()));
                    return Ok(ItemMatcher::OreDictionary(ore));
                }

                let damage = obj.get("damage").map(RangeExpr::from_json).transpose()?;
                let mut optional = |key: &str| {
                    obj.get(key)
                        .and_then(|v| RangeExpr::from_json(v).map_err(|e| reporter.error(e)).ok())
                };
                let count = optional("count");
                let energy = optional("energy");
                let nbt = match obj.get("nbt") {
                    Some(v) => TagMatcher::list_from_json(v).unwrap_or_else(|e| {
                        reporter.error(e);
                        Vec::new()
                    }),
                    None => Vec::new(),
                };
                let namespace = obj.get("mod").and_then(Json::as_str).map(str::to_owned);

                Ok(ItemMatcher::Structured {
                    item,
                    damage,
                    count,
                    namespace,
                    nbt,
                    energy,
                })
            }
            other => Err(ConfigError::BadItemDescription(other.to_string())),
        }
    }

    fn from_descriptor(text: &str, registry: &dyn Registry) -> Result<Self, ConfigError> {
        let descriptor =
            parse_item(text).map_err(|_| ConfigError::BadItemDescription(text.to_owned()))?;
        let item = ResourceId::parse(descriptor.id);
        if !registry.has_item(&item) {
            return Err(ConfigError::UnknownItem(descriptor.id.to_owned()));
        }
        let tag = match descriptor.tag {
            Some(raw) => {
                let json: Json =
                    serde_json::from_str(raw).map_err(|_| ConfigError::BadTag(raw.to_owned()))?;
                Some(Compound::from_json(&json).ok_or_else(|| ConfigError::BadTag(raw.to_owned()))?)
            }
            None => None,
        };
        Ok(ItemMatcher::Stack {
            item,
            damage: descriptor.damage,
            tag,
        })
    }

    /// Compile a list of item descriptions, dropping and reporting the
    /// invalid ones.
    pub(crate) fn list_from_json<'v>(
        values: impl IntoIterator<Item = &'v Json>,
        registry: &dyn Registry,
        reporter: &mut Reporter<'_>,
    ) -> Vec<ItemMatcher> {
        values
            .into_iter()
            .filter_map(|value| match Self::from_json(value, registry, reporter) {
                Ok(matcher) => Some(matcher),
                Err(err) => {
                    reporter.error(err);
                    None
                }
            })
            .collect()
    }
}

/// True if any matcher accepts the stack. Empty stacks never match.
pub(crate) fn any_matches(matchers: &[ItemMatcher], stack: &ItemStack) -> bool {
    !stack.is_empty() && matchers.iter().any(|m| m.test(stack))
}
