use thiserror::Error;

use crate::attributes::ValueType;
use crate::host::Capability;

/// Configuration problems found while turning a rule document into a rule.
///
/// None of these abort loading: the offending check, matcher or rule is
/// dropped and the error is handed to the host's [`ErrorSink`](crate::ErrorSink).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("rule document is not a JSON object")]
    NotAnObject,

    #[error("keyword '{key}' takes a single value, not a list")]
    ExpectedSingle { key: String },

    #[error("keyword '{key}' expects {expected}, got {found}")]
    InvalidValue {
        key: String,
        expected: ValueType,
        found: String,
    },

    #[error("invalid keywords in {rule} rule: {}", keys.join(" "))]
    InvalidKeywords { rule: &'static str, keys: Vec<String> },

    #[error("unknown mob '{0}'")]
    UnknownEntity(String),

    #[error("block '{0}' is not valid")]
    UnknownBlock(String),

    #[error("unknown item '{0}'")]
    UnknownItem(String),

    #[error("unknown potion effect '{0}'")]
    UnknownEffect(String),

    #[error("unknown difficulty '{0}'; use one of 'easy', 'normal', 'hard' or 'peaceful'")]
    UnknownDifficulty(String),

    #[error("unknown weather '{0}'; use 'rain' or 'thunder'")]
    UnknownWeather(String),

    #[error("unknown biome type '{0}'")]
    UnknownBiomeType(String),

    #[error("unknown side '{0}'")]
    UnknownSide(String),

    #[error("bad expression '{0}'")]
    BadExpression(String),

    #[error("count description '{description}' is not valid: {reason}")]
    BadCount { description: String, reason: String },

    #[error("{0}")]
    InvalidCount(&'static str),

    #[error("'{key}' must be a positive number of days, got {value}")]
    BadDayCount { key: &'static str, value: i32 },

    #[error("bad state=value specifier '{0}'")]
    BadStateSpecifier(String),

    #[error("item description '{0}' is not valid")]
    BadItemDescription(String),

    #[error("block description '{0}' is not valid")]
    BadBlockDescription(String),

    #[error("block offset '{0}' is not valid")]
    BadBlockOffset(String),

    #[error("tag matcher '{0}' is not valid")]
    BadTagMatcher(String),

    #[error("bad tag compound '{0}'")]
    BadTag(String),

    #[error("bad potion specifier '{0}'; use 'effect,duration,amplifier'")]
    BadPotion(String),

    #[error("{capability} is missing: the '{key}' test cannot work")]
    MissingCapability {
        capability: Capability,
        key: &'static str,
    },

    #[error("ore dictionary matching is not supported: '{0}' never matches")]
    OreDictionary(String),
}
