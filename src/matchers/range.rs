use std::fmt;
use std::str::FromStr;

use serde_json::Value as Json;

use crate::ConfigError;
use crate::parse::{ParseError, parse_range};

/// Integer predicate written as `>=N`, `>N`, `<=N`, `<N`, `=N`, `!=N`,
/// `<>N`, `A-B` or a bare `N`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RangeExpr {
    AtLeast(i64),
    Above(i64),
    AtMost(i64),
    Below(i64),
    Equal(i64),
    NotEqual(i64),
    /// Inclusive on both ends.
    Between(i64, i64),
}

impl RangeExpr {
    #[must_use]
    pub fn test(self, value: i64) -> bool {
        match self {
            RangeExpr::AtLeast(n) => value >= n,
            RangeExpr::Above(n) => value > n,
            RangeExpr::AtMost(n) => value <= n,
            RangeExpr::Below(n) => value < n,
            RangeExpr::Equal(n) => value == n,
            RangeExpr::NotEqual(n) => value != n,
            RangeExpr::Between(low, high) => value >= low && value <= high,
        }
    }

    /// Read an expression from a JSON field; a bare number means equality.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::BadExpression`] for anything that is neither a
    /// number nor a valid expression string.
    #[allow(clippy::cast_possible_truncation)]
    pub fn from_json(value: &Json) -> Result<Self, ConfigError> {
        match value {
            Json::Number(n) => n
                .as_i64()
                .or_else(|| n.as_f64().map(|f| f as i64))
                .map(RangeExpr::Equal)
                .ok_or_else(|| ConfigError::BadExpression(n.to_string())),
            Json::String(s) => s
                .parse()
                .map_err(|_| ConfigError::BadExpression(s.clone())),
            other => Err(ConfigError::BadExpression(other.to_string())),
        }
    }
}

impl FromStr for RangeExpr {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_range(s)
    }
}

impl fmt::Display for RangeExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RangeExpr::AtLeast(n) => write!(f, ">={n}"),
            RangeExpr::Above(n) => write!(f, ">{n}"),
            RangeExpr::AtMost(n) => write!(f, "<={n}"),
            RangeExpr::Below(n) => write!(f, "<{n}"),
            RangeExpr::Equal(n) => write!(f, "={n}"),
            RangeExpr::NotEqual(n) => write!(f, "!={n}"),
            RangeExpr::Between(low, high) => write!(f, "{low}-{high}"),
        }
    }
}
