use std::fmt;

/// Outcome override a rule imposes on the event it matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventResult {
    Allow,
    Deny,
    Default,
}

impl EventResult {
    /// Interpret a `result` keyword. `default` (or anything starting with
    /// `def`) keeps the default outcome, `allow`/`true` allows, everything
    /// else denies.
    #[must_use]
    pub fn from_keyword(keyword: &str) -> Self {
        if keyword.starts_with("def") {
            EventResult::Default
        } else if keyword == "allow" || keyword == "true" {
            EventResult::Allow
        } else {
            EventResult::Deny
        }
    }
}

impl fmt::Display for EventResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventResult::Allow => write!(f, "allow"),
            EventResult::Deny => write!(f, "deny"),
            EventResult::Default => write!(f, "default"),
        }
    }
}
