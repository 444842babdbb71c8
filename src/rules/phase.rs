use std::collections::{BTreeSet, HashSet};

/// Named phases a rule is restricted to.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Phases(BTreeSet<String>);

impl Phases {
    pub fn new(names: impl IntoIterator<Item = String>) -> Self {
        Self(names.into_iter().collect())
    }

    /// True if every phase of the rule is active. A rule without phases
    /// always applies.
    #[must_use]
    pub fn applies_in(&self, active: &HashSet<String>) -> bool {
        self.0.iter().all(|phase| active.contains(phase))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}
