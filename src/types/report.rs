use std::fmt;
use std::time::Duration;

/// Detailed match report returned by
/// [`RuleEvaluator::match_detailed()`](crate::RuleEvaluator::match_detailed).
///
/// Contains the match outcome, the keys of the checks that ran (in order),
/// the key of the check that stopped evaluation, and the wall-clock duration.
#[derive(Debug, Clone)]
#[must_use]
pub struct MatchReport {
    matched: bool,
    evaluated: Vec<&'static str>,
    failed_at: Option<&'static str>,
    duration: Duration,
}

impl MatchReport {
    pub(crate) fn new(
        evaluated: Vec<&'static str>,
        failed_at: Option<&'static str>,
        duration: Duration,
    ) -> Self {
        Self {
            matched: failed_at.is_none(),
            evaluated,
            failed_at,
            duration,
        }
    }

    /// Same result as [`RuleEvaluator::matches()`](crate::RuleEvaluator::matches).
    #[must_use]
    pub fn matched(&self) -> bool {
        self.matched
    }

    /// Keys of the checks that were evaluated, in evaluation order.
    #[must_use]
    pub fn evaluated(&self) -> &[&'static str] {
        &self.evaluated
    }

    /// Key of the first check that returned `false`.
    #[must_use]
    pub fn failed_at(&self) -> Option<&'static str> {
        self.failed_at
    }

    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }
}

impl fmt::Display for MatchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.failed_at {
            Some(key) => write!(f, "matched: false (failed at {key})")?,
            None => write!(f, "matched: true")?,
        }
        write!(f, ", evaluated: [{}]", self.evaluated.join(", "))?;
        write!(f, ", duration: {:?}", self.duration)?;
        Ok(())
    }
}
