use std::fmt;
use std::time::Instant;

use rand::{Rng, RngCore};
use tracing::trace;

use crate::MatchReport;
use crate::query::EventQuery;

/// One compiled condition of a rule.
pub trait Check: Send + Sync {
    fn evaluate(&self, query: &dyn EventQuery, rng: &mut dyn RngCore) -> bool;
}

/// A check backed by a closure over the event.
pub(crate) struct Predicate<F>(F);

impl<F> Check for Predicate<F>
where
    F: Fn(&dyn EventQuery) -> bool + Send + Sync,
{
    fn evaluate(&self, query: &dyn EventQuery, _rng: &mut dyn RngCore) -> bool {
        (self.0)(query)
    }
}

/// Box a closure as a [`Check`].
pub(crate) fn predicate<F>(f: F) -> Box<dyn Check>
where
    F: Fn(&dyn EventQuery) -> bool + Send + Sync + 'static,
{
    Box::new(Predicate(f))
}

/// Passes with the given probability.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RandomChance(pub f32);

impl Check for RandomChance {
    fn evaluate(&self, _query: &dyn EventQuery, rng: &mut dyn RngCore) -> bool {
        rng.random::<f32>() < self.0
    }
}

pub(crate) struct CompiledCheck {
    pub(crate) key: &'static str,
    pub(crate) check: Box<dyn Check>,
}

/// The ordered conjunction of checks compiled from one rule document.
///
/// Checks run in the order they were compiled and evaluation stops at the
/// first one that fails.
#[derive(Default)]
pub struct RuleEvaluator {
    checks: Vec<CompiledCheck>,
}

impl RuleEvaluator {
    pub(crate) fn new(checks: Vec<CompiledCheck>) -> Self {
        Self { checks }
    }

    /// True if every check passes. A rule without checks always matches.
    pub fn matches(&self, query: &dyn EventQuery, rng: &mut dyn RngCore) -> bool {
        self.checks.iter().all(|c| c.check.evaluate(query, rng))
    }

    /// Like [`matches`](Self::matches), but records which checks ran.
    pub fn match_detailed(&self, query: &dyn EventQuery, rng: &mut dyn RngCore) -> MatchReport {
        let start = Instant::now();
        let mut evaluated = Vec::with_capacity(self.checks.len());
        let mut failed_at = None;

        for c in &self.checks {
            evaluated.push(c.key);
            if !c.check.evaluate(query, rng) {
                failed_at = Some(c.key);
                break;
            }
        }

        let report = MatchReport::new(evaluated, failed_at, start.elapsed());
        trace!(%report, "rule evaluated");
        report
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.checks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.checks.is_empty()
    }

    /// Keys of the compiled checks, in evaluation order.
    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.checks.iter().map(|c| c.key)
    }
}

impl fmt::Debug for RuleEvaluator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuleEvaluator")
            .field("checks", &self.keys().collect::<Vec<_>>())
            .finish()
    }
}
