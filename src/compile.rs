//! Turns an [`AttributeMap`] into the ordered checks of a [`RuleEvaluator`].
//!
//! Every check pulls its keys out of the map as it is compiled. Checks are
//! registered cheapest first so that evaluation can stop early on the
//! common failures.

mod common;
mod count;
mod generic;

use std::borrow::Borrow;
use std::collections::HashSet;
use std::hash::Hash;

pub use count::CountInfo;

use crate::ConfigError;
use crate::attributes::AttributeMap;
use crate::diagnostics::Reporter;
use crate::evaluate::{Check, CompiledCheck, RuleEvaluator, predicate};
use crate::host::{Capability, Host, Registry};
use crate::query::EventQuery;

pub(crate) struct Compiler<'a, 'r> {
    host: &'a Host,
    reporter: &'a mut Reporter<'r>,
    checks: Vec<CompiledCheck>,
}

impl<'a, 'r> Compiler<'a, 'r> {
    fn new(host: &'a Host, reporter: &'a mut Reporter<'r>) -> Self {
        Self {
            host,
            reporter,
            checks: Vec::new(),
        }
    }

    fn registry(&self) -> &'a dyn Registry {
        self.host.registry.as_ref()
    }

    fn add<F>(&mut self, key: &'static str, f: F)
    where
        F: Fn(&dyn EventQuery) -> bool + Send + Sync + 'static,
    {
        self.checks.push(CompiledCheck {
            key,
            check: predicate(f),
        });
    }

    fn push(&mut self, key: &'static str, check: impl Check + 'static) {
        self.checks.push(CompiledCheck {
            key,
            check: Box::new(check),
        });
    }

    /// Warns and returns `false` when the host lacks `capability`.
    fn requires(&mut self, capability: Capability, key: &'static str) -> bool {
        if self.host.capabilities.has(capability) {
            true
        } else {
            self.reporter
                .warn(ConfigError::MissingCapability { capability, key });
            false
        }
    }
}

/// Compile every condition present in `map`, consuming its keys.
pub(crate) fn compile(
    map: &mut AttributeMap,
    host: &Host,
    reporter: &mut Reporter<'_>,
) -> RuleEvaluator {
    let mut compiler = Compiler::new(host, reporter);
    compiler.common(map);
    compiler.generic(map);
    RuleEvaluator::new(compiler.checks)
}

/// Equality against one value, or membership in a set of several.
#[derive(Debug, Clone)]
enum Membership<T> {
    One(T),
    Set(HashSet<T>),
}

impl<T: Eq + Hash> Membership<T> {
    fn new(mut values: Vec<T>) -> Option<Self> {
        if values.len() > 1 {
            Some(Membership::Set(values.into_iter().collect()))
        } else {
            values.pop().map(Membership::One)
        }
    }

    fn contains<Q>(&self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        match self {
            Membership::One(one) => one.borrow() == value,
            Membership::Set(set) => set.contains(value),
        }
    }
}
