use std::fmt;

use tracing::{error, warn};

use crate::ConfigError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    /// An expected deployment variation, e.g. a missing optional integration.
    Warning,
}

/// One reported configuration problem, tied to the rule document it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub document: String,
    pub severity: Severity,
    pub error: ConfigError,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.severity {
            Severity::Error => write!(f, "error in {}: {}", self.document, self.error),
            Severity::Warning => write!(f, "warning in {}: {}", self.document, self.error),
        }
    }
}

/// Receives every problem found while loading rules. Loading never stops
/// because of a reported diagnostic.
pub trait ErrorSink {
    fn report(&mut self, diagnostic: Diagnostic);
}

impl ErrorSink for Vec<Diagnostic> {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.push(diagnostic);
    }
}

impl<F: FnMut(Diagnostic)> ErrorSink for F {
    fn report(&mut self, diagnostic: Diagnostic) {
        self(diagnostic);
    }
}

/// Sink bound to the document currently being compiled. Everything it
/// forwards is also logged.
pub(crate) struct Reporter<'a> {
    document: &'a str,
    sink: &'a mut dyn ErrorSink,
}

impl<'a> Reporter<'a> {
    pub(crate) fn new(document: &'a str, sink: &'a mut dyn ErrorSink) -> Self {
        Self { document, sink }
    }

    pub(crate) fn error(&mut self, err: ConfigError) {
        error!(document = self.document, "{err}");
        self.sink.report(Diagnostic {
            document: self.document.to_owned(),
            severity: Severity::Error,
            error: err,
        });
    }

    pub(crate) fn warn(&mut self, err: ConfigError) {
        warn!(document = self.document, "{err}");
        self.sink.report(Diagnostic {
            document: self.document.to_owned(),
            severity: Severity::Warning,
            error: err,
        });
    }
}
