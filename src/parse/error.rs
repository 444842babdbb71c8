use std::fmt;

/// A compact descriptor that did not match its grammar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    form: &'static str,
    input: String,
    offset: usize,
}

impl ParseError {
    pub(crate) fn new(form: &'static str, input: &str, offset: usize) -> Self {
        Self {
            form,
            input: input.to_owned(),
            offset,
        }
    }

    /// Which grammar rejected the input (`range expression`, `potion`, ...).
    #[must_use]
    pub fn form(&self) -> &'static str {
        self.form
    }

    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Byte offset into the trimmed input where parsing stopped.
    #[must_use]
    pub fn offset(&self) -> usize {
        self.offset
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "bad {} '{}' at offset {}",
            self.form, self.input, self.offset
        )
    }
}

impl std::error::Error for ParseError {}
