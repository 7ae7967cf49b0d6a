//! Error type returned by the parser upon failure.
//!
//! Malformed notation is never an error: the parser degrades it to literal text. A
//! [`ParserError`] therefore always signals an inconsistency between the tokenizer, the parser,
//! and the symbol table, and should be reported as an internal error by whoever requested the
//! conversion.
use std::{error::Error, fmt::Display};
use thiserror::Error;

/// An internal failure of a single conversion request.
///
/// The error carries a short window of the input surrounding the point where the
/// inconsistency was detected.
#[derive(Debug)]
pub struct ParserError {
    inner: Box<Inner>,
}

#[derive(Debug)]
struct Inner {
    error: ErrorKind,
    context: Box<str>,
}

impl ParserError {
    pub(crate) fn new(error: ErrorKind, input: &str, index: usize) -> Self {
        const CONTEXT_SIZE: usize = 12;

        let lower_bound = floor_char_boundary(input, index.saturating_sub(CONTEXT_SIZE));
        let upper_bound = floor_char_boundary(input, index + CONTEXT_SIZE);

        Self {
            inner: Box::new(Inner {
                error,
                context: input[lower_bound..upper_bound].into(),
            }),
        }
    }

    /// The slice of the input surrounding the failure.
    pub fn context(&self) -> &str {
        &self.inner.context
    }
}

impl Error for ParserError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.inner.error)
    }
}

impl Display for ParserError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("internal error: ")?;
        self.inner.error.fmt(f)?;
        f.write_str("\ncontext: ")?;
        f.write_str(&self.inner.context.replace(['\n', '\t'], " "))
    }
}

#[derive(Debug, Error)]
pub(crate) enum ErrorKind {
    #[error("tokenize found leading whitespace")]
    LeadingWhitespace,
    #[error("token `{0}` is not in the symbol table")]
    UnknownSymbol(String),
    #[error("expected a symbol token, found `{0}`")]
    ExpectedSymbol(String),
    #[error("expected a closing bracket, found `{0}`")]
    ExpectedClose(String),
}

fn floor_char_boundary(str: &str, index: usize) -> usize {
    if index >= str.len() {
        str.len()
    } else {
        (0..=index)
            .rev()
            .find(|&i| str.is_char_boundary(i))
            .unwrap_or(0)
    }
}
