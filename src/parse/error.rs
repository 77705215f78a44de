use crate::common::NonEmpty;
use logos::Span;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
#[error("(at position {}): unrecognized input {slice:?}", .span.start)]
pub struct LexError {
    pub span: Span,
    pub slice: String,
}

impl LexError {
    pub fn new(span: Span, slice: impl ToString) -> Self {
        Self {
            span,
            slice: slice.to_string(),
        }
    }

    pub fn position(&self) -> usize {
        self.span.start
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
#[error("(at position {}): unexpected {}, expected {}", .span.start, fmt_found(.found.as_deref()), .expected.fmt_expected())]
pub struct ParseError {
    pub span: Span,
    pub expected: NonEmpty<String>,
    /// `None` when the input ended early.
    pub found: Option<String>,
}

impl ParseError {
    pub fn position(&self) -> usize {
        self.span.start
    }
}

fn fmt_found(found: Option<&str>) -> String {
    match found {
        Some(s) => format!("{:?}", s),
        None => "end of input".to_string(),
    }
}

trait FormatExpected {
    fn fmt_expected(&self) -> String;
}

impl FormatExpected for [String] {
    fn fmt_expected(&self) -> String {
        match self {
            [] => unreachable!("NonEmpty cannot be empty"),
            [a] => a.to_owned(),
            [a, b] => format!("{} or {}", a, b),
            s => format!("{}, or {}", s[..s.len() - 1].join(", "), &s[s.len() - 1]),
        }
    }
}
