use crate::parse::{LexError, ParseError};
use crate::roll::EvalError;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("lex error {0}")]
    Lex(#[from] LexError),
    #[error("syntax error {0}")]
    Parse(#[from] ParseError),
    #[error("{0}")]
    Eval(#[from] EvalError),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
