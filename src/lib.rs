//! Arithmetic with dice: `3 d juice + 2`, rendered back as `3 d juice + 2 = 14`.
//!
//! ```
//! use dicemath::{roll_with, Context, FixedRoller};
//!
//! let context = Context::new().with("juice", 4);
//! let roll = roll_with("3 d juice", &context, FixedRoller::new(4)).unwrap();
//! assert_eq!(roll.to_string(), "3 d juice = 12");
//! ```

mod common;
mod error;
pub mod parse;
pub mod roll;
pub mod stringify;

pub use common::{Int, Operator};
pub use error::{Error, Result};
pub use parse::{tokenize, LexError, ParseError, Token, TokenKind};
pub use roll::{
    Binding, BindingError, Context, DefaultRoller, DiceRoll, EvalError, Evaluator, FixedRoller,
    Roll, Roller, ScriptedRoller, DEFAULT_MAX_ROLLS,
};
pub use stringify::{MarkdownStringifier, SimpleStringifier, Stringify};

/// Parses an expression without evaluating it.
pub fn parse(s: &str) -> Result<parse::ast::Expression> {
    parse::parse(s)
}

/// Rolls `s` with no variables and the thread-local random number generator.
pub fn roll(s: &str) -> Result<Roll> {
    roll_with(s, &Context::new(), rand::thread_rng())
}

/// Rolls `s` with the given variables and source of randomness.
pub fn roll_with<R: Roller>(s: &str, context: &Context, roller: R) -> Result<Roll> {
    let ast = parse::parse(s)?;
    Ok(Evaluator::new(context, roller).eval(ast)?)
}
