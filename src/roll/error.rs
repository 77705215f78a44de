use crate::common::Int;
use thiserror::Error;

#[derive(Error, Debug, Clone, Eq, PartialEq)]
pub enum EvalError {
    #[error("variable {0:?} is not defined")]
    UndefinedVariable(String),
    #[error("cannot divide by zero")]
    DivisionByZero,
    #[error("cannot roll {count} d {sides}: need at least 0 dice with at least 1 side")]
    InvalidDiceSpec { count: Int, sides: Int },
    #[error("result is too large")]
    Overflow,
    #[error("too many dice rolled")]
    TooManyRolls,
}
