use super::visit::{Accept, AstVisitor};
use crate::common::*;
use crate::stringify::SimpleStringifier;
use std::fmt;

/// `Term { ("+" | "-" | "d") Term }`
#[derive(Debug, Clone, PartialEq)]
pub struct Expression {
    pub left: Term,
    pub right: Vec<(Operator, Term)>,
}

impl Expression {
    pub fn new(left: Term, right: Vec<(Operator, Term)>) -> Self {
        debug_assert!(right.iter().all(|(op, _)| op.is_additive()));
        Self { left, right }
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&SimpleStringifier::new().stringify(self))
    }
}

/// `Factor { ("*" | "/") Factor }`
#[derive(Debug, Clone, PartialEq)]
pub struct Term {
    pub left: Factor,
    pub right: Vec<(Operator, Factor)>,
}

impl Term {
    pub fn new(left: Factor, right: Vec<(Operator, Factor)>) -> Self {
        debug_assert!(right.iter().all(|(op, _)| op.is_multiplicative()));
        Self { left, right }
    }
}

/// `Value [ "^" Value ]`
#[derive(Debug, Clone, PartialEq)]
pub struct Factor {
    pub base: Value,
    pub exponent: Option<Value>,
}

impl Factor {
    pub fn new(base: Value, exponent: Option<Value>) -> Self {
        Self { base, exponent }
    }
}

#[derive(Debug, Clone, PartialEq)]
#[enum_dispatch::enum_dispatch(Accept)]
pub enum Value {
    Literal(Literal),
    Variable(Variable),
    Parenthesized(Parenthesized),
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Literal(pub Int);

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Variable(pub String);

#[derive(Debug, Clone, PartialEq)]
pub struct Parenthesized(pub Box<Expression>);

impl Parenthesized {
    pub fn new(inner: Expression) -> Self {
        Self(Box::new(inner))
    }
}

// A bare value lifts through every tier unchanged.
impl From<Value> for Factor {
    fn from(base: Value) -> Self {
        Self::new(base, None)
    }
}

impl From<Factor> for Term {
    fn from(left: Factor) -> Self {
        Self::new(left, Vec::new())
    }
}

impl From<Term> for Expression {
    fn from(left: Term) -> Self {
        Self::new(left, Vec::new())
    }
}

impl From<Value> for Term {
    fn from(value: Value) -> Self {
        Factor::from(value).into()
    }
}

impl From<Factor> for Expression {
    fn from(factor: Factor) -> Self {
        Term::from(factor).into()
    }
}

impl From<Value> for Expression {
    fn from(value: Value) -> Self {
        Term::from(value).into()
    }
}
