use crate::common::Int;
use crate::parse::ast::Expression;
use crate::stringify::{SimpleStringifier, Stringify};
use std::fmt;

/// One application of the dice operator.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct DiceRoll {
    pub sides: Int,
    pub values: Vec<Int>,
}

impl DiceRoll {
    pub fn count(&self) -> usize {
        self.values.len()
    }

    pub fn total(&self) -> Int {
        self.values.iter().sum()
    }
}

impl fmt::Display for DiceRoll {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let values = self
            .values
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        write!(f, "{}d{} ({})", self.count(), self.sides, values)
    }
}

/// An evaluated expression together with every die it rolled.
#[derive(Debug, Clone, PartialEq)]
pub struct Roll {
    pub(crate) expression: Expression,
    pub(crate) total: Int,
    pub(crate) dice: Vec<DiceRoll>,
}

impl Roll {
    pub(crate) fn new(expression: Expression, total: Int, dice: Vec<DiceRoll>) -> Self {
        Self {
            expression,
            total,
            dice,
        }
    }

    pub fn expression(&self) -> &Expression {
        &self.expression
    }

    pub fn total(&self) -> Int {
        self.total
    }

    /// Dice in the order they were rolled.
    pub fn dice(&self) -> &[DiceRoll] {
        &self.dice
    }

    pub fn result<S: Stringify + Default>(&self) -> String {
        S::default().str_roll(self)
    }
}

impl fmt::Display for Roll {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.result::<SimpleStringifier>())
    }
}
