use std::fmt::{self, Write};
pub use vec1::vec1;

pub type Int = i64;

pub type Float = f64;

pub type NonEmpty<T> = vec1::Vec1<T>;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
    DiceRoll,
}

impl Operator {
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '*',
            Self::Divide => '/',
            Self::DiceRoll => 'd',
        }
    }

    /// Operators accepted between the terms of an expression.
    pub const fn is_additive(self) -> bool {
        matches!(self, Self::Add | Self::Subtract | Self::DiceRoll)
    }

    /// Operators accepted between the factors of a term.
    pub const fn is_multiplicative(self) -> bool {
        matches!(self, Self::Multiply | Self::Divide)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char(self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operator_symbols() {
        assert_eq!(Operator::Add.to_string(), "+");
        assert_eq!(Operator::Subtract.to_string(), "-");
        assert_eq!(Operator::Multiply.to_string(), "*");
        assert_eq!(Operator::Divide.to_string(), "/");
        assert_eq!(Operator::DiceRoll.to_string(), "d");
    }

    #[test]
    fn test_operator_tiers() {
        assert!(Operator::DiceRoll.is_additive());
        assert!(!Operator::DiceRoll.is_multiplicative());
        assert!(Operator::Divide.is_multiplicative());
        assert!(!Operator::Subtract.is_multiplicative());
    }
}
