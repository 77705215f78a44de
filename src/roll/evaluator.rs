use super::{ctx::Context, error::EvalError, record::*, roller::Roller, DefaultRoller, RResult};
use crate::common::*;
use crate::parse::{
    ast,
    visit::{Accept, AstVisitor},
};

/// Dice an evaluation may roll before giving up, unless configured otherwise.
pub const DEFAULT_MAX_ROLLS: usize = 1000;

/// Walks an expression tree with a fixed set of variables and a source of randomness.
pub struct Evaluator<'c, R = DefaultRoller> {
    context: &'c Context,
    roller: R,
    max_rolls: Option<usize>,
    rolls: usize,
    dice: Vec<DiceRoll>,
}

impl<'c, R: Roller> Evaluator<'c, R> {
    pub fn new(context: &'c Context, roller: R) -> Self {
        Self {
            context,
            roller,
            max_rolls: Some(DEFAULT_MAX_ROLLS),
            rolls: 0,
            dice: Vec::new(),
        }
    }

    /// Caps the number of dice rolled per evaluation; `None` removes the cap.
    pub fn with_max_rolls(mut self, max_rolls: Option<usize>) -> Self {
        self.max_rolls = max_rolls;
        self
    }

    pub fn eval(&mut self, expr: ast::Expression) -> RResult<Roll> {
        self.rolls = 0;
        self.dice.clear();
        let total = expr.accept(self)?;
        let dice = std::mem::take(&mut self.dice);
        Ok(Roll::new(expr, total, dice))
    }

    fn count_rolls(&mut self, n: usize) -> RResult<()> {
        self.rolls = self.rolls.saturating_add(n);
        if self.max_rolls.map_or(false, |max| self.rolls > max) {
            Err(EvalError::TooManyRolls)
        } else {
            Ok(())
        }
    }

    fn roll_dice(&mut self, count: Int, sides: Int) -> RResult<Int> {
        if count < 0 || sides < 1 {
            return Err(EvalError::InvalidDiceSpec { count, sides });
        }
        let num = usize::try_from(count).map_err(|_| EvalError::TooManyRolls)?;
        self.count_rolls(num)?;

        let mut values = Vec::with_capacity(num.min(DEFAULT_MAX_ROLLS));
        let mut total: Int = 0;
        for _ in 0..num {
            let value = self.roller.roll_die(sides);
            log::trace!("rolled d{}: {}", sides, value);
            total = total.checked_add(value).ok_or(EvalError::Overflow)?;
            values.push(value);
        }

        log::debug!("rolled {}d{}: {:?} = {}", count, sides, values, total);
        self.dice.push(DiceRoll { sides, values });
        Ok(total)
    }

    fn apply(&mut self, op: Operator, lhs: Int, rhs: Int) -> RResult<Int> {
        match op {
            Operator::Add => lhs.checked_add(rhs).ok_or(EvalError::Overflow),
            Operator::Subtract => lhs.checked_sub(rhs).ok_or(EvalError::Overflow),
            Operator::Multiply => lhs.checked_mul(rhs).ok_or(EvalError::Overflow),
            Operator::Divide if rhs == 0 => Err(EvalError::DivisionByZero),
            Operator::Divide => lhs.checked_div(rhs).ok_or(EvalError::Overflow),
            Operator::DiceRoll => self.roll_dice(lhs, rhs),
        }
    }
}

fn power(base: Int, exponent: Int) -> RResult<Int> {
    match u32::try_from(exponent) {
        Ok(exp) => base.checked_pow(exp).ok_or(EvalError::Overflow),
        Err(_) => {
            // Negative or enormous exponents; truncated toward zero like the rest of the pipeline.
            let x = (base as Float).powf(exponent as Float);
            if x.is_finite() && x.abs() < Int::MAX as Float {
                Ok(x as Int)
            } else {
                Err(EvalError::Overflow)
            }
        }
    }
}

impl<R: Roller> AstVisitor for Evaluator<'_, R> {
    type Output = RResult<Int>;

    fn visit_expression(&mut self, expr: &ast::Expression) -> Self::Output {
        let mut acc = self.visit(&expr.left)?;
        for (op, term) in &expr.right {
            let rhs = self.visit(term)?;
            acc = self.apply(*op, acc, rhs)?;
        }
        Ok(acc)
    }

    fn visit_term(&mut self, term: &ast::Term) -> Self::Output {
        let mut acc = self.visit(&term.left)?;
        for (op, factor) in &term.right {
            let rhs = self.visit(factor)?;
            acc = self.apply(*op, acc, rhs)?;
        }
        Ok(acc)
    }

    fn visit_factor(&mut self, factor: &ast::Factor) -> Self::Output {
        let base = self.visit(&factor.base)?;
        match &factor.exponent {
            Some(exponent) => power(base, self.visit(exponent)?),
            None => Ok(base),
        }
    }

    fn visit_literal(&mut self, x: &ast::Literal) -> Self::Output {
        Ok(x.0)
    }

    fn visit_variable(&mut self, var: &ast::Variable) -> Self::Output {
        self.context
            .get(&var.0)
            .ok_or_else(|| EvalError::UndefinedVariable(var.0.clone()))
    }

    fn visit_parenthesized(&mut self, p: &ast::Parenthesized) -> Self::Output {
        self.visit(&*p.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roll::roller::{FixedRoller, ScriptedRoller};

    fn ctx() -> Context {
        Context::new().with("juice", 4).with("Str", -1)
    }

    fn eval_with<R: Roller>(s: &str, roller: R) -> RResult<Roll> {
        let ast = crate::parse::parse(s).unwrap();
        let context = ctx();
        let mut evaluator = Evaluator::new(&context, roller);
        evaluator.eval(ast)
    }

    fn check(s: &str, expected: Int) {
        let actual = eval_with(s, FixedRoller::new(4)).unwrap();
        assert_eq!(actual.total(), expected, "evaluating {:?}", s);
    }

    fn check_err(s: &str, expected: EvalError) {
        let actual = eval_with(s, FixedRoller::new(4));
        assert_eq!(actual.unwrap_err(), expected, "evaluating {:?}", s);
    }

    #[test]
    fn test_eval_arithmetic() {
        check("3+4", 7);
        check("10 - 3 - 2", 5);
        check("2 + 3 * 4", 14);
        check("2 * 3 ^ 2", 18);
        check("100 / 10 / 5", 2);
        check("7 / 2", 3);
        check("1 - 8 / 3", -1);
        check("((3 + 3 * 12 - 30) / 3) ^ 2", 9);
    }

    #[test]
    fn test_eval_power() {
        check("2 ^ 10", 1024);
        check("0 ^ 0", 1);
        check("(0 - 2) ^ 3", -8);
        check("2 ^ (0 - 1)", 0);
        check("1 ^ (0 - 5)", 1);
        check("(0 - 1) ^ (0 - 3)", -1);
    }

    #[test]
    fn test_eval_variables() {
        check("juice", 4);
        check("juice + 3", 7);
        check("Str * 2", -2);
        check_err("str", EvalError::UndefinedVariable("str".to_string()));
        check_err("1 + nope * 2", EvalError::UndefinedVariable("nope".to_string()));
    }

    #[test]
    fn test_eval_dice() {
        check("1d4", 4);
        check("3 d juice", 12);
        check("0 d 6", 0);
        // `d` binds at the additive tier: (2 + 1) d 6
        check("2 + 1d6", 12);
        check("2 * 2 d 6", 16);
    }

    #[test]
    fn test_eval_dice_record() {
        let roll = eval_with("1d6 + 2 d 8", ScriptedRoller::new([1, 2, 3, 4])).unwrap();
        assert_eq!(
            roll.dice(),
            &[
                DiceRoll { sides: 6, values: vec![1] },
                DiceRoll { sides: 8, values: vec![2, 3, 4] },
            ]
        );
        // (1 + 2) d 8
        assert_eq!(roll.total(), 2 + 3 + 4);
    }

    #[test]
    fn test_eval_errors() {
        check_err("5 / 0", EvalError::DivisionByZero);
        check_err("5 / (juice - 4)", EvalError::DivisionByZero);
        check_err("3 d 0", EvalError::InvalidDiceSpec { count: 3, sides: 0 });
        check_err("(0 - 1) d 6", EvalError::InvalidDiceSpec { count: -1, sides: 6 });
        check_err("2 ^ 63", EvalError::Overflow);
        check_err("0 ^ (0 - 1)", EvalError::Overflow);
        check_err("9223372036854775807 + 1", EvalError::Overflow);
        check_err("(0 - 9223372036854775807 - 1) / (0 - 1)", EvalError::Overflow);
    }

    #[test]
    fn test_err_too_many_rolls() {
        check_err("1001 d 6", EvalError::TooManyRolls);
        check_err("600 d 6 + 600 d 6", EvalError::TooManyRolls);

        let context = Context::new();
        let ast = crate::parse::parse("5000 d 2").unwrap();
        let roll = Evaluator::new(&context, FixedRoller::new(1))
            .with_max_rolls(None)
            .eval(ast)
            .unwrap();
        assert_eq!(roll.total(), 5000);
    }

    #[test]
    fn test_unbounded_huge_roll_fails_cleanly() {
        let context = Context::new();
        let ast = crate::parse::parse("9223372036854775807 d 9223372036854775807").unwrap();
        let result = Evaluator::new(&context, FixedRoller::new(Int::MAX))
            .with_max_rolls(None)
            .eval(ast);
        // The second die overflows the sum long before the count is reached.
        assert_eq!(result.unwrap_err(), EvalError::Overflow);
    }

    #[test]
    fn test_eval_resets_between_calls() {
        let context = Context::new();
        let mut evaluator = Evaluator::new(&context, FixedRoller::new(2)).with_max_rolls(Some(10));
        for _ in 0..3 {
            let ast = crate::parse::parse("10 d 6").unwrap();
            let roll = evaluator.eval(ast).unwrap();
            assert_eq!(roll.total(), 20);
            assert_eq!(roll.dice().len(), 1);
        }
    }
}
