use crate::common::{Int, Operator};
use crate::parse::ast::{Expression, Factor, Literal, Parenthesized, Term, Variable};
use crate::parse::visit::{Accept, AstVisitor};
use crate::roll::Roll;

/// Renders expressions back to text without evaluating anything.
///
/// Every hook has a canonical default: tokens separated by single spaces, and
/// parentheses hugging their contents.
pub trait Stringify {
    fn stringify<A: Accept + ?Sized>(&mut self, node: &A) -> String {
        node.accept(self)
    }

    fn str_roll(&mut self, roll: &Roll) -> String {
        let expr = self.stringify(roll.expression());
        let total = self.str_total(roll.total());
        format!("{} = {}", expr, total)
    }

    fn str_total(&mut self, total: Int) -> String {
        total.to_string()
    }

    fn str_expression(&mut self, expr: &Expression) -> String {
        let mut ret = self.stringify(&expr.left);
        for (op, term) in &expr.right {
            let op = self.str_operator(*op);
            let term = self.stringify(term);
            ret = format!("{} {} {}", ret, op, term);
        }
        ret
    }

    fn str_term(&mut self, term: &Term) -> String {
        let mut ret = self.stringify(&term.left);
        for (op, factor) in &term.right {
            let op = self.str_operator(*op);
            let factor = self.stringify(factor);
            ret = format!("{} {} {}", ret, op, factor);
        }
        ret
    }

    fn str_factor(&mut self, factor: &Factor) -> String {
        let base = self.stringify(&factor.base);
        match &factor.exponent {
            Some(exponent) => format!("{} ^ {}", base, self.stringify(exponent)),
            None => base,
        }
    }

    fn str_operator(&mut self, op: Operator) -> String {
        op.to_string()
    }

    fn str_literal(&mut self, x: &Literal) -> String {
        x.0.to_string()
    }

    fn str_variable(&mut self, var: &Variable) -> String {
        var.0.clone()
    }

    fn str_parenthesized(&mut self, p: &Parenthesized) -> String {
        format!("({})", self.stringify(&*p.0))
    }
}

#[derive(Default)]
pub struct SimpleStringifier;

impl SimpleStringifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stringify<A: Accept + ?Sized>(&mut self, node: &A) -> String {
        Stringify::stringify(self, node)
    }
}

impl Stringify for SimpleStringifier {}

/// For chat clients that render Markdown: the total is set in inline code.
#[derive(Default)]
pub struct MarkdownStringifier;

impl MarkdownStringifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stringify<A: Accept + ?Sized>(&mut self, node: &A) -> String {
        Stringify::stringify(self, node)
    }
}

impl Stringify for MarkdownStringifier {
    fn str_total(&mut self, total: Int) -> String {
        format!("`{}`", total)
    }

    fn str_variable(&mut self, var: &Variable) -> String {
        format!("*{}*", var.0)
    }
}

impl<S: ?Sized> AstVisitor for S
where
    S: Stringify,
{
    type Output = String;

    fn visit_expression(&mut self, expr: &Expression) -> Self::Output {
        self.str_expression(expr)
    }

    fn visit_term(&mut self, term: &Term) -> Self::Output {
        self.str_term(term)
    }

    fn visit_factor(&mut self, factor: &Factor) -> Self::Output {
        self.str_factor(factor)
    }

    fn visit_literal(&mut self, x: &Literal) -> Self::Output {
        self.str_literal(x)
    }

    fn visit_variable(&mut self, var: &Variable) -> Self::Output {
        self.str_variable(var)
    }

    fn visit_parenthesized(&mut self, p: &Parenthesized) -> Self::Output {
        self.str_parenthesized(p)
    }
}
