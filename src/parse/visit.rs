use crate::parse::ast::{self, *};

pub trait AstVisitor {
    type Output;

    fn visit<T: ?Sized>(&mut self, node: &T) -> Self::Output
    where
        T: Accept,
    {
        node.accept(self)
    }

    fn visit_expression(&mut self, expr: &ast::Expression) -> Self::Output;

    fn visit_term(&mut self, term: &ast::Term) -> Self::Output;

    fn visit_factor(&mut self, factor: &ast::Factor) -> Self::Output;

    fn visit_literal(&mut self, x: &ast::Literal) -> Self::Output;

    fn visit_variable(&mut self, var: &ast::Variable) -> Self::Output;

    fn visit_parenthesized(&mut self, p: &ast::Parenthesized) -> Self::Output;
}

#[enum_dispatch::enum_dispatch]
pub trait Accept {
    fn accept<V: AstVisitor + ?Sized>(&self, v: &mut V) -> V::Output;
}

impl Accept for ast::Expression {
    fn accept<V: AstVisitor + ?Sized>(&self, v: &mut V) -> V::Output {
        v.visit_expression(self)
    }
}

impl Accept for ast::Term {
    fn accept<V: AstVisitor + ?Sized>(&self, v: &mut V) -> V::Output {
        v.visit_term(self)
    }
}

impl Accept for ast::Factor {
    fn accept<V: AstVisitor + ?Sized>(&self, v: &mut V) -> V::Output {
        v.visit_factor(self)
    }
}

impl Accept for ast::Literal {
    fn accept<V: AstVisitor + ?Sized>(&self, v: &mut V) -> V::Output {
        v.visit_literal(self)
    }
}

impl Accept for ast::Variable {
    fn accept<V: AstVisitor + ?Sized>(&self, v: &mut V) -> V::Output {
        v.visit_variable(self)
    }
}

impl Accept for ast::Parenthesized {
    fn accept<V: AstVisitor + ?Sized>(&self, v: &mut V) -> V::Output {
        v.visit_parenthesized(self)
    }
}
