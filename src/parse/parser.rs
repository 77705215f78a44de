use super::{ast::*, error::*, lexer::*};
use crate::common::*;
use crate::error::Error;
use logos_iter::LogosIter;

type PResult<T> = Result<T, Error>;

pub struct Parser<'a> {
    source: &'a str,
    lexer: Lexer<'a>,
}

impl<'a> Parser<'a> {
    const VALUE_START: &'static [TokenKind] = &[
        TokenKind::Number(0),
        TokenKind::Identifier,
        TokenKind::LeftParen,
    ];

    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            lexer: lexer(source),
        }
    }

    pub fn parse(mut self) -> PResult<Expression> {
        let expr = self.parse_expression()?;
        if self.peek().is_some() {
            let expected: Vec<_> = TokenKind::ADDITION_OPS
                .iter()
                .chain(TokenKind::MULTIPLICATION_OPS)
                .chain([&TokenKind::Caret])
                .map(TokenKind::as_str)
                .chain(["<end of input>"])
                .collect();
            return self.unexpected_token(&expected);
        }
        log::debug!("parsed {:?} as `{}`", self.source, expr);
        Ok(expr)
    }

    /// Next significant token, discarding comments and whitespace on the way.
    fn peek(&mut self) -> Option<TokenKind> {
        while let Some(kind) = self.lexer.peek().copied() {
            if kind.is_trivia() {
                self.lexer.next();
            } else {
                return Some(kind);
            }
        }
        None
    }

    fn advance(&mut self) -> Option<TokenKind> {
        self.peek()?;
        self.lexer.next()
    }

    fn matches(&mut self, kind: TokenKind) -> bool {
        self.peek() == Some(kind)
    }

    fn peek_operator(&mut self) -> Option<Operator> {
        self.peek().and_then(|kind| kind.as_operator())
    }

    fn consume(&mut self, expected: TokenKind) -> PResult<()> {
        if self.matches(expected) {
            self.advance();
            Ok(())
        } else {
            self.unexpected_token(&[expected.as_str()])
        }
    }

    fn unexpected_token<T>(&mut self, expected: &[&str]) -> PResult<T> {
        let found = self.advance();
        let (span, slice) = match found {
            Some(_) => (self.lexer.span(), Some(self.lexer.slice().to_string())),
            None => (self.source.len()..self.source.len(), None),
        };

        if found == Some(TokenKind::Error) {
            return Err(LexError::new(span, self.lexer.slice()).into());
        }

        let expected = expected.iter().map(ToString::to_string).collect::<Vec<_>>();
        let expected =
            NonEmpty::try_from_vec(expected).unwrap_or_else(|_| vec1!["<anything>".to_string()]);
        Err(ParseError {
            span,
            expected,
            found: slice,
        }
        .into())
    }

    fn parse_expression(&mut self) -> PResult<Expression> {
        let left = self.parse_term()?;
        let mut right = Vec::new();

        while let Some(op) = self.peek_operator().filter(|op| op.is_additive()) {
            self.advance();
            right.push((op, self.parse_term()?));
        }

        Ok(Expression::new(left, right))
    }

    fn parse_term(&mut self) -> PResult<Term> {
        let left = self.parse_factor()?;
        let mut right = Vec::new();

        while let Some(op) = self.peek_operator().filter(|op| op.is_multiplicative()) {
            self.advance();
            right.push((op, self.parse_factor()?));
        }

        Ok(Term::new(left, right))
    }

    fn parse_factor(&mut self) -> PResult<Factor> {
        let base = self.parse_value()?;
        let exponent = if self.matches(TokenKind::Caret) {
            self.advance();
            Some(self.parse_value()?)
        } else {
            None
        };
        Ok(Factor::new(base, exponent))
    }

    fn parse_value(&mut self) -> PResult<Value> {
        match self.peek() {
            Some(TokenKind::Number(x)) => {
                self.advance();
                Ok(Literal(x).into())
            }
            // A lone `d` in value position names a variable.
            Some(TokenKind::Identifier | TokenKind::Dice) => {
                self.advance();
                Ok(Variable(self.lexer.slice().to_string()).into())
            }
            Some(TokenKind::LeftParen) => self.parse_parenthesized(),
            _ => {
                let expected: Vec<_> = Self::VALUE_START.iter().map(TokenKind::as_str).collect();
                self.unexpected_token(&expected)
            }
        }
    }

    fn parse_parenthesized(&mut self) -> PResult<Value> {
        self.consume(TokenKind::LeftParen)?;
        let inner = self.parse_expression()?;
        self.consume(TokenKind::RightParen)?;
        Ok(Parenthesized::new(inner).into())
    }
}
