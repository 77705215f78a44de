pub mod ast;
mod error;
mod lexer;
mod parser;
pub mod visit;

#[cfg(test)]
pub(crate) mod test_strategies;

pub use error::{LexError, ParseError};
pub use lexer::{tokenize, Token, TokenKind};

pub(crate) fn parse(s: &str) -> crate::Result<ast::Expression> {
    parser::Parser::new(s).parse()
}
