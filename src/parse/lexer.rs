use super::error::LexError;
use crate::common::*;
use logos::{Lexer as LogosLexer, Logos, Span};
use logos_iter::{LogosIter, PeekableLexer};
use std::fmt;

pub type Lexer<'a> = PeekableLexer<'a, LogosLexer<'a, TokenKind>, TokenKind>;

pub fn lexer(s: &str) -> Lexer {
    TokenKind::lexer(s).peekable_lexer()
}

#[derive(Logos, Debug, Copy, Clone, Eq, PartialEq)]
pub enum TokenKind {
    // Literals too large for `Int` fail the callback and surface as `Error`.
    #[regex(r"[0-9]+", |lex| lex.slice().parse())]
    Number(Int),
    #[token("d")]
    Dice,
    #[regex(r"[a-zA-Z]+")]
    Identifier,

    #[token("(")]
    LeftParen,
    #[token(")")]
    RightParen,
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("^")]
    Caret,
    #[regex(r"[!-/:-@\[-`{-~]")]
    Punct,

    #[regex(r";[^,]*")]
    Comment,
    #[regex(r"[ \t\r\n]+")]
    Whitespace,

    #[error]
    Error,
}

impl TokenKind {
    pub const ADDITION_OPS: &'static [Self] = &[Self::Plus, Self::Minus, Self::Dice];

    pub const MULTIPLICATION_OPS: &'static [Self] = &[Self::Star, Self::Slash];

    pub fn as_str(&self) -> &'static str {
        use TokenKind::*;

        match self {
            Number(_) => "<number>",
            Dice => "'d'",
            Identifier => "<identifier>",
            LeftParen => "'('",
            RightParen => "')'",
            Plus => "'+'",
            Minus => "'-'",
            Star => "'*'",
            Slash => "'/'",
            Caret => "'^'",
            Punct => "<punctuation>",
            Comment => "<comment>",
            Whitespace => "<whitespace>",
            Error => "<error>",
        }
    }

    /// Comments and whitespace are lexed but never parsed.
    pub fn is_trivia(&self) -> bool {
        matches!(self, Self::Comment | Self::Whitespace)
    }

    pub fn as_operator(&self) -> Option<Operator> {
        use Operator::*;
        Some(match self {
            Self::Plus => Add,
            Self::Minus => Subtract,
            Self::Star => Multiply,
            Self::Slash => Divide,
            Self::Dice => DiceRoll,
            _ => return None,
        })
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub slice: &'a str,
    pub span: Span,
}

/// Splits `s` into its full token stream, comments and whitespace included.
pub fn tokenize(s: &str) -> Result<Vec<Token<'_>>, LexError> {
    let mut lex = TokenKind::lexer(s);
    let mut tokens = Vec::new();
    while let Some(kind) = lex.next() {
        if kind == TokenKind::Error {
            return Err(LexError::new(lex.span(), lex.slice()));
        }
        tokens.push(Token {
            kind,
            slice: lex.slice(),
            span: lex.span(),
        });
    }
    Ok(tokens)
}
