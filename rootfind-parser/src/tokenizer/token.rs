use logos::Logos;
use std::ops::Range;

/// Every kind of token a math expression can contain.
#[derive(Logos, Clone, Copy, Debug, PartialEq)]
pub enum TokenKind {
    #[regex(r"[ \t\n\r]+")]
    Whitespace,

    #[token("+")]
    Add,

    #[token("-")]
    Sub,

    #[token("*")]
    Mul,

    #[token("/")]
    Div,

    // `**` is the spelling some users carry over from other tools; both mean exponentiation
    #[token("^")]
    #[token("**")]
    Exp,

    #[token(",")]
    Comma,

    #[token("(")]
    OpenParen,

    #[token(")")]
    CloseParen,

    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Name,

    #[regex(r"[0-9]+")]
    Int,

    #[regex(r"[0-9]+\.[0-9]+([eE][+-]?[0-9]+)?|\.[0-9]+([eE][+-]?[0-9]+)?|[0-9]+[eE][+-]?[0-9]+")]
    Float,

    #[token(".")]
    Dot,

    #[regex(r".", priority = 0)]
    Symbol,
}

/// A token paired with the region of source text it was lexed from.
#[derive(Clone, Debug, PartialEq)]
pub struct Token<'source> {
    /// The region of the source that produced this token.
    pub span: Range<usize>,

    /// The kind of token.
    pub kind: TokenKind,

    /// The raw text of the token.
    pub lexeme: &'source str,
}

impl Token<'_> {
    /// Returns true if this token is whitespace.
    pub fn is_whitespace(&self) -> bool {
        self.kind == TokenKind::Whitespace
    }
}
