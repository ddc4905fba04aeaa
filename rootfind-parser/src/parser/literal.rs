use std::ops::Range;
use super::{
    error::Error,
    token::{Float, Name, Int},
    Parse,
    Parser,
};

/// A number literal. Integers and floats are both stored as `f64`, since everything downstream
/// works in double precision.
#[derive(Debug, Clone, PartialEq)]
pub struct LitNum {
    /// The value of the literal.
    pub value: f64,

    /// The region of the source code this literal was parsed from.
    pub span: Range<usize>,
}

impl Parse for LitNum {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        let (lexeme, span) = match input.try_parse::<Float>() {
            Ok(float) => (float.lexeme, float.span),
            Err(_) => {
                let int = input.try_parse::<Int>()?;
                (int.lexeme, int.span)
            },
        };
        Ok(Self {
            // every lexeme the tokenizer accepts as Int or Float parses as f64
            value: lexeme.parse().unwrap(),
            span,
        })
    }
}

/// A named symbol: the variable `x`, a constant such as `pi`, or a function name.
#[derive(Debug, Clone, PartialEq)]
pub struct LitSym {
    /// The name of the symbol.
    pub name: String,

    /// The region of the source code this literal was parsed from.
    pub span: Range<usize>,
}

impl Parse for LitSym {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        let token = input.try_parse::<Name>()?;
        Ok(Self {
            name: token.lexeme,
            span: token.span,
        })
    }
}

/// A value written directly in the source text: a number, or a named symbol.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    /// A number literal.
    Number(LitNum),

    /// A named symbol.
    Symbol(LitSym),
}

impl Literal {
    /// Returns the span of the literal.
    pub fn span(&self) -> Range<usize> {
        match self {
            Literal::Number(num) => num.span.clone(),
            Literal::Symbol(sym) => sym.span.clone(),
        }
    }
}

impl Parse for Literal {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        input.try_parse::<LitNum>().map(Literal::Number)
            .or_else(|_| input.try_parse::<LitSym>().map(Literal::Symbol))
    }
}
