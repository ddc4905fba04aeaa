//! Tokenizer and parser for plain one-variable math expressions, such as `x^2 - 2` or
//! `cos(x) - x`.
//!
//! The [`tokenizer`] module splits the raw source into spanned tokens, and the [`parser`] module
//! assembles them into an abstract syntax tree. The AST keeps the source span of every node so
//! later stages (lowering, differentiation) can point error reports back at the original text.

pub mod parser;
pub mod tokenizer;
