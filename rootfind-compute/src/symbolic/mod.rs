//! The symbolic representation of a parsed expression, and structural differentiation over it.

pub mod derivative;
pub mod expr;

pub use derivative::derivative;
pub use expr::{BinOp, Expr, UnaryOp};
