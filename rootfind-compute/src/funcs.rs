//! The named functions that can appear in an expression.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// A built-in named function of one argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Func {
    Sin,
    Cos,
    Tan,
    Asin,
    Acos,
    Atan,
    Sinh,
    Cosh,
    Tanh,
    Exp,
    Ln,
    Log10,
    Sqrt,
    Abs,
    Floor,
    Ceil,
}

/// All recognized function names, including alternate spellings. `log` follows the natural-log
/// convention, with `log10` as the explicit base-10 form.
static ALL_FUNCS: Lazy<HashMap<&'static str, Func>> = Lazy::new(|| {
    HashMap::from([
        ("sin", Func::Sin),
        ("cos", Func::Cos),
        ("tan", Func::Tan),
        ("asin", Func::Asin),
        ("acos", Func::Acos),
        ("atan", Func::Atan),
        ("sinh", Func::Sinh),
        ("cosh", Func::Cosh),
        ("tanh", Func::Tanh),
        ("exp", Func::Exp),
        ("ln", Func::Ln),
        ("log", Func::Ln),
        ("log10", Func::Log10),
        ("sqrt", Func::Sqrt),
        ("abs", Func::Abs),
        ("floor", Func::Floor),
        ("ceil", Func::Ceil),
    ])
});

impl Func {
    /// Resolves a function name, if it is recognized.
    pub fn from_name(name: &str) -> Option<Func> {
        ALL_FUNCS.get(name).copied()
    }

    /// Returns the name of a recognized function that is close to the given unrecognized name,
    /// if any, for use in error messages.
    pub fn suggest(name: &str) -> Option<&'static str> {
        ALL_FUNCS
            .keys()
            .find(|known| levenshtein::levenshtein(known, name) < 2)
            .copied()
    }

    /// The canonical name of the function.
    pub fn name(self) -> &'static str {
        match self {
            Func::Sin => "sin",
            Func::Cos => "cos",
            Func::Tan => "tan",
            Func::Asin => "asin",
            Func::Acos => "acos",
            Func::Atan => "atan",
            Func::Sinh => "sinh",
            Func::Cosh => "cosh",
            Func::Tanh => "tanh",
            Func::Exp => "exp",
            Func::Ln => "ln",
            Func::Log10 => "log10",
            Func::Sqrt => "sqrt",
            Func::Abs => "abs",
            Func::Floor => "floor",
            Func::Ceil => "ceil",
        }
    }

    /// Evaluates the function at the given argument. Domain errors (`sqrt` of a negative, `ln` of
    /// a non-positive) produce IEEE NaN/infinity rather than failing.
    pub fn eval(self, arg: f64) -> f64 {
        match self {
            Func::Sin => arg.sin(),
            Func::Cos => arg.cos(),
            Func::Tan => arg.tan(),
            Func::Asin => arg.asin(),
            Func::Acos => arg.acos(),
            Func::Atan => arg.atan(),
            Func::Sinh => arg.sinh(),
            Func::Cosh => arg.cosh(),
            Func::Tanh => arg.tanh(),
            Func::Exp => arg.exp(),
            Func::Ln => arg.ln(),
            Func::Log10 => arg.log10(),
            Func::Sqrt => arg.sqrt(),
            Func::Abs => arg.abs(),
            Func::Floor => arg.floor(),
            Func::Ceil => arg.ceil(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_is_natural_log() {
        assert_eq!(Func::from_name("log"), Some(Func::Ln));
        assert_eq!(Func::from_name("ln"), Some(Func::Ln));
        assert_ne!(Func::from_name("log10"), Some(Func::Ln));
    }

    #[test]
    fn suggestions_for_near_misses() {
        assert_eq!(Func::suggest("sen"), Some("sin"));
        assert_eq!(Func::suggest("sqr"), Some("sqrt"));
        assert_eq!(Func::suggest("foobar"), None);
    }

    #[test]
    fn domain_errors_do_not_panic() {
        assert!(Func::Sqrt.eval(-1.0).is_nan());
        assert!(Func::Ln.eval(-1.0).is_nan());
        assert!(Func::Ln.eval(0.0).is_infinite());
    }
}
