pub mod token;

use logos::{Lexer, Logos};
pub use token::{Token, TokenKind};

/// Returns a lexer over the token kinds of the input.
pub fn tokenize(input: &str) -> Lexer<TokenKind> {
    TokenKind::lexer(input)
}

/// Tokenizes the whole input up front into an owned slice of spanned tokens.
///
/// The parser works over this slice rather than a streaming lexer so it can rewind freely when a
/// speculative parse fails. Characters with no meaning in the grammar lex as catch-all
/// [`Symbol`](TokenKind::Symbol) tokens, which no parser accepts, so they surface as parse
/// errors pointing at the offending character.
pub fn tokenize_complete(input: &str) -> Box<[Token]> {
    let mut lexer = tokenize(input);
    let mut tokens = Vec::new();

    while let Some(Ok(kind)) = lexer.next() {
        tokens.push(Token {
            span: lexer.span(),
            kind,
            lexeme: lexer.slice(),
        });
    }

    tokens.into_boxed_slice()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Compares the tokens produced by the tokenizer to the raw expected tokens.
    fn compare_tokens<'source, const N: usize>(input: &'source str, expected: [(TokenKind, &'source str); N]) {
        let mut lexer = tokenize(input);

        for (expected_kind, expected_lexeme) in expected.into_iter() {
            assert_eq!(lexer.next(), Some(Ok(expected_kind)));
            assert_eq!(lexer.slice(), expected_lexeme);
        }

        assert_eq!(lexer.next(), None);
    }

    #[test]
    fn basic_expr() {
        compare_tokens(
            "x^2 - 2",
            [
                (TokenKind::Name, "x"),
                (TokenKind::Exp, "^"),
                (TokenKind::Int, "2"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Sub, "-"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Int, "2"),
            ],
        );
    }

    #[test]
    fn call_expr() {
        compare_tokens(
            "cos(x) - x",
            [
                (TokenKind::Name, "cos"),
                (TokenKind::OpenParen, "("),
                (TokenKind::Name, "x"),
                (TokenKind::CloseParen, ")"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Sub, "-"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Name, "x"),
            ],
        );
    }

    #[test]
    fn double_star_power() {
        compare_tokens(
            "x**2",
            [
                (TokenKind::Name, "x"),
                (TokenKind::Exp, "**"),
                (TokenKind::Int, "2"),
            ],
        );
    }

    #[test]
    fn namespaced_call() {
        compare_tokens(
            "np.exp(x)",
            [
                (TokenKind::Name, "np"),
                (TokenKind::Dot, "."),
                (TokenKind::Name, "exp"),
                (TokenKind::OpenParen, "("),
                (TokenKind::Name, "x"),
                (TokenKind::CloseParen, ")"),
            ],
        );
    }

    #[test]
    fn float_literals() {
        compare_tokens(
            "0.5 .25 1e-6 2.5e3",
            [
                (TokenKind::Float, "0.5"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Float, ".25"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Float, "1e-6"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Float, "2.5e3"),
            ],
        );
    }
}
