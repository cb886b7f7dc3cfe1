//! Error types for tokenizing, parsing and truth-table generation.

use thiserror::Error;

use crate::token::{Token, TokenKind};

/// Errors that can occur while tokenizing.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LexError {
    /// Character outside the recognized token alphabet.
    #[error("unknown symbol '{symbol}' at position {position}")]
    UnknownSymbol { symbol: char, position: usize },
}

/// Errors that can occur while parsing a token sequence.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A specific token was required, but a different one was found.
    #[error("expected {expected}, found {found}")]
    Expected { expected: TokenKind, found: Token },

    /// The token sequence is empty.
    #[error("unexpected end of input")]
    UnexpectedEnd,

    /// Token that cannot start an operand.
    #[error("unexpected token {0}")]
    UnexpectedToken(Token),

    /// Input ended where an operand was required.
    #[error("expression incomplete")]
    Incomplete,

    /// Input ended before the closing parenthesis.
    #[error("unclosed parenthesis")]
    UnclosedParen,

    /// Parentheses or negations nested too deeply, or the tree grew too deep.
    #[error("expression nested too deeply (more than {max} levels)")]
    TooDeep { max: usize },

    /// Tokens remain after a complete expression.
    #[error("trailing tokens after a complete expression, starting with {token} at token {position}")]
    TrailingInput { token: Token, position: usize },
}

/// Errors that can occur while generating a truth table.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error(transparent)]
    Lex(#[from] LexError),

    #[error(transparent)]
    Parse(#[from] ParseError),

    /// Input is empty or whitespace-only.
    #[error("empty expression")]
    EmptyExpression,

    /// Expression references no variable.
    #[error("expression must reference at least one variable")]
    NoVariables,

    /// Expression references more distinct variables than allowed.
    #[error("too many variables: found {found}, at most {max} allowed")]
    TooManyVariables { found: usize, max: usize },
}

impl ParseError {
    /// Check if the parser stopped at a token it did not expect, rather than at leftover input or the nesting limit.
    pub fn is_unexpected_token(&self) -> bool {
        matches!(
            self,
            ParseError::Expected { .. }
                | ParseError::UnexpectedEnd
                | ParseError::UnexpectedToken(_)
                | ParseError::Incomplete
                | ParseError::UnclosedParen
        )
    }
}

impl Error {
    /// The underlying parse error, if any.
    pub fn as_parse_error(&self) -> Option<&ParseError> {
        match self {
            Error::Parse(e) => Some(e),
            _ => None,
        }
    }

    /// Check if the failure happened while tokenizing or parsing.
    pub fn is_syntax_error(&self) -> bool {
        matches!(self, Error::Lex(_) | Error::Parse(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Var;

    #[test]
    fn test_messages() {
        let e = LexError::UnknownSymbol { symbol: '&', position: 2 };
        assert_eq!(e.to_string(), "unknown symbol '&' at position 2");

        let e = ParseError::Expected {
            expected: TokenKind::RParen,
            found: Token::Var(Var::new('B')),
        };
        assert_eq!(e.to_string(), "expected ')', found B");

        let e = Error::TooManyVariables { found: 7, max: 6 };
        assert_eq!(e.to_string(), "too many variables: found 7, at most 6 allowed");

        let e = ParseError::TooDeep { max: 256 };
        assert_eq!(e.to_string(), "expression nested too deeply (more than 256 levels)");
    }

    #[test]
    fn test_transparent_wrapping() {
        let e: Error = ParseError::Incomplete.into();
        assert_eq!(e.to_string(), "expression incomplete");
        assert_eq!(e.as_parse_error(), Some(&ParseError::Incomplete));
        assert!(e.is_syntax_error());
        assert!(!Error::EmptyExpression.is_syntax_error());
    }

    #[test]
    fn test_classification() {
        assert!(ParseError::UnclosedParen.is_unexpected_token());
        assert!(ParseError::UnexpectedToken(Token::RParen).is_unexpected_token());
        let trailing = ParseError::TrailingInput {
            token: Token::RParen,
            position: 1,
        };
        assert!(!trailing.is_unexpected_token());
        assert!(!ParseError::TooDeep { max: 256 }.is_unexpected_token());
    }
}
