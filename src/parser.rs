//! Recursive-descent parser.
//!
//! Grammar, from lowest to highest precedence:
//!
//! ```text
//! Expression    := Biconditional
//! Biconditional := Implication ( '↔' Implication )*
//! Implication   := Or ( '→' Or )*
//! Or            := Xor ( '∨' Xor )*
//! Xor           := And ( '⊻' And )*
//! And           := Unary ( '∧' Unary )*
//! Unary         := '∼' Unary | Primary
//! Primary       := VAR | '(' Expression ')'
//! ```
//!
//! Every binary level is left-associative: `A → B → C` is `(A → B) → C`.
//!
//! Nesting of `(` and `∼`, and the depth of the resulting tree, are bounded by
//! [`MAX_DEPTH`]; deeper input fails with [`ParseError::TooDeep`].

use crate::ast::{BinOp, Expr};
use crate::config::MAX_DEPTH;
use crate::error::ParseError;
use crate::token::{Token, TokenKind};

/// Binary precedence levels, lowest first.
static LEVELS: &[(Token, BinOp)] = &[
    (Token::Iff, BinOp::Iff),
    (Token::Implies, BinOp::Implies),
    (Token::Or, BinOp::Or),
    (Token::Xor, BinOp::Xor),
    (Token::And, BinOp::And),
];

/// Parse a complete token sequence into an expression tree.
pub fn parse(tokens: &[Token]) -> Result<Expr, ParseError> {
    let mut parser = Parser::new(tokens);
    let expr = parser.parse_expr()?;
    parser.finish()?;
    Ok(expr)
}

/// Cursor over a token slice.
pub struct Parser<'a> {
    tokens: &'a [Token],
    pos: usize,
    /// Currently open `(` and `∼`.
    nesting: usize,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: &'a [Token]) -> Self {
        Self {
            tokens,
            pos: 0,
            nesting: 0,
        }
    }

    /// Index of the next unconsumed token.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Parses any expression, leaving the cursor after it.
    pub fn parse_expr(&mut self) -> Result<Expr, ParseError> {
        self.parse_level(0).map(|(expr, _)| expr)
    }

    /// Check that every token has been consumed.
    pub fn finish(&self) -> Result<(), ParseError> {
        match self.peek() {
            None => Ok(()),
            Some(token) => Err(ParseError::TrailingInput {
                token,
                position: self.position(),
            }),
        }
    }

    // Each parse method returns the tree together with its depth.

    /// Parses the binary level `level`, folding repeated connectives to the left.
    fn parse_level(&mut self, level: usize) -> Result<(Expr, usize), ParseError> {
        let Some(&(connective, op)) = LEVELS.get(level) else {
            return self.parse_unary();
        };

        let (mut lhs, mut depth) = self.parse_level(level + 1)?;
        while self.eat(connective) {
            let (rhs, rhs_depth) = self.parse_level(level + 1)?;
            depth = check_depth(1 + depth.max(rhs_depth))?;
            lhs = op.apply(lhs, rhs);
        }
        Ok((lhs, depth))
    }

    fn parse_unary(&mut self) -> Result<(Expr, usize), ParseError> {
        if self.eat(Token::Not) {
            self.enter()?;
            let (child, depth) = self.parse_unary()?;
            self.nesting -= 1;
            return Ok((Expr::not(child), check_depth(depth + 1)?));
        }
        self.parse_primary()
    }

    fn parse_primary(&mut self) -> Result<(Expr, usize), ParseError> {
        let Some(token) = self.peek() else {
            return Err(if self.tokens.is_empty() {
                ParseError::UnexpectedEnd
            } else {
                ParseError::Incomplete
            });
        };

        match token {
            Token::Var(var) => {
                self.pos += 1;
                Ok((Expr::var(var), 0))
            }
            Token::LParen => {
                self.pos += 1;
                self.enter()?;
                let inner = self.parse_level(0)?;
                self.expect_closing()?;
                self.nesting -= 1;
                Ok(inner)
            }
            _ => Err(ParseError::UnexpectedToken(token)),
        }
    }

    fn expect_closing(&mut self) -> Result<(), ParseError> {
        match self.peek() {
            Some(Token::RParen) => {
                self.pos += 1;
                Ok(())
            }
            Some(found) => Err(ParseError::Expected {
                expected: TokenKind::RParen,
                found,
            }),
            None => Err(ParseError::UnclosedParen),
        }
    }

    /// Opens one more level of `(` or `∼`.
    fn enter(&mut self) -> Result<(), ParseError> {
        self.nesting += 1;
        if self.nesting > MAX_DEPTH {
            return Err(ParseError::TooDeep { max: MAX_DEPTH });
        }
        Ok(())
    }
}

fn check_depth(depth: usize) -> Result<usize, ParseError> {
    if depth > MAX_DEPTH {
        Err(ParseError::TooDeep { max: MAX_DEPTH })
    } else {
        Ok(depth)
    }
}

/// Parse utilities
impl<'a> Parser<'a> {
    fn peek(&self) -> Option<Token> {
        self.tokens.get(self.pos).copied()
    }

    /// Consumes the next token if it equals `token`.
    fn eat(&mut self, token: Token) -> bool {
        if self.peek() == Some(token) {
            self.pos += 1;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::tokenize;
    use crate::types::Var;

    use test_log::test;

    fn v(name: char) -> Expr {
        Expr::var(Var::new(name))
    }

    fn parse_str(input: &str) -> Result<Expr, ParseError> {
        parse(&tokenize(input).unwrap())
    }

    #[test]
    fn test_parse_var() {
        assert_eq!(parse_str("A"), Ok(v('A')));
        assert_eq!(parse_str("((B))"), Ok(v('B')));
    }

    #[test]
    fn test_and_binds_tighter_than_or() {
        assert_eq!(parse_str("A ∧ B ∨ C"), Ok(Expr::or(Expr::and(v('A'), v('B')), v('C'))));
        assert_eq!(parse_str("A ∨ B ∧ C"), Ok(Expr::or(v('A'), Expr::and(v('B'), v('C')))));
    }

    #[test]
    fn test_precedence_ladder() {
        // ↔ < → < ∨ < ⊻ < ∧
        let expected = Expr::iff(
            v('A'),
            Expr::implies(v('B'), Expr::or(v('C'), Expr::xor(v('D'), Expr::and(v('E'), v('F'))))),
        );
        assert_eq!(parse_str("A ↔ B → C ∨ D ⊻ E ∧ F"), Ok(expected));
    }

    #[test]
    fn test_left_associative() {
        assert_eq!(
            parse_str("A → B → C"),
            Ok(Expr::implies(Expr::implies(v('A'), v('B')), v('C')))
        );
        assert_eq!(
            parse_str("A ∧ B ∧ C"),
            Ok(Expr::and(Expr::and(v('A'), v('B')), v('C')))
        );
    }

    #[test]
    fn test_double_negation() {
        assert_eq!(parse_str("∼∼A"), Ok(Expr::not(Expr::not(v('A')))));
        assert_eq!(parse_str("~A ^ B"), Ok(Expr::and(Expr::not(v('A')), v('B'))));
    }

    #[test]
    fn test_parentheses_override_precedence() {
        assert_eq!(parse_str("A ∧ (B ∨ C)"), Ok(Expr::and(v('A'), Expr::or(v('B'), v('C')))));
    }

    #[test]
    fn test_incomplete() {
        assert_eq!(parse_str("A∧"), Err(ParseError::Incomplete));
        assert_eq!(parse_str("∼"), Err(ParseError::Incomplete));
        assert_eq!(parse_str("("), Err(ParseError::Incomplete));
    }

    #[test]
    fn test_unexpected_end() {
        assert_eq!(parse(&[]), Err(ParseError::UnexpectedEnd));
    }

    #[test]
    fn test_unclosed_paren() {
        assert_eq!(parse_str("(A ∧ B"), Err(ParseError::UnclosedParen));
    }

    #[test]
    fn test_missing_paren_before_token() {
        assert_eq!(
            parse_str("(A B)"),
            Err(ParseError::Expected {
                expected: TokenKind::RParen,
                found: Token::Var(Var::new('B')),
            })
        );
    }

    #[test]
    fn test_unexpected_token() {
        assert_eq!(parse_str(")"), Err(ParseError::UnexpectedToken(Token::RParen)));
        assert_eq!(parse_str("∧A"), Err(ParseError::UnexpectedToken(Token::And)));
        assert_eq!(parse_str("A ∨ → B"), Err(ParseError::UnexpectedToken(Token::Implies)));
    }

    #[test]
    fn test_trailing_input() {
        assert_eq!(
            parse_str("A B"),
            Err(ParseError::TrailingInput {
                token: Token::Var(Var::new('B')),
                position: 1,
            })
        );
        assert_eq!(
            parse_str("(A))"),
            Err(ParseError::TrailingInput {
                token: Token::RParen,
                position: 3,
            })
        );
    }

    #[test]
    fn test_display_reparses() {
        for input in ["(A∧B)→∼C", "A ⊻ B ↔ ∼(C ∨ D)", "∼∼A → B → C"] {
            let expr = parse_str(input).unwrap();
            assert_eq!(parse_str(&expr.to_string()), Ok(expr));
        }
    }

    #[test]
    fn test_nested_parens_at_limit() {
        let input = format!("{}A{}", "(".repeat(MAX_DEPTH), ")".repeat(MAX_DEPTH));
        assert_eq!(parse_str(&input), Ok(v('A')));
    }

    #[test]
    fn test_nested_parens_too_deep() {
        let input = format!("{}A{}", "(".repeat(2_000), ")".repeat(2_000));
        assert_eq!(parse_str(&input), Err(ParseError::TooDeep { max: MAX_DEPTH }));
    }

    #[test]
    fn test_negations_at_limit() {
        let input = format!("{}A", "∼".repeat(MAX_DEPTH));
        let expr = parse_str(&input).unwrap();
        assert_eq!(expr.depth(), MAX_DEPTH);
    }

    #[test]
    fn test_negations_too_deep() {
        let input = format!("{}A", "∼".repeat(2_000));
        assert_eq!(parse_str(&input), Err(ParseError::TooDeep { max: MAX_DEPTH }));
    }

    #[test]
    fn test_long_chain_too_deep() {
        // Left folding makes the tree as deep as the chain is long.
        let input = vec!["A"; 1_000].join(" ∧ ");
        assert_eq!(parse_str(&input), Err(ParseError::TooDeep { max: MAX_DEPTH }));

        let input = vec!["A"; MAX_DEPTH + 1].join(" ∧ ");
        assert_eq!(parse_str(&input).unwrap().depth(), MAX_DEPTH);
    }

    #[test]
    fn test_parser_cursor() {
        let tokens = tokenize("A ∧ B )").unwrap();
        let mut parser = Parser::new(&tokens);
        assert_eq!(parser.parse_expr(), Ok(Expr::and(v('A'), v('B'))));
        assert_eq!(parser.position(), 3);
        assert!(parser.finish().is_err());
    }
}
