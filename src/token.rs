//! Token vocabulary for propositional expressions.
//!
//! Every token is a single character of input. Connectives accept an ASCII
//! shorthand where one exists, alongside their canonical logic glyph.

use std::fmt;

use crate::types::Var;

/// A lexical token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Token {
    /// Variable: `A`, `B`, ...
    Var(Var),
    /// Negation: `∼` or `~`
    Not,
    /// Conjunction: `∧` or `^`
    And,
    /// Disjunction: `∨` or `v`
    Or,
    /// Exclusive or: `⊻`
    Xor,
    /// Implication: `→`
    Implies,
    /// Biconditional: `↔`
    Iff,
    /// `(`
    LParen,
    /// `)`
    RParen,
}

/// Token kind, without the variable payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Var,
    Not,
    And,
    Or,
    Xor,
    Implies,
    Iff,
    LParen,
    RParen,
}

/// Every accepted connective and parenthesis character, with the token it produces.
///
/// The first entry for each token is its canonical glyph.
pub static SYMBOLS: &[(char, Token)] = &[
    ('∼', Token::Not),
    ('~', Token::Not),
    ('∧', Token::And),
    ('^', Token::And),
    ('∨', Token::Or),
    ('v', Token::Or),
    ('⊻', Token::Xor),
    ('→', Token::Implies),
    ('↔', Token::Iff),
    ('(', Token::LParen),
    (')', Token::RParen),
];

impl Token {
    /// Look up the connective or parenthesis token for `ch`.
    pub fn from_symbol(ch: char) -> Option<Token> {
        SYMBOLS.iter().find(|&&(symbol, _)| symbol == ch).map(|&(_, token)| token)
    }

    pub fn kind(&self) -> TokenKind {
        match self {
            Token::Var(_) => TokenKind::Var,
            Token::Not => TokenKind::Not,
            Token::And => TokenKind::And,
            Token::Or => TokenKind::Or,
            Token::Xor => TokenKind::Xor,
            Token::Implies => TokenKind::Implies,
            Token::Iff => TokenKind::Iff,
            Token::LParen => TokenKind::LParen,
            Token::RParen => TokenKind::RParen,
        }
    }

    /// The variable carried by a `Var` token.
    pub fn as_var(&self) -> Option<Var> {
        match self {
            Token::Var(var) => Some(*var),
            _ => None,
        }
    }
}

impl TokenKind {
    /// Canonical glyph for the kind, or `None` for variables.
    pub fn glyph(&self) -> Option<char> {
        match self {
            TokenKind::Var => None,
            TokenKind::Not => Some('∼'),
            TokenKind::And => Some('∧'),
            TokenKind::Or => Some('∨'),
            TokenKind::Xor => Some('⊻'),
            TokenKind::Implies => Some('→'),
            TokenKind::Iff => Some('↔'),
            TokenKind::LParen => Some('('),
            TokenKind::RParen => Some(')'),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Var(var) => write!(f, "{}", var),
            _ => write!(f, "{}", self.kind()),
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.glyph() {
            Some(glyph) => write!(f, "'{}'", glyph),
            None => write!(f, "variable"),
        }
    }
}
