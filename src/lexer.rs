//! Tokenizer: raw text to a flat sequence of tokens.

use crate::config::Alphabet;
use crate::error::LexError;
use crate::token::Token;

/// Tokenize `input`, accepting variables `A..=Z`.
///
/// Whitespace is ignored anywhere. Scanning stops at the first character that is
/// neither a variable nor a known connective or parenthesis.
pub fn tokenize(input: &str) -> Result<Vec<Token>, LexError> {
    tokenize_with(input, &Alphabet::default())
}

/// Tokenize `input`, accepting only variables from `alphabet`.
pub fn tokenize_with(input: &str, alphabet: &Alphabet) -> Result<Vec<Token>, LexError> {
    let mut tokens = Vec::new();

    for (position, ch) in input.chars().enumerate() {
        if ch.is_whitespace() {
            continue;
        }
        if let Some(var) = alphabet.var(ch) {
            tokens.push(Token::Var(var));
            continue;
        }
        match Token::from_symbol(ch) {
            Some(token) => tokens.push(token),
            None => return Err(LexError::UnknownSymbol { symbol: ch, position }),
        }
    }

    Ok(tokens)
}
