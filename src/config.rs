//! Configuration for tokenizing and truth-table generation.

use crate::types::Var;

/// Maximum number of distinct variables in a truth table.
///
/// Keeps enumeration bounded at 64 rows, which also lets a result column fit in a `u64`.
pub const MAX_VARIABLES: usize = 6;

/// Maximum nesting of parentheses and negations, and maximum depth of a parsed tree.
///
/// Parsing and evaluation recurse once per level, so deeper input is rejected.
pub const MAX_DEPTH: usize = 256;

/// Inclusive range of uppercase letters accepted as variable names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Alphabet {
    first: char,
    last: char,
}

impl Alphabet {
    /// Create an alphabet spanning `first..=last`.
    ///
    /// # Panics
    ///
    /// Panics if either bound is not an uppercase ASCII letter, or if `first > last`.
    pub fn new(first: char, last: char) -> Self {
        assert!(
            first.is_ascii_uppercase() && last.is_ascii_uppercase(),
            "Alphabet bounds must be uppercase letters"
        );
        assert!(first <= last, "Alphabet range is empty: {}..={}", first, last);
        Self { first, last }
    }

    /// Check whether `ch` names a variable in this alphabet.
    pub fn contains(&self, ch: char) -> bool {
        (self.first..=self.last).contains(&ch)
    }

    /// The variable named `ch`, if the alphabet admits it.
    pub fn var(&self, ch: char) -> Option<Var> {
        if self.contains(ch) {
            Some(Var::new(ch))
        } else {
            None
        }
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::new('A', 'Z')
    }
}

/// Options controlling which expressions are accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    alphabet: Alphabet,
    max_vars: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            alphabet: Alphabet::default(),
            max_vars: MAX_VARIABLES,
        }
    }
}

impl Options {
    /// Create options with custom values.
    ///
    /// # Panics
    ///
    /// Panics if `max_vars` is zero or exceeds [`MAX_VARIABLES`].
    pub fn new(alphabet: Alphabet, max_vars: usize) -> Self {
        assert!(max_vars > 0, "At least one variable must be allowed");
        assert!(
            max_vars <= MAX_VARIABLES,
            "max_vars must be at most {}, got {}",
            MAX_VARIABLES,
            max_vars
        );
        Self { alphabet, max_vars }
    }

    /// The four-letter keypad alphabet `A..=D`.
    pub fn classic() -> Self {
        Self::new(Alphabet::new('A', 'D'), MAX_VARIABLES)
    }

    /// Letters that may name variables.
    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Maximum number of distinct variables in one expression, never above [`MAX_VARIABLES`].
    pub fn max_vars(&self) -> usize {
        self.max_vars.min(MAX_VARIABLES)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::table::TruthTable;

    #[test]
    fn test_default_alphabet() {
        let alphabet = Alphabet::default();
        assert!(alphabet.contains('A'));
        assert!(alphabet.contains('Z'));
        assert!(!alphabet.contains('a'));
        assert!(!alphabet.contains('v'));
    }

    #[test]
    fn test_classic_options() {
        let options = Options::classic();
        assert!(options.alphabet().contains('D'));
        assert!(!options.alphabet().contains('E'));
        assert_eq!(options.alphabet().var('B'), Some(Var::new('B')));
        assert_eq!(options.alphabet().var('E'), None);
        assert_eq!(options.max_vars(), MAX_VARIABLES);
    }

    #[test]
    #[should_panic(expected = "Alphabet range is empty")]
    fn test_reversed_alphabet_panics() {
        Alphabet::new('D', 'A');
    }

    #[test]
    #[should_panic(expected = "max_vars must be at most 6")]
    fn test_too_many_max_vars_panics() {
        Options::new(Alphabet::default(), 7);
    }

    #[test]
    fn test_literal_options_are_capped() {
        // Built without `Options::new`, so the assertions there are skipped.
        let options = Options {
            alphabet: Alphabet::default(),
            max_vars: 10,
        };
        assert_eq!(options.max_vars(), MAX_VARIABLES);
        assert_eq!(
            TruthTable::generate_with("A∧B∧C∧D∧E∧F∧G", &options),
            Err(Error::TooManyVariables { found: 7, max: 6 })
        );
        assert_eq!(TruthTable::generate_with("A∧B∧C∧D∧E∧F", &options).unwrap().len(), 64);
    }
}
