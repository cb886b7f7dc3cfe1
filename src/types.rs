//! Type-safe wrapper for propositional variables.
//!
//! Variables are single uppercase ASCII letters. The newtype keeps them
//! distinct from arbitrary characters flowing through the lexer, and gives
//! them the ordering used for truth-table columns.
use std::fmt;

/// A propositional variable, named by a single uppercase letter.
///
/// # Invariants
///
/// - The name is an ASCII uppercase letter (`'A'..='Z'`)
/// - Ordering follows the alphabet, so sorting variables sorts their names
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Var(char);

impl Var {
    /// Creates a new variable with the given name.
    ///
    /// # Panics
    ///
    /// Panics if `name` is not an ASCII uppercase letter.
    pub fn new(name: char) -> Self {
        assert!(name.is_ascii_uppercase(), "Variable names must be uppercase letters, got {:?}", name);
        Var(name)
    }

    /// Returns the variable name.
    pub fn name(self) -> char {
        self.0
    }
}

impl fmt::Display for Var {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
