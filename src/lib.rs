//! # truth-table: propositional logic expressions and their truth tables
//!
//! **`truth-table`** parses propositional-logic expressions over single-letter
//! variables and enumerates their full truth table.
//!
//! ## Syntax
//!
//! | Connective    | Glyph | ASCII | Precedence |
//! |---------------|-------|-------|------------|
//! | negation      | `∼`   | `~`   | highest    |
//! | conjunction   | `∧`   | `^`   |            |
//! | exclusive or  | `⊻`   |       |            |
//! | disjunction   | `∨`   | `v`   |            |
//! | implication   | `→`   |       |            |
//! | biconditional | `↔`   |       | lowest     |
//!
//! Variables are uppercase letters, parentheses group, whitespace is ignored.
//! Binary connectives are left-associative.
//!
//! ## Basic Usage
//!
//! ```rust
//! use truth_table::{generate_truth_table, Var};
//!
//! let table = generate_truth_table("(A∧B)→∼C").unwrap();
//! assert_eq!(table.vars(), &[Var::new('A'), Var::new('B'), Var::new('C')]);
//! assert_eq!(table.len(), 8);
//!
//! // Last row: A, B, C all true.
//! let last = &table.rows()[7];
//! assert!(last.assignment[Var::new('C')]);
//! assert!(!last.result);
//! ```
//!
//! ## Core Components
//!
//! - **[`lexer`]**: raw text to [`Token`]s.
//! - **[`parser`]**: tokens to an [`Expr`] tree.
//! - **[`eval`]**: evaluates an [`Expr`] under an [`Env`].
//! - **[`table`]**: the whole pipeline, producing a [`TruthTable`].

pub mod ast;
pub mod config;
pub mod error;
pub mod eval;
pub mod lexer;
pub mod parser;
pub mod table;
pub mod token;
pub mod types;

pub use ast::{BinOp, Expr};
pub use config::{Alphabet, Options, MAX_DEPTH, MAX_VARIABLES};
pub use error::{Error, LexError, ParseError};
pub use eval::Env;
pub use lexer::{tokenize, tokenize_with};
pub use parser::parse;
pub use table::{generate_truth_table, Assignment, Row, TruthTable};
pub use token::{Token, TokenKind};
pub use types::Var;
