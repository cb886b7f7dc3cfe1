//! Truth-table generation.
//!
//! The pipeline is: raw string → tokens → expression tree → one evaluation per
//! assignment. Rows are enumerated as a binary counter over the sorted variable
//! list, the first variable being the most significant bit:
//!
//! ```text
//! A B | result
//! F F | ...      row 0
//! F T | ...      row 1
//! T F | ...      row 2
//! T T | ...      row 3
//! ```

use std::collections::btree_map;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::ops::Index;

use log::{debug, trace};

use crate::ast::Expr;
use crate::config::{Options, MAX_VARIABLES};
use crate::error::Error;
use crate::eval::Env;
use crate::lexer::tokenize_with;
use crate::parser::parse;
use crate::token::Token;
use crate::types::Var;

/// Truth values for a set of variables.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Assignment(BTreeMap<Var, bool>);

impl Assignment {
    /// The assignment for row `index` of a table over `vars`.
    ///
    /// `vars[k]` takes bit `n - 1 - k` of `index`, where `n = vars.len()`.
    pub fn from_index(vars: &[Var], index: usize) -> Self {
        let n = vars.len();
        assert!(n <= MAX_VARIABLES, "Too many variables: {}", n);
        assert!(index < 1 << n, "Row index {} out of range for {} variables", index, n);

        let values = vars
            .iter()
            .enumerate()
            .map(|(k, &var)| (var, (index >> (n - 1 - k)) & 1 == 1))
            .collect();
        Self(values)
    }

    /// The value bound to `var`, if any.
    pub fn get(&self, var: Var) -> Option<bool> {
        self.0.get(&var).copied()
    }

    /// Bindings in ascending variable order.
    pub fn iter(&self) -> impl Iterator<Item = (Var, bool)> + '_ {
        self.0.iter().map(|(&var, &value)| (var, value))
    }
}

impl Index<Var> for Assignment {
    type Output = bool;

    fn index(&self, var: Var) -> &Self::Output {
        match self.0.get(&var) {
            Some(value) => value,
            None => panic!("Variable {} is not bound", var),
        }
    }
}

impl Env for Assignment {
    fn value(&self, var: Var) -> bool {
        match self.get(var) {
            Some(value) => value,
            None => panic!("Variable {} is not bound", var),
        }
    }
}

impl FromIterator<(Var, bool)> for Assignment {
    fn from_iter<I: IntoIterator<Item = (Var, bool)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for Assignment {
    type Item = (Var, bool);
    type IntoIter = btree_map::IntoIter<Var, bool>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// One row of a truth table.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Row {
    pub assignment: Assignment,
    pub result: bool,
}

/// The full truth table of an expression.
///
/// # Invariants
///
/// - `vars` is sorted ascending and contains no duplicates
/// - There are exactly `2^vars.len()` rows, in ascending binary-counter order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TruthTable {
    vars: Vec<Var>,
    rows: Vec<Row>,
}

/// Generate the truth table of `expression` with default [`Options`].
pub fn generate_truth_table(expression: &str) -> Result<TruthTable, Error> {
    TruthTable::generate(expression)
}

impl TruthTable {
    /// Generate the truth table of `expression` with default [`Options`].
    pub fn generate(expression: &str) -> Result<Self, Error> {
        Self::generate_with(expression, &Options::default())
    }

    /// Generate the truth table of `expression`.
    ///
    /// Variables are counted on the raw token sequence, before parsing, so a
    /// malformed expression over too many variables reports
    /// [`Error::TooManyVariables`] rather than a parse error.
    pub fn generate_with(expression: &str, options: &Options) -> Result<Self, Error> {
        if expression.trim().is_empty() {
            return Err(Error::EmptyExpression);
        }

        let tokens = tokenize_with(expression, options.alphabet())?;
        debug!("tokenized {:?} into {} tokens", expression, tokens.len());

        let vars = token_vars(&tokens);
        if vars.is_empty() {
            return Err(Error::NoVariables);
        }
        if vars.len() > options.max_vars() {
            return Err(Error::TooManyVariables {
                found: vars.len(),
                max: options.max_vars(),
            });
        }
        debug!("variables: {:?}", vars);

        let expr = parse(&tokens)?;
        debug!("parsed: {} (depth {}, {} nodes)", expr, expr.depth(), expr.size());

        Ok(Self::build(vars, &expr))
    }

    /// Truth table of an already-parsed expression, over the variables it references.
    pub fn of_expr(expr: &Expr) -> Result<Self, Error> {
        let vars = expr.vars();
        if vars.len() > MAX_VARIABLES {
            return Err(Error::TooManyVariables {
                found: vars.len(),
                max: MAX_VARIABLES,
            });
        }
        Ok(Self::build(vars, expr))
    }

    fn build(vars: Vec<Var>, expr: &Expr) -> Self {
        let total = 1usize << vars.len();
        let mut rows = Vec::with_capacity(total);

        for index in 0..total {
            let assignment = Assignment::from_index(&vars, index);
            let result = expr.eval(&assignment);
            trace!("row {}: {:?} -> {}", index, assignment, result);
            rows.push(Row { assignment, result });
        }

        debug!("generated {} rows over {} variables", rows.len(), vars.len());
        Self { vars, rows }
    }

    /// Variables, in ascending order.
    pub fn vars(&self) -> &[Var] {
        &self.vars
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The result column, in row order.
    pub fn results(&self) -> impl Iterator<Item = bool> + '_ {
        self.rows.iter().map(|row| row.result)
    }

    /// The result column packed into an integer, row 0 in the most significant used bit.
    ///
    /// For example `A ∧ B` gives `0b0001` and `A ∨ B` gives `0b0111`.
    pub fn bits(&self) -> u64 {
        self.results().fold(0, |acc, result| (acc << 1) | result as u64)
    }

    /// Number of rows evaluating to true.
    pub fn count_true(&self) -> usize {
        self.results().filter(|&result| result).count()
    }

    /// Assignments under which the expression holds.
    pub fn models(&self) -> impl Iterator<Item = &Assignment> + '_ {
        self.rows.iter().filter(|row| row.result).map(|row| &row.assignment)
    }

    pub fn is_tautology(&self) -> bool {
        self.results().all(|result| result)
    }

    pub fn is_contradiction(&self) -> bool {
        !self.is_satisfiable()
    }

    pub fn is_satisfiable(&self) -> bool {
        self.results().any(|result| result)
    }
}

/// Sorted distinct variables appearing in `tokens`, regardless of whether they parse.
fn token_vars(tokens: &[Token]) -> Vec<Var> {
    let vars: BTreeSet<Var> = tokens.iter().filter_map(Token::as_var).collect();
    vars.into_iter().collect()
}

fn cell(value: bool) -> char {
    if value {
        'T'
    } else {
        'F'
    }
}

impl fmt::Display for TruthTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for var in &self.vars {
            write!(f, "{} ", var)?;
        }
        writeln!(f, "| result")?;
        for row in &self.rows {
            for (_, value) in row.assignment.iter() {
                write!(f, "{} ", cell(value))?;
            }
            writeln!(f, "| {}", cell(row.result))?;
        }
        Ok(())
    }
}
