//! Expression trees.
//!
//! An [`Expr`] owns its children exclusively: no sharing, no cycles. Trees are
//! built bottom-up by the parser and are read-only afterwards.

use std::collections::BTreeSet;
use std::fmt;

use crate::types::Var;

/// A propositional expression.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Expr {
    /// Variable
    Var(Var),
    /// Negation
    Not(Box<Expr>),
    /// Conjunction
    And(Box<Expr>, Box<Expr>),
    /// Inclusive disjunction
    Or(Box<Expr>, Box<Expr>),
    /// Exclusive disjunction
    Xor(Box<Expr>, Box<Expr>),
    /// Material implication
    Implies(Box<Expr>, Box<Expr>),
    /// Biconditional
    Iff(Box<Expr>, Box<Expr>),
}

/// Binary connectives, in order of increasing precedence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinOp {
    Iff,
    Implies,
    Or,
    Xor,
    And,
}

impl BinOp {
    /// Build the node for `lhs op rhs`.
    pub fn apply(self, lhs: Expr, rhs: Expr) -> Expr {
        match self {
            BinOp::Iff => Expr::iff(lhs, rhs),
            BinOp::Implies => Expr::implies(lhs, rhs),
            BinOp::Or => Expr::or(lhs, rhs),
            BinOp::Xor => Expr::xor(lhs, rhs),
            BinOp::And => Expr::and(lhs, rhs),
        }
    }

    pub fn glyph(self) -> char {
        match self {
            BinOp::Iff => '↔',
            BinOp::Implies => '→',
            BinOp::Or => '∨',
            BinOp::Xor => '⊻',
            BinOp::And => '∧',
        }
    }
}

impl Expr {
    pub fn var(var: Var) -> Self {
        Expr::Var(var)
    }

    pub fn not(value: Self) -> Self {
        Expr::Not(Box::new(value))
    }

    pub fn and(lhs: Self, rhs: Self) -> Self {
        Expr::And(Box::new(lhs), Box::new(rhs))
    }

    pub fn or(lhs: Self, rhs: Self) -> Self {
        Expr::Or(Box::new(lhs), Box::new(rhs))
    }

    pub fn xor(lhs: Self, rhs: Self) -> Self {
        Expr::Xor(Box::new(lhs), Box::new(rhs))
    }

    pub fn implies(lhs: Self, rhs: Self) -> Self {
        Expr::Implies(Box::new(lhs), Box::new(rhs))
    }

    pub fn iff(lhs: Self, rhs: Self) -> Self {
        Expr::Iff(Box::new(lhs), Box::new(rhs))
    }

    /// Depth of the expression tree (0 for leaves).
    pub fn depth(&self) -> usize {
        match self {
            Expr::Var(_) => 0,
            Expr::Not(e) => 1 + e.depth(),
            Expr::And(l, r) | Expr::Or(l, r) | Expr::Xor(l, r) | Expr::Implies(l, r) | Expr::Iff(l, r) => {
                1 + l.depth().max(r.depth())
            }
        }
    }

    /// Size of the expression tree (number of nodes).
    pub fn size(&self) -> usize {
        match self {
            Expr::Var(_) => 1,
            Expr::Not(e) => 1 + e.size(),
            Expr::And(l, r) | Expr::Or(l, r) | Expr::Xor(l, r) | Expr::Implies(l, r) | Expr::Iff(l, r) => {
                1 + l.size() + r.size()
            }
        }
    }

    /// Distinct variables referenced by the expression, in ascending order.
    pub fn vars(&self) -> Vec<Var> {
        let mut vars = BTreeSet::new();
        self.collect_vars(&mut vars);
        vars.into_iter().collect()
    }

    fn collect_vars(&self, vars: &mut BTreeSet<Var>) {
        match self {
            Expr::Var(v) => {
                vars.insert(*v);
            }
            Expr::Not(e) => e.collect_vars(vars),
            Expr::And(l, r) | Expr::Or(l, r) | Expr::Xor(l, r) | Expr::Implies(l, r) | Expr::Iff(l, r) => {
                l.collect_vars(vars);
                r.collect_vars(vars);
            }
        }
    }
}

impl From<Var> for Expr {
    fn from(var: Var) -> Self {
        Expr::Var(var)
    }
}

/// Prints canonical glyphs with every binary node parenthesised, so the output parses back to the same tree.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Var(v) => write!(f, "{}", v),
            Expr::Not(e) => write!(f, "∼{}", e),
            Expr::And(l, r) => write_binary(f, BinOp::And, l, r),
            Expr::Or(l, r) => write_binary(f, BinOp::Or, l, r),
            Expr::Xor(l, r) => write_binary(f, BinOp::Xor, l, r),
            Expr::Implies(l, r) => write_binary(f, BinOp::Implies, l, r),
            Expr::Iff(l, r) => write_binary(f, BinOp::Iff, l, r),
        }
    }
}

fn write_binary(f: &mut fmt::Formatter<'_>, op: BinOp, lhs: &Expr, rhs: &Expr) -> fmt::Result {
    write!(f, "({} {} {})", lhs, op.glyph(), rhs)
}
