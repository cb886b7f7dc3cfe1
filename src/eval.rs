//! Evaluation of expression trees under a variable environment.

use std::collections::{BTreeMap, HashMap};

use crate::ast::Expr;
use crate::types::Var;

/// Variable environment: the truth value bound to each variable.
///
/// Implementations may panic when asked for a variable they do not bind.
/// The truth-table generator only evaluates with complete environments.
pub trait Env {
    fn value(&self, var: Var) -> bool;
}

impl Env for HashMap<Var, bool> {
    fn value(&self, var: Var) -> bool {
        match self.get(&var) {
            Some(&value) => value,
            None => panic!("Variable {} is not bound", var),
        }
    }
}

impl Env for BTreeMap<Var, bool> {
    fn value(&self, var: Var) -> bool {
        match self.get(&var) {
            Some(&value) => value,
            None => panic!("Variable {} is not bound", var),
        }
    }
}

impl<F> Env for F
where
    F: Fn(Var) -> bool,
{
    fn value(&self, var: Var) -> bool {
        self(var)
    }
}

impl Expr {
    /// Evaluate the expression under `env`.
    ///
    /// Binary nodes evaluate the left operand before the right.
    pub fn eval(&self, env: &impl Env) -> bool {
        match self {
            Expr::Var(v) => env.value(*v),
            Expr::Not(e) => !e.eval(env),
            Expr::And(l, r) => {
                let (a, b) = (l.eval(env), r.eval(env));
                a && b
            }
            Expr::Or(l, r) => {
                let (a, b) = (l.eval(env), r.eval(env));
                a || b
            }
            Expr::Xor(l, r) => {
                let (a, b) = (l.eval(env), r.eval(env));
                a != b
            }
            Expr::Implies(l, r) => {
                let (a, b) = (l.eval(env), r.eval(env));
                !a || b
            }
            Expr::Iff(l, r) => {
                let (a, b) = (l.eval(env), r.eval(env));
                a == b
            }
        }
    }
}
