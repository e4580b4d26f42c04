//! Test utilities.

use std::fmt::Write;

use crate::{BinaryOp, Config, Evaluation, Operator, Solver, Value};

/// Solve `left op right` with the default configuration.
pub fn solve(left: &Value, op: BinaryOp, right: &Value) -> (Value, Evaluation) {
    solve_with(&Config::default(), left, op, right)
}

pub fn solve_with(
    config: &Config,
    left: &Value,
    op: BinaryOp,
    right: &Value,
) -> (Value, Evaluation) {
    let mut eval = Evaluation::new();
    let value = Solver::new(config).solve(&mut eval, left, Operator::new(op), right);
    (value, eval)
}

/// One line per fact: result type, payload, model, then diagnostics.
pub fn describe(value: &Value, eval: &Evaluation) -> String {
    let mut out = format!("type: {}", value.ty.signature);
    if let Some(c) = &value.constant {
        write!(out, "\nconst: {c}").expect("String write never fails");
    }
    if let Some(m) = &value.model {
        write!(out, "\nmodel: {m}").expect("String write never fails");
    }
    for diag in eval.diagnostics() {
        write!(out, "\n{diag}").expect("String write never fails");
    }
    if eval.has_error() {
        out.push_str("\nfailed");
    }
    out
}

/// `describe` of solving `left op right`.
pub fn shot(left: &Value, op: BinaryOp, right: &Value) -> String {
    let (value, eval) = solve(left, op, right);
    describe(&value, &eval)
}
