//! Binary operation solver.
//!
//! Resolves the result type of `left op right` and, when both operands are
//! constant expressions, its folded value. Problems are reported into an
//! [`Evaluation`]; a best-effort value is returned either way.

mod context;
pub mod fold;
mod handlers;
mod ops;
pub mod width;

#[cfg(test)]
mod handlers_tests;

pub use context::Evaluation;
pub use ops::{BinaryOp, Operator, UnknownOperator};

use crate::config::Config;
use crate::types::{StructuralCompatibility, TypeCompatibility, TypeDescriptor};
use crate::value::{Constant, ExprModel, Value};

/// How the result type is narrowed once a constant is folded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Width {
    /// Smallest category holding the payload.
    Minimal,
    /// Picked from the shift amount.
    Shift(u64),
    /// Keep the handler's type.
    Keep,
}

/// What a handler produced, before normalization.
#[derive(Debug, Clone)]
struct Outcome {
    ty: TypeDescriptor,
    constant: Option<Constant>,
    width: Width,
}

impl Outcome {
    fn typed(ty: TypeDescriptor) -> Self {
        Self {
            ty,
            constant: None,
            width: Width::Keep,
        }
    }
}

/// Operands of one solve, alias-resolved and owned so handlers can rewrite
/// them (enum unwrapping, `%` coercion).
#[derive(Debug, Clone)]
struct Binary {
    left: Value,
    right: Value,
    op: Operator,
}

impl Binary {
    fn both_const(&self) -> bool {
        self.left.is_const && self.right.is_const
    }

    fn either(&self, pred: impl Fn(&TypeDescriptor) -> bool) -> bool {
        pred(&self.left.ty) || pred(&self.right.ty)
    }
}

pub struct Solver<'a> {
    config: &'a Config,
    compat: &'a dyn TypeCompatibility,
}

impl<'a> Solver<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self {
            config,
            compat: &StructuralCompatibility,
        }
    }

    /// Replace the structural compatibility checker.
    pub fn with_compatibility(mut self, compat: &'a dyn TypeCompatibility) -> Self {
        self.compat = compat;
        self
    }

    /// Solve `left op right`.
    ///
    /// Never fails: diagnostics go to `eval`, and on error the result is
    /// `bool` for comparison and logical operators, the left type otherwise,
    /// without a payload.
    pub fn solve(&self, eval: &mut Evaluation, left: &Value, op: Operator, right: &Value) -> Value {
        let mut bin = Binary {
            left: left.clone(),
            right: right.clone(),
            op,
        };
        bin.left.ty = left.ty.resolve_alias();
        bin.right.ty = right.ty.resolve_alias();

        let both_const = bin.both_const();
        let outcome = self.dispatch(eval, bin);
        self.finish(outcome, both_const, op)
    }

    fn finish(&self, outcome: Outcome, both_const: bool, op: Operator) -> Value {
        let mut ty = outcome.ty;

        if ty.is_void() {
            ty.signature = ty.category.name().to_owned();
            return Value::runtime(ty).with_span(op.span);
        }

        let constant = outcome.constant.filter(|_| both_const);
        if let Some(c) = &constant {
            match outcome.width {
                Width::Minimal => {
                    if let Some(category) = c.minimal_category() {
                        ty = TypeDescriptor::scalar(category);
                    }
                }
                Width::Shift(amount) => ty = TypeDescriptor::scalar(width::shift_width(amount)),
                Width::Keep => {}
            }
        }

        let model = constant.as_ref().map(|c| ExprModel::from_constant(c, &ty));
        Value {
            is_const: constant.is_some(),
            ty,
            constant,
            model,
            span: op.span,
        }
    }
}
