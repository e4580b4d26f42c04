//! Jane compiler middle tier: type model, binary-operation solver and C++
//! type rendering.
//!
//! - `source_map` - sources and spans
//! - `diagnostics` - error reporting
//! - `types` - type descriptors, compatibility checking, rendering
//! - `value` - operand values and constant payloads
//! - `solver` - binary operator resolution and constant folding
//! - `config` - settings shared by the solver and the renderer
//!
//! # Example
//!
//! ```
//! use jane_compiler::{BinaryOp, Config, Evaluation, Operator, Solver, Value};
//! use jane_core::TypeCategory;
//!
//! let config = Config::default();
//! let solver = Solver::new(&config);
//! let mut eval = Evaluation::new();
//!
//! let left = Value::int(TypeCategory::I32, 5);
//! let right = Value::int(TypeCategory::I32, 2);
//! let sum = solver.solve(&mut eval, &left, Operator::new(BinaryOp::Add), &right);
//!
//! assert_eq!(sum.ty.signature, "i8");
//! assert!(!eval.has_error());
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod config;
pub mod diagnostics;
pub mod solver;
pub mod source_map;
pub mod types;
pub mod value;

#[cfg(test)]
pub mod test_utils;

pub use config::{Config, Templates};
pub use diagnostics::{DiagnosticKind, Diagnostics, DiagnosticsPrinter, Severity};
pub use solver::{BinaryOp, Evaluation, Operator, Solver};
pub use source_map::{SourceId, SourceMap, Span};
pub use types::{
    DefaultRenderer, FuncSignature, Param, StructuralCompatibility, TypeCompatibility,
    TypeDescriptor, TypePayload, TypeRenderer,
};
pub use value::{Constant, ExprModel, Value};

/// Errors surfaced to the compilation driver.
#[derive(Debug, Clone, thiserror::Error)]
pub enum Error {
    #[error("evaluation failed with {} errors", .0.error_count())]
    EvaluationFailed(Diagnostics),
}

/// Result type for driver-level operations.
pub type Result<T> = std::result::Result<T, Error>;
