//! Operand values.
//!
//! A value pairs a type with an optional compile-time payload. Values are
//! built per expression subtree and never mutated after the solver returns
//! them.

mod constant;
mod model;


pub use constant::Constant;
pub use model::ExprModel;

use jane_core::TypeCategory;

use crate::source_map::Span;
use crate::types::TypeDescriptor;

#[derive(Clone, Debug, PartialEq)]
pub struct Value {
    pub ty: TypeDescriptor,
    pub constant: Option<Constant>,
    /// Constant expression. The `nil` literal is one without a payload.
    pub is_const: bool,
    pub model: Option<ExprModel>,
    pub span: Span,
}

impl Value {
    /// A value only known at run time.
    pub fn runtime(ty: TypeDescriptor) -> Self {
        Self {
            ty,
            constant: None,
            is_const: false,
            model: None,
            span: Span::detached(),
        }
    }

    pub fn constant(ty: TypeDescriptor, constant: Constant) -> Self {
        Self {
            constant: Some(constant),
            is_const: true,
            ..Self::runtime(ty)
        }
    }

    pub fn int(category: TypeCategory, x: i64) -> Self {
        Self::constant(TypeDescriptor::scalar(category), Constant::Int(x))
    }

    pub fn uint(category: TypeCategory, x: u64) -> Self {
        Self::constant(TypeDescriptor::scalar(category), Constant::UInt(x))
    }

    pub fn float(category: TypeCategory, x: f64) -> Self {
        Self::constant(TypeDescriptor::scalar(category), Constant::Float(x))
    }

    pub fn string(s: impl Into<String>) -> Self {
        Self::constant(
            TypeDescriptor::scalar(TypeCategory::Str),
            Constant::Str(s.into()),
        )
    }

    pub fn boolean(b: bool) -> Self {
        Self::constant(TypeDescriptor::bool(), Constant::Bool(b))
    }

    /// The `nil` literal.
    pub fn nil() -> Self {
        Self {
            is_const: true,
            ..Self::runtime(TypeDescriptor::nil())
        }
    }

    pub fn with_span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }
}
