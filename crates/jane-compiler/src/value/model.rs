//! Emission handles for folded constants.

use std::fmt::Write;

use super::Constant;
use crate::types::TypeDescriptor;

/// C++ expression text the emitter writes for a value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExprModel(String);

impl ExprModel {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// Literal for `constant` typed as `ty`, e.g. `i8_jnt{7}`.
    pub fn from_constant(constant: &Constant, ty: &TypeDescriptor) -> Self {
        let spelling = ty.category.cxx_spelling();
        let text = match constant {
            Constant::Bool(b) => b.to_string(),
            Constant::Str(s) => format!("{spelling}(\"{}\")", escape_str(s)),
            Constant::Float(x) => format!("{spelling}{{{x:?}}}"),
            Constant::Int(x) => format!("{spelling}{{{x}}}"),
            Constant::UInt(x) => format!("{spelling}{{{x}}}"),
        };
        Self(text)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ExprModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

fn escape_str(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_ascii_control() => {
                let _ = write!(out, "\\x{:02x}", c as u32);
            }
            c => out.push(c),
        }
    }
    out
}
