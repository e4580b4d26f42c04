//! Operands and type expressions given on the command line.
//!
//! ```text
//! operand := "nil" | type | type "=" value
//! type    := "*" type | "[]" type | "[:]" type | "[" type ":" type "]"
//!          | "(" type ("," type)* ")" | "fn" | name
//! ```
//!
//! Scalar category names (`i32`, `str`, `voidptr`, ...) map to their category;
//! any other identifier names a struct.

use jane_compiler::{Constant, FuncSignature, TypeDescriptor, Value};
use jane_core::TypeCategory;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OperandError {
    #[error("empty type expression")]
    EmptyType,
    #[error("invalid type expression `{0}`")]
    InvalidType(String),
    #[error("`{value}` is not a valid `{ty}` value")]
    InvalidValue { ty: String, value: String },
    #[error("type `{0}` has no constant form")]
    NotConstant(String),
}

pub fn parse_operand(text: &str) -> Result<Value, OperandError> {
    let text = text.trim();
    if text == "nil" {
        return Ok(Value::nil());
    }
    let Some((ty, value)) = text.split_once('=') else {
        return Ok(Value::runtime(parse_type(text)?));
    };
    let ty = parse_type(ty)?;
    let constant = parse_constant(&ty, value)?;
    Ok(Value::constant(ty, constant))
}

pub fn parse_type(text: &str) -> Result<TypeDescriptor, OperandError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(OperandError::EmptyType);
    }

    if let Some(rest) = text.strip_prefix('*') {
        return Ok(TypeDescriptor::pointer_to(parse_type(rest)?));
    }
    if let Some(rest) = text.strip_prefix("[:]") {
        return Ok(TypeDescriptor::slice_of(parse_type(rest)?));
    }
    if let Some(rest) = text.strip_prefix("[]") {
        return Ok(TypeDescriptor::array_of(parse_type(rest)?));
    }
    if let Some(inner) = text.strip_prefix('[').and_then(|t| t.strip_suffix(']')) {
        let parts = split_top_level(inner, ':');
        let [key, value] = parts[..] else {
            return Err(OperandError::InvalidType(text.to_owned()));
        };
        return Ok(TypeDescriptor::map(parse_type(key)?, parse_type(value)?));
    }
    if let Some(inner) = text.strip_prefix('(').and_then(|t| t.strip_suffix(')')) {
        let elements = split_top_level(inner, ',')
            .into_iter()
            .map(parse_type)
            .collect::<Result<Vec<_>, _>>()?;
        return Ok(TypeDescriptor::tuple(elements));
    }

    parse_name(text)
}

fn parse_name(text: &str) -> Result<TypeDescriptor, OperandError> {
    let is_ident = text.starts_with(|c: char| c.is_ascii_alphabetic() || c == '_')
        && text.chars().all(|c| c.is_ascii_alphanumeric() || c == '_');
    if !is_ident {
        return Err(OperandError::InvalidType(text.to_owned()));
    }

    match TypeCategory::from_name(text) {
        None => Ok(TypeDescriptor::named(TypeCategory::Struct, text)),
        Some(TypeCategory::Fn) => Ok(TypeDescriptor::function(FuncSignature::new(
            Vec::new(),
            TypeDescriptor::void(),
        ))),
        Some(
            TypeCategory::Struct
            | TypeCategory::Enum
            | TypeCategory::Trait
            | TypeCategory::Map
            | TypeCategory::Id,
        ) => Err(OperandError::InvalidType(text.to_owned())),
        Some(category) => Ok(TypeDescriptor::scalar(category)),
    }
}

fn parse_constant(ty: &TypeDescriptor, value: &str) -> Result<Constant, OperandError> {
    let invalid = || OperandError::InvalidValue {
        ty: ty.signature.clone(),
        value: value.to_owned(),
    };
    if !ty.is_plain() {
        return Err(OperandError::NotConstant(ty.signature.clone()));
    }

    let category = ty.category;
    if category == TypeCategory::Bool {
        value.parse().map(Constant::Bool).map_err(|_| invalid())
    } else if category == TypeCategory::Str {
        Ok(Constant::Str(value.to_owned()))
    } else if category.is_float() {
        value.parse().map(Constant::Float).map_err(|_| invalid())
    } else if category.is_unsigned_integer() {
        value.parse().map(Constant::UInt).map_err(|_| invalid())
    } else if category.is_signed_integer() {
        value.parse().map(Constant::Int).map_err(|_| invalid())
    } else {
        Err(OperandError::NotConstant(ty.signature.clone()))
    }
}

/// Split on `sep` outside of brackets and parentheses.
fn split_top_level(text: &str, sep: char) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;
    for (i, c) in text.char_indices() {
        match c {
            '[' | '(' => depth += 1,
            ']' | ')' => depth = depth.saturating_sub(1),
            c if c == sep && depth == 0 => {
                parts.push(&text[start..i]);
                start = i + c.len_utf8();
            }
            _ => {}
        }
    }
    parts.push(&text[start..]);
    parts
}
