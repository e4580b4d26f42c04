//! Minimal bit-width inference for literal values.
//!
//! Folded constants are re-typed to the narrowest category that holds their
//! value exactly.

use crate::TypeCategory;

/// Smallest signed width (8, 16, 32 or 64) holding `x`.
pub fn bitsize_int(x: i64) -> u32 {
    if i8::try_from(x).is_ok() {
        8
    } else if i16::try_from(x).is_ok() {
        16
    } else if i32::try_from(x).is_ok() {
        32
    } else {
        64
    }
}

/// Smallest unsigned width (8, 16, 32 or 64) holding `x`.
pub fn bitsize_uint(x: u64) -> u32 {
    if u8::try_from(x).is_ok() {
        8
    } else if u16::try_from(x).is_ok() {
        16
    } else if u32::try_from(x).is_ok() {
        32
    } else {
        64
    }
}

/// 32 when `x` survives a round trip through `f32`, otherwise 64.
pub fn bitsize_float(x: f64) -> u32 {
    if x.is_finite() && f64::from(x as f32) == x {
        32
    } else {
        64
    }
}

pub fn minimal_signed(x: i64) -> TypeCategory {
    match bitsize_int(x) {
        8 => TypeCategory::I8,
        16 => TypeCategory::I16,
        32 => TypeCategory::I32,
        _ => TypeCategory::I64,
    }
}

pub fn minimal_unsigned(x: u64) -> TypeCategory {
    match bitsize_uint(x) {
        8 => TypeCategory::U8,
        16 => TypeCategory::U16,
        32 => TypeCategory::U32,
        _ => TypeCategory::U64,
    }
}

pub fn minimal_float(x: f64) -> TypeCategory {
    match bitsize_float(x) {
        32 => TypeCategory::F32,
        _ => TypeCategory::F64,
    }
}
