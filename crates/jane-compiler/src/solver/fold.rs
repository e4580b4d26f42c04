//! Constant folding.
//!
//! The left payload decides the representation; the right payload is coerced
//! to it. Integer arithmetic wraps; integer division yields the float
//! quotient.

use super::ops::BinaryOp;
use crate::value::Constant;

/// Division or remainder by a zero constant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DivideByZero;

/// Fold `left op right`.
///
/// `Ok(None)` when the operator has no folding rule for these payloads.
pub fn fold(
    op: BinaryOp,
    left: &Constant,
    right: &Constant,
) -> Result<Option<Constant>, DivideByZero> {
    match left {
        Constant::Bool(l) => Ok(right.as_bool().and_then(|r| fold_bool(op, *l, r))),
        Constant::Str(l) => Ok(right.as_str().and_then(|r| fold_str(op, l, r))),
        Constant::Float(l) => match right.as_f64() {
            Some(r) => fold_float(op, *l, r),
            None => Ok(None),
        },
        Constant::Int(l) => match right.as_i64() {
            Some(r) => fold_int(op, *l, r, right),
            None => Ok(None),
        },
        Constant::UInt(l) => match right.as_u64() {
            Some(r) => fold_uint(op, *l, r),
            None => Ok(None),
        },
    }
}

fn fold_bool(op: BinaryOp, l: bool, r: bool) -> Option<Constant> {
    let b = match op {
        BinaryOp::Eq => l == r,
        BinaryOp::Ne => l != r,
        BinaryOp::And => l && r,
        BinaryOp::Or => l || r,
        _ => return None,
    };
    Some(Constant::Bool(b))
}

fn fold_str(op: BinaryOp, l: &str, r: &str) -> Option<Constant> {
    match op {
        BinaryOp::Add => Some(Constant::Str(format!("{l}{r}"))),
        BinaryOp::Eq => Some(Constant::Bool(l == r)),
        BinaryOp::Ne => Some(Constant::Bool(l != r)),
        _ => None,
    }
}

fn compare<T: PartialOrd>(op: BinaryOp, l: T, r: T) -> Option<Constant> {
    let b = match op {
        BinaryOp::Eq => l == r,
        BinaryOp::Ne => l != r,
        BinaryOp::Lt => l < r,
        BinaryOp::Gt => l > r,
        BinaryOp::Le => l <= r,
        BinaryOp::Ge => l >= r,
        _ => return None,
    };
    Some(Constant::Bool(b))
}

fn fold_float(op: BinaryOp, l: f64, r: f64) -> Result<Option<Constant>, DivideByZero> {
    let x = match op {
        BinaryOp::Add => l + r,
        BinaryOp::Sub => l - r,
        BinaryOp::Mul => l * r,
        BinaryOp::Div if r == 0.0 => return Err(DivideByZero),
        BinaryOp::Div => l / r,
        _ => return Ok(compare(op, l, r)),
    };
    Ok(Some(Constant::Float(x)))
}

fn fold_int(
    op: BinaryOp,
    l: i64,
    r: i64,
    right: &Constant,
) -> Result<Option<Constant>, DivideByZero> {
    let x = match op {
        BinaryOp::Add => l.wrapping_add(r),
        BinaryOp::Sub => l.wrapping_sub(r),
        BinaryOp::Mul => l.wrapping_mul(r),
        BinaryOp::Div | BinaryOp::Rem if r == 0 => return Err(DivideByZero),
        BinaryOp::Div => return Ok(Some(Constant::Float(l as f64 / r as f64))),
        BinaryOp::Rem => l.wrapping_rem(r),
        BinaryOp::BitAnd => l & r,
        BinaryOp::BitOr => l | r,
        BinaryOp::BitXor => l ^ r,
        BinaryOp::Shl | BinaryOp::Shr => {
            let Some(amount) = right.as_u64() else {
                return Ok(None);
            };
            // Non-negative values shift as unsigned.
            if l >= 0 {
                return Ok(Some(Constant::UInt(shift_uint(op, l as u64, amount))));
            }
            return Ok(Some(Constant::Int(shift_int(op, l, amount))));
        }
        _ => return Ok(compare(op, l, r)),
    };
    Ok(Some(Constant::Int(x)))
}

fn fold_uint(op: BinaryOp, l: u64, r: u64) -> Result<Option<Constant>, DivideByZero> {
    let x = match op {
        BinaryOp::Add => l.wrapping_add(r),
        BinaryOp::Sub => l.wrapping_sub(r),
        BinaryOp::Mul => l.wrapping_mul(r),
        BinaryOp::Div | BinaryOp::Rem if r == 0 => return Err(DivideByZero),
        BinaryOp::Div => return Ok(Some(Constant::Float(l as f64 / r as f64))),
        BinaryOp::Rem => l % r,
        BinaryOp::BitAnd => l & r,
        BinaryOp::BitOr => l | r,
        BinaryOp::BitXor => l ^ r,
        BinaryOp::Shl | BinaryOp::Shr => shift_uint(op, l, r),
        _ => return Ok(compare(op, l, r)),
    };
    Ok(Some(Constant::UInt(x)))
}

fn shift_uint(op: BinaryOp, l: u64, amount: u64) -> u64 {
    if amount >= 64 {
        return 0;
    }
    match op {
        BinaryOp::Shl => l << amount,
        _ => l >> amount,
    }
}

fn shift_int(op: BinaryOp, l: i64, amount: u64) -> i64 {
    match op {
        BinaryOp::Shl if amount >= 64 => 0,
        BinaryOp::Shl => l << amount,
        // Arithmetic shift saturates at the sign.
        _ if amount >= 64 => l >> 63,
        _ => l >> amount,
    }
}
