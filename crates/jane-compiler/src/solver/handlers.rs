//! Per-category handlers.
//!
//! Dispatch picks the first handler whose predicate matches either operand.

use jane_core::TypeCategory;

use super::fold::{self, DivideByZero};
use super::ops::BinaryOp;
use super::{Binary, Evaluation, Outcome, Solver, Width};
use crate::diagnostics::DiagnosticKind;
use crate::types::TypeDescriptor;
use crate::value::{Constant, Value};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Handler {
    Logical,
    Function,
    Array,
    Slice,
    Pointer,
    Enum,
    Struct,
    Trait,
    Nil,
    Any,
    Bool,
    Str,
    Float,
    Unsigned,
    Signed,
}

/// First match wins; each predicate is tried on both operands.
const PRIORITY: [(Handler, fn(&TypeDescriptor) -> bool); 14] = [
    (Handler::Function, TypeDescriptor::is_func),
    (Handler::Array, TypeDescriptor::is_array),
    (Handler::Slice, TypeDescriptor::is_slice),
    (Handler::Pointer, TypeDescriptor::is_pointer),
    (Handler::Enum, TypeDescriptor::is_enum),
    (Handler::Struct, TypeDescriptor::is_struct),
    (Handler::Trait, TypeDescriptor::is_trait),
    (Handler::Nil, TypeDescriptor::is_nil),
    (Handler::Any, TypeDescriptor::is_any),
    (Handler::Bool, TypeDescriptor::is_bool),
    (Handler::Str, TypeDescriptor::is_str),
    (Handler::Float, TypeDescriptor::is_float),
    (Handler::Unsigned, TypeDescriptor::is_unsigned_integer),
    (Handler::Signed, TypeDescriptor::is_signed_numeric),
];

impl Handler {
    fn select(bin: &Binary) -> Option<Self> {
        if bin.op.op.is_logical() {
            return Some(Self::Logical);
        }
        PRIORITY
            .iter()
            .find(|(_, pred)| bin.either(pred))
            .map(|(handler, _)| *handler)
    }
}

impl Solver<'_> {
    pub(super) fn dispatch(&self, eval: &mut Evaluation, bin: Binary) -> Outcome {
        let handler = Handler::select(&bin);
        tracing::trace!(
            op = %bin.op.op,
            left = %bin.left.ty,
            right = %bin.right.ty,
            ?handler,
            "dispatch"
        );

        let Some(handler) = handler else {
            let name = bin.left.ty.signature.clone();
            return self.not_for_type(eval, &bin, &name);
        };
        match handler {
            Handler::Logical => self.logical(eval, bin),
            Handler::Function => self.function(eval, bin),
            Handler::Array | Handler::Slice => self.sequence(eval, bin),
            Handler::Pointer => self.pointer(eval, bin),
            Handler::Enum => self.enumeration(eval, bin),
            Handler::Struct => self.structure(eval, bin),
            Handler::Trait => self.jntrait(eval, bin),
            Handler::Nil => self.nil(eval, bin),
            Handler::Any => self.any(eval, bin),
            Handler::Bool => self.boolean(eval, bin),
            Handler::Str => self.string(eval, bin),
            Handler::Float => self.float(eval, bin),
            Handler::Unsigned | Handler::Signed => self.integer(eval, bin),
        }
    }

    fn logical(&self, eval: &mut Evaluation, bin: Binary) -> Outcome {
        if !bin.left.ty.is_bool() || !bin.right.ty.is_bool() {
            eval.report(DiagnosticKind::LogicalNotBool, bin.op.span)
                .args([bin.op.op.symbol()])
                .emit();
            return best_effort(&bin);
        }
        self.fold(eval, &bin, TypeDescriptor::bool())
    }

    /// Functions only compare against `nil`.
    fn function(&self, eval: &mut Evaluation, bin: Binary) -> Outcome {
        if !bin.either(TypeDescriptor::is_nil) {
            return self.incompatible(eval, &bin);
        }
        if bin.op.op.is_equality() {
            return Outcome::typed(TypeDescriptor::bool());
        }
        let name = side_name(&bin, TypeDescriptor::is_func);
        self.not_for_type(eval, &bin, &name)
    }

    /// Arrays and slices.
    fn sequence(&self, eval: &mut Evaluation, bin: Binary) -> Outcome {
        if !self.compatible(&bin, true) {
            return self.incompatible(eval, &bin);
        }
        if bin.op.op.is_equality() {
            return Outcome::typed(TypeDescriptor::bool());
        }
        let name = bin.left.ty.signature.clone();
        self.not_for_type(eval, &bin, &name)
    }

    /// Pointer `+ -` with an integer offset on either side yields the pointer
    /// type. Everything else requires compatible operands.
    fn pointer(&self, eval: &mut Evaluation, mut bin: Binary) -> Outcome {
        let op = bin.op.op;
        let offset = matches!(op, BinaryOp::Add | BinaryOp::Sub)
            && bin.either(TypeDescriptor::is_integer);
        if !offset && !self.compatible(&bin, true) {
            return self.incompatible(eval, &bin);
        }
        if !bin.left.ty.is_pointer() {
            std::mem::swap(&mut bin.left, &mut bin.right);
        }
        match op {
            BinaryOp::Add | BinaryOp::Sub => Outcome::typed(bin.left.ty),
            op if op.is_comparison() => Outcome::typed(TypeDescriptor::bool()),
            _ => {
                let name = bin.left.ty.signature.clone();
                self.not_for_type(eval, &bin, &name)
            }
        }
    }

    /// Enums solve as their underlying type.
    fn enumeration(&self, eval: &mut Evaluation, mut bin: Binary) -> Outcome {
        let left = unwrap_enum(&mut bin.left);
        let right = unwrap_enum(&mut bin.right);
        if !left && !right {
            let name = side_name(&bin, TypeDescriptor::is_enum);
            return self.not_for_type(eval, &bin, &name);
        }
        self.dispatch(eval, bin)
    }

    fn structure(&self, eval: &mut Evaluation, bin: Binary) -> Outcome {
        if bin.left.ty.signature != bin.right.ty.signature {
            return self.incompatible(eval, &bin);
        }
        if bin.op.op.is_equality() {
            return Outcome::typed(TypeDescriptor::bool());
        }
        let name = bin.left.ty.signature.clone();
        self.not_for_type(eval, &bin, &name)
    }

    fn jntrait(&self, eval: &mut Evaluation, bin: Binary) -> Outcome {
        if !self.compatible(&bin, true) {
            return self.incompatible(eval, &bin);
        }
        if bin.op.op.is_equality() {
            return Outcome::typed(TypeDescriptor::bool());
        }
        let name = side_name(&bin, TypeDescriptor::is_trait);
        self.not_for_type(eval, &bin, &name)
    }

    fn nil(&self, eval: &mut Evaluation, bin: Binary) -> Outcome {
        if !self.compatible(&bin, false) {
            return self.incompatible(eval, &bin);
        }
        let (left, right) = (&bin.left.constant, &bin.right.constant);
        let folded = match bin.op.op {
            BinaryOp::Eq => left.is_none() && right.is_none(),
            BinaryOp::Ne => left.is_some() && right.is_some(),
            _ => {
                let name = side_name(&bin, TypeDescriptor::is_nil);
                return self.not_for_type(eval, &bin, &name);
            }
        };
        Outcome {
            ty: TypeDescriptor::bool(),
            constant: bin.both_const().then_some(Constant::Bool(folded)),
            width: Width::Keep,
        }
    }

    fn any(&self, eval: &mut Evaluation, bin: Binary) -> Outcome {
        if bin.op.op.is_equality() {
            return Outcome::typed(TypeDescriptor::bool());
        }
        let name = side_name(&bin, TypeDescriptor::is_any);
        self.not_for_type(eval, &bin, &name)
    }

    fn boolean(&self, eval: &mut Evaluation, bin: Binary) -> Outcome {
        if !self.compatible(&bin, true) {
            return self.incompatible(eval, &bin);
        }
        if bin.op.op.is_equality() {
            return self.fold(eval, &bin, TypeDescriptor::bool());
        }
        let name = bin.left.ty.signature.clone();
        self.not_for_type(eval, &bin, &name)
    }

    fn string(&self, eval: &mut Evaluation, bin: Binary) -> Outcome {
        if bin.left.ty.category != bin.right.ty.category {
            return self.incompatible(eval, &bin);
        }
        match bin.op.op {
            BinaryOp::Add => self.fold(eval, &bin, TypeDescriptor::scalar(TypeCategory::Str)),
            op if op.is_equality() => self.fold(eval, &bin, TypeDescriptor::bool()),
            _ => {
                let name = bin.left.ty.signature.clone();
                self.not_for_type(eval, &bin, &name)
            }
        }
    }

    fn float(&self, eval: &mut Evaluation, mut bin: Binary) -> Outcome {
        if !bin.left.ty.is_numeric() || !bin.right.ty.is_numeric() {
            return self.incompatible(eval, &bin);
        }
        let op = bin.op.op;
        if op == BinaryOp::Rem {
            return match float_rem_operands(&bin) {
                Some(coerced) => self.integer(eval, coerced),
                None => {
                    let name = side_name(&bin, TypeDescriptor::is_float);
                    self.not_for_type(eval, &bin, &name)
                }
            };
        }
        if !op.is_comparison() && !op.is_arithmetic() {
            let name = side_name(&bin, TypeDescriptor::is_float);
            return self.not_for_type(eval, &bin, &name);
        }

        promote_to_float(&mut bin.left);
        promote_to_float(&mut bin.right);
        let ty = if op.is_comparison() {
            TypeDescriptor::bool()
        } else {
            self.wider(&bin)
        };
        self.fold(eval, &bin, ty)
    }

    /// Signed and unsigned integers. The representation of the folded value
    /// follows the left payload.
    fn integer(&self, eval: &mut Evaluation, bin: Binary) -> Outcome {
        if !bin.left.ty.is_numeric() || !bin.right.ty.is_numeric() {
            return self.incompatible(eval, &bin);
        }
        let op = bin.op.op;
        if op.is_shift() {
            if !ok_for_shifting(&bin.right) {
                eval.report(DiagnosticKind::BitshiftMustUnsigned, bin.op.span)
                    .args([bin.right.ty.signature.as_str()])
                    .emit();
            }
            let mut outcome = self.fold(eval, &bin, TypeDescriptor::scalar(TypeCategory::U64));
            if let (Width::Minimal, Some(amount)) = (
                outcome.width,
                bin.right.constant.as_ref().and_then(Constant::as_u64),
            ) {
                outcome.width = Width::Shift(amount);
            }
            return outcome;
        }
        if op.is_comparison() {
            return self.fold(eval, &bin, TypeDescriptor::bool());
        }
        if op.is_arithmetic() || op == BinaryOp::Rem || op.is_bitwise() {
            let ty = self.wider(&bin);
            return self.fold(eval, &bin, ty);
        }
        let name = bin.left.ty.signature.clone();
        self.not_for_type(eval, &bin, &name)
    }

    /// Fold when both operands carry a payload, typing the result `ty`.
    fn fold(&self, eval: &mut Evaluation, bin: &Binary, ty: TypeDescriptor) -> Outcome {
        let (Some(left), Some(right), true) =
            (&bin.left.constant, &bin.right.constant, bin.both_const())
        else {
            return Outcome::typed(ty);
        };

        match fold::fold(bin.op.op, left, right) {
            Ok(constant) => {
                if let Some(c) = &constant {
                    tracing::debug!(op = %bin.op.op, %left, %right, result = %c, "folded");
                }
                Outcome {
                    ty,
                    constant,
                    width: Width::Minimal,
                }
            }
            Err(DivideByZero) => {
                eval.report(DiagnosticKind::DivideByZero, bin.op.span)
                    .args([bin.op.op.symbol()])
                    .emit();
                tracing::debug!(op = %bin.op.op, category = %ty.category, "divide by zero, substituting zero");
                Outcome {
                    constant: Some(Constant::zero_for(ty.category)),
                    ty,
                    width: Width::Keep,
                }
            }
        }
    }

    fn compatible(&self, bin: &Binary, ignore_any: bool) -> bool {
        self.compat
            .compatible(&bin.left.ty, &bin.right.ty, ignore_any, true)
    }

    /// The right type when it ranks strictly greater, else the left.
    fn wider(&self, bin: &Binary) -> TypeDescriptor {
        let (left, right) = (&bin.left.ty, &bin.right.ty);
        if right
            .category
            .rank_greater(left.category, self.config.get_word_size())
        {
            right.clone()
        } else {
            left.clone()
        }
    }

    /// Operands with an attached span are pointed at as related locations.
    fn incompatible(&self, eval: &mut Evaluation, bin: &Binary) -> Outcome {
        let mut diag = eval
            .report(DiagnosticKind::IncompatibleTypes, bin.op.span)
            .args([
                bin.left.ty.signature.as_str(),
                bin.right.ty.signature.as_str(),
            ]);
        for operand in [&bin.left, &bin.right] {
            if operand.span.source.is_some() {
                diag = diag.related_to(format!("this is `{}`", operand.ty.signature), operand.span);
            }
        }
        diag.emit();
        best_effort(bin)
    }

    fn not_for_type(&self, eval: &mut Evaluation, bin: &Binary, type_name: &str) -> Outcome {
        eval.report(DiagnosticKind::OperatorNotForType, bin.op.span)
            .args([bin.op.op.symbol(), type_name])
            .emit();
        best_effort(bin)
    }
}

fn best_effort(bin: &Binary) -> Outcome {
    if bin.op.op.yields_bool() {
        Outcome::typed(TypeDescriptor::bool())
    } else {
        Outcome::typed(bin.left.ty.clone())
    }
}

fn unwrap_enum(value: &mut Value) -> bool {
    match value.ty.enum_underlying() {
        Some(underlying) => {
            value.ty = underlying.resolve_alias();
            true
        }
        None => false,
    }
}

/// Signature of the operand matching `pred`, the left one when both do.
fn side_name(bin: &Binary, pred: impl Fn(&TypeDescriptor) -> bool) -> String {
    if pred(&bin.left.ty) {
        bin.left.ty.signature.clone()
    } else {
        bin.right.ty.signature.clone()
    }
}

fn promote_to_float(value: &mut Value) {
    if let Some(x) = value.constant.as_ref().and_then(Constant::as_f64) {
        value.constant = Some(Constant::Float(x));
    }
}

/// Shift amounts must be unsigned, or a signed constant that is not negative.
fn ok_for_shifting(right: &Value) -> bool {
    if right.ty.is_unsigned_integer() {
        return true;
    }
    right.ty.is_signed_integer()
        && right.is_const
        && right.constant.as_ref().and_then(Constant::as_i64).is_some_and(|x| x >= 0)
}

/// Operands for `int % float`: the float side must be a constant holding an
/// integer exactly. It takes the integer side's type, or `u64` when only an
/// unsigned representation fits a signed integer side. Operand order is kept.
fn float_rem_operands(bin: &Binary) -> Option<Binary> {
    let int_on_left = if bin.left.ty.is_integer() {
        true
    } else if bin.right.ty.is_integer() {
        false
    } else {
        return None;
    };
    let (int_side, float_side) = if int_on_left {
        (&bin.left, &bin.right)
    } else {
        (&bin.right, &bin.left)
    };
    if !float_side.is_const {
        return None;
    }
    let payload = float_side.constant.as_ref()?;

    let (ty, constant) = if int_side.ty.is_signed_integer() {
        match (payload.exact_i64(), payload.exact_u64()) {
            (Some(x), _) => (int_side.ty.clone(), Constant::Int(x)),
            (None, Some(x)) => (TypeDescriptor::scalar(TypeCategory::U64), Constant::UInt(x)),
            (None, None) => return None,
        }
    } else {
        match (payload.exact_u64(), payload.exact_i64()) {
            (Some(x), _) => (int_side.ty.clone(), Constant::UInt(x)),
            (None, Some(x)) => (int_side.ty.clone(), Constant::UInt(x as u64)),
            (None, None) => return None,
        }
    };

    let coerced = Value {
        ty,
        constant: Some(constant),
        ..float_side.clone()
    };
    let mut bin = bin.clone();
    if int_on_left {
        bin.right = coerced;
    } else {
        bin.left = coerced;
    }
    Some(bin)
}
