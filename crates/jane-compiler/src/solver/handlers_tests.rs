use jane_core::TypeCategory;

use super::BinaryOp;
use crate::test_utils::{shot, solve};
use crate::types::{FuncSignature, TypeDescriptor};
use crate::value::{Constant, Value};

fn rt(ty: TypeDescriptor) -> Value {
    Value::runtime(ty)
}

fn scalar(category: TypeCategory) -> TypeDescriptor {
    TypeDescriptor::scalar(category)
}

fn ptr_i32() -> TypeDescriptor {
    TypeDescriptor::pointer_to(scalar(TypeCategory::I32))
}

fn func() -> TypeDescriptor {
    TypeDescriptor::function(FuncSignature::new(vec![], TypeDescriptor::void()))
}

#[test]
fn pointer_comparison() {
    let out = shot(&rt(ptr_i32()), BinaryOp::Lt, &rt(ptr_i32()));
    insta::assert_snapshot!(out, @"type: bool");
}

#[test]
fn pointer_arithmetic_takes_integer_offsets() {
    let out = shot(&rt(ptr_i32()), BinaryOp::Add, &Value::int(TypeCategory::I32, 1));
    insta::assert_snapshot!(out, @"type: *i32");

    // The pointer side is moved to the left first.
    let out = shot(&Value::int(TypeCategory::I32, 1), BinaryOp::Add, &rt(ptr_i32()));
    insta::assert_snapshot!(out, @"type: *i32");

    let out = shot(&rt(ptr_i32()), BinaryOp::Sub, &rt(scalar(TypeCategory::Uintptr)));
    insta::assert_snapshot!(out, @"type: *i32");

    let out = shot(&Value::nil(), BinaryOp::Sub, &rt(ptr_i32()));
    insta::assert_snapshot!(out, @"type: *i32");
}

#[test]
fn pointer_offset_must_be_integer() {
    let out = shot(&rt(ptr_i32()), BinaryOp::Add, &Value::float(TypeCategory::F64, 1.5));
    insta::assert_snapshot!(out, @r"
    type: *i32
    error[incompatible_types] at 0..0: incompatible types: `*i32` and `f64`
    failed
    ");

    // Integers only offset, they do not compare.
    let out = shot(&rt(ptr_i32()), BinaryOp::Lt, &Value::int(TypeCategory::I32, 1));
    insta::assert_snapshot!(out, @r"
    type: bool
    error[incompatible_types] at 0..0: incompatible types: `*i32` and `i32`
    failed
    ");
}

#[test]
fn pointer_rejects_other_operators() {
    let out = shot(&rt(ptr_i32()), BinaryOp::Mul, &rt(ptr_i32()));
    insta::assert_snapshot!(out, @r"
    type: *i32
    error[operator_not_for_jntype] at 0..0: operator `*` is not defined for `*i32`
    failed
    ");
}

#[test]
fn pointer_incompatible() {
    let other = TypeDescriptor::pointer_to(scalar(TypeCategory::U8));
    let out = shot(&rt(ptr_i32()), BinaryOp::Eq, &rt(other));
    insta::assert_snapshot!(out, @r"
    type: bool
    error[incompatible_types] at 0..0: incompatible types: `*i32` and `*u8`
    failed
    ");
}

#[test]
fn voidptr_compares_with_any_pointer() {
    let out = shot(
        &rt(scalar(TypeCategory::Voidptr)),
        BinaryOp::Eq,
        &rt(ptr_i32()),
    );
    insta::assert_snapshot!(out, @"type: bool");
}

#[test]
fn string_concat_and_equality() {
    let out = shot(&Value::string("a"), BinaryOp::Eq, &Value::string("a"));
    insta::assert_snapshot!(out, @r"
    type: bool
    const: true
    model: true
    ");
}

#[test]
fn string_needs_exact_category() {
    let out = shot(
        &Value::string("a"),
        BinaryOp::Add,
        &Value::int(TypeCategory::I32, 1),
    );
    insta::assert_snapshot!(out, @r"
    type: str
    error[incompatible_types] at 0..0: incompatible types: `str` and `i32`
    failed
    ");
}

#[test]
fn string_rejects_ordering() {
    let out = shot(&Value::string("a"), BinaryOp::Lt, &Value::string("b"));
    insta::assert_snapshot!(out, @r"
    type: bool
    error[operator_not_for_jntype] at 0..0: operator `<` is not defined for `str`
    failed
    ");
}

#[test]
fn bool_equality_folds() {
    let out = shot(&Value::boolean(true), BinaryOp::Ne, &Value::boolean(false));
    insta::assert_snapshot!(out, @r"
    type: bool
    const: true
    model: true
    ");
}

#[test]
fn bool_rejects_ordering_and_mismatch() {
    let out = shot(&Value::boolean(true), BinaryOp::Lt, &Value::boolean(false));
    insta::assert_snapshot!(out, @r"
    type: bool
    error[operator_not_for_jntype] at 0..0: operator `<` is not defined for `bool`
    failed
    ");

    let out = shot(
        &Value::boolean(true),
        BinaryOp::Eq,
        &Value::int(TypeCategory::I32, 1),
    );
    insta::assert_snapshot!(out, @r"
    type: bool
    error[incompatible_types] at 0..0: incompatible types: `bool` and `i32`
    failed
    ");
}

#[test]
fn logical_operators() {
    let out = shot(&Value::boolean(true), BinaryOp::And, &Value::boolean(false));
    insta::assert_snapshot!(out, @r"
    type: bool
    const: false
    model: false
    ");

    let out = shot(
        &Value::int(TypeCategory::I32, 1),
        BinaryOp::Or,
        &Value::boolean(true),
    );
    insta::assert_snapshot!(out, @r"
    type: bool
    error[logical_not_bool] at 0..0: operator `||` requires `bool` operands (hint: compare against a value to get a `bool`)
    failed
    ");
}

#[test]
fn nil_equality_folds_on_payload_presence() {
    let out = shot(&Value::nil(), BinaryOp::Eq, &Value::nil());
    insta::assert_snapshot!(out, @r"
    type: bool
    const: true
    model: true
    ");

    let out = shot(&Value::nil(), BinaryOp::Ne, &Value::nil());
    insta::assert_snapshot!(out, @r"
    type: bool
    const: false
    model: false
    ");
}

#[test]
fn nil_against_runtime_map() {
    let map = TypeDescriptor::map(scalar(TypeCategory::Str), scalar(TypeCategory::I32));
    let out = shot(&rt(map), BinaryOp::Eq, &Value::nil());
    insta::assert_snapshot!(out, @"type: bool");
}

#[test]
fn nil_errors() {
    let out = shot(&Value::nil(), BinaryOp::Eq, &Value::int(TypeCategory::I32, 0));
    insta::assert_snapshot!(out, @r"
    type: bool
    error[incompatible_types] at 0..0: incompatible types: `nil` and `i32`
    failed
    ");

    let out = shot(&Value::nil(), BinaryOp::Add, &Value::nil());
    insta::assert_snapshot!(out, @r"
    type: nil
    error[operator_not_for_jntype] at 0..0: operator `+` is not defined for `nil`
    failed
    ");
}

#[test]
fn any_only_compares() {
    let any = rt(scalar(TypeCategory::Any));
    let out = shot(&any, BinaryOp::Eq, &Value::int(TypeCategory::I32, 1));
    insta::assert_snapshot!(out, @"type: bool");

    let out = shot(&any, BinaryOp::Add, &Value::int(TypeCategory::I32, 1));
    insta::assert_snapshot!(out, @r"
    type: any
    error[operator_not_for_jntype] at 0..0: operator `+` is not defined for `any`
    failed
    ");
}

#[test]
fn function_compares_with_nil_only() {
    let out = shot(&rt(func()), BinaryOp::Eq, &Value::nil());
    insta::assert_snapshot!(out, @"type: bool");

    let out = shot(&rt(func()), BinaryOp::Eq, &rt(func()));
    insta::assert_snapshot!(out, @r"
    type: bool
    error[incompatible_types] at 0..0: incompatible types: `fn()` and `fn()`
    failed
    ");

    let out = shot(&rt(func()), BinaryOp::Add, &Value::nil());
    insta::assert_snapshot!(out, @r"
    type: fn()
    error[operator_not_for_jntype] at 0..0: operator `+` is not defined for `fn()`
    failed
    ");
}

#[test]
fn arrays_and_slices() {
    let arr = TypeDescriptor::array_of(scalar(TypeCategory::I32));
    let out = shot(&rt(arr.clone()), BinaryOp::Eq, &rt(arr.clone()));
    insta::assert_snapshot!(out, @"type: bool");

    let bytes = TypeDescriptor::array_of(scalar(TypeCategory::U8));
    let out = shot(&rt(arr.clone()), BinaryOp::Ne, &rt(bytes));
    insta::assert_snapshot!(out, @r"
    type: bool
    error[incompatible_types] at 0..0: incompatible types: `[]i32` and `[]u8`
    failed
    ");

    let out = shot(&rt(arr.clone()), BinaryOp::Add, &rt(arr));
    insta::assert_snapshot!(out, @r"
    type: []i32
    error[operator_not_for_jntype] at 0..0: operator `+` is not defined for `[]i32`
    failed
    ");

    let slice = TypeDescriptor::slice_of(scalar(TypeCategory::I32));
    let out = shot(&rt(slice), BinaryOp::Eq, &Value::nil());
    insta::assert_snapshot!(out, @"type: bool");
}

#[test]
fn structs_compare_by_signature() {
    let point = rt(TypeDescriptor::named(TypeCategory::Struct, "Point"));
    let out = shot(&point, BinaryOp::Eq, &point);
    insta::assert_snapshot!(out, @"type: bool");

    let out = shot(&point, BinaryOp::Add, &point);
    insta::assert_snapshot!(out, @r"
    type: Point
    error[operator_not_for_jntype] at 0..0: operator `+` is not defined for `Point`
    failed
    ");
}

#[test]
fn trait_compares_with_nil() {
    let shape = rt(TypeDescriptor::named(TypeCategory::Trait, "Shape"));
    let out = shot(&shape, BinaryOp::Ne, &Value::nil());
    insta::assert_snapshot!(out, @"type: bool");
}

#[test]
fn enums_solve_as_underlying() {
    let color = TypeDescriptor::enumeration("Color", scalar(TypeCategory::U8));
    let red = Value::constant(color.clone(), Constant::UInt(1));
    let blue = Value::constant(color.clone(), Constant::UInt(2));

    let out = shot(&red, BinaryOp::Add, &blue);
    insta::assert_snapshot!(out, @r"
    type: u8
    const: 3
    model: u8_jnt{3}
    ");

    let out = shot(&rt(color.clone()), BinaryOp::Eq, &rt(color));
    insta::assert_snapshot!(out, @"type: bool");
}

#[test]
fn float_arithmetic_promotes() {
    let out = shot(
        &Value::float(TypeCategory::F32, 1.5),
        BinaryOp::Add,
        &Value::int(TypeCategory::I32, 2),
    );
    insta::assert_snapshot!(out, @r"
    type: f32
    const: 3.5
    model: f32_jnt{3.5}
    ");

    let out = shot(
        &Value::float(TypeCategory::F64, 0.1),
        BinaryOp::Add,
        &Value::float(TypeCategory::F64, 0.2),
    );
    insta::assert_snapshot!(out, @r"
    type: f64
    const: 0.30000000000000004
    model: f64_jnt{0.30000000000000004}
    ");
}

#[test]
fn float_comparison() {
    let out = shot(
        &Value::float(TypeCategory::F64, 1.0),
        BinaryOp::Lt,
        &Value::int(TypeCategory::I32, 2),
    );
    insta::assert_snapshot!(out, @r"
    type: bool
    const: true
    model: true
    ");
}

#[test]
fn float_rejects_bitwise_and_non_numeric() {
    let one = Value::float(TypeCategory::F64, 1.0);
    let out = shot(&one, BinaryOp::BitAnd, &one);
    insta::assert_snapshot!(out, @r"
    type: f64
    error[operator_not_for_jntype] at 0..0: operator `&` is not defined for `f64`
    failed
    ");

    let unresolved = rt(TypeDescriptor::named(TypeCategory::Id, "T"));
    let out = shot(&one, BinaryOp::Add, &unresolved);
    insta::assert_snapshot!(out, @r"
    type: f64
    error[incompatible_types] at 0..0: incompatible types: `f64` and `T`
    failed
    ");
}

#[test]
fn float_remainder_falls_back_to_integers() {
    let out = shot(
        &Value::int(TypeCategory::I32, 7),
        BinaryOp::Rem,
        &Value::float(TypeCategory::F64, 2.0),
    );
    insta::assert_snapshot!(out, @r"
    type: i8
    const: 1
    model: i8_jnt{1}
    ");

    // Operand order is kept.
    let out = shot(
        &Value::float(TypeCategory::F64, 7.0),
        BinaryOp::Rem,
        &Value::int(TypeCategory::I32, 2),
    );
    insta::assert_snapshot!(out, @r"
    type: i8
    const: 1
    model: i8_jnt{1}
    ");

    let out = shot(
        &Value::uint(TypeCategory::U32, 10),
        BinaryOp::Rem,
        &Value::float(TypeCategory::F32, 3.0),
    );
    insta::assert_snapshot!(out, @r"
    type: u8
    const: 1
    model: u8_jnt{1}
    ");
}

#[test]
fn float_remainder_rejected() {
    let out = shot(
        &Value::int(TypeCategory::I32, 7),
        BinaryOp::Rem,
        &Value::float(TypeCategory::F64, 2.5),
    );
    insta::assert_snapshot!(out, @r"
    type: i32
    error[operator_not_for_jntype] at 0..0: operator `%` is not defined for `f64`
    failed
    ");

    let out = shot(
        &Value::int(TypeCategory::I32, 7),
        BinaryOp::Rem,
        &rt(scalar(TypeCategory::F64)),
    );
    insta::assert_snapshot!(out, @r"
    type: i32
    error[operator_not_for_jntype] at 0..0: operator `%` is not defined for `f64`
    failed
    ");

    let half = Value::float(TypeCategory::F64, 0.5);
    let (_, eval) = solve(&half, BinaryOp::Rem, &half);
    assert!(eval.has_error());
}

#[test]
fn integer_arithmetic() {
    let out = shot(
        &Value::int(TypeCategory::I32, 7),
        BinaryOp::Div,
        &Value::int(TypeCategory::I32, 2),
    );
    insta::assert_snapshot!(out, @r"
    type: f32
    const: 3.5
    model: f32_jnt{3.5}
    ");

    // Exact quotients are still floats.
    let out = shot(
        &Value::uint(TypeCategory::U32, 8),
        BinaryOp::Div,
        &Value::uint(TypeCategory::U32, 2),
    );
    insta::assert_snapshot!(out, @r"
    type: f32
    const: 4.0
    model: f32_jnt{4.0}
    ");

    let out = shot(
        &Value::uint(TypeCategory::U8, 200),
        BinaryOp::Add,
        &Value::int(TypeCategory::I32, 100),
    );
    insta::assert_snapshot!(out, @r"
    type: u16
    const: 300
    model: u16_jnt{300}
    ");

    let out = shot(
        &Value::int(TypeCategory::I32, 12),
        BinaryOp::BitAnd,
        &Value::int(TypeCategory::I32, 10),
    );
    insta::assert_snapshot!(out, @r"
    type: i8
    const: 8
    model: i8_jnt{8}
    ");
}

#[test]
fn integer_comparison() {
    let out = shot(
        &Value::uint(TypeCategory::U8, 3),
        BinaryOp::Ge,
        &Value::int(TypeCategory::I8, 3),
    );
    insta::assert_snapshot!(out, @r"
    type: bool
    const: true
    model: true
    ");
}

#[test]
fn shift_width_follows_amount() {
    let out = shot(
        &Value::uint(TypeCategory::U32, 1),
        BinaryOp::Shl,
        &Value::uint(TypeCategory::U32, 3),
    );
    insta::assert_snapshot!(out, @r"
    type: i8
    const: 8
    model: i8_jnt{8}
    ");

    let out = shot(
        &Value::int(TypeCategory::I32, -8),
        BinaryOp::Shr,
        &Value::uint(TypeCategory::U8, 1),
    );
    insta::assert_snapshot!(out, @r"
    type: i8
    const: -4
    model: i8_jnt{-4}
    ");

    let out = shot(
        &Value::uint(TypeCategory::U64, 1),
        BinaryOp::Shl,
        &Value::uint(TypeCategory::U64, 64),
    );
    insta::assert_snapshot!(out, @r"
    type: f32
    const: 0
    model: f32_jnt{0}
    ");
}

#[test]
fn runtime_shift_is_u64() {
    let out = shot(
        &rt(scalar(TypeCategory::U32)),
        BinaryOp::Shr,
        &Value::uint(TypeCategory::U32, 2),
    );
    insta::assert_snapshot!(out, @"type: u64");
}

#[test]
fn signed_shift_amount_warns_but_proceeds() {
    let out = shot(
        &Value::int(TypeCategory::I32, 1),
        BinaryOp::Shl,
        &rt(scalar(TypeCategory::I32)),
    );
    insta::assert_snapshot!(out, @r"
    type: u64
    warning[bitshift_must_unsigned] at 0..0: shift amount `i32` must be unsigned (hint: cast the shift amount to an unsigned type)
    ");

    // Non-negative signed constants are fine.
    let (_, eval) = solve(
        &Value::int(TypeCategory::I32, 1),
        BinaryOp::Shl,
        &Value::int(TypeCategory::I32, 3),
    );
    assert!(eval.diagnostics().is_empty());

    let out = shot(
        &Value::int(TypeCategory::I32, 1),
        BinaryOp::Shl,
        &Value::int(TypeCategory::I32, -1),
    );
    insta::assert_snapshot!(out, @r"
    type: f64
    const: 0
    model: f64_jnt{0}
    warning[bitshift_must_unsigned] at 0..0: shift amount `i32` must be unsigned (hint: cast the shift amount to an unsigned type)
    ");
}
