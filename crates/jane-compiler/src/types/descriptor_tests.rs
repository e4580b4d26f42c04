use jane_core::TypeCategory;
use rowan::TextRange;

use super::{FuncSignature, Param, TypeDescriptor};
use crate::source_map::{SourceMap, Span};

fn i32_ty() -> TypeDescriptor {
    TypeDescriptor::scalar(TypeCategory::I32)
}

#[test]
fn shapes_keep_element_category() {
    let ty = TypeDescriptor::pointer_to(TypeDescriptor::array_of(i32_ty()));
    assert_eq!(ty.category, TypeCategory::I32);
    assert!(ty.is_pointer());
    assert!(!ty.is_array());
    assert!(!ty.is_plain());
    assert_eq!(ty.pointers(), 1);

    let pointee = ty.strip_pointers();
    assert_eq!(pointee.signature, "[]i32");
    assert!(pointee.is_array());

    let element = pointee.element().unwrap();
    assert_eq!(element.signature, "i32");
    assert!(element.is_plain());
    assert!(element.is_signed_integer());
}

#[test]
fn strip_pointers() {
    let ty = TypeDescriptor::pointer_to(TypeDescriptor::pointer_to(i32_ty()));
    assert_eq!(ty.pointers(), 2);
    assert_eq!(ty.strip_pointers().signature, "i32");
    assert_eq!(i32_ty().strip_pointers(), i32_ty());
}

#[test]
fn slice_is_not_array() {
    let slice = TypeDescriptor::slice_of(i32_ty());
    assert!(slice.is_slice());
    assert!(!slice.is_array());
    assert!(!slice.is_map());
    assert_eq!(slice.element().map(|e| e.signature), Some("i32".to_owned()));
}

#[test]
fn map_predicate_needs_bracket_prefix() {
    let map = TypeDescriptor::map(i32_ty(), i32_ty());
    assert!(map.is_map());

    let arr = TypeDescriptor::array_of(map.clone());
    assert!(arr.is_array());
    assert!(!arr.is_map());

    let ptr = TypeDescriptor::pointer_to(map);
    assert!(ptr.is_pointer());
    assert!(!ptr.is_map());
}

#[test]
fn voidptr_is_pointer() {
    let voidptr = TypeDescriptor::scalar(TypeCategory::Voidptr);
    assert!(voidptr.is_pointer());
    assert!(voidptr.is_voidptr());

    let arr = TypeDescriptor::array_of(voidptr);
    assert!(!arr.is_pointer());
}

#[test]
fn tuple_flags() {
    let ty = TypeDescriptor::tuple(vec![i32_ty(), TypeDescriptor::bool()]);
    assert!(ty.is_tuple());
    assert!(!ty.is_void());
    assert_eq!(ty.signature, "(i32, bool)");
    assert_eq!(ty.tuple_elements().map(<[_]>::len), Some(2));
}

#[test]
fn enum_underlying() {
    let ty = TypeDescriptor::enumeration("Color", TypeDescriptor::scalar(TypeCategory::U8));
    assert!(ty.is_enum());
    assert_eq!(
        ty.enum_underlying().map(|u| u.category),
        Some(TypeCategory::U8)
    );
    assert_eq!(TypeDescriptor::pointer_to(ty).enum_underlying(), None);
}

#[test]
fn function_payload() {
    let sig = FuncSignature::new(vec![Param::new("x", i32_ty())], i32_ty());
    let ty = TypeDescriptor::function(sig);
    assert!(ty.is_func());
    assert_eq!(ty.signature, "fn(i32) i32");
    assert_eq!(ty.func_signature().map(|s| s.params.len()), Some(1));
}

#[test]
fn resolve_alias_carries_prefix_and_span() {
    let (_, id) = SourceMap::one_liner("*Handle");
    let span = Span::new(id, TextRange::new(0.into(), 7.into()));

    let target = TypeDescriptor::named(TypeCategory::Struct, "Inner");
    let alias = TypeDescriptor::alias("Handle", target);
    let ptr = TypeDescriptor::pointer_to(alias).with_span(span);
    assert_eq!(ptr.category, TypeCategory::Id);

    let resolved = ptr.resolve_alias();
    assert_eq!(resolved.signature, "*Inner");
    assert_eq!(resolved.category, TypeCategory::Struct);
    assert_eq!(resolved.span, span);
    assert!(resolved.alias_of.is_none());
}

#[test]
fn resolve_alias_is_transitive() {
    let inner = TypeDescriptor::alias("A", i32_ty());
    let outer = TypeDescriptor::alias("B", inner);
    let ty = TypeDescriptor::array_of(outer);

    let resolved = ty.resolve_alias();
    assert_eq!(resolved.signature, "[]i32");
    assert_eq!(resolved.category, TypeCategory::I32);
}

#[test]
fn resolve_alias_leaves_other_types_alone() {
    let ty = TypeDescriptor::slice_of(i32_ty());
    assert_eq!(ty.resolve_alias(), ty);
}

#[test]
fn generics_extend_signature() {
    let ty = TypeDescriptor::named(TypeCategory::Struct, "Pair")
        .with_generics(vec![i32_ty(), TypeDescriptor::bool()]);
    assert_eq!(ty.signature, "Pair[i32, bool]");
    assert_eq!(ty.generics().map(<[_]>::len), Some(2));
    assert!(ty.is_struct());
}
