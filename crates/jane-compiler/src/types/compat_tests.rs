use jane_core::TypeCategory;

use super::{StructuralCompatibility, TypeCompatibility, TypeDescriptor};

fn check(left: &TypeDescriptor, right: &TypeDescriptor, ignore_any: bool) -> bool {
    StructuralCompatibility.compatible(left, right, ignore_any, true)
}

fn scalar(category: TypeCategory) -> TypeDescriptor {
    TypeDescriptor::scalar(category)
}

#[test]
fn identical_types() {
    let ty = TypeDescriptor::pointer_to(scalar(TypeCategory::I32));
    assert!(check(&ty, &ty.clone(), true));
}

#[test]
fn different_signatures() {
    let a = TypeDescriptor::named(TypeCategory::Struct, "A");
    let b = TypeDescriptor::named(TypeCategory::Struct, "B");
    assert!(!check(&a, &b, true));

    let i = scalar(TypeCategory::I32);
    let u = scalar(TypeCategory::U32);
    assert!(!check(&i, &u, true));
}

#[test]
fn any_is_wildcard_unless_ignored() {
    let any = scalar(TypeCategory::Any);
    let s = scalar(TypeCategory::Str);
    assert!(check(&any, &s, false));
    assert!(!check(&any, &s, true));
}

#[test]
fn nil_meets_nullable_types() {
    let nil = TypeDescriptor::nil();
    let nullable = [
        TypeDescriptor::pointer_to(scalar(TypeCategory::I32)),
        TypeDescriptor::slice_of(scalar(TypeCategory::I32)),
        TypeDescriptor::map(scalar(TypeCategory::Str), scalar(TypeCategory::I32)),
        TypeDescriptor::named(TypeCategory::Trait, "Shape"),
        scalar(TypeCategory::Voidptr),
        nil.clone(),
    ];
    for ty in &nullable {
        assert!(check(&nil, ty, true), "{ty}");
        assert!(check(ty, &nil, true), "{ty}");
    }

    let not_nullable = [
        scalar(TypeCategory::I32),
        TypeDescriptor::array_of(scalar(TypeCategory::I32)),
        TypeDescriptor::named(TypeCategory::Struct, "Point"),
    ];
    for ty in &not_nullable {
        assert!(!check(&nil, ty, true), "{ty}");
    }
}

#[test]
fn voidptr_accepts_pointers_on_assign() {
    let voidptr = scalar(TypeCategory::Voidptr);
    let ptr = TypeDescriptor::pointer_to(scalar(TypeCategory::I32));
    assert!(StructuralCompatibility.compatible(&voidptr, &ptr, true, true));
    assert!(StructuralCompatibility.compatible(&ptr, &voidptr, true, true));
    assert!(!StructuralCompatibility.compatible(&voidptr, &ptr, true, false));
}

#[test]
fn tuples_compare_elementwise() {
    let a = TypeDescriptor::tuple(vec![scalar(TypeCategory::I32), TypeDescriptor::bool()]);
    let b = TypeDescriptor::tuple(vec![scalar(TypeCategory::I32), TypeDescriptor::bool()]);
    let c = TypeDescriptor::tuple(vec![scalar(TypeCategory::I32)]);
    assert!(check(&a, &b, true));
    assert!(!check(&a, &c, true));
    assert!(!check(&a, &scalar(TypeCategory::I32), true));
}

#[test]
fn aliases_compare_by_target() {
    let alias = TypeDescriptor::alias("Count", scalar(TypeCategory::U64));
    assert!(check(&alias, &scalar(TypeCategory::U64), true));
    assert!(!check(&alias, &scalar(TypeCategory::U32), true));
}
