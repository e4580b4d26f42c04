//! Structural type compatibility.

use super::descriptor::TypeDescriptor;

/// Decides whether two types may meet in an operation or assignment.
pub trait TypeCompatibility {
    /// - `ignore_any`: `any` on either side is not a wildcard
    /// - `allow_assign`: accept assignment conversions such as any pointer to
    ///   `voidptr`
    fn compatible(
        &self,
        left: &TypeDescriptor,
        right: &TypeDescriptor,
        ignore_any: bool,
        allow_assign: bool,
    ) -> bool;
}

/// Types are compatible when their resolved category and signature match.
///
/// `nil` meets any nullable type. Tuples compare element-wise.
#[derive(Clone, Copy, Debug, Default)]
pub struct StructuralCompatibility;

impl TypeCompatibility for StructuralCompatibility {
    fn compatible(
        &self,
        left: &TypeDescriptor,
        right: &TypeDescriptor,
        ignore_any: bool,
        allow_assign: bool,
    ) -> bool {
        let left = left.resolve_alias();
        let right = right.resolve_alias();

        if !ignore_any && (left.is_any() || right.is_any()) {
            return true;
        }

        if left.is_nil() {
            return is_nullable(&right);
        }
        if right.is_nil() {
            return is_nullable(&left);
        }

        if allow_assign
            && ((left.is_voidptr() && right.is_pointer()) || (right.is_voidptr() && left.is_pointer()))
        {
            return true;
        }

        if left.multi || right.multi {
            return match (left.tuple_elements(), right.tuple_elements()) {
                (Some(l), Some(r)) => {
                    left.pointers() == right.pointers()
                        && l.len() == r.len()
                        && l.iter()
                            .zip(r)
                            .all(|(a, b)| self.compatible(a, b, ignore_any, allow_assign))
                }
                _ => false,
            };
        }

        left.category == right.category && left.signature == right.signature
    }
}

fn is_nullable(ty: &TypeDescriptor) -> bool {
    ty.is_nil()
        || ty.is_pointer()
        || ty.is_slice()
        || ty.is_map()
        || ty.is_func()
        || ty.is_trait()
        || ty.is_any()
}
