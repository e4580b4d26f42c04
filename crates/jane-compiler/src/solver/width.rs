use jane_core::TypeCategory;

/// Category of a folded shift, picked from the shift amount.
pub fn shift_width(amount: u64) -> TypeCategory {
    match amount {
        0..=6 => TypeCategory::I8,
        7 => TypeCategory::U8,
        8..=14 => TypeCategory::I16,
        15 => TypeCategory::U16,
        16..=30 => TypeCategory::I32,
        31 => TypeCategory::U32,
        32..=62 => TypeCategory::I64,
        63 => TypeCategory::U64,
        64..=127 => TypeCategory::F32,
        _ => TypeCategory::F64,
    }
}
