//! Base type categories.
//!
//! A category is the discriminant of a type descriptor. Shaped types
//! (pointers, arrays, slices) carry the category of their innermost element;
//! the shape itself lives in the descriptor signature.

/// Width of the platform word, used to resolve `int`, `uint`, `intptr`
/// and `uintptr` to a fixed-width category.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub enum WordSize {
    W32,
    #[default]
    W64,
}

impl WordSize {
    pub const fn bits(self) -> u32 {
        match self {
            Self::W32 => 32,
            Self::W64 => 64,
        }
    }

    pub fn from_bits(bits: u32) -> Option<Self> {
        match bits {
            32 => Some(Self::W32),
            64 => Some(Self::W64),
            _ => None,
        }
    }
}

/// Base type category.
#[derive(
    Clone, Copy, PartialEq, Eq, Hash, Debug, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum TypeCategory {
    Void,
    I8,
    I16,
    I32,
    I64,
    U8,
    U16,
    U32,
    U64,
    Bool,
    Str,
    F32,
    F64,
    Any,
    /// Named type not yet resolved to a declaration.
    Id,
    Fn,
    Nil,
    Uint,
    Int,
    Map,
    Voidptr,
    Intptr,
    Uintptr,
    Enum,
    Struct,
    Trait,
}

impl TypeCategory {
    pub const ALL: [TypeCategory; 26] = [
        Self::Void,
        Self::I8,
        Self::I16,
        Self::I32,
        Self::I64,
        Self::U8,
        Self::U16,
        Self::U32,
        Self::U64,
        Self::Bool,
        Self::Str,
        Self::F32,
        Self::F64,
        Self::Any,
        Self::Id,
        Self::Fn,
        Self::Nil,
        Self::Uint,
        Self::Int,
        Self::Map,
        Self::Voidptr,
        Self::Intptr,
        Self::Uintptr,
        Self::Enum,
        Self::Struct,
        Self::Trait,
    ];

    /// Source spelling of the category.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Void => "void",
            Self::I8 => "i8",
            Self::I16 => "i16",
            Self::I32 => "i32",
            Self::I64 => "i64",
            Self::U8 => "u8",
            Self::U16 => "u16",
            Self::U32 => "u32",
            Self::U64 => "u64",
            Self::Bool => "bool",
            Self::Str => "str",
            Self::F32 => "f32",
            Self::F64 => "f64",
            Self::Any => "any",
            Self::Id => "id",
            Self::Fn => "fn",
            Self::Nil => "nil",
            Self::Uint => "uint",
            Self::Int => "int",
            Self::Map => "map",
            Self::Voidptr => "voidptr",
            Self::Intptr => "intptr",
            Self::Uintptr => "uintptr",
            Self::Enum => "enum",
            Self::Struct => "struct",
            Self::Trait => "trait",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.name() == name)
    }

    /// Canonical C++ spelling used when a scalar type is emitted.
    pub const fn cxx_spelling(self) -> &'static str {
        match self {
            Self::Void => "void",
            Self::Bool => "bool",
            Self::Nil => "std::nullptr_t",
            Self::I8 => "i8_jnt",
            Self::I16 => "i16_jnt",
            Self::I32 => "i32_jnt",
            Self::I64 => "i64_jnt",
            Self::U8 => "u8_jnt",
            Self::U16 => "u16_jnt",
            Self::U32 => "u32_jnt",
            Self::U64 => "u64_jnt",
            Self::Str => "str_jnt",
            Self::F32 => "f32_jnt",
            Self::F64 => "f64_jnt",
            Self::Any => "any_jnt",
            Self::Id => "id_jnt",
            Self::Fn => "func_jnt",
            Self::Uint => "uint_jnt",
            Self::Int => "int_jnt",
            Self::Map => "map_jnt",
            Self::Voidptr => "voidptr_jnt",
            Self::Intptr => "intptr_jnt",
            Self::Uintptr => "uintptr_jnt",
            Self::Enum => "enum_jnt",
            Self::Struct => "struct_jnt",
            Self::Trait => "trait_jnt",
        }
    }

    /// Resolve word-sized categories to their fixed-width counterpart.
    pub fn real(self, word: WordSize) -> Self {
        match (self, word) {
            (Self::Int | Self::Intptr, WordSize::W32) => Self::I32,
            (Self::Int | Self::Intptr, WordSize::W64) => Self::I64,
            (Self::Uint | Self::Uintptr, WordSize::W32) => Self::U32,
            (Self::Uint | Self::Uintptr, WordSize::W64) => Self::U64,
            _ => self,
        }
    }

    pub fn is_signed_integer(self) -> bool {
        matches!(
            self,
            Self::I8 | Self::I16 | Self::I32 | Self::I64 | Self::Int | Self::Intptr
        )
    }

    pub fn is_unsigned_integer(self) -> bool {
        matches!(
            self,
            Self::U8 | Self::U16 | Self::U32 | Self::U64 | Self::Uint | Self::Uintptr
        )
    }

    pub fn is_integer(self) -> bool {
        self.is_signed_integer() || self.is_unsigned_integer()
    }

    pub fn is_float(self) -> bool {
        matches!(self, Self::F32 | Self::F64)
    }

    pub fn is_numeric(self) -> bool {
        self.is_integer() || self.is_float()
    }

    /// Signed integers and floats.
    pub fn is_signed_numeric(self) -> bool {
        self.is_signed_integer() || self.is_float()
    }

    /// Bit width of a numeric category, `None` for everything else.
    pub fn bit_width(self, word: WordSize) -> Option<u32> {
        match self.real(word) {
            Self::I8 | Self::U8 => Some(8),
            Self::I16 | Self::U16 => Some(16),
            Self::I32 | Self::U32 | Self::F32 => Some(32),
            Self::I64 | Self::U64 | Self::F64 => Some(64),
            _ => None,
        }
    }

    /// Whether `self` has strictly greater precision rank than `other`.
    ///
    /// Ranks only order categories of the same family; floats outrank every
    /// integer. A signed and an unsigned integer are never ordered.
    pub fn rank_greater(self, other: Self, word: WordSize) -> bool {
        let other = other.real(word);
        match self.real(word) {
            Self::I16 => other == Self::I8,
            Self::I32 => matches!(other, Self::I8 | Self::I16),
            Self::I64 => matches!(other, Self::I8 | Self::I16 | Self::I32),
            Self::U16 => other == Self::U8,
            Self::U32 => matches!(other, Self::U8 | Self::U16),
            Self::U64 => matches!(other, Self::U8 | Self::U16 | Self::U32),
            Self::F32 => other.is_integer(),
            Self::F64 => other.is_integer() || other == Self::F32,
            _ => false,
        }
    }

    pub fn int_from_bits(bits: u32) -> Option<Self> {
        match bits {
            8 => Some(Self::I8),
            16 => Some(Self::I16),
            32 => Some(Self::I32),
            64 => Some(Self::I64),
            _ => None,
        }
    }

    pub fn uint_from_bits(bits: u32) -> Option<Self> {
        match bits {
            8 => Some(Self::U8),
            16 => Some(Self::U16),
            32 => Some(Self::U32),
            64 => Some(Self::U64),
            _ => None,
        }
    }

    pub fn float_from_bits(bits: u32) -> Option<Self> {
        match bits {
            32 => Some(Self::F32),
            64 => Some(Self::F64),
            _ => None,
        }
    }
}

impl std::fmt::Display for TypeCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
