use jane_core::{TypeCategory, bits};

/// Compile-time payload of a constant expression.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum Constant {
    Bool(bool),
    Str(String),
    Float(f64),
    Int(i64),
    UInt(u64),
}

impl Constant {
    /// Numeric payload as `f64`.
    pub fn as_f64(&self) -> Option<f64> {
        match *self {
            Self::Float(x) => Some(x),
            Self::Int(x) => Some(x as f64),
            Self::UInt(x) => Some(x as f64),
            Self::Bool(_) | Self::Str(_) => None,
        }
    }

    /// Numeric payload as `i64`. Floats truncate and saturate, unsigned
    /// values wrap.
    pub fn as_i64(&self) -> Option<i64> {
        match *self {
            Self::Float(x) => Some(x as i64),
            Self::Int(x) => Some(x),
            Self::UInt(x) => Some(x as i64),
            Self::Bool(_) | Self::Str(_) => None,
        }
    }

    /// Numeric payload as `u64`. Floats truncate and saturate, signed
    /// values wrap.
    pub fn as_u64(&self) -> Option<u64> {
        match *self {
            Self::Float(x) => Some(x as u64),
            Self::Int(x) => Some(x as u64),
            Self::UInt(x) => Some(x),
            Self::Bool(_) | Self::Str(_) => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match *self {
            Self::Bool(b) => Some(b),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Zero in the representation of `category`.
    pub fn zero_for(category: TypeCategory) -> Self {
        if category.is_float() {
            Self::Float(0.0)
        } else if category.is_unsigned_integer() {
            Self::UInt(0)
        } else {
            Self::Int(0)
        }
    }

    /// Float payload that converts to `i64` without losing anything.
    pub fn exact_i64(&self) -> Option<i64> {
        match *self {
            Self::Float(x) if x.fract() == 0.0 && x >= i64::MIN as f64 && x < i64::MAX as f64 => {
                Some(x as i64)
            }
            Self::Int(x) => Some(x),
            Self::UInt(x) => i64::try_from(x).ok(),
            _ => None,
        }
    }

    /// Float payload that converts to `u64` without losing anything.
    pub fn exact_u64(&self) -> Option<u64> {
        match *self {
            Self::Float(x) if x.fract() == 0.0 && x >= 0.0 && x < u64::MAX as f64 => {
                Some(x as u64)
            }
            Self::Int(x) => u64::try_from(x).ok(),
            Self::UInt(x) => Some(x),
            _ => None,
        }
    }

    /// Narrowest category that holds this payload exactly.
    ///
    /// `None` for booleans and strings, whose category never narrows.
    pub fn minimal_category(&self) -> Option<TypeCategory> {
        match *self {
            Self::Int(x) => Some(bits::minimal_signed(x)),
            Self::UInt(x) => Some(bits::minimal_unsigned(x)),
            Self::Float(x) => Some(bits::minimal_float(x)),
            Self::Bool(_) | Self::Str(_) => None,
        }
    }
}

impl std::fmt::Display for Constant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{b}"),
            Self::Str(s) => write!(f, "{s:?}"),
            Self::Float(x) => write!(f, "{x:?}"),
            Self::Int(x) => write!(f, "{x}"),
            Self::UInt(x) => write!(f, "{x}"),
        }
    }
}
