//! Declared field types and the category queries asked of them.

use std::fmt;

/// Integer width. `Native` is the platform word (`isize` / `usize`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IntWidth {
    W8,
    W16,
    W32,
    W64,
    Native,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FloatWidth {
    F32,
    F64,
}

/// Element type of a list field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElemKind {
    Str,
    Int(IntWidth),
    Uint(IntWidth),
    Float(FloatWidth),
}

/// Declared type of a record field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    Int(IntWidth),
    Uint(IntWidth),
    Float(FloatWidth),
    Str,
    Bool,
    /// Atomic timestamp leaf; never recursed into.
    Time,
    List(ElemKind),
    /// Inline-nested record whose fields join the parent's traversal.
    Nested,
    /// Anything else. Binding leaves it untouched.
    Other,
}

impl FieldKind {
    /// Signed or unsigned integer of any width.
    pub fn is_integer(self) -> bool {
        matches!(self, FieldKind::Int(_) | FieldKind::Uint(_))
    }

    pub fn is_unsigned(self) -> bool {
        matches!(self, FieldKind::Uint(_))
    }

    pub fn is_float(self) -> bool {
        matches!(self, FieldKind::Float(_))
    }

    pub fn is_string(self) -> bool {
        self == FieldKind::Str
    }

    pub fn is_bool(self) -> bool {
        self == FieldKind::Bool
    }

    pub fn is_temporal(self) -> bool {
        self == FieldKind::Time
    }

    pub fn is_list(self) -> bool {
        matches!(self, FieldKind::List(_))
    }

    pub fn is_nested(self) -> bool {
        self == FieldKind::Nested
    }

    /// Element type when this is a list.
    pub fn elem(self) -> Option<ElemKind> {
        match self {
            FieldKind::List(elem) => Some(elem),
            _ => None,
        }
    }
}

impl fmt::Display for IntWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IntWidth::W8 => write!(f, "8"),
            IntWidth::W16 => write!(f, "16"),
            IntWidth::W32 => write!(f, "32"),
            IntWidth::W64 => write!(f, "64"),
            IntWidth::Native => write!(f, "size"),
        }
    }
}

impl fmt::Display for ElemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ElemKind::Str => write!(f, "String"),
            ElemKind::Int(w) => write!(f, "i{}", w),
            ElemKind::Uint(w) => write!(f, "u{}", w),
            ElemKind::Float(FloatWidth::F32) => write!(f, "f32"),
            ElemKind::Float(FloatWidth::F64) => write!(f, "f64"),
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldKind::Int(w) => write!(f, "i{}", w),
            FieldKind::Uint(w) => write!(f, "u{}", w),
            FieldKind::Float(FloatWidth::F32) => write!(f, "f32"),
            FieldKind::Float(FloatWidth::F64) => write!(f, "f64"),
            FieldKind::Str => write!(f, "String"),
            FieldKind::Bool => write!(f, "bool"),
            FieldKind::Time => write!(f, "DateTime<Utc>"),
            FieldKind::List(elem) => write!(f, "Vec<{}>", elem),
            FieldKind::Nested => write!(f, "record"),
            FieldKind::Other => write!(f, "opaque"),
        }
    }
}
