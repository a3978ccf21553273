//! Per-type coercion of raw strings into native field values.

use std::any::Any;
use std::fmt;

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};

use crate::schema::{ElemKind, FieldKind, FloatWidth, IntWidth};

const DATE_LAYOUT: &str = "%Y-%m-%d";
const DATE_TIME_LAYOUT: &str = "%Y-%m-%d %H:%M:%S";
// `9` stands for one ASCII digit.
const DATE_SHAPE: &str = "9999-99-99";
const DATE_TIME_SHAPE: &str = "9999-99-99 99:99:99";

/// Why a raw string could not become a field value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoerceError {
    /// Unparsable for the declared type.
    Format(String),
    /// Parsed, but does not fit the declared width.
    Range(String),
}

impl fmt::Display for CoerceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoerceError::Format(msg) | CoerceError::Range(msg) => f.write_str(msg),
        }
    }
}

/// **FIELD**
///
/// A leaf value the binder can assign from a raw string.
pub trait Field: Any + fmt::Debug {
    /// Kind declared by the Rust type, used when building schemas.
    fn declared_kind() -> FieldKind
    where
        Self: Sized;

    fn kind(&self) -> FieldKind;

    /// Replace the value with `input` coerced to this type.
    fn assign(&mut self, input: &str) -> Result<(), CoerceError>;

    fn as_any(&self) -> &dyn Any;
}

impl dyn Field {
    /// Current value as `T`, if the field holds a `T`.
    pub fn downcast_ref<T: Field>(&self) -> Option<&T> {
        self.as_any().downcast_ref::<T>()
    }
}

// ================================================================================================
// SCALAR PARSERS
// ================================================================================================

/// Base-10 signed parse into `i64`, then narrowed to the target width.
pub fn parse_signed<T: TryFrom<i64>>(input: &str) -> Result<T, CoerceError> {
    let value: i64 = input
        .parse()
        .map_err(|e| CoerceError::Format(format!("must be an integer ({})", e)))?;
    T::try_from(value).map_err(|_| CoerceError::Range(format!("value {} is out of range", value)))
}

/// Base-10 unsigned parse into `u64`, then narrowed to the target width.
pub fn parse_unsigned<T: TryFrom<u64>>(input: &str) -> Result<T, CoerceError> {
    if input.starts_with('+') {
        return Err(CoerceError::Format(
            "must be an unsigned integer (sign not allowed)".to_string(),
        ));
    }
    let value: u64 = input
        .parse()
        .map_err(|e| CoerceError::Format(format!("must be an unsigned integer ({})", e)))?;
    T::try_from(value).map_err(|_| CoerceError::Range(format!("value {} is out of range", value)))
}

pub fn parse_f64(input: &str) -> Result<f64, CoerceError> {
    input
        .parse()
        .map_err(|e| CoerceError::Format(format!("must be a float ({})", e)))
}

pub fn parse_f32(input: &str) -> Result<f32, CoerceError> {
    let value = parse_f64(input)?;
    if value.abs() > f64::from(f32::MAX) {
        return Err(CoerceError::Range(format!(
            "value {} exceeds the 32-bit float range",
            value
        )));
    }
    Ok(value as f32)
}

/// Integer input is epoch seconds; otherwise the length picks the layout:
/// 10 characters is a date, 19 a date-time, anything else is rejected.
pub fn parse_time(input: &str) -> Result<DateTime<Utc>, CoerceError> {
    if let Ok(secs) = input.parse::<i64>() {
        return Utc
            .timestamp_opt(secs, 0)
            .single()
            .ok_or_else(|| CoerceError::Range(format!("timestamp {} is out of range", secs)));
    }
    match input.len() {
        10 => {
            ensure_shape(input, DATE_SHAPE)?;
            let date = NaiveDate::parse_from_str(input, DATE_LAYOUT)
                .map_err(|e| CoerceError::Format(format!("must be a date ({})", e)))?;
            date.and_hms_opt(0, 0, 0)
                .map(|dt| dt.and_utc())
                .ok_or_else(|| CoerceError::Range(format!("date {} is out of range", input)))
        }
        19 => {
            ensure_shape(input, DATE_TIME_SHAPE)?;
            NaiveDateTime::parse_from_str(input, DATE_TIME_LAYOUT)
                .map(|dt| dt.and_utc())
                .map_err(|e| CoerceError::Format(format!("must be a date-time ({})", e)))
        }
        _ => Err(CoerceError::Format(
            "must be a timestamp, YYYY-MM-DD or YYYY-MM-DD HH:MM:SS".to_string(),
        )),
    }
}

/// Every `9` in `shape` must be an ASCII digit in `input`; other bytes match
/// exactly. chrono alone accepts space-padded numbers.
fn ensure_shape(input: &str, shape: &str) -> Result<(), CoerceError> {
    let matches = input.len() == shape.len()
        && input.bytes().zip(shape.bytes()).all(|(b, s)| match s {
            b'9' => b.is_ascii_digit(),
            _ => b == s,
        });
    if !matches {
        return Err(CoerceError::Format(format!("must match the layout {}", shape)));
    }
    Ok(())
}

/// Element type of a list field.
pub trait ListElem: Sized + fmt::Debug + 'static {
    const KIND: ElemKind;

    fn parse_elem(input: &str) -> Result<Self, CoerceError>;
}

// ================================================================================================
// FIELD IMPLEMENTATIONS
// ================================================================================================

macro_rules! scalar_field {
    ($($ty:ty => $kind:expr, $parse:expr;)*) => {
        $(
            impl Field for $ty {
                fn declared_kind() -> FieldKind {
                    $kind
                }

                fn kind(&self) -> FieldKind {
                    $kind
                }

                fn assign(&mut self, input: &str) -> Result<(), CoerceError> {
                    *self = $parse(input)?;
                    Ok(())
                }

                fn as_any(&self) -> &dyn Any {
                    self
                }
            }
        )*
    };
}

scalar_field! {
    i8 => FieldKind::Int(IntWidth::W8), parse_signed::<i8>;
    i16 => FieldKind::Int(IntWidth::W16), parse_signed::<i16>;
    i32 => FieldKind::Int(IntWidth::W32), parse_signed::<i32>;
    i64 => FieldKind::Int(IntWidth::W64), parse_signed::<i64>;
    isize => FieldKind::Int(IntWidth::Native), parse_signed::<isize>;
    u8 => FieldKind::Uint(IntWidth::W8), parse_unsigned::<u8>;
    u16 => FieldKind::Uint(IntWidth::W16), parse_unsigned::<u16>;
    u32 => FieldKind::Uint(IntWidth::W32), parse_unsigned::<u32>;
    u64 => FieldKind::Uint(IntWidth::W64), parse_unsigned::<u64>;
    usize => FieldKind::Uint(IntWidth::Native), parse_unsigned::<usize>;
    f32 => FieldKind::Float(FloatWidth::F32), parse_f32;
    f64 => FieldKind::Float(FloatWidth::F64), parse_f64;
    DateTime<Utc> => FieldKind::Time, parse_time;
}

impl Field for String {
    fn declared_kind() -> FieldKind {
        FieldKind::Str
    }

    fn kind(&self) -> FieldKind {
        FieldKind::Str
    }

    fn assign(&mut self, input: &str) -> Result<(), CoerceError> {
        input.clone_into(self);
        Ok(())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl Field for bool {
    fn declared_kind() -> FieldKind {
        FieldKind::Bool
    }

    fn kind(&self) -> FieldKind {
        FieldKind::Bool
    }

    /// Any input sets `true` except the literals `"false"` and `"0"`.
    fn assign(&mut self, input: &str) -> Result<(), CoerceError> {
        *self = !(input.is_empty() || input == "false" || input == "0");
        Ok(())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

macro_rules! list_elem {
    ($($ty:ty => $kind:expr, $parse:expr;)*) => {
        $(
            impl ListElem for $ty {
                const KIND: ElemKind = $kind;

                fn parse_elem(input: &str) -> Result<Self, CoerceError> {
                    $parse(input)
                }
            }

            impl Field for Vec<$ty> {
                fn declared_kind() -> FieldKind {
                    FieldKind::List(<$ty as ListElem>::KIND)
                }

                fn kind(&self) -> FieldKind {
                    FieldKind::List(<$ty as ListElem>::KIND)
                }

                fn assign(&mut self, input: &str) -> Result<(), CoerceError> {
                    assign_list(self, input)
                }

                fn as_any(&self) -> &dyn Any {
                    self
                }
            }
        )*
    };
}

list_elem! {
    String => ElemKind::Str, |s: &str| -> Result<String, CoerceError> { Ok(s.to_string()) };
    i8 => ElemKind::Int(IntWidth::W8), parse_signed::<i8>;
    i16 => ElemKind::Int(IntWidth::W16), parse_signed::<i16>;
    i32 => ElemKind::Int(IntWidth::W32), parse_signed::<i32>;
    i64 => ElemKind::Int(IntWidth::W64), parse_signed::<i64>;
    isize => ElemKind::Int(IntWidth::Native), parse_signed::<isize>;
    u8 => ElemKind::Uint(IntWidth::W8), parse_unsigned::<u8>;
    u16 => ElemKind::Uint(IntWidth::W16), parse_unsigned::<u16>;
    u32 => ElemKind::Uint(IntWidth::W32), parse_unsigned::<u32>;
    u64 => ElemKind::Uint(IntWidth::W64), parse_unsigned::<u64>;
    usize => ElemKind::Uint(IntWidth::Native), parse_unsigned::<usize>;
    f32 => ElemKind::Float(FloatWidth::F32), parse_f32;
    f64 => ElemKind::Float(FloatWidth::F64), parse_f64;
}

/// Comma-split; the whole list fails on the first bad element and the
/// field keeps its previous contents.
fn assign_list<T: ListElem>(target: &mut Vec<T>, input: &str) -> Result<(), CoerceError> {
    if input.is_empty() {
        return Ok(());
    }
    let parsed = input
        .split(',')
        .map(T::parse_elem)
        .collect::<Result<Vec<T>, _>>()?;
    *target = parsed;
    Ok(())
}
