//! Typed property values and literal type detection.

use std::fmt;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A typed value carried by a recognized sentence.
///
/// Raw literals arrive as text; [`Value::detect`] classifies them into the
/// narrowest matching type so downstream consumers get `42` as an integer
/// and `2021-12-31` as a date rather than as strings.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Value {
    /// Plain text.
    String(String),
    /// 64-bit signed integer.
    Integer(i64),
    /// 64-bit floating point.
    Double(f64),
    /// Calendar date, `YYYY-MM-DD`.
    Date(NaiveDate),
    /// Time of day, `HH:MM` or `HH:MM:SS`.
    Time(NaiveTime),
    /// Combined date and time.
    DateTime(NaiveDateTime),
    /// A list of values.
    List(Vec<Value>),
}

impl Value {
    /// Classifies a raw literal into the narrowest matching type.
    ///
    /// Tries integer, then decimal, then date, time, and datetime formats;
    /// anything else stays a string. Number detection is strict (optional
    /// sign, digits, optional single decimal point) so text like `inf` or
    /// `1e5` stays textual.
    #[must_use]
    pub fn detect(raw: &str) -> Self {
        if looks_like_integer(raw) {
            if let Ok(n) = raw.parse::<i64>() {
                return Self::Integer(n);
            }
            // Digit runs beyond the i64 range degrade to a double.
            if let Ok(n) = raw.parse::<f64>() {
                return Self::Double(n);
            }
        }
        if looks_like_double(raw) {
            if let Ok(n) = raw.parse::<f64>() {
                return Self::Double(n);
            }
        }
        if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
            return Self::Date(date);
        }
        if let Ok(time) = NaiveTime::parse_from_str(raw, "%H:%M:%S") {
            return Self::Time(time);
        }
        if let Ok(time) = NaiveTime::parse_from_str(raw, "%H:%M") {
            return Self::Time(time);
        }
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S") {
            return Self::DateTime(dt);
        }
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M") {
            return Self::DateTime(dt);
        }
        Self::String(raw.to_string())
    }

    /// Returns the lowercase name of this value's type.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::String(_) => "string",
            Self::Integer(_) => "integer",
            Self::Double(_) => "double",
            Self::Date(_) => "date",
            Self::Time(_) => "time",
            Self::DateTime(_) => "datetime",
            Self::List(_) => "list",
        }
    }

    /// Attempts to extract a string reference.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Attempts to extract an integer value.
    #[must_use]
    pub const fn as_integer(&self) -> Option<i64> {
        match self {
            Self::Integer(n) => Some(*n),
            _ => None,
        }
    }

    /// Attempts to extract a floating-point value (converts integers).
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn as_double(&self) -> Option<f64> {
        match self {
            Self::Integer(n) => Some(*n as f64),
            Self::Double(n) => Some(*n),
            _ => None,
        }
    }

    /// Attempts to extract a list of values.
    #[must_use]
    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String(s) => f.write_str(s),
            Self::Integer(n) => write!(f, "{n}"),
            Self::Double(n) => write!(f, "{n}"),
            Self::Date(date) => write!(f, "{}", date.format("%Y-%m-%d")),
            Self::Time(time) => write!(f, "{}", time.format("%H:%M:%S")),
            Self::DateTime(dt) => write!(f, "{}", dt.format("%Y-%m-%d %H:%M:%S")),
            Self::List(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
        }
    }
}

fn looks_like_integer(raw: &str) -> bool {
    let digits = raw.strip_prefix('-').unwrap_or(raw);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

fn looks_like_double(raw: &str) -> bool {
    let body = raw.strip_prefix('-').unwrap_or(raw);
    let Some((whole, frac)) = body.split_once('.') else {
        return false;
    };
    !whole.is_empty()
        && !frac.is_empty()
        && whole.bytes().all(|b| b.is_ascii_digit())
        && frac.bytes().all(|b| b.is_ascii_digit())
}

/// What a recognized property value refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PropertyReference {
    /// A plain literal value.
    #[default]
    None,
    /// A reference to a named constant.
    Constant,
    /// A reference to a UI element.
    UiElement,
    /// A reference to database content via a query.
    DatabaseAndTable,
    /// A list of literal values.
    List,
}

/// A property value together with what it refers to.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PropertyValue {
    /// What the value refers to.
    pub reference: PropertyReference,
    /// The typed value itself.
    pub value: Value,
}

impl PropertyValue {
    /// Creates a property value with an explicit reference kind.
    #[must_use]
    pub const fn new(reference: PropertyReference, value: Value) -> Self {
        Self { reference, value }
    }

    /// Creates a plain literal property value.
    #[must_use]
    pub const fn plain(value: Value) -> Self {
        Self::new(PropertyReference::None, value)
    }
}
