use rust_decimal::{Decimal, prelude::ToPrimitive};
use serde::{Serialize, Serializer, ser::Error as _};
use std::fmt::{self, Display, Write};
use time::{
    Date, OffsetDateTime, PrimitiveDateTime, Time,
    error::Format,
    format_description::BorrowedFormatItem,
    macros::format_description,
};

const DATE_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");
const TIME_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[hour]:[minute]:[second].[subsecond]");
const TIMESTAMP_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond]");
const ZONED_FORMAT: &[BorrowedFormatItem<'static>] = format_description!(
    "[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond][offset_hour sign:mandatory]:[offset_minute]"
);
// Offsets with a seconds part cannot be written with hours and minutes only
const ZONED_SECONDS_FORMAT: &[BorrowedFormatItem<'static>] = format_description!(
    "[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond][offset_hour sign:mandatory]:[offset_minute]:[offset_second]"
);

/// A parameter value. The variant decides how the value is encoded, the
/// [`crate::DataType`] bound next to it decides how the engine interprets it.
#[derive(Default, Debug, Clone, PartialEq)]
pub enum Value {
    #[default]
    Null,
    Boolean(bool),
    Byte(i8),
    Short(i16),
    Integer(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    Decimal(Decimal),
    Varchar(String),
    Blob(Box<[u8]>),
    Date(Date),
    Time(Time),
    Timestamp(PrimitiveDateTime),
    TimestampWithTimezone(OffsetDateTime),
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Text form of the temporal variants, `None` for the others.
    fn format_temporal(&self) -> Option<Result<String, Format>> {
        Some(match self {
            Value::Date(v) => v.format(DATE_FORMAT),
            Value::Time(v) => v.format(TIME_FORMAT),
            Value::Timestamp(v) => v.format(TIMESTAMP_FORMAT),
            Value::TimestampWithTimezone(v) => v.format(zoned_format(v)),
            _ => return None,
        })
    }
}

fn zoned_format(value: &OffsetDateTime) -> &'static [BorrowedFormatItem<'static>] {
    if value.offset().seconds_past_minute() == 0 {
        ZONED_FORMAT
    } else {
        ZONED_SECONDS_FORMAT
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Null => serializer.serialize_none(),
            Value::Boolean(v) => serializer.serialize_bool(*v),
            Value::Byte(v) => serializer.serialize_i8(*v),
            Value::Short(v) => serializer.serialize_i16(*v),
            Value::Integer(v) => serializer.serialize_i32(*v),
            Value::Long(v) => serializer.serialize_i64(*v),
            Value::Float(v) if !v.is_finite() => Err(S::Error::custom(format!(
                "Cannot serialize the non finite FLOAT value `{}`",
                v
            ))),
            Value::Float(v) => serializer.serialize_f32(*v),
            Value::Double(v) if !v.is_finite() => Err(S::Error::custom(format!(
                "Cannot serialize the non finite DOUBLE value `{}`",
                v
            ))),
            Value::Double(v) => serializer.serialize_f64(*v),
            Value::Decimal(v) => serializer.serialize_f64(v.to_f64().ok_or_else(|| {
                S::Error::custom(format!("Cannot convert the Decimal value `{}` to f64", v))
            })?),
            Value::Varchar(v) => serializer.serialize_str(v),
            Value::Blob(v) => serializer.serialize_str(&hex::encode(v)),
            Value::Date(..)
            | Value::Time(..)
            | Value::Timestamp(..)
            | Value::TimestampWithTimezone(..) => match self.format_temporal() {
                Some(Ok(v)) => serializer.serialize_str(&v),
                Some(Err(e)) => Err(S::Error::custom(e)),
                None => serializer.serialize_none(),
            },
        }
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("null"),
            Value::Boolean(v) => write!(f, "{v}"),
            Value::Byte(v) => write!(f, "{v}"),
            Value::Short(v) => write!(f, "{v}"),
            Value::Integer(v) => write!(f, "{v}"),
            Value::Long(v) => write!(f, "{v}"),
            Value::Float(v) => write!(f, "{v}"),
            Value::Double(v) => write!(f, "{v}"),
            Value::Decimal(v) => write!(f, "{v}"),
            Value::Varchar(v) => write!(f, "'{}'", v.replace('\'', "''")),
            Value::Blob(v) => {
                f.write_str("X'")?;
                for b in v.iter() {
                    write!(f, "{:02X}", b)?;
                }
                f.write_char('\'')
            }
            Value::Date(..)
            | Value::Time(..)
            | Value::Timestamp(..)
            | Value::TimestampWithTimezone(..) => match self.format_temporal() {
                Some(Ok(v)) => write!(f, "'{v}'"),
                _ => write!(f, "{self:?}"),
            },
        }
    }
}
