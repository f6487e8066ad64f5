use crate::{Error, Result, SqlError, Value};
use std::{
    fmt::{self, Display},
    str::FromStr,
};

/// Data types understood by the remote engine, each one sent on the wire by its
/// canonical name (see [`DataType::name`]).
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataType {
    Null,
    Boolean,
    Byte,
    Short,
    Integer,
    Long,
    Double,
    Float,
    HalfFloat,
    ScaledFloat,
    /// Exact string, also the type of parameters not bound yet.
    #[default]
    Keyword,
    Text,
    Binary,
    Date,
    Time,
    Datetime,
    Ip,
}

impl DataType {
    pub const ALL: [DataType; 17] = [
        DataType::Null,
        DataType::Boolean,
        DataType::Byte,
        DataType::Short,
        DataType::Integer,
        DataType::Long,
        DataType::Double,
        DataType::Float,
        DataType::HalfFloat,
        DataType::ScaledFloat,
        DataType::Keyword,
        DataType::Text,
        DataType::Binary,
        DataType::Date,
        DataType::Time,
        DataType::Datetime,
        DataType::Ip,
    ];

    /// Canonical wire name.
    pub const fn name(&self) -> &'static str {
        match self {
            DataType::Null => "NULL",
            DataType::Boolean => "BOOLEAN",
            DataType::Byte => "BYTE",
            DataType::Short => "SHORT",
            DataType::Integer => "INTEGER",
            DataType::Long => "LONG",
            DataType::Double => "DOUBLE",
            DataType::Float => "FLOAT",
            DataType::HalfFloat => "HALF_FLOAT",
            DataType::ScaledFloat => "SCALED_FLOAT",
            DataType::Keyword => "KEYWORD",
            DataType::Text => "TEXT",
            DataType::Binary => "BINARY",
            DataType::Date => "DATE",
            DataType::Time => "TIME",
            DataType::Datetime => "DATETIME",
            DataType::Ip => "IP",
        }
    }

    /// The natural type of a value, used when binding without an explicit type.
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => DataType::Null,
            Value::Boolean(..) => DataType::Boolean,
            Value::Byte(..) => DataType::Byte,
            Value::Short(..) => DataType::Short,
            Value::Integer(..) => DataType::Integer,
            Value::Long(..) => DataType::Long,
            Value::Float(..) => DataType::Float,
            Value::Double(..) | Value::Decimal(..) => DataType::Double,
            Value::Varchar(..) => DataType::Keyword,
            Value::Blob(..) => DataType::Binary,
            Value::Date(..) => DataType::Date,
            Value::Time(..) => DataType::Time,
            Value::Timestamp(..) | Value::TimestampWithTimezone(..) => DataType::Datetime,
        }
    }
}

impl Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DataType {
    type Err = Error;
    fn from_str(value: &str) -> Result<Self> {
        let name = value.trim();
        DataType::ALL
            .into_iter()
            .find(|v| v.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| Error::new(SqlError::UnknownDataType(value.to_owned())))
    }
}
