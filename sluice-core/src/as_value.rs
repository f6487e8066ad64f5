use crate::{DataType, Value};
use rust_decimal::Decimal;
use std::{borrow::Cow, rc::Rc, sync::Arc};
use time::{Date, OffsetDateTime, PrimitiveDateTime, Time};
use uuid::Uuid;

/// Conversion from native Rust types into a parameter [`Value`] and the
/// [`DataType`] it is bound with when the caller does not pick one.
///
/// `Option<T>` binds `None` as [`Value::Null`] while still reporting the type
/// of `T`, this way a missing value keeps the type of the column it targets.
///
/// # Examples
/// ```rust
/// use sluice_core::{AsValue, DataType, Value};
/// assert_eq!(42i32.as_value(), Value::Integer(42));
/// assert_eq!(<Option<i32>>::data_type(), DataType::Integer);
/// assert_eq!(None::<i32>.as_value(), Value::Null);
/// ```
pub trait AsValue {
    /// Type used to bind this value when none is given explicitly.
    fn data_type() -> DataType;
    /// Convert this value into its owned [`Value`] representation.
    fn as_value(self) -> Value;
}

macro_rules! impl_as_value {
    ($source:ty, $destination:path, $data_type:expr $(,)?) => {
        impl AsValue for $source {
            fn data_type() -> DataType {
                $data_type
            }
            fn as_value(self) -> Value {
                $destination(self.into())
            }
        }
    };
}
impl_as_value!(bool, Value::Boolean, DataType::Boolean);
impl_as_value!(i8, Value::Byte, DataType::Byte);
impl_as_value!(i16, Value::Short, DataType::Short);
impl_as_value!(i32, Value::Integer, DataType::Integer);
impl_as_value!(i64, Value::Long, DataType::Long);
impl_as_value!(u8, Value::Short, DataType::Short);
impl_as_value!(u16, Value::Integer, DataType::Integer);
impl_as_value!(u32, Value::Long, DataType::Long);
impl_as_value!(f32, Value::Float, DataType::Float);
impl_as_value!(f64, Value::Double, DataType::Double);
impl_as_value!(Decimal, Value::Decimal, DataType::Double);
impl_as_value!(String, Value::Varchar, DataType::Keyword);
impl_as_value!(&str, Value::Varchar, DataType::Keyword);
impl_as_value!(Cow<'_, str>, Value::Varchar, DataType::Keyword);
impl_as_value!(Box<[u8]>, Value::Blob, DataType::Binary);
impl_as_value!(Vec<u8>, Value::Blob, DataType::Binary);
impl_as_value!(&[u8], Value::Blob, DataType::Binary);
impl_as_value!(Date, Value::Date, DataType::Date);
impl_as_value!(Time, Value::Time, DataType::Time);
impl_as_value!(PrimitiveDateTime, Value::Timestamp, DataType::Datetime);
impl_as_value!(OffsetDateTime, Value::TimestampWithTimezone, DataType::Datetime);

impl AsValue for Uuid {
    fn data_type() -> DataType {
        DataType::Keyword
    }
    fn as_value(self) -> Value {
        Value::Varchar(self.hyphenated().to_string())
    }
}

impl<T: AsValue> AsValue for Option<T> {
    fn data_type() -> DataType {
        T::data_type()
    }
    fn as_value(self) -> Value {
        match self {
            Some(v) => v.as_value(),
            None => Value::Null,
        }
    }
}

macro_rules! impl_as_value {
    ($wrapper:ident) => {
        impl<T: AsValue + Clone> AsValue for $wrapper<T> {
            fn data_type() -> DataType {
                T::data_type()
            }
            fn as_value(self) -> Value {
                $wrapper::unwrap_or_clone(self).as_value()
            }
        }
    };
}
impl_as_value!(Rc);
impl_as_value!(Arc);

impl<T: AsValue> AsValue for Box<T> {
    fn data_type() -> DataType {
        T::data_type()
    }
    fn as_value(self) -> Value {
        (*self).as_value()
    }
}

impl<T: AsValue> From<T> for Value {
    fn from(value: T) -> Self {
        value.as_value()
    }
}
