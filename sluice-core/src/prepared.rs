use crate::{
    AsValue, DataType, Error, PrepareOptions, Result, SqlError, TypedParamValue, Value,
    separated_by, truncate_long,
};
use std::fmt::{self, Display, Write};

/// One bound parameter.
#[derive(Default, Debug, Clone, PartialEq)]
pub struct ParamSlot {
    pub value: Value,
    pub data_type: DataType,
}

impl ParamSlot {
    pub fn new(value: Value, data_type: DataType) -> Self {
        Self { value, data_type }
    }
    /// True if the slot was never bound or was cleared.
    pub fn is_unset(&self) -> bool {
        self.value.is_null() && self.data_type == DataType::default()
    }
}

/// A client side prepared statement: the SQL text and one typed slot for each
/// `?` placeholder in it.
///
/// The number of slots is decided once, when the query is prepared, by
/// scanning the (rewritten) SQL. Slots are addressed from 1 and are never
/// missing: a parameter that was not bound is sent as `NULL` with the
/// [`DataType::Keyword`] type.
///
/// # Binding Semantics
/// * `set_param` stores a value together with an explicit type.
/// * `bind` stores a value using the type provided by [`AsValue`].
/// * `bind_value` stores a [`Value`] using the type inferred from its variant.
/// * `clear_params` resets every slot, the number of slots never changes.
///
/// Methods return `&mut Self` for fluent chaining:
/// ```rust
/// use sluice_core::PreparedQuery;
/// let mut query = PreparedQuery::prepare("SELECT * FROM emp WHERE id = ? AND name = ?").unwrap();
/// query.bind(1, 42)?.bind(2, "Joe")?;
/// assert_eq!(query.params()[0].type_name, "INTEGER");
/// # Ok::<(), sluice_core::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct PreparedQuery {
    sql: String,
    offsets: Box<[usize]>,
    params: Box<[ParamSlot]>,
}

impl PreparedQuery {
    /// Prepare `sql` with the default options: default rewrites and strict scanning.
    pub fn prepare(sql: impl AsRef<str>) -> Result<Self> {
        Self::prepare_with(sql, &PrepareOptions::default())
    }

    pub fn prepare_with(sql: impl AsRef<str>, options: &PrepareOptions) -> Result<Self> {
        let sql = options.rewrites.apply(sql.as_ref()).into_owned();
        let offsets = crate::placeholder_offsets(&sql, options.scan_policy)?;
        log::trace!(
            "Prepared query with {} parameters: {}",
            offsets.len(),
            truncate_long!(sql)
        );
        let params = vec![ParamSlot::default(); offsets.len()].into_boxed_slice();
        Ok(Self {
            sql,
            offsets: offsets.into_boxed_slice(),
            params,
        })
    }

    fn index(&self, position: i64) -> Result<usize> {
        if position < 1 || position as u64 > self.params.len() as u64 {
            let error = Error::new(SqlError::InvalidParameterIndex(position));
            log::error!("{:#}", error);
            return Err(error);
        }
        Ok(position as usize - 1)
    }

    /// Copy of the slot at `position` (from 1).
    pub fn get_param(&self, position: i64) -> Result<ParamSlot> {
        let index = self.index(position)?;
        Ok(self.params[index].clone())
    }

    /// Overwrite both value and type of the slot at `position` (from 1).
    pub fn set_param(
        &mut self,
        position: i64,
        value: Value,
        data_type: DataType,
    ) -> Result<&mut Self> {
        let index = self.index(position)?;
        self.params[index] = ParamSlot::new(value, data_type);
        Ok(self)
    }

    /// Bind `value` at `position` (from 1) with the type given by [`AsValue::data_type`].
    pub fn bind<V: AsValue>(&mut self, position: i64, value: V) -> Result<&mut Self> {
        self.set_param(position, value.as_value(), V::data_type())
    }

    /// Bind an already built [`Value`] at `position` (from 1) with the type inferred by [`DataType::of`].
    pub fn bind_value(&mut self, position: i64, value: Value) -> Result<&mut Self> {
        let data_type = DataType::of(&value);
        self.set_param(position, value, data_type)
    }

    /// Reset every slot to `NULL` with the default type.
    pub fn clear_params(&mut self) -> &mut Self {
        self.params.fill(ParamSlot::default());
        self
    }

    pub fn param_count(&self) -> usize {
        self.params.len()
    }

    /// The statement text after the rewrites.
    pub fn sql(&self) -> &str {
        &self.sql
    }

    /// Byte offset in [`PreparedQuery::sql`] of each placeholder, position `k` at index `k - 1`.
    pub fn placeholder_offsets(&self) -> &[usize] {
        &self.offsets
    }

    /// Positions (from 1) of the slots that were never bound or were cleared.
    pub fn unbound_positions(&self) -> Vec<usize> {
        self.params
            .iter()
            .enumerate()
            .filter(|(_, v)| v.is_unset())
            .map(|(i, _)| i + 1)
            .collect()
    }

    /// The parameters in the shape sent to the engine, ordered by position.
    pub fn params(&self) -> Vec<TypedParamValue> {
        self.params.iter().map(TypedParamValue::from).collect()
    }
}

impl Display for PreparedQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = String::with_capacity(self.params.len() * 16 + 2);
        out.push('[');
        separated_by(
            &mut out,
            self.params.iter(),
            |out, v| {
                let _ = write!(out, "{} {}", v.data_type, v.value);
            },
            ", ",
        );
        out.push(']');
        write!(f, "{} {}", truncate_long!(self.sql), out)
    }
}
