use crate::{Context, ParamSlot, PreparedQuery, Result, Value, truncate_long};
use serde::Serialize;

/// A parameter as sent on the wire: the canonical type name and the raw value.
///
/// The position inside the parameters list is the binding key, the k-th element
/// binds to the k-th placeholder of the query.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TypedParamValue {
    #[serde(rename = "type")]
    pub type_name: &'static str,
    pub value: Value,
}

impl From<&ParamSlot> for TypedParamValue {
    fn from(slot: &ParamSlot) -> Self {
        Self {
            type_name: slot.data_type.name(),
            value: slot.value.clone(),
        }
    }
}

/// Body of the request executing a [`PreparedQuery`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QueryRequest {
    pub query: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub params: Vec<TypedParamValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fetch_size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_zone: Option<String>,
}

impl QueryRequest {
    pub fn from_prepared(query: &PreparedQuery) -> Self {
        Self {
            query: query.sql().to_owned(),
            params: query.params(),
            fetch_size: None,
            time_zone: None,
        }
    }
    pub fn with_fetch_size(mut self, fetch_size: u32) -> Self {
        self.fetch_size = Some(fetch_size);
        self
    }
    pub fn with_time_zone(mut self, time_zone: impl Into<String>) -> Self {
        self.time_zone = Some(time_zone.into());
        self
    }
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).with_context(|| {
            format!(
                "Could not serialize the request for the query:\n{}",
                truncate_long!(self.query)
            )
        })
    }
}

impl From<&PreparedQuery> for QueryRequest {
    fn from(query: &PreparedQuery) -> Self {
        Self::from_prepared(query)
    }
}
