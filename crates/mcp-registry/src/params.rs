//! Parameter access for tool handlers

use serde::de::{self, DeserializeOwned, Unexpected};
use serde::{Deserialize, Deserializer};
use serde_json::{Map, Number, Value};

use crate::error::ToolError;

/// The string-keyed parameter object passed to a tool handler
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Params(Map<String, Value>);

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build parameters from an arbitrary JSON value.
    ///
    /// `null` is treated as an empty object. Any other non-object value is
    /// rejected with [`ToolError::InvalidParams`].
    pub fn from_value(value: Value) -> Result<Self, ToolError> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            Value::Null => Ok(Self::default()),
            other => Err(ToolError::invalid_params(format!(
                "expected an object, got {}",
                json_type_name(&other)
            ))),
        }
    }

    /// Deserialize into a per-tool argument struct.
    ///
    /// Missing required fields and type mismatches come back as
    /// [`ToolError::InvalidParams`] rather than defaulted values.
    pub fn parse<T: DeserializeOwned>(&self) -> Result<T, ToolError> {
        serde_json::from_value(Value::Object(self.0.clone()))
            .map_err(|e| ToolError::invalid_params(e.to_string()))
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: Value) {
        self.0.insert(key.into(), value);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }
}

impl From<Map<String, Value>> for Params {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

/// `deserialize_with` helper for integer fields advertised as `number`.
///
/// Accepts any JSON number with a whole non-negative value, so `2` and
/// `2.0` both parse; `2.5` and `-1` are rejected.
pub fn whole_number<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: TryFrom<u64>,
{
    from_number(Number::deserialize(deserializer)?)
}

/// [`whole_number`] for optional fields; `null` is `None`
pub fn optional_whole_number<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: TryFrom<u64>,
{
    Option::<Number>::deserialize(deserializer)?
        .map(from_number)
        .transpose()
}

fn from_number<T, E>(number: Number) -> Result<T, E>
where
    T: TryFrom<u64>,
    E: de::Error,
{
    let whole = number.as_u64().or_else(|| {
        number
            .as_f64()
            .filter(|f| f.fract() == 0.0 && *f >= 0.0 && *f < u64::MAX as f64)
            .map(|f| f as u64)
    });
    let Some(value) = whole else {
        let shown = number.to_string();
        return Err(E::invalid_value(
            Unexpected::Other(&shown),
            &"a non-negative whole number",
        ));
    };
    T::try_from(value)
        .map_err(|_| E::invalid_value(Unexpected::Unsigned(value), &"a smaller number"))
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
