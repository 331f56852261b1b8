//! Parameter schema descriptions
//!
//! Schemas are advisory metadata used for discovery. They are never enforced
//! by the registry; each handler interprets its own parameters.

use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

/// JSON type of a single parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyType {
    String,
    Number,
    Boolean,
}

/// Description of one named parameter
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Property {
    #[serde(rename = "type")]
    pub kind: PropertyType,
    pub description: String,
    #[serde(rename = "enum", skip_serializing_if = "Option::is_none")]
    pub allowed: Option<Vec<String>>,
}

impl Property {
    fn new(kind: PropertyType, description: impl Into<String>) -> Self {
        Self {
            kind,
            description: description.into(),
            allowed: None,
        }
    }

    pub fn string(description: impl Into<String>) -> Self {
        Self::new(PropertyType::String, description)
    }

    pub fn number(description: impl Into<String>) -> Self {
        Self::new(PropertyType::Number, description)
    }

    pub fn boolean(description: impl Into<String>) -> Self {
        Self::new(PropertyType::Boolean, description)
    }

    /// Restrict the property to a fixed set of values
    pub fn one_of<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allowed = Some(values.into_iter().map(Into::into).collect());
        self
    }
}

/// Object schema describing the parameters a tool accepts.
///
/// Properties keep their declaration order when serialized, so the
/// discovery output reads the same way the tool was declared.
///
/// ```
/// use mcp_registry::{ParameterSchema, Property};
///
/// let schema = ParameterSchema::object()
///     .property("title", Property::string("The title of the task"))
///     .required(["title"]);
/// assert_eq!(schema.required_names(), ["title"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParameterSchema {
    properties: Vec<(String, Property)>,
    required: Vec<String>,
}

impl ParameterSchema {
    /// Start an empty object schema
    pub fn object() -> Self {
        Self::default()
    }

    /// Add or replace a named property
    pub fn property(mut self, name: impl Into<String>, property: Property) -> Self {
        let name = name.into();
        match self.properties.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = property,
            None => self.properties.push((name, property)),
        }
        self
    }

    /// Mark properties as required
    pub fn required<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for name in names {
            let name = name.into();
            if !self.required.contains(&name) {
                self.required.push(name);
            }
        }
        self
    }

    /// Look up a property by name
    pub fn get(&self, name: &str) -> Option<&Property> {
        self.properties
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, p)| p)
    }

    /// Property names in declaration order
    pub fn property_names(&self) -> Vec<&str> {
        self.properties.iter().map(|(n, _)| n.as_str()).collect()
    }

    pub fn required_names(&self) -> &[String] {
        &self.required
    }
}

struct OrderedProperties<'a>(&'a [(String, Property)]);

impl Serialize for OrderedProperties<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (name, property) in self.0 {
            map.serialize_entry(name, property)?;
        }
        map.end()
    }
}

impl Serialize for ParameterSchema {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let len = if self.required.is_empty() { 2 } else { 3 };
        let mut map = serializer.serialize_map(Some(len))?;
        map.serialize_entry("type", "object")?;
        map.serialize_entry("properties", &OrderedProperties(&self.properties))?;
        if !self.required.is_empty() {
            map.serialize_entry("required", &self.required)?;
        }
        map.end()
    }
}
