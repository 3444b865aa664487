//! Definition formatter — `{jpeg: {size: ...}}` → `jpeg:size=128x128`.

use serde_json::{Map, Value};

use crate::args::error::BuildError;
use crate::args::geometry::Geometry;
use crate::args::value::value_to_string;

/// Subkeys whose values are geometries.
const GEOMETRY_SUBKEYS: &[&str] = &["size", "offset"];

/// Ordered set of `-define` entries.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Definitions {
    /// Namespace → scalar or nested subkey mapping, in insertion order.
    Map(Map<String, Value>),
    /// A single pre-formatted definition such as `"jpeg:size=64x64"`.
    Raw(String),
    #[default]
    Empty,
}

impl Definitions {
    pub fn new() -> Self {
        Definitions::Map(Map::new())
    }

    /// Objects become mappings; any other value is a raw definition.
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::Object(map) => Definitions::Map(map.clone()),
            Value::Null => Definitions::Empty,
            other => Definitions::Raw(value_to_string(other)),
        }
    }

    /// Set `key=value`.
    pub fn set(self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        let mut map = self.into_map();
        map.insert(key.into(), value.into());
        Definitions::Map(map)
    }

    /// Set `namespace:subkey=value`, keeping earlier subkeys of the namespace.
    pub fn set_sub(
        self,
        namespace: impl Into<String>,
        subkey: impl Into<String>,
        value: impl Into<Value>,
    ) -> Self {
        let mut map = self.into_map();
        let entry = map
            .entry(namespace.into())
            .or_insert_with(|| Value::Object(Map::new()));
        if !entry.is_object() {
            *entry = Value::Object(Map::new());
        }
        if let Value::Object(sub) = entry {
            sub.insert(subkey.into(), value.into());
        }
        Definitions::Map(map)
    }

    fn into_map(self) -> Map<String, Value> {
        match self {
            Definitions::Map(map) => map,
            Definitions::Raw(_) | Definitions::Empty => Map::new(),
        }
    }

    /// Flatten into `key:subkey=value` / `key=value` tokens.
    pub fn format(&self) -> Result<Vec<String>, BuildError> {
        let map = match self {
            Definitions::Map(map) => map,
            Definitions::Raw(raw) => return Ok(vec![raw.clone()]),
            Definitions::Empty => return Ok(Vec::new()),
        };

        let mut out = Vec::with_capacity(map.len());
        for (key, value) in map {
            match value {
                Value::Object(sub) => {
                    for (subkey, subvalue) in sub {
                        let rendered = if GEOMETRY_SUBKEYS.contains(&subkey.as_str()) {
                            Geometry::from_value(subvalue).format()?
                        } else {
                            value_to_string(subvalue)
                        };
                        out.push(format!("{}:{}={}", key, subkey, rendered));
                    }
                }
                scalar => out.push(format!("{}={}", key, value_to_string(scalar))),
            }
        }
        Ok(out)
    }
}

impl From<Map<String, Value>> for Definitions {
    fn from(map: Map<String, Value>) -> Self {
        Definitions::Map(map)
    }
}

impl From<Value> for Definitions {
    fn from(value: Value) -> Self {
        Definitions::from_value(&value)
    }
}

impl From<&str> for Definitions {
    fn from(raw: &str) -> Self {
        Definitions::Raw(raw.to_string())
    }
}

/// Format any JSON value as definition tokens.
pub fn define(value: &Value) -> Result<Vec<String>, BuildError> {
    Definitions::from_value(value).format()
}
