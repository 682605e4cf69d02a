//! JSON codec for SimpleValue specification round trips.
//!
//! The emitting side runs the [`SpecSerializer`] and writes the resulting
//! spec as JSON bytes. The consuming side accepts either a bare primitive or
//! a `{v, f?, _?}` cell, resolving any `_` reference against the closed type
//! set.

use log::warn;
use serde_json::Value as JsonValue;
use std::collections::HashMap;

use super::error::SerializationError;
use super::serializer::{SpecConfig, SpecSerializer};
use crate::valuespec::types::value::DATE_FORMAT;
use crate::valuespec::types::{SimpleValue, TypeRegistry, TypeTag, ValuePrimitive};

/// Trait for codecs that convert between simple values and bytes.
pub trait SpecCodec {
    /// Serialize a value's specification to bytes.
    fn serialize(&self, value: &SimpleValue) -> Result<Vec<u8>, SerializationError>;

    /// Deserialize specification bytes into a value.
    fn deserialize(&self, bytes: &[u8]) -> Result<SimpleValue, SerializationError>;

    /// The wire format's display name.
    fn format_name(&self) -> &'static str;
}

/// JSON codec over the `{v, f, _}` specification format.
///
/// `expected` is the type the consuming context declares for inbound specs;
/// a cell's `_` reference overrides it.
pub struct JsonSpecCodec {
    registry: TypeRegistry,
    expected: TypeTag,
    config: SpecConfig,
}

impl JsonSpecCodec {
    /// Create a codec for one expected type with default serialization
    /// configuration.
    pub fn new(expected: TypeTag) -> Self {
        Self::with_config(expected, SpecConfig::default())
    }

    /// Create a codec with an explicit serialization configuration.
    pub fn with_config(expected: TypeTag, config: SpecConfig) -> Self {
        JsonSpecCodec {
            registry: TypeRegistry::new(),
            expected,
            config,
        }
    }

    /// Parse one JSON value into a SimpleValue, given the context's type.
    fn value_from_json(&self, json: &JsonValue) -> Result<SimpleValue, SerializationError> {
        match json {
            JsonValue::Object(map) if map.contains_key("v") => {
                // Cell form: `_` overrides the expected type, `f` carries the
                // formatted text.
                let tag = match map.get("_") {
                    Some(JsonValue::String(reference)) => {
                        self.registry.resolve_ref(reference).ok_or_else(|| {
                            SerializationError::DeserializationFailed(format!(
                                "Unknown type reference: {}",
                                reference
                            ))
                        })?
                    }
                    Some(other) => {
                        return Err(SerializationError::DeserializationFailed(format!(
                            "Type reference must be a string, got: {}",
                            other
                        )));
                    }
                    None => self.expected,
                };

                let primitive = primitive_from_json(&map["v"], tag)?;
                let mut value = SimpleValue::from_primitive(primitive);

                match map.get("f") {
                    Some(JsonValue::String(f)) => value = value.with_formatted(f.clone()),
                    Some(JsonValue::Null) | None => {}
                    Some(other) => {
                        return Err(SerializationError::DeserializationFailed(format!(
                            "Formatted value must be a string, got: {}",
                            other
                        )));
                    }
                }

                Ok(value)
            }
            bare => {
                let primitive = primitive_from_json(bare, self.expected)?;
                Ok(SimpleValue::from_primitive(primitive))
            }
        }
    }
}

impl SpecCodec for JsonSpecCodec {
    fn serialize(&self, value: &SimpleValue) -> Result<Vec<u8>, SerializationError> {
        let serializer = SpecSerializer::new(&self.registry);
        let spec = serializer.to_spec(value, &self.config);
        serde_json::to_vec(&spec)
            .map_err(|e| SerializationError::json_error("Failed to serialize spec", e))
    }

    fn deserialize(&self, bytes: &[u8]) -> Result<SimpleValue, SerializationError> {
        let json: JsonValue = serde_json::from_slice(bytes)
            .map_err(|e| SerializationError::json_parse_error("Failed to parse JSON", e))?;
        self.value_from_json(&json).map_err(|e| {
            warn!("Spec deserialization failed: {}", e);
            e
        })
    }

    fn format_name(&self) -> &'static str {
        "JSON"
    }
}

/// Convert a JSON value into the primitive a given type tag stores.
///
/// Shape mapping mirrors the serializer's output: booleans, numbers and
/// strings map to their own types; `Date` and `Function` store their string
/// forms; objects parse field-by-field into nested primitives.
fn primitive_from_json(
    json: &JsonValue,
    tag: TypeTag,
) -> Result<ValuePrimitive, SerializationError> {
    let mismatch = |json: &JsonValue| {
        SerializationError::DeserializationFailed(format!(
            "Expected a {} primitive, got: {}",
            tag, json
        ))
    };

    match tag {
        TypeTag::Boolean => match json {
            JsonValue::Bool(b) => Ok(ValuePrimitive::Boolean(*b)),
            other => Err(mismatch(other)),
        },
        TypeTag::Number => match json.as_f64() {
            Some(n) => Ok(ValuePrimitive::Number(n)),
            None => Err(mismatch(json)),
        },
        TypeTag::String => match json {
            JsonValue::String(s) => Ok(ValuePrimitive::String(s.clone())),
            other => Err(mismatch(other)),
        },
        TypeTag::Date => match json {
            JsonValue::String(s) => {
                let parsed = chrono::NaiveDateTime::parse_from_str(s, DATE_FORMAT)
                    .map_err(|e| {
                        SerializationError::FormatConversionFailed(format!(
                            "Invalid date string '{}': {}",
                            s, e
                        ))
                    })?;
                Ok(ValuePrimitive::Date(parsed))
            }
            other => Err(mismatch(other)),
        },
        TypeTag::Function => match json {
            JsonValue::String(s) => Ok(ValuePrimitive::Function(s.clone())),
            other => Err(mismatch(other)),
        },
        TypeTag::Object => match json {
            JsonValue::Object(map) => {
                let mut fields = HashMap::with_capacity(map.len());
                for (k, v) in map {
                    fields.insert(k.clone(), nested_from_json(v));
                }
                Ok(ValuePrimitive::Object(fields))
            }
            other => Err(mismatch(other)),
        },
        // Abstract types never tag a concrete value
        TypeTag::Value | TypeTag::Simple => Err(SerializationError::UnsupportedType(format!(
            "Cannot deserialize into abstract type: {}",
            tag
        ))),
    }
}

/// Convert nested JSON content (inside objects and arrays) by shape alone.
fn nested_from_json(json: &JsonValue) -> ValuePrimitive {
    match json {
        JsonValue::Null => ValuePrimitive::Null,
        JsonValue::Bool(b) => ValuePrimitive::Boolean(*b),
        JsonValue::Number(n) => ValuePrimitive::Number(n.as_f64().unwrap_or(f64::NAN)),
        JsonValue::String(s) => ValuePrimitive::String(s.clone()),
        JsonValue::Array(arr) => {
            ValuePrimitive::Array(arr.iter().map(nested_from_json).collect())
        }
        JsonValue::Object(map) => ValuePrimitive::Object(
            map.iter()
                .map(|(k, v)| (k.clone(), nested_from_json(v)))
                .collect(),
        ),
    }
}
