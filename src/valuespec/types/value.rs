//! Simple-value wrapper and primitive datum types.

use chrono::NaiveDateTime;
use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};
use std::collections::HashMap;
use std::fmt;

use super::descriptor::TypeTag;

/// Timestamp format used when a `Date` primitive is projected to its
/// JSON-safe string form (milliseconds precision).
pub(crate) const DATE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3f";

/// The primitive datum wrapped by a [`SimpleValue`].
///
/// This enum represents all primitive forms the specification system supports.
/// `Array` and `Null` never occur at the top level of a simple value; they
/// only appear nested inside `Object`/`Array` content.
#[derive(Debug, Clone, PartialEq)]
pub enum ValuePrimitive {
    /// Boolean value (true/false)
    Boolean(bool),
    /// 64-bit floating point number
    Number(f64),
    /// UTF-8 string
    String(String),
    /// Date/time value, projected to an ISO-8601 string in JSON form
    Date(NaiveDateTime),
    /// Function source text
    Function(String),
    /// Plain object with named fields
    Object(HashMap<String, ValuePrimitive>),
    /// Array of nested values (nested content only)
    Array(Vec<ValuePrimitive>),
    /// JSON null (nested content only)
    Null,
}

impl ValuePrimitive {
    /// Whether this primitive is a plain object.
    ///
    /// Plain objects are ambiguous with the `{v, f, _}` cell shape and must
    /// never be emitted bare.
    pub fn is_plain_object(&self) -> bool {
        matches!(self, ValuePrimitive::Object(_))
    }

    /// The runtime type tag implied by this primitive's variant.
    pub fn type_tag(&self) -> TypeTag {
        match self {
            ValuePrimitive::Boolean(_) => TypeTag::Boolean,
            ValuePrimitive::Number(_) => TypeTag::Number,
            ValuePrimitive::String(_) => TypeTag::String,
            ValuePrimitive::Date(_) => TypeTag::Date,
            ValuePrimitive::Function(_) => TypeTag::Function,
            // Nested-only variants fold into the object type
            ValuePrimitive::Object(_) | ValuePrimitive::Array(_) | ValuePrimitive::Null => {
                TypeTag::Object
            }
        }
    }
}

/// Display implementation for ValuePrimitive for clean string formatting
impl fmt::Display for ValuePrimitive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValuePrimitive::Boolean(b) => write!(f, "{}", b),
            ValuePrimitive::Number(n) => write!(f, "{}", n),
            ValuePrimitive::String(s) => write!(f, "{}", s),
            ValuePrimitive::Date(d) => write!(f, "{}", d.format(DATE_FORMAT)),
            ValuePrimitive::Function(src) => write!(f, "{}", src),
            ValuePrimitive::Object(map) => {
                write!(f, "{{")?;
                for (i, (k, v)) in map.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}: {}", k, v)?;
                }
                write!(f, "}}")
            }
            ValuePrimitive::Array(arr) => {
                write!(f, "[")?;
                for (i, v) in arr.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", v)?;
                }
                write!(f, "]")
            }
            ValuePrimitive::Null => write!(f, "null"),
        }
    }
}

/// Custom Serialize implementation for ValuePrimitive
///
/// Serialization format matches the JSON-value hook's default projection:
/// - Date → ISO-8601 string with milliseconds
/// - Function → its source text
/// - Object/Array → nested JSON structures
impl Serialize for ValuePrimitive {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            ValuePrimitive::Boolean(b) => serializer.serialize_bool(*b),
            ValuePrimitive::Number(n) => serializer.serialize_f64(*n),
            ValuePrimitive::String(s) => serializer.serialize_str(s),
            ValuePrimitive::Date(d) => {
                serializer.serialize_str(&d.format(DATE_FORMAT).to_string())
            }
            ValuePrimitive::Function(src) => serializer.serialize_str(src),
            ValuePrimitive::Object(map) => {
                let mut m = serializer.serialize_map(Some(map.len()))?;
                for (k, v) in map {
                    m.serialize_entry(k, v)?;
                }
                m.end()
            }
            ValuePrimitive::Array(arr) => {
                let mut seq = serializer.serialize_seq(Some(arr.len()))?;
                for elem in arr {
                    seq.serialize_element(elem)?;
                }
                seq.end()
            }
            ValuePrimitive::Null => serializer.serialize_none(),
        }
    }
}

/// An immutable typed wrapper around one primitive datum.
///
/// A simple value holds the primitive, an optional human-readable formatted
/// string, and its runtime [`TypeTag`]. It is constructed from either a bare
/// primitive (`SimpleValue::boolean(true)`) or a `{v, f}` pair via
/// [`SimpleValue::with_formatted`], and is never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct SimpleValue {
    value: ValuePrimitive,
    formatted: Option<String>,
    tag: TypeTag,
}

impl SimpleValue {
    /// Create a boolean simple value.
    pub fn boolean(v: bool) -> Self {
        Self::from_primitive(ValuePrimitive::Boolean(v))
    }

    /// Create a number simple value.
    pub fn number(v: f64) -> Self {
        Self::from_primitive(ValuePrimitive::Number(v))
    }

    /// Create a string simple value.
    pub fn string(v: impl Into<String>) -> Self {
        Self::from_primitive(ValuePrimitive::String(v.into()))
    }

    /// Create a date simple value.
    pub fn date(v: NaiveDateTime) -> Self {
        Self::from_primitive(ValuePrimitive::Date(v))
    }

    /// Create a function simple value from its source text.
    pub fn function(source: impl Into<String>) -> Self {
        Self::from_primitive(ValuePrimitive::Function(source.into()))
    }

    /// Create a plain-object simple value.
    pub fn object(fields: HashMap<String, ValuePrimitive>) -> Self {
        Self::from_primitive(ValuePrimitive::Object(fields))
    }

    /// Create a simple value from any primitive, tagging it with the
    /// primitive's own runtime type.
    pub fn from_primitive(value: ValuePrimitive) -> Self {
        let tag = value.type_tag();
        SimpleValue {
            value,
            formatted: None,
            tag,
        }
    }

    /// Attach a formatted display string, as in the `{v, f}` construction form.
    pub fn with_formatted(mut self, formatted: impl Into<String>) -> Self {
        self.formatted = Some(formatted.into());
        self
    }

    /// The wrapped primitive.
    pub fn value(&self) -> &ValuePrimitive {
        &self.value
    }

    /// The formatted display string, if any.
    pub fn formatted(&self) -> Option<&str> {
        self.formatted.as_deref()
    }

    /// The value's runtime type tag. Always a concrete simple type.
    pub fn type_tag(&self) -> TypeTag {
        self.tag
    }
}

impl fmt::Display for SimpleValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.formatted {
            Some(text) => write!(f, "{}", text),
            None => write!(f, "{}", self.value),
        }
    }
}
