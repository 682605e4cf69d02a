//! Error types for serialization

/// Serialization error type
#[derive(Debug)]
pub enum SerializationError {
    SerializationFailed(String),
    DeserializationFailed(String),
    FormatConversionFailed(String),
    UnsupportedType(String),
}

impl SerializationError {
    /// Build a serialization error from a serde_json error with context.
    pub fn json_error(message: &str, err: serde_json::Error) -> Self {
        SerializationError::SerializationFailed(format!("{}: {}", message, err))
    }

    /// Build a deserialization error from a serde_json error with context.
    pub fn json_parse_error(message: &str, err: serde_json::Error) -> Self {
        SerializationError::DeserializationFailed(format!("{}: {}", message, err))
    }
}

impl std::fmt::Display for SerializationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SerializationError::SerializationFailed(msg) => {
                write!(f, "Serialization failed: {}", msg)
            }
            SerializationError::DeserializationFailed(msg) => {
                write!(f, "Deserialization failed: {}", msg)
            }
            SerializationError::FormatConversionFailed(msg) => {
                write!(f, "Format conversion failed: {}", msg)
            }
            SerializationError::UnsupportedType(msg) => {
                write!(f, "Unsupported type: {}", msg)
            }
        }
    }
}

impl std::error::Error for SerializationError {}
