//! Specification serialization.
//!
//! Turns a [`SimpleValue`](crate::valuespec::types::SimpleValue) into its
//! plain specification form — either the bare primitive or a `{v, f?, _?}`
//! cell — and round-trips that form through JSON bytes.

pub mod error;
pub mod json_codec;
pub mod serializer;
pub mod spec;

pub use error::SerializationError;
pub use json_codec::{JsonSpecCodec, SpecCodec};
pub use serializer::{SpecConfig, SpecSerializer};
pub use spec::{Spec, SpecCell};
