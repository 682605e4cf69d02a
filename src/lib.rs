//! # valuespec
//!
//! A typed simple-value specification library: wraps one primitive datum with
//! optional human-readable formatted text and a runtime type tag, and
//! serializes it to a plain, JSON-safe specification — either the bare
//! primitive or a cell object of shape `{v, f?, _?}`.
//!
//! ## Features
//!
//! - **Typed Value Wrappers**: [`SimpleValue`] over booleans, numbers,
//!   strings, dates, function sources, and plain objects
//! - **Closed Type Hierarchy**: [`TypeRegistry`] resolves every [`TypeTag`]
//!   to its descriptor at initialization, no string-keyed dispatch
//! - **Specification Output**: [`SpecSerializer`] implements the
//!   `force_type` / `omit_formatted` / `declared_type` / `is_json` decision table
//! - **Scoped Reference Resolution**: [`SpecificationScope`] memoizes
//!   context-relative type references within one serialization pass
//! - **JSON Codec**: [`JsonSpecCodec`] round-trips values through the
//!   `{v, f, _}` wire format
//!
//! ## Quick Start
//!
//! ```rust
//! use valuespec::{SimpleValue, SpecConfig, SpecSerializer, TypeRegistry};
//!
//! let registry = TypeRegistry::new();
//! let serializer = SpecSerializer::new(&registry);
//!
//! let value = SimpleValue::boolean(false).with_formatted("I'm a simple value");
//! let spec = serializer.to_spec(&value, &SpecConfig::default());
//!
//! // {"v": false, "f": "I'm a simple value"}
//! println!("{}", serde_json::to_string(&spec).unwrap());
//! ```

#![allow(clippy::collapsible_if)]
#![allow(clippy::bool_assert_comparison)]

pub mod valuespec;

// Re-export the primary API surface at the crate root
pub use valuespec::scope::SpecificationScope;
pub use valuespec::serialization::{
    JsonSpecCodec, SerializationError, Spec, SpecCell, SpecCodec, SpecConfig, SpecSerializer,
};
pub use valuespec::types::{
    JsonValueHook, SimpleValue, TypeDescriptor, TypeRegistry, TypeTag, ValuePrimitive,
};
