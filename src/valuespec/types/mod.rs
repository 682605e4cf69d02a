//! Core simple-value types.
//!
//! This module contains the fundamental data types of the specification system:
//! - [`ValuePrimitive`] - The primitive datum a simple value wraps
//! - [`SimpleValue`] - The immutable typed wrapper (primitive + formatted text + type tag)
//! - [`TypeTag`] / [`TypeDescriptor`] / [`TypeRegistry`] - The closed type hierarchy

pub mod descriptor;
pub mod value;

pub use descriptor::{JsonValueHook, TypeDescriptor, TypeRegistry, TypeTag};
pub use value::{SimpleValue, ValuePrimitive};
