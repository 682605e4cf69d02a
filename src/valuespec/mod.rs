pub mod scope;
pub mod serialization;
pub mod types;

// Re-export commonly used types
pub use scope::SpecificationScope;
pub use serialization::{
    JsonSpecCodec, SerializationError, Spec, SpecCell, SpecCodec, SpecConfig, SpecSerializer,
};
pub use types::{JsonValueHook, SimpleValue, TypeDescriptor, TypeRegistry, TypeTag, ValuePrimitive};
