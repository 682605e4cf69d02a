//! Type hierarchy descriptors and the closed type registry.
//!
//! The original specification system resolved types through string-keyed
//! registry lookups. Here the set of types is closed: every [`TypeTag`]
//! variant maps to a [`TypeDescriptor`] resolved once at registry
//! initialization, and inbound reference strings are matched against that
//! closed set.

use log::debug;
use std::collections::HashMap;
use std::fmt;

use super::value::{SimpleValue, ValuePrimitive, DATE_FORMAT};
use crate::valuespec::scope::SpecificationScope;

/// Identity of a type in the hierarchy.
///
/// `Value` and `Simple` are abstract; the remaining tags are the concrete
/// simple types a [`SimpleValue`] can carry. The hierarchy is fixed:
/// `Value` → `Simple` → each concrete type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeTag {
    /// Abstract root of the hierarchy
    Value,
    /// Abstract base of all simple types
    Simple,
    Boolean,
    Number,
    String,
    Date,
    Function,
    Object,
}

impl TypeTag {
    /// All tags, in hierarchy order.
    pub const ALL: [TypeTag; 8] = [
        TypeTag::Value,
        TypeTag::Simple,
        TypeTag::Boolean,
        TypeTag::Number,
        TypeTag::String,
        TypeTag::Date,
        TypeTag::Function,
        TypeTag::Object,
    ];

    /// The short identifier for this tag.
    pub fn short_id(&self) -> &'static str {
        match self {
            TypeTag::Value => "value",
            TypeTag::Simple => "simple",
            TypeTag::Boolean => "boolean",
            TypeTag::Number => "number",
            TypeTag::String => "string",
            TypeTag::Date => "date",
            TypeTag::Function => "function",
            TypeTag::Object => "object",
        }
    }

    /// The full reference identifier for this tag.
    pub fn id(&self) -> &'static str {
        match self {
            TypeTag::Value => "valuespec/type/value",
            TypeTag::Simple => "valuespec/type/simple",
            TypeTag::Boolean => "valuespec/type/boolean",
            TypeTag::Number => "valuespec/type/number",
            TypeTag::String => "valuespec/type/string",
            TypeTag::Date => "valuespec/type/date",
            TypeTag::Function => "valuespec/type/function",
            TypeTag::Object => "valuespec/type/object",
        }
    }

    /// The direct ancestor tag, or `None` for the root.
    pub fn ancestor(&self) -> Option<TypeTag> {
        match self {
            TypeTag::Value => None,
            TypeTag::Simple => Some(TypeTag::Value),
            _ => Some(TypeTag::Simple),
        }
    }

    /// Whether this tag names an abstract type.
    pub fn is_abstract(&self) -> bool {
        matches!(self, TypeTag::Value | TypeTag::Simple)
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.short_id())
    }
}

/// Metadata for one type in the hierarchy.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeDescriptor {
    tag: TypeTag,
    id: &'static str,
    short_id: &'static str,
    ancestor: Option<TypeTag>,
    is_abstract: bool,
}

impl TypeDescriptor {
    fn new(tag: TypeTag) -> Self {
        TypeDescriptor {
            tag,
            id: tag.id(),
            short_id: tag.short_id(),
            ancestor: tag.ancestor(),
            is_abstract: tag.is_abstract(),
        }
    }

    pub fn tag(&self) -> TypeTag {
        self.tag
    }

    /// Full reference identifier, e.g. `"valuespec/type/boolean"`.
    pub fn id(&self) -> &'static str {
        self.id
    }

    /// Short identifier, e.g. `"boolean"`.
    pub fn short_id(&self) -> &'static str {
        self.short_id
    }

    /// Direct ancestor in the hierarchy, `None` for the root.
    pub fn ancestor(&self) -> Option<TypeTag> {
        self.ancestor
    }

    pub fn is_abstract(&self) -> bool {
        self.is_abstract
    }

    /// Produce the context-relative reference token for this type.
    ///
    /// The token is memoized in the given [`SpecificationScope`], so repeated
    /// references to the same type within one serialization pass resolve to
    /// the same cached token.
    pub fn to_ref_in_context(&self, scope: &mut SpecificationScope) -> String {
        scope.ref_for(self.tag, self.id)
    }
}

/// Per-type overridable hook producing a value's JSON-safe primitive form.
///
/// The hook must be a pure, read-only projection of the wrapped value.
/// Returning `None` signals that the value has no JSON form; the serializer
/// then collapses the result to null.
pub trait JsonValueHook {
    fn to_json_value(&self, value: &SimpleValue) -> Option<ValuePrimitive>;
}

/// Default JSON-value hook: the stored primitive in its JSON-safe form.
///
/// Dates project to their ISO-8601 string, function values to their source
/// text; everything else passes through unchanged.
pub struct DefaultJsonValueHook;

impl JsonValueHook for DefaultJsonValueHook {
    fn to_json_value(&self, value: &SimpleValue) -> Option<ValuePrimitive> {
        match value.value() {
            ValuePrimitive::Date(d) => Some(ValuePrimitive::String(
                d.format(DATE_FORMAT).to_string(),
            )),
            ValuePrimitive::Function(src) => Some(ValuePrimitive::String(src.clone())),
            other => Some(other.clone()),
        }
    }
}

/// The closed mapping from [`TypeTag`] to [`TypeDescriptor`].
///
/// Built once at initialization. Also owns the per-type JSON-value hooks;
/// types without a registered hook use [`DefaultJsonValueHook`].
pub struct TypeRegistry {
    descriptors: HashMap<TypeTag, TypeDescriptor>,
    json_value_hooks: HashMap<TypeTag, Box<dyn JsonValueHook>>,
    default_hook: DefaultJsonValueHook,
}

impl TypeRegistry {
    /// Build the registry with every built-in type resolved.
    pub fn new() -> Self {
        let descriptors: HashMap<TypeTag, TypeDescriptor> = TypeTag::ALL
            .iter()
            .map(|&tag| (tag, TypeDescriptor::new(tag)))
            .collect();

        debug!("Type registry initialized with {} types", descriptors.len());

        TypeRegistry {
            descriptors,
            json_value_hooks: HashMap::new(),
            default_hook: DefaultJsonValueHook,
        }
    }

    /// The descriptor for a tag. Infallible: the tag set is closed and every
    /// tag is registered at construction.
    pub fn descriptor(&self, tag: TypeTag) -> &TypeDescriptor {
        &self.descriptors[&tag]
    }

    /// Override the JSON-value hook for one type.
    pub fn set_json_value_hook(&mut self, tag: TypeTag, hook: Box<dyn JsonValueHook>) {
        self.json_value_hooks.insert(tag, hook);
    }

    /// Invoke the JSON-value hook registered for the value's type (or the
    /// default hook) exactly once.
    pub fn json_value(&self, value: &SimpleValue) -> Option<ValuePrimitive> {
        match self.json_value_hooks.get(&value.type_tag()) {
            Some(hook) => hook.to_json_value(value),
            None => self.default_hook.to_json_value(value),
        }
    }

    /// Resolve an inbound reference string against the closed type set.
    ///
    /// Accepts either the full id (`"valuespec/type/boolean"`) or the short
    /// id (`"boolean"`). Returns `None` for anything else.
    pub fn resolve_ref(&self, reference: &str) -> Option<TypeTag> {
        TypeTag::ALL
            .iter()
            .copied()
            .find(|tag| tag.id() == reference || tag.short_id() == reference)
    }
}

impl Default for TypeRegistry {
    fn default() -> Self {
        Self::new()
    }
}
