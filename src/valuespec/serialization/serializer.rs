//! Value specification serializer.
//!
//! Implements the decision table over `force_type`, `omit_formatted`,
//! `declared_type` and `is_json` that chooses between the bare-primitive and
//! cell output forms, and which inline type reference a cell carries.

use super::spec::{Spec, SpecCell};
use crate::valuespec::scope::SpecificationScope;
use crate::valuespec::types::{SimpleValue, TypeRegistry, TypeTag};

/// Serialization configuration. All fields optional; defaults produce the
/// most compact spec the value allows.
#[derive(Debug, Clone, Default)]
pub struct SpecConfig {
    /// Force inclusion of the `_` type reference even when it would
    /// otherwise be omittable.
    pub force_type: bool,
    /// Suppress the `f` formatted-value field.
    pub omit_formatted: bool,
    /// The type assumed by the consuming context. Defaults to the value's
    /// own runtime type. Must be the runtime type itself or one of its
    /// ancestors; anything else is a caller contract violation.
    pub declared_type: Option<TypeTag>,
    /// Route the primitive through the type's JSON-value hook before
    /// embedding it.
    pub is_json: bool,
}

impl SpecConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_force_type(mut self, force_type: bool) -> Self {
        self.force_type = force_type;
        self
    }

    pub fn with_omit_formatted(mut self, omit_formatted: bool) -> Self {
        self.omit_formatted = omit_formatted;
        self
    }

    pub fn with_declared_type(mut self, declared_type: TypeTag) -> Self {
        self.declared_type = Some(declared_type);
        self
    }

    pub fn with_is_json(mut self, is_json: bool) -> Self {
        self.is_json = is_json;
        self
    }
}

/// Serializes [`SimpleValue`]s into [`Spec`]s against a type registry.
///
/// The serializer is a pure transform: it never mutates the value and has no
/// side effects beyond invoking the registry's JSON-value hook, which is
/// pure by contract. Valid input cannot fail.
pub struct SpecSerializer<'a> {
    registry: &'a TypeRegistry,
}

impl<'a> SpecSerializer<'a> {
    pub fn new(registry: &'a TypeRegistry) -> Self {
        SpecSerializer { registry }
    }

    /// Serialize a value, bracketing the pass in a fresh
    /// [`SpecificationScope`] that is disposed on every path out.
    pub fn to_spec(&self, value: &SimpleValue, config: &SpecConfig) -> Spec {
        let mut scope = SpecificationScope::enter();
        let spec = self.to_spec_in_scope(&mut scope, value, config);
        scope.dispose();
        spec
    }

    /// Serialize a value within an already-open scope.
    pub fn to_spec_in_scope(
        &self,
        scope: &mut SpecificationScope,
        value: &SimpleValue,
        config: &SpecConfig,
    ) -> Spec {
        let tag = value.type_tag();
        let descriptor = self.registry.descriptor(tag);
        let declared = config.declared_type.unwrap_or(tag);

        // Candidate primitive: the JSON-value hook's projection under
        // is_json, the stored primitive otherwise. A None from the hook
        // short-circuits cell construction entirely.
        let primitive = if config.is_json {
            match self.registry.json_value(value) {
                Some(p) => p,
                None => return Spec::Null,
            }
        } else {
            value.value().clone()
        };

        // The `_` reference: full context token when forced; on a
        // declared/runtime mismatch, the short id when the declared type is
        // the direct ancestor and the full token otherwise.
        let type_ref = if config.force_type {
            Some(descriptor.to_ref_in_context(scope))
        } else if declared != tag {
            if descriptor.ancestor() == Some(declared) {
                Some(descriptor.short_id().to_string())
            } else {
                Some(descriptor.to_ref_in_context(scope))
            }
        } else {
            None
        };

        let formatted = if config.omit_formatted {
            None
        } else {
            value.formatted().map(str::to_string)
        };

        if type_ref.is_some() || formatted.is_some() {
            let mut cell = SpecCell::new(primitive);
            cell.f = formatted;
            cell.type_ref = type_ref;
            return Spec::Cell(cell);
        }

        // A bare plain object is ambiguous with the cell shape, so it is
        // always wrapped in a `v`-only cell.
        if primitive.is_plain_object() {
            Spec::Cell(SpecCell::new(primitive))
        } else {
            Spec::Inline(primitive)
        }
    }
}
