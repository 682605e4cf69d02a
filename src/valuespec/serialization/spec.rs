//! Specification output model: bare primitives and `{v, f?, _?}` cells.

use serde::Serialize;

use crate::valuespec::types::ValuePrimitive;

/// The object-shaped specification form.
///
/// Serializes to `{"v": .., "f": .., "_": ..}` with `f` and `_` omitted when
/// absent. `v` holds the primitive (or the JSON-value hook's projection of
/// it), `f` the formatted display text, and `_` the inline type reference —
/// either a short id or a full context-relative token.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpecCell {
    pub v: ValuePrimitive,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub f: Option<String>,
    #[serde(rename = "_", skip_serializing_if = "Option::is_none")]
    pub type_ref: Option<String>,
}

impl SpecCell {
    pub fn new(v: ValuePrimitive) -> Self {
        SpecCell {
            v,
            f: None,
            type_ref: None,
        }
    }
}

/// A value specification: the serializer's output.
///
/// Either the bare primitive, JSON null, or a [`SpecCell`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Spec {
    Null,
    Inline(ValuePrimitive),
    Cell(SpecCell),
}

impl Spec {
    /// The cell form, if this spec is a cell.
    pub fn as_cell(&self) -> Option<&SpecCell> {
        match self {
            Spec::Cell(cell) => Some(cell),
            _ => None,
        }
    }

    /// The bare primitive, if this spec is inline.
    pub fn as_inline(&self) -> Option<&ValuePrimitive> {
        match self {
            Spec::Inline(p) => Some(p),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Spec::Null)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_json_shape_omits_absent_fields() {
        let cell = SpecCell::new(ValuePrimitive::Boolean(false));
        let json = serde_json::to_string(&Spec::Cell(cell)).unwrap();
        assert_eq!(json, r#"{"v":false}"#);
    }

    #[test]
    fn test_cell_json_shape_with_all_fields() {
        let mut cell = SpecCell::new(ValuePrimitive::Number(10.0));
        cell.f = Some("Ten".to_string());
        cell.type_ref = Some("number".to_string());
        let json = serde_json::to_value(&Spec::Cell(cell)).unwrap();

        assert_eq!(json["v"], 10.0);
        assert_eq!(json["f"], "Ten");
        assert_eq!(json["_"], "number");
    }

    #[test]
    fn test_inline_and_null_specs_serialize_bare() {
        let json = serde_json::to_string(&Spec::Inline(ValuePrimitive::Boolean(true))).unwrap();
        assert_eq!(json, "true");

        let json = serde_json::to_string(&Spec::Null).unwrap();
        assert_eq!(json, "null");
    }
}
