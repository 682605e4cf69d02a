/*!
# JSON Spec Codec Tests

Tests for the bytes-level `{v, f, _}` codec: serialization through the spec
serializer, deserialization of bare primitives and cells, inline type
reference resolution, and error mapping.
*/

use valuespec::valuespec::serialization::{
    JsonSpecCodec, SerializationError, SpecCodec, SpecConfig,
};
use valuespec::valuespec::types::{SimpleValue, TypeTag, ValuePrimitive};

/// A value with formatted text round-trips through the cell form.
#[test]
fn test_formatted_value_round_trip() {
    let codec = JsonSpecCodec::new(TypeTag::Boolean);

    let value = SimpleValue::boolean(false).with_formatted("I'm a simple value");
    let bytes = codec.serialize(&value).unwrap();

    assert_eq!(
        serde_json::from_slice::<serde_json::Value>(&bytes).unwrap(),
        serde_json::json!({"v": false, "f": "I'm a simple value"})
    );

    let decoded = codec.deserialize(&bytes).unwrap();
    assert_eq!(decoded, value);
}

/// A plain value serializes to the bare primitive and parses back against
/// the codec's expected type.
#[test]
fn test_bare_primitive_round_trip() {
    let codec = JsonSpecCodec::new(TypeTag::Boolean);

    let value = SimpleValue::boolean(true);
    let bytes = codec.serialize(&value).unwrap();
    assert_eq!(bytes, b"true");

    assert_eq!(codec.deserialize(&bytes).unwrap(), value);
}

/// force_type emits the full reference, and deserialization resolves it back
/// to the runtime type regardless of the codec's expected type.
#[test]
fn test_forced_type_round_trip() {
    let config = SpecConfig::new().with_force_type(true);
    let number_codec = JsonSpecCodec::with_config(TypeTag::Number, config);

    let value = SimpleValue::number(10.0);
    let bytes = number_codec.serialize(&value).unwrap();

    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(json["_"], "valuespec/type/number");

    // A codec expecting booleans still decodes this: the cell's `_` wins.
    let boolean_codec = JsonSpecCodec::new(TypeTag::Boolean);
    assert_eq!(boolean_codec.deserialize(&bytes).unwrap(), value);
}

/// Short-id references in inbound cells resolve through the closed type set.
#[test]
fn test_short_id_reference_is_resolved() {
    let codec = JsonSpecCodec::new(TypeTag::Boolean);

    let decoded = codec.deserialize(br#"{"v": 10, "_": "number"}"#).unwrap();
    assert_eq!(decoded, SimpleValue::number(10.0));
}

/// Dates round-trip through their ISO-8601 string form.
#[test]
fn test_date_round_trip() {
    let codec = JsonSpecCodec::new(TypeTag::Date);

    let value = SimpleValue::date(
        chrono::NaiveDate::from_ymd_opt(2017, 3, 15)
            .unwrap()
            .and_hms_milli_opt(10, 30, 0, 250)
            .unwrap(),
    );
    let bytes = codec.serialize(&value).unwrap();
    assert_eq!(bytes, br#""2017-03-15T10:30:00.250""#);

    assert_eq!(codec.deserialize(&bytes).unwrap(), value);
}

/// A plain object round-trips through its v-only cell, nested content intact.
#[test]
fn test_plain_object_round_trip() {
    let codec = JsonSpecCodec::new(TypeTag::Object);

    let mut fields = std::collections::HashMap::new();
    fields.insert(
        "foo".to_string(),
        ValuePrimitive::String("bar".to_string()),
    );
    fields.insert(
        "nested".to_string(),
        ValuePrimitive::Array(vec![ValuePrimitive::Number(1.0), ValuePrimitive::Null]),
    );
    let value = SimpleValue::object(fields);

    let bytes = codec.serialize(&value).unwrap();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(json["v"]["foo"], "bar");

    assert_eq!(codec.deserialize(&bytes).unwrap(), value);
}

/// An unknown `_` reference is a deserialization error.
#[test]
fn test_unknown_type_reference_fails() {
    let codec = JsonSpecCodec::new(TypeTag::Boolean);

    let err = codec
        .deserialize(br#"{"v": true, "_": "other/type/boolean"}"#)
        .unwrap_err();
    assert!(matches!(err, SerializationError::DeserializationFailed(_)));
}

/// A primitive whose JSON shape contradicts the resolved type is rejected.
#[test]
fn test_shape_mismatch_fails() {
    let codec = JsonSpecCodec::new(TypeTag::Boolean);

    let err = codec.deserialize(b"10").unwrap_err();
    assert!(matches!(err, SerializationError::DeserializationFailed(_)));

    let err = codec.deserialize(br#"{"v": "yes", "_": "boolean"}"#).unwrap_err();
    assert!(matches!(err, SerializationError::DeserializationFailed(_)));
}

/// Abstract types cannot anchor deserialization of a concrete primitive.
#[test]
fn test_abstract_expected_type_fails() {
    let codec = JsonSpecCodec::new(TypeTag::Simple);

    let err = codec.deserialize(b"true").unwrap_err();
    assert!(matches!(err, SerializationError::UnsupportedType(_)));
}

/// Malformed JSON maps to a deserialization error.
#[test]
fn test_malformed_json_fails() {
    let codec = JsonSpecCodec::new(TypeTag::Boolean);

    let err = codec.deserialize(b"{not json").unwrap_err();
    assert!(matches!(err, SerializationError::DeserializationFailed(_)));
}

/// An invalid date string maps to a format conversion error.
#[test]
fn test_invalid_date_string_fails() {
    let codec = JsonSpecCodec::new(TypeTag::Date);

    let err = codec.deserialize(br#""15/03/2017""#).unwrap_err();
    assert!(matches!(err, SerializationError::FormatConversionFailed(_)));
}

#[test]
fn test_format_name() {
    let codec = JsonSpecCodec::new(TypeTag::Boolean);
    assert_eq!(codec.format_name(), "JSON");
}
