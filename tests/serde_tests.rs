#![cfg(feature = "serde")]
//! Serde round-trip tests for `Value` and `ValueMap`.

use rstest::rstest;
use underbars::value::{Value, ValueMap};
use underbars::{seq, vmap};

// =============================================================================
// Serialization
// =============================================================================

#[rstest]
#[case(Value::Null, "null")]
#[case(Value::Undefined, "null")]
#[case(Value::Bool(true), "true")]
#[case(Value::from(3), "3")]
#[case(Value::from(2.5), "2.5")]
#[case(Value::from("text"), "\"text\"")]
#[case(seq![1, "two", Value::Null], "[1,\"two\",null]")]
fn test_serializes_to_json(#[case] value: Value, #[case] expected: &str) {
    assert_eq!(serde_json::to_string(&value).unwrap(), expected);
}

#[rstest]
fn test_map_serializes_in_insertion_order() {
    let props = vmap! { "b" => 2, "a" => 1 };
    assert_eq!(
        serde_json::to_string(&props).unwrap(),
        "{\"b\":2,\"a\":1}",
    );
}

// =============================================================================
// Deserialization
// =============================================================================

#[rstest]
fn test_deserializes_nested_document() {
    let value: Value =
        serde_json::from_str("{\"a\":1,\"b\":[true,null,\"x\"],\"c\":{\"d\":2.5}}").unwrap();

    let map = value.as_map().unwrap();
    assert_eq!(map.keys().collect::<Vec<_>>(), ["a", "b", "c"]);
    assert_eq!(map.get("a"), Some(&Value::from(1)));
    assert_eq!(
        map.get("b"),
        Some(&seq![true, Value::Null, "x"]),
    );
    assert_eq!(map.get("c"), Some(&vmap! { "d" => 2.5 }));
}

#[rstest]
fn test_deserialization_never_produces_undefined() {
    let value: Value = serde_json::from_str("null").unwrap();
    assert_eq!(value, Value::Null);
}

#[rstest]
fn test_value_map_deserializes_directly() {
    let map: ValueMap = serde_json::from_str("{\"x\":1,\"y\":\"two\"}").unwrap();
    assert_eq!(map.get("x"), Some(&Value::from(1)));
    assert_eq!(map.get("y"), Some(&Value::from("two")));
}

// =============================================================================
// Round trips
// =============================================================================

#[rstest]
#[case("{\"a\":1,\"b\":[true,null,\"x\"]}")]
#[case("[1,2.5,\"three\",[],{}]")]
#[case("{\"nested\":{\"deep\":[{\"k\":\"v\"}]}}")]
fn test_json_round_trips_textually(#[case] document: &str) {
    let value: Value = serde_json::from_str(document).unwrap();
    assert_eq!(serde_json::to_string(&value).unwrap(), document);
}
