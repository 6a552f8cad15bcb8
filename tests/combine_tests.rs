//! Unit tests for `union` and `flatten`.

use rstest::rstest;
use underbars::collection::{flatten, union};
use underbars::value::Value;
use underbars::{seq, vmap};

// =============================================================================
// union
// =============================================================================

#[rstest]
fn test_union_deduplicates_in_first_occurrence_order() {
    let merged = union(&[seq![1, 2], seq![2, 3], seq![3, 4]]);
    assert_eq!(
        merged,
        vec![
            Value::from(1),
            Value::from(2),
            Value::from(3),
            Value::from(4),
        ],
    );
}

#[rstest]
fn test_union_deduplicates_within_a_single_argument() {
    let merged = union(&[seq![1, 1, 2, 1]]);
    assert_eq!(merged, vec![Value::from(1), Value::from(2)]);
}

#[rstest]
fn test_union_skips_falsy_arguments() {
    let merged = union(&[Value::Null, seq![1], Value::Undefined, seq![2]]);
    assert_eq!(merged, vec![Value::from(1), Value::from(2)]);
}

#[rstest]
fn test_union_accepts_lone_values_as_single_candidates() {
    let merged = union(&[Value::from(5), seq![5, 6], Value::from("seven")]);
    assert_eq!(
        merged,
        vec![Value::from(5), Value::from(6), Value::from("seven")],
    );
}

#[rstest]
fn test_union_compares_strictly_across_variants() {
    // "1" and 1 are different values and both survive.
    let merged = union(&[seq!["1"], seq![1]]);
    assert_eq!(merged, vec![Value::from("1"), Value::from(1)]);
}

#[rstest]
fn test_union_of_no_arguments_is_empty() {
    assert_eq!(union(&[]), Vec::<Value>::new());
}

// =============================================================================
// flatten
// =============================================================================

#[rstest]
fn test_flatten_expands_nested_sequences_depth_first() {
    let flat = flatten(&[seq![1, seq![2, seq![3, 4]], 5]]);
    assert_eq!(
        flat,
        vec![
            Value::from(1),
            Value::from(2),
            Value::from(3),
            Value::from(4),
            Value::from(5),
        ],
    );
}

#[rstest]
fn test_flatten_concatenates_multiple_arguments() {
    let flat = flatten(&[seq![1, 2], seq![seq![3]], Value::from(4)]);
    assert_eq!(
        flat,
        vec![
            Value::from(1),
            Value::from(2),
            Value::from(3),
            Value::from(4),
        ],
    );
}

#[rstest]
fn test_flatten_leaves_array_like_maps_unexpanded() {
    let array_like = vmap! { "length" => 2, "0" => "a", "1" => "b" };
    let flat = flatten(&[seq![1, array_like.clone(), 2]]);
    assert_eq!(
        flat,
        vec![Value::from(1), array_like, Value::from(2)],
    );
}

#[rstest]
fn test_flatten_passes_flat_input_through_unchanged() {
    let flat_once = flatten(&[seq![1, seq![2], 3]]);
    let flat_twice = flatten(&[Value::Seq(flat_once.clone())]);
    assert_eq!(flat_twice, flat_once);
}

#[rstest]
fn test_flatten_of_no_arguments_is_empty() {
    assert_eq!(flatten(&[]), Vec::<Value>::new());
}

#[rstest]
fn test_flatten_keeps_falsy_elements() {
    // Falsy *elements* ride along; only the per-argument iteration of
    // union treats falsiness specially.
    let flat = flatten(&[seq![Value::Null, seq![Value::from(0)]]]);
    assert_eq!(flat, vec![Value::Null, Value::from(0)]);
}
