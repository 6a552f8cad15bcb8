//! Aggregation across multiple inputs: [`union`] and [`flatten`].

use crate::value::Value;

use super::view::Elements;

/// Collects the distinct values across `values`, in first-occurrence
/// order.
///
/// Arguments are scanned left to right, each under
/// [`each`](super::each) semantics: falsy arguments contribute nothing
/// and a truthy non-array-like argument contributes itself as one
/// candidate. Distinctness is strict equality, checked with a linear
/// scan over the values already kept.
///
/// # Examples
///
/// ```rust
/// use underbars::collection::union;
/// use underbars::seq;
/// use underbars::value::Value;
///
/// let merged = union(&[seq![1, 2], seq![2, 3], seq![3, 4]]);
/// assert_eq!(
///     merged,
///     vec![
///         Value::from(1),
///         Value::from(2),
///         Value::from(3),
///         Value::from(4),
///     ],
/// );
///
/// // Falsy arguments are skipped; lone values join as themselves.
/// let mixed = union(&[Value::Null, Value::from(5), seq![5, 6]]);
/// assert_eq!(mixed, vec![Value::from(5), Value::from(6)]);
/// ```
#[must_use]
pub fn union(values: &[Value]) -> Vec<Value> {
    let mut distinct: Vec<Value> = Vec::new();
    for value in values {
        let Some(view) = Elements::of(value) else {
            continue;
        };
        for element in view {
            if !distinct.iter().any(|seen| seen == element) {
                distinct.push(element.clone());
            }
        }
    }
    distinct
}

/// Concatenates `values` into one flat sequence, recursively.
///
/// Expansion is depth-unlimited, depth-first, left to right, and applies
/// only to true sequences: an array-like mapping, like any other
/// non-sequence, is appended as-is, unflattened. Flat input passes
/// through unchanged, so the operation is idempotent.
///
/// # Examples
///
/// ```rust
/// use underbars::collection::flatten;
/// use underbars::seq;
/// use underbars::value::Value;
///
/// let flat = flatten(&[seq![1, seq![2, seq![3, 4]], 5]]);
/// assert_eq!(
///     flat,
///     vec![
///         Value::from(1),
///         Value::from(2),
///         Value::from(3),
///         Value::from(4),
///         Value::from(5),
///     ],
/// );
/// ```
#[must_use]
pub fn flatten(values: &[Value]) -> Vec<Value> {
    let mut flat = Vec::new();
    flatten_into(values, &mut flat);
    flat
}

fn flatten_into(values: &[Value], flat: &mut Vec<Value>) {
    for value in values {
        match value {
            Value::Seq(items) => flatten_into(items, flat),
            other => flat.push(other.clone()),
        }
    }
}
