//! The iteration primitive and the sequence producers built on it.

use crate::value::Value;

use super::view::{Elements, Key};

/// Invokes `action` once per element of `object`.
///
/// Falsy input invokes nothing. Array-like input is walked in ascending
/// index order, passing only the element. Any other truthy value (a
/// lone scalar, a string, a mapping without a numeric `"length"`) is
/// one item: `action` runs exactly once with the value itself. Keys of a
/// plain mapping are *not* iterated here; that is [`map`]'s job.
///
/// This is the primitive under [`filter`], the search helpers, and
/// [`union`](super::union)'s per-argument pass.
///
/// # Examples
///
/// ```rust
/// use underbars::collection::each;
/// use underbars::seq;
/// use underbars::value::Value;
///
/// let mut seen = Vec::new();
/// each(&seq![1, 2, 3], |v: &Value| seen.push(v.clone()));
/// assert_eq!(seen, [Value::from(1), Value::from(2), Value::from(3)]);
///
/// let mut calls = 0;
/// each(&Value::Undefined, |_: &Value| calls += 1);
/// assert_eq!(calls, 0);
///
/// each(&Value::from("abc"), |_: &Value| calls += 1);
/// assert_eq!(calls, 1); // a string is one item, not three
/// ```
pub fn each<F>(object: &Value, mut action: F)
where
    F: FnMut(&Value),
{
    let Some(view) = Elements::of(object) else {
        return;
    };
    for element in view {
        action(element);
    }
}

/// Collects the elements of `iterable` for which `predicate` holds.
///
/// Falsy input yields `None`, not an empty sequence; callers must check
/// before assuming a sequence back. Otherwise the result preserves
/// traversal order under [`each`] semantics, so a truthy non-array-like
/// input is examined as a single candidate element. An absent predicate
/// keeps nothing.
///
/// # Examples
///
/// ```rust
/// use underbars::collection::filter;
/// use underbars::seq;
/// use underbars::value::Value;
///
/// let evens = filter(
///     &seq![1, 2, 3, 4],
///     Some(|v: &Value| v.as_number().is_some_and(|n| n % 2.0 == 0.0)),
/// );
/// assert_eq!(evens, Some(vec![Value::from(2), Value::from(4)]));
///
/// assert_eq!(filter(&Value::Null, Some(|_: &Value| true)), None);
/// assert_eq!(
///     filter(&seq![1, 2], None::<fn(&Value) -> bool>),
///     Some(Vec::new()),
/// );
/// ```
#[must_use]
pub fn filter<F>(iterable: &Value, predicate: Option<F>) -> Option<Vec<Value>>
where
    F: FnMut(&Value) -> bool,
{
    let view = Elements::of(iterable)?;
    let Some(mut predicate) = predicate else {
        return Some(Vec::new());
    };
    let mut kept = Vec::new();
    for element in view {
        if predicate(element) {
            kept.push(element.clone());
        }
    }
    Some(kept)
}

/// Builds a new sequence by transforming every element of `object`.
///
/// Falsy input yields `None`. Array-like input maps each element with its
/// [`Key::Index`]. Any other truthy input maps its own enumerable
/// entries (value first, [`Key::Name`] second) in enumeration order;
/// the keys are discarded from the output shape, and a scalar (which
/// owns no entries) produces an empty sequence. An absent transform
/// leaves every slot unset: the result is all `Undefined`.
///
/// # Examples
///
/// ```rust
/// use underbars::collection::{map, Key};
/// use underbars::{seq, vmap};
/// use underbars::value::Value;
///
/// let doubled = map(
///     &seq![1, 2, 3],
///     Some(|v: &Value, _: Key<'_>| Value::from(v.as_number().unwrap_or(0.0) * 2.0)),
/// );
/// assert_eq!(
///     doubled,
///     Some(vec![Value::from(2), Value::from(4), Value::from(6)]),
/// );
///
/// // Mapping input: values in key order, keys dropped from the output.
/// let scaled = map(
///     &vmap! { "a" => 1, "b" => 2 },
///     Some(|v: &Value, _: Key<'_>| Value::from(v.as_number().unwrap_or(0.0) * 10.0)),
/// );
/// assert_eq!(scaled, Some(vec![Value::from(10), Value::from(20)]));
///
/// // Absent transform: same length, every slot unset.
/// let sparse = map(&seq![1, 2], None::<fn(&Value, Key<'_>) -> Value>);
/// assert_eq!(sparse, Some(vec![Value::Undefined, Value::Undefined]));
/// ```
#[must_use]
pub fn map<F>(object: &Value, transform: Option<F>) -> Option<Vec<Value>>
where
    F: FnMut(&Value, Key<'_>) -> Value,
{
    let view = Elements::of(object)?;
    match view {
        Elements::Sequence(_) | Elements::Indexed { .. } => {
            let length = view.len();
            let Some(mut transform) = transform else {
                return Some(vec![Value::Undefined; length]);
            };
            let mut mapped = Vec::with_capacity(length);
            for index in 0..length {
                mapped.push(transform(view.get(index), Key::Index(index)));
            }
            Some(mapped)
        }
        Elements::Single(value) => {
            let entries = value.own_entries();
            let Some(mut transform) = transform else {
                return Some(vec![Value::Undefined; entries.len()]);
            };
            let mut mapped = Vec::with_capacity(entries.len());
            for (key, entry) in &entries {
                mapped.push(transform(entry, Key::Name(key)));
            }
            Some(mapped)
        }
    }
}
