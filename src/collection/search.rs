//! Short-circuiting scans: [`find`], [`find_index`], [`first`], [`last`],
//! [`size`], [`some`].

use crate::value::Value;

use super::view::Elements;

/// Returns the first element of `iterable` for which `predicate` holds.
///
/// Falsy input, an absent predicate, or no match all yield `None`. A
/// truthy non-array-like input is scanned as a one-element sequence. The
/// scan stops at the first match.
///
/// # Examples
///
/// ```rust
/// use underbars::collection::find;
/// use underbars::seq;
/// use underbars::value::Value;
///
/// let numbers = seq![1, 2, 3];
/// let found = find(&numbers, Some(|v: &Value| {
///     v.as_number().is_some_and(|n| n > 1.0)
/// }));
/// assert_eq!(found, Some(&Value::from(2)));
///
/// assert_eq!(find(&seq![], Some(|_: &Value| true)), None);
/// assert_eq!(find(&numbers, None::<fn(&Value) -> bool>), None);
/// ```
#[must_use]
pub fn find<'a, F>(iterable: &'a Value, predicate: Option<F>) -> Option<&'a Value>
where
    F: FnMut(&Value) -> bool,
{
    let view = Elements::of(iterable)?;
    let mut predicate = predicate?;
    view.iter().find(|element| predicate(element))
}

/// Returns the index of the first element for which `predicate` holds.
///
/// Same contract as [`find`], returning the position instead of the
/// element.
///
/// # Examples
///
/// ```rust
/// use underbars::collection::find_index;
/// use underbars::seq;
/// use underbars::value::Value;
///
/// let index = find_index(&seq![1, 2, 3], Some(|v: &Value| {
///     v.as_number().is_some_and(|n| n > 1.0)
/// }));
/// assert_eq!(index, Some(1));
/// ```
#[must_use]
pub fn find_index<F>(iterable: &Value, predicate: Option<F>) -> Option<usize>
where
    F: FnMut(&Value) -> bool,
{
    let view = Elements::of(iterable)?;
    let mut predicate = predicate?;
    view.iter().position(|element| predicate(element))
}

/// Returns the first element, or the value itself when not array-like.
///
/// Falsy input and zero-length views yield `None`.
///
/// # Examples
///
/// ```rust
/// use underbars::collection::first;
/// use underbars::seq;
/// use underbars::value::Value;
///
/// assert_eq!(first(&seq![1, 2]), Some(&Value::from(1)));
/// assert_eq!(first(&seq![]), None);
///
/// let lone = Value::from(7);
/// assert_eq!(first(&lone), Some(&lone));
/// ```
#[must_use]
pub fn first(iterable: &Value) -> Option<&Value> {
    let view = Elements::of(iterable)?;
    if view.len() == 0 {
        return None;
    }
    Some(view.get(0))
}

/// Returns the last element, or the value itself when not array-like.
///
/// Falsy input and zero-length views yield `None`.
///
/// # Examples
///
/// ```rust
/// use underbars::collection::last;
/// use underbars::seq;
/// use underbars::value::Value;
///
/// assert_eq!(last(&seq![1, 2]), Some(&Value::from(2)));
/// assert_eq!(last(&seq![]), None);
/// ```
#[must_use]
pub fn last(iterable: &Value) -> Option<&Value> {
    let view = Elements::of(iterable)?;
    match view.len() {
        0 => None,
        length => Some(view.get(length - 1)),
    }
}

/// Returns the element count: 0 for falsy input, 1 for a truthy value
/// that is not array-like, the view length otherwise.
///
/// # Examples
///
/// ```rust
/// use underbars::collection::size;
/// use underbars::seq;
/// use underbars::value::Value;
///
/// assert_eq!(size(&seq![1, 2, 3]), 3);
/// assert_eq!(size(&Value::from("abc")), 1);
/// assert_eq!(size(&Value::Null), 0);
/// ```
#[must_use]
pub fn size(iterable: &Value) -> usize {
    Elements::of(iterable).map_or(0, Elements::len)
}

/// Returns `Some(true)` as soon as `predicate` holds for an element.
///
/// No match, empty input, falsy input, and an absent predicate all yield
/// `None`, never `Some(false)`. That exact shape is the contract:
/// absence of a match is reported as absence, not as a negative.
///
/// # Examples
///
/// ```rust
/// use underbars::collection::some;
/// use underbars::seq;
/// use underbars::value::Value;
///
/// let numbers = seq![1, 2, 3];
/// assert_eq!(
///     some(&numbers, Some(|v: &Value| v.as_number().is_some_and(|n| n > 2.0))),
///     Some(true),
/// );
/// assert_eq!(
///     some(&numbers, Some(|v: &Value| v.as_number().is_some_and(|n| n > 5.0))),
///     None, // not Some(false)
/// );
/// ```
#[must_use]
pub fn some<F>(iterable: &Value, predicate: Option<F>) -> Option<bool>
where
    F: FnMut(&Value) -> bool,
{
    let view = Elements::of(iterable)?;
    let mut predicate = predicate?;
    if view.iter().any(|element| predicate(element)) {
        Some(true)
    } else {
        None
    }
}
