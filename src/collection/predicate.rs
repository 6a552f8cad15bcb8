//! Classification predicates: [`has`], [`is_array_like`], [`is_empty`].

use crate::value::Value;

use super::view::Elements;

/// Returns whether `object` owns a property named `key`.
///
/// Mappings own their entries; sequences and strings own their in-range
/// indices and `"length"`. Nothing else owns anything, and a falsy
/// `object` owns nothing. Side-effect free.
///
/// # Examples
///
/// ```rust
/// use underbars::collection::has;
/// use underbars::{seq, vmap};
/// use underbars::value::Value;
///
/// let props = vmap! { "variant" => "selected" };
/// assert!(has(&props, "variant"));
/// assert!(!has(&props, "tabindex"));
///
/// let numbers = seq![1, 2, 3];
/// assert!(has(&numbers, "2"));
/// assert!(has(&numbers, "length"));
/// assert!(!has(&numbers, "3"));
///
/// assert!(!has(&Value::Null, "anything"));
/// ```
#[must_use]
pub fn has(object: &Value, key: &str) -> bool {
    match object {
        Value::Map(map) => map.contains_key(key),
        Value::Seq(items) => key == "length" || parses_as_index(key, items.len()),
        Value::Str(text) => key == "length" || parses_as_index(key, text.chars().count()),
        _ => false,
    }
}

/// An in-range canonical index: "1" qualifies, "01" and "+1" do not.
fn parses_as_index(key: &str, length: usize) -> bool {
    key.parse::<usize>()
        .is_ok_and(|index| index.to_string() == key && index < length)
}

/// Returns whether `value` is an ordered sequence for iteration purposes.
///
/// True sequences qualify; so do mappings with a numeric own `"length"`
/// entry that is at least zero. Character strings are explicitly
/// excluded even though they have a length.
///
/// # Examples
///
/// ```rust
/// use underbars::collection::is_array_like;
/// use underbars::{seq, vmap};
/// use underbars::value::Value;
///
/// assert!(is_array_like(&seq![1, 2, 3]));
/// assert!(is_array_like(&vmap! { "length" => 2 }));
/// assert!(!is_array_like(&Value::from("abc")));
/// assert!(!is_array_like(&vmap! { "a" => 1 }));
/// ```
#[must_use]
pub fn is_array_like(value: &Value) -> bool {
    matches!(
        Elements::of(value),
        Some(Elements::Sequence(_) | Elements::Indexed { .. })
    )
}

/// Returns whether `value` is empty: falsy, or a `length` of exactly 0.
///
/// The length read is strict about its type: a mapping is only empty when
/// its own `"length"` entry is the number 0. A truthy mapping without a
/// numeric `"length"` entry is never empty, no matter how few entries it
/// holds; that asymmetry is part of the contract.
///
/// # Examples
///
/// ```rust
/// use underbars::collection::is_empty;
/// use underbars::{seq, vmap};
/// use underbars::value::Value;
///
/// assert!(is_empty(&Value::Null));
/// assert!(is_empty(&seq![]));
/// assert!(is_empty(&vmap! { "length" => 0 }));
///
/// assert!(!is_empty(&seq![1]));
/// assert!(!is_empty(&vmap! {}));
/// assert!(!is_empty(&vmap! { "length" => "0" }));
/// ```
#[must_use]
pub fn is_empty(value: &Value) -> bool {
    if value.is_falsy() {
        return true;
    }
    value
        .length_attribute()
        .is_some_and(|length| length == 0.0)
}
