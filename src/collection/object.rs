//! Object helpers: [`extend`] and [`omit`].
//!
//! Both walk own enumerable entries as defined by
//! [`Value::own_entries`]. `extend` is the one mutating helper in the
//! library; `omit` always builds a fresh mapping. Their typical caller
//! splits a property bag into recognized configuration keys and
//! pass-through attributes.

use crate::value::{Value, ValueMap};

use super::view::Elements;

/// Copies the own enumerable entries of each source into `target`, in
/// argument order, and returns `target`.
///
/// Later sources overwrite earlier ones and `target`'s pre-existing
/// entries on key collision. A falsy `target` or an empty source list is
/// a no-op. Sources that own no entries (falsy values, scalars)
/// contribute nothing; truthy non-mapping targets cannot take entries
/// and are left unchanged.
///
/// # Examples
///
/// ```rust
/// use underbars::collection::extend;
/// use underbars::vmap;
///
/// let mut props = vmap! { "a" => 1 };
/// extend(&mut props, &[vmap! { "b" => 2 }, vmap! { "a" => 3 }]);
/// assert_eq!(props, vmap! { "a" => 3, "b" => 2 });
/// ```
pub fn extend<'a>(target: &'a mut Value, sources: &[Value]) -> &'a mut Value {
    if target.is_falsy() || sources.is_empty() {
        return target;
    }
    if let Value::Map(map) = &mut *target {
        for source in sources {
            for (key, value) in source.own_entries() {
                map.insert(key, value);
            }
        }
    }
    target
}

/// Builds a new mapping holding every own enumerable entry of `object`
/// except those named by `fields`.
///
/// `fields` may be a single key or a sequence of keys; it is read under
/// the same single-vs-sequence normalization as everything else, and
/// only string entries ever match (field keys are compared strictly). A
/// falsy `fields` excludes nothing, so the result is a full shallow
/// copy. A falsy `object` yields `None`. The input is never mutated.
///
/// # Examples
///
/// ```rust
/// use underbars::collection::omit;
/// use underbars::{seq, vmap};
/// use underbars::value::Value;
///
/// let props = vmap! { "a" => 1, "b" => 2, "c" => 3 };
///
/// let rest = omit(&props, &seq!["b"]);
/// assert_eq!(rest, Some(vmap! { "a" => 1, "c" => 3 }));
/// assert_eq!(props, vmap! { "a" => 1, "b" => 2, "c" => 3 }); // unchanged
///
/// let copy = omit(&props, &Value::Null);
/// assert_eq!(copy, Some(props.clone()));
///
/// assert_eq!(omit(&Value::Undefined, &seq!["a"]), None);
/// ```
#[must_use]
pub fn omit(object: &Value, fields: &Value) -> Option<Value> {
    if object.is_falsy() {
        return None;
    }
    let excluded = Elements::of(fields);
    let mut kept = ValueMap::new();
    for (key, value) in object.own_entries() {
        let is_excluded = excluded.is_some_and(|fields| {
            fields
                .iter()
                .any(|field| matches!(field, Value::Str(name) if *name == key))
        });
        if !is_excluded {
            kept.insert(key, value);
        }
    }
    Some(Value::Map(kept))
}
