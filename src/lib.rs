//! # underbars
//!
//! Loose collection utilities for Rust: null-tolerant iteration, search,
//! and object helpers over dynamic values.
//!
//! ## Overview
//!
//! This library ports the "loose" collection-helper contract familiar from
//! dynamically typed UI code to Rust. Every helper accepts any [`Value`],
//! whether scalar, sequence, or mapping, and degrades gracefully instead
//! of failing: absent or falsy input produces `None`, never an error. It
//! includes:
//!
//! - **Dynamic values**: [`Value`] and the insertion-ordered [`ValueMap`],
//!   with [`seq!`] and [`vmap!`] constructor macros
//! - **Classification**: [`has`], [`is_array_like`], [`is_empty`]
//! - **Iteration**: [`each`], [`filter`], [`map`]
//! - **Search**: [`find`], [`find_index`], [`first`], [`last`], [`size`],
//!   [`some`]
//! - **Aggregation**: [`union`], [`flatten`]
//! - **Object helpers**: [`extend`], [`omit`]
//! - **Identifiers**: [`IdGenerator`] and the process-wide [`unique_id`]
//!
//! [`has`]: collection::has
//! [`is_array_like`]: collection::is_array_like
//! [`is_empty`]: collection::is_empty
//! [`each`]: collection::each
//! [`filter`]: collection::filter
//! [`map`]: collection::map
//! [`find`]: collection::find
//! [`find_index`]: collection::find_index
//! [`first`]: collection::first
//! [`last`]: collection::last
//! [`size`]: collection::size
//! [`some`]: collection::some
//! [`union`]: collection::union
//! [`flatten`]: collection::flatten
//! [`extend`]: collection::extend
//! [`omit`]: collection::omit
//! [`Value`]: value::Value
//! [`ValueMap`]: value::ValueMap
//! [`IdGenerator`]: ident::IdGenerator
//! [`unique_id`]: ident::unique_id
//!
//! ## The loose contract
//!
//! Three rules hold everywhere:
//!
//! 1. A falsy input (`Undefined`, `Null`, `false`, `0`, `""`) is a no-op:
//!    the helper returns `None` (or `0` for [`size`](collection::size))
//!    without invoking any callback.
//! 2. A truthy value that is not array-like is treated as a one-element
//!    sequence. Character strings are deliberately *not* array-like.
//! 3. Absence is an ordinary outcome, not an exception. No helper panics
//!    and none returns `Result`.
//!
//! ## Feature Flags
//!
//! - `serde`: `Serialize`/`Deserialize` implementations for
//!   [`Value`](value::Value) and [`ValueMap`](value::ValueMap)
//!
//! ## Example
//!
//! ```rust
//! use underbars::prelude::*;
//! use underbars::{seq, vmap};
//!
//! // Keep the even numbers.
//! let evens = filter(
//!     &seq![1, 2, 3, 4],
//!     Some(|v: &Value| v.as_number().is_some_and(|n| n % 2.0 == 0.0)),
//! );
//! assert_eq!(evens, Some(vec![Value::from(2), Value::from(4)]));
//!
//! // First-occurrence-order union.
//! let merged = union(&[seq![1, 2], seq![2, 3]]);
//! assert_eq!(merged, vec![Value::from(1), Value::from(2), Value::from(3)]);
//!
//! // Merge property bags in place; later sources win.
//! let mut props = vmap! { "variant" => "selected", "tabindex" => 0 };
//! extend(&mut props, &[vmap! { "variant" => "hovered" }]);
//! assert_eq!(props, vmap! { "variant" => "hovered", "tabindex" => 0 });
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports the whole public surface.
///
/// # Usage
///
/// ```rust
/// use underbars::prelude::*;
/// ```
pub mod prelude {
    pub use crate::collection::{
        Elements, Key, each, extend, filter, find, find_index, first, flatten, has, is_array_like,
        is_empty, last, map, omit, size, some, union,
    };
    pub use crate::ident::{IdGenerator, unique_id};
    pub use crate::value::{Value, ValueMap};
}

pub mod collection;
pub mod ident;
pub mod value;

mod macros;
