//! Loose collection helpers over dynamic [`Value`]s.
//!
//! Every helper here follows the same loose contract:
//!
//! - **Falsy input is a no-op.** `Undefined`, `Null`, `false`, `0`, and
//!   `""` produce `None` (or `0` for [`size`]) without invoking any
//!   callback. Absence is an ordinary outcome, never an error.
//! - **Single-element normalization.** A truthy value that is not
//!   array-like (a scalar, a string, a mapping without a numeric
//!   `"length"` entry) is treated as a one-element sequence. The
//!   [`Elements`] view makes the classification explicit.
//! - **Strings are not array-like**, despite having a length.
//!
//! The helpers are leaves with no interdependencies beyond the shared
//! classification ([`Elements`], [`is_array_like`]) and the [`each`]
//! primitive that [`filter`], the searches, and [`union`] build on.
//!
//! # Examples
//!
//! ```rust
//! use underbars::collection::{filter, find_index, size, union};
//! use underbars::seq;
//! use underbars::value::Value;
//!
//! let numbers = seq![1, 2, 3, 4];
//!
//! let odds = filter(&numbers, Some(|v: &Value| {
//!     v.as_number().is_some_and(|n| n % 2.0 == 1.0)
//! }));
//! assert_eq!(odds, Some(vec![Value::from(1), Value::from(3)]));
//!
//! assert_eq!(find_index(&numbers, Some(|v: &Value| {
//!     v.as_number().is_some_and(|n| n > 2.0)
//! })), Some(2));
//!
//! assert_eq!(size(&Value::from("lone")), 1);
//! assert_eq!(union(&[seq![1], seq![1, 2]]).len(), 2);
//! ```
//!
//! [`Value`]: crate::value::Value

mod combine;
mod iterate;
mod object;
mod predicate;
mod search;
mod view;

pub use combine::{flatten, union};
pub use iterate::{each, filter, map};
pub use object::{extend, omit};
pub use predicate::{has, is_array_like, is_empty};
pub use search::{find, find_index, first, last, size, some};
pub use view::{Elements, ElementsIter, Key};
