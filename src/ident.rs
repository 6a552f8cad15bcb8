//! Unique identifier generation.
//!
//! One monotonically increasing counter, pre-incremented on every
//! request, so the first id a fresh counter hands out is `"1"` and no
//! two requests ever see the same value. The counter lives as long as
//! its generator; ids are not unique across separate processes.
//!
//! [`IdGenerator`] is the counter as an injectable service: call sites
//! that want deterministic ids (tests, replay) hold their own instance.
//! The free [`unique_id`] function shares one process-wide generator,
//! which is what callers stamping DOM-style element ids want.

use std::sync::atomic::{AtomicU64, Ordering};

/// A monotonic id source backed by an atomic counter.
///
/// The increment is atomic, so a generator shared across threads still
/// never hands out the same id twice. Only uniqueness is guaranteed;
/// ids issued from different threads have no ordering relationship.
///
/// # Examples
///
/// ```rust
/// use underbars::ident::IdGenerator;
///
/// let generator = IdGenerator::new();
/// assert_eq!(generator.unique_id(None), "1");
/// assert_eq!(generator.unique_id(Some("option_")), "option_2");
/// assert_eq!(generator.unique_id(None), "3");
/// ```
#[derive(Debug)]
pub struct IdGenerator {
    counter: AtomicU64,
}

impl IdGenerator {
    /// Creates a generator whose first id will be `"1"`.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            counter: AtomicU64::new(0),
        }
    }

    /// Returns the next id: the stringified counter value, prefixed when
    /// a prefix is given.
    ///
    /// The counter is shared across prefixed and unprefixed calls, so
    /// the numeric suffixes form one sequence.
    pub fn unique_id(&self, prefix: Option<&str>) -> String {
        let serial = self.counter.fetch_add(1, Ordering::Relaxed) + 1;
        match prefix {
            Some(prefix) => format!("{prefix}{serial}"),
            None => serial.to_string(),
        }
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// The process-wide generator behind [`unique_id`].
static PROCESS_GENERATOR: IdGenerator = IdGenerator::new();

/// Returns an id unique within this process, optionally prefixed.
///
/// All call sites share one counter: suffixes observed anywhere in the
/// process form a single increasing sequence, regardless of prefix.
///
/// # Examples
///
/// ```rust
/// use underbars::ident::unique_id;
///
/// let first = unique_id(Some("id_"));
/// let second = unique_id(Some("id_"));
/// assert_ne!(first, second);
/// ```
#[must_use]
pub fn unique_id(prefix: Option<&str>) -> String {
    PROCESS_GENERATOR.unique_id(prefix)
}
