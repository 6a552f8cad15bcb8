//! Constructor macros for [`Value`](crate::value::Value) literals.

/// Builds a [`Value::Seq`](crate::value::Value::Seq) from a list of
/// expressions.
///
/// Every element goes through [`Value::from`](crate::value::Value::from),
/// so scalars, strings, and nested `seq!`/`vmap!` invocations mix freely.
///
/// # Examples
///
/// ```rust
/// use underbars::seq;
/// use underbars::value::Value;
///
/// let numbers = seq![1, 2, 3];
/// assert_eq!(numbers.as_seq().map(<[Value]>::len), Some(3));
///
/// let nested = seq![1, seq![2, 3], "four"];
/// assert!(matches!(nested, Value::Seq(_)));
///
/// let empty = seq![];
/// assert_eq!(empty, Value::Seq(Vec::new()));
/// ```
#[macro_export]
macro_rules! seq {
    () => {
        $crate::value::Value::Seq(::std::vec::Vec::new())
    };
    ($($element:expr),+ $(,)?) => {
        $crate::value::Value::Seq(::std::vec![
            $($crate::value::Value::from($element)),+
        ])
    };
}

/// Builds a [`Value::Map`](crate::value::Value::Map) from `key => value`
/// pairs.
///
/// Keys are anything `Into<String>`; values go through
/// [`Value::from`](crate::value::Value::from). Later duplicates of a key
/// overwrite earlier ones in place.
///
/// # Examples
///
/// ```rust
/// use underbars::vmap;
/// use underbars::value::Value;
///
/// let props = vmap! { "variant" => "selected", "tabindex" => 0 };
/// let map = props.as_map().unwrap();
/// assert_eq!(map.get("variant"), Some(&Value::from("selected")));
/// assert_eq!(map.keys().collect::<Vec<_>>(), ["variant", "tabindex"]);
/// ```
#[macro_export]
macro_rules! vmap {
    () => {
        $crate::value::Value::Map($crate::value::ValueMap::new())
    };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut entries = $crate::value::ValueMap::new();
        $(
            entries.insert($key, $crate::value::Value::from($value));
        )+
        $crate::value::Value::Map(entries)
    }};
}
