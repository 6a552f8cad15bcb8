//! Conversions into [`Value`].

use super::{Value, ValueMap};

impl From<bool> for Value {
    fn from(flag: bool) -> Self {
        Self::Bool(flag)
    }
}

impl From<f64> for Value {
    fn from(number: f64) -> Self {
        Self::Number(number)
    }
}

macro_rules! impl_from_integer {
    ($($integer:ty),+ $(,)?) => {
        $(
            impl From<$integer> for Value {
                #[allow(clippy::cast_precision_loss)]
                fn from(number: $integer) -> Self {
                    Self::Number(number as f64)
                }
            }
        )+
    };
}

impl_from_integer!(i32, i64, u32, usize);

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Self::Str(text.to_owned())
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Self::Str(text)
    }
}

impl From<char> for Value {
    fn from(character: char) -> Self {
        Self::Str(character.to_string())
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Self::Seq(items)
    }
}

impl From<ValueMap> for Value {
    fn from(map: ValueMap) -> Self {
        Self::Map(map)
    }
}

impl FromIterator<Value> for Value {
    fn from_iter<I: IntoIterator<Item = Value>>(items: I) -> Self {
        Self::Seq(items.into_iter().collect())
    }
}
