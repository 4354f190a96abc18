use serde::{Deserialize, Serialize};

///
/// An item paired with its relative weight.
///
/// A weight of 0 is allowed: the entry still counts towards the length of a
/// [`super::Chooser`] but is never picked. Negative weights are rejected when
/// the chooser is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Choice<T> {
    pub item: T,
    pub weight: i64,
}

impl<T> Choice<T> {
    pub fn new(item: T, weight: i64) -> Choice<T> {
        Choice { item, weight }
    }
}

impl<T> From<(T, i64)> for Choice<T> {
    fn from((item, weight): (T, i64)) -> Self {
        Choice::new(item, weight)
    }
}
