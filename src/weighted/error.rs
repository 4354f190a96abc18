use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChooserError {
    /// Nothing can be picked: the chooser is empty, or every weight is 0.
    #[error("no choices")]
    NoChoices,
    /// A negative weight was passed in. `index` is the position in the input.
    #[error("invalid weight {weight} for choice at index {index}")]
    InvalidWeight { index: usize, weight: i64 },
    #[error("total weight overflows u64")]
    WeightOverflow,
}
