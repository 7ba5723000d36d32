use thiserror::Error;

/// Reasons a JSON value cannot be written as the right-hand side of a pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConversionError {
    #[error("nested objects cannot be written as values")]
    NestedObject,
    #[error("a list cannot be written as a single scalar")]
    NestedList,
}
