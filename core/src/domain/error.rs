use thiserror::Error;

/// Raised when a raw menu choice cannot be turned into a domain value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChoiceError {
    #[error("no item choice was entered")]
    Empty,
    #[error("item choice '{0}' is not a number")]
    NotANumber(String),
}
