use thiserror::Error;

use crate::FieldErrors;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The draft broke at least one field rule; nothing was stored.
    #[error("event rejected: {0}")]
    ValidationFailed(FieldErrors),
    #[error("`{0}` is not a category filter")]
    InvalidCategory(String),
}
