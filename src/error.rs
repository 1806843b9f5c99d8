use thiserror::Error;

/// Errors returned when the queue contract is misused.
///
/// Every operation checks its preconditions before touching the queue, so a
/// call that returns one of these leaves the queue exactly as it was.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum PqError {
    #[error("item is already present in the queue")]
    DuplicateItem,

    #[error("item is not present in the queue")]
    ItemNotFound,

    #[error("queue is empty")]
    EmptyQueue,

    #[error("priority {0:?} is not comparable")]
    InvalidPriority(f64),
}

/// Rejects priorities that cannot be ordered.
pub(crate) fn check_priority(priority: f64) -> Result<f64, PqError> {
    if priority.is_nan() {
        Err(PqError::InvalidPriority(priority))
    } else {
        Ok(priority)
    }
}
