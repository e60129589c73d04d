//! Error types for gesture registration and definition building

use thiserror::Error;

use crate::gesture::GestureKind;

/// Errors surfaced at registration time
///
/// Segment evaluation itself never errors: every per-frame outcome is a
/// [`SegmentResult`](crate::SegmentResult) value.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GestureError {
    #[error("gesture definition has no segments; an empty chain would complete on the first frame")]
    EmptyDefinition,

    #[error("{0} is a pseudo-value and cannot back a machine")]
    PseudoKind(GestureKind),

    #[error("unknown gesture: {0}")]
    UnknownGesture(String),
}

/// Result type for gesture operations
pub type GestureResult<T> = Result<T, GestureError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_name_the_kind() {
        let err = GestureError::PseudoKind(GestureKind::All);
        assert!(err.to_string().contains("All"));

        let err = GestureError::UnknownGesture("Shrug".to_string());
        assert!(err.to_string().contains("Shrug"));
    }
}
