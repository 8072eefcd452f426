//! Error types for scheduling operations.

use thiserror::Error;

use crate::event::Event;

/// Reasons a candidate event can be refused by the manager.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    /// Start or end lies outside the day, or start is not before end.
    #[error("invalid range: [{start}, {end})")]
    InvalidRange { start: i64, end: i64 },

    /// Candidate intersects an already accepted event.
    #[error("overlaps existing event {existing}")]
    Overlap { existing: Event },

    /// Lock poisoned (thread panicked while holding lock).
    #[error("lock poisoned: {0}")]
    LockPoisoned(String),
}

/// Result type alias for scheduling operations.
pub type Result<T> = std::result::Result<T, ScheduleError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ScheduleError::InvalidRange { start: 5, end: 5 };
        assert_eq!(err.to_string(), "invalid range: [5, 5)");

        let err = ScheduleError::Overlap {
            existing: Event::new(2, 5),
        };
        assert_eq!(err.to_string(), "overlaps existing event [2, 5)");
    }
}
