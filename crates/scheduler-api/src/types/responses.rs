//! Response DTOs for the API.

use serde::Serialize;

use scheduler_core::Event;

/// Health check response.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Service status.
    pub status: String,
    /// Service version.
    pub version: String,
    /// Uptime in seconds.
    pub uptime_seconds: u64,
    /// Number of accepted events.
    pub event_count: usize,
}

/// One entry of the event list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EventSummary {
    /// Inclusive start hour.
    pub start_time: i64,
    /// Exclusive end hour.
    pub end_time: i64,
}

impl From<&Event> for EventSummary {
    fn from(event: &Event) -> Self {
        Self {
            start_time: event.start,
            end_time: event.end,
        }
    }
}

/// Generic success response.
#[derive(Debug, Clone, Serialize)]
pub struct SuccessResponse {
    /// Success message.
    pub message: String,
}
