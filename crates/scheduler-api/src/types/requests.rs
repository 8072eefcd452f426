//! Request DTOs for the API.

use serde::Deserialize;

use scheduler_core::Event;

/// Add event request.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct AddEventRequest {
    /// Inclusive start hour.
    pub start_time: i64,
    /// Exclusive end hour.
    pub end_time: i64,
}

impl From<AddEventRequest> for Event {
    fn from(req: AddEventRequest) -> Self {
        Event::new(req.start_time, req.end_time)
    }
}
