//! Event handlers.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use scheduler_core::Event;
use tracing::debug;

use crate::error::Result;
use crate::state::AppState;
use crate::types::{AddEventRequest, EventSummary, SuccessResponse};

/// GET /events - List all events in start order.
pub async fn list_events(State(state): State<AppState>) -> Json<Vec<EventSummary>> {
    let events = state.event_manager.list();
    Json(events.iter().map(EventSummary::from).collect())
}

/// POST /events - Propose a new event.
///
/// Undecodable bodies are reported as malformed input before the manager
/// sees them. Range and overlap refusals share one response.
pub async fn create_event(
    State(state): State<AppState>,
    payload: std::result::Result<Json<AddEventRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<SuccessResponse>)> {
    let Json(req) = payload?;
    let event = Event::from(req);

    if let Err(err) = state.event_manager.try_add(event) {
        debug!(start = event.start, end = event.end, reason = %err, "event rejected");
        return Err(err.into());
    }

    debug!(start = event.start, end = event.end, "event created");

    Ok((
        StatusCode::CREATED,
        Json(SuccessResponse {
            message: "event created".to_string(),
        }),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ApiConfig;
    use crate::error::ApiError;
    use scheduler_core::EventManager;

    fn make_test_state() -> AppState {
        let manager = EventManager::new();
        manager.seed_examples();
        AppState::new(ApiConfig::default(), manager)
    }

    fn request(
        start_time: i64,
        end_time: i64,
    ) -> std::result::Result<Json<AddEventRequest>, JsonRejection> {
        Ok(Json(AddEventRequest {
            start_time,
            end_time,
        }))
    }

    #[tokio::test]
    async fn test_list_events_seeded() {
        let state = make_test_state();
        let response = list_events(State(state)).await;

        assert_eq!(
            response.0,
            vec![
                EventSummary {
                    start_time: 2,
                    end_time: 5
                },
                EventSummary {
                    start_time: 7,
                    end_time: 9
                },
            ]
        );
    }

    #[tokio::test]
    async fn test_list_events_empty() {
        let state = AppState::new(ApiConfig::default(), EventManager::new());
        let response = list_events(State(state)).await;
        assert!(response.0.is_empty());
    }

    #[tokio::test]
    async fn test_create_event() {
        let state = make_test_state();

        let (status, response) = create_event(State(state.clone()), request(5, 7))
            .await
            .unwrap();
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(response.message, "event created");

        assert_eq!(state.event_manager.len(), 3);
    }

    #[tokio::test]
    async fn test_create_event_overlap() {
        let state = make_test_state();

        let result = create_event(State(state.clone()), request(4, 6)).await;
        assert!(matches!(result, Err(ApiError::Rejected)));
        assert_eq!(state.event_manager.len(), 2);
    }

    #[tokio::test]
    async fn test_create_event_invalid_range() {
        let state = make_test_state();

        for (start, end) in [(5, 5), (-1, 3), (20, 24)] {
            let result = create_event(State(state.clone()), request(start, end)).await;
            assert!(matches!(result, Err(ApiError::Rejected)));
        }
        assert_eq!(state.event_manager.len(), 2);
    }
}
