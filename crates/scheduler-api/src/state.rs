//! Application state shared across handlers.

use std::sync::Arc;

use scheduler_core::EventManager;

use crate::config::ApiConfig;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// API configuration.
    pub config: Arc<ApiConfig>,
    /// The single event manager for the process.
    pub event_manager: Arc<EventManager>,
}

impl AppState {
    /// Creates a new AppState owning the given manager.
    pub fn new(config: ApiConfig, event_manager: EventManager) -> Self {
        Self::with_shared_manager(config, Arc::new(event_manager))
    }

    /// Creates a new AppState around a manager that is also held elsewhere.
    pub fn with_shared_manager(config: ApiConfig, event_manager: Arc<EventManager>) -> Self {
        Self {
            config: Arc::new(config),
            event_manager,
        }
    }
}
