//! HTTP interface for the daily event scheduler.
//!
//! This crate exposes an `EventManager` over a small REST surface:
//! - `GET /events` lists the day's events in start order
//! - `POST /events` proposes a new event
//! - `OPTIONS /events` answers a no-op handshake
//! - `GET /health` reports liveness
//!
//! # Example
//!
//! ```no_run
//! use scheduler_api::{serve, ApiConfig, AppState};
//! use scheduler_core::EventManager;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let manager = EventManager::new();
//!     manager.seed_examples();
//!
//!     let config = ApiConfig::default();
//!     let state = AppState::new(config.clone(), manager);
//!
//!     serve(config, state).await?;
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod handlers;
pub mod router;
pub mod state;
pub mod types;

pub use config::ApiConfig;
pub use error::{ApiError, Result};
pub use router::{create_router, serve};
pub use state::AppState;
