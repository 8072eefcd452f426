//! Thread-safe scheduling of non-overlapping events within a single day.
//!
//! This crate provides the `EventManager`, the sole owner of the day's
//! event collection:
//! - Range validation against the hours of the day
//! - Half-open overlap detection against accepted events
//! - A start-ordered snapshot of the collection, safe under concurrent access
//!
//! # Example
//!
//! ```
//! use scheduler_core::{Event, EventManager};
//!
//! let manager = EventManager::new();
//! manager.seed_examples();
//!
//! assert!(manager.add(Event::new(5, 7)));
//! assert!(!manager.add(Event::new(4, 6)));
//!
//! let starts: Vec<i64> = manager.list().iter().map(|e| e.start).collect();
//! assert_eq!(starts, vec![2, 5, 7]);
//! ```

pub mod error;
pub mod event;
pub mod manager;

pub use error::{Result, ScheduleError};
pub use event::{Event, DAY_END, DAY_START};
pub use manager::{EventManager, EXAMPLE_EVENTS};
