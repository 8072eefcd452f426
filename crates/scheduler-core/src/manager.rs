//! EventManager - thread-safe owner of the day's event collection.
//!
//! A single `Mutex<Vec<Event>>` guards every read and write, so the whole
//! validate-then-insert sequence of an add is atomic with respect to other
//! adds and lists.

use std::sync::{Mutex, PoisonError};

use crate::error::{Result, ScheduleError};
use crate::event::Event;

/// Events added by [`EventManager::seed_examples`], in insertion order.
pub const EXAMPLE_EVENTS: [Event; 2] = [Event { start: 2, end: 5 }, Event { start: 7, end: 9 }];

/// Thread-safe manager of non-overlapping events.
///
/// # Invariants
///
/// - Every stored event satisfies [`Event::is_valid_range`].
/// - No two stored events overlap.
/// - Events are stored sorted by ascending start.
///
/// A rejected add leaves the collection untouched.
///
/// # Example
///
/// ```
/// use scheduler_core::{Event, EventManager};
/// use std::sync::Arc;
/// use std::thread;
///
/// let manager = Arc::new(EventManager::new());
///
/// let m = manager.clone();
/// let handle = thread::spawn(move || m.add(Event::new(10, 12)));
/// assert!(manager.add(Event::new(1, 3)));
/// assert!(handle.join().unwrap());
///
/// assert_eq!(manager.list(), vec![Event::new(1, 3), Event::new(10, 12)]);
/// ```
#[derive(Debug, Default)]
pub struct EventManager {
    events: Mutex<Vec<Event>>,
}

impl EventManager {
    /// Creates a manager with an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an event, returning whether it was accepted.
    ///
    /// Invalid ranges and overlaps are both reported as `false`; use
    /// [`try_add`](Self::try_add) to tell them apart.
    pub fn add(&self, candidate: Event) -> bool {
        self.try_add(candidate).is_ok()
    }

    /// Adds an event, reporting why it was refused.
    ///
    /// The range check runs before the overlap check, so a candidate that
    /// fails both yields [`ScheduleError::InvalidRange`].
    pub fn try_add(&self, candidate: Event) -> Result<()> {
        let mut events = self
            .events
            .lock()
            .map_err(|e| ScheduleError::LockPoisoned(e.to_string()))?;

        if !candidate.is_valid_range() {
            return Err(ScheduleError::InvalidRange {
                start: candidate.start,
                end: candidate.end,
            });
        }

        if let Some(existing) = events.iter().find(|e| candidate.overlaps(e)) {
            return Err(ScheduleError::Overlap {
                existing: *existing,
            });
        }

        events.push(candidate);
        events.sort_by_key(|e| e.start);

        Ok(())
    }

    /// Returns a snapshot of all events, sorted by ascending start.
    ///
    /// A poisoned lock still yields the stored events: every mutation is a
    /// single push-and-sort, so the collection is consistent even then.
    pub fn list(&self) -> Vec<Event> {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Adds the fixed example events, returning how many were accepted.
    ///
    /// Meant to be called once at startup. Each event goes through the normal
    /// add path.
    pub fn seed_examples(&self) -> usize {
        EXAMPLE_EVENTS
            .iter()
            .filter(|event| self.add(**event))
            .count()
    }

    /// Returns the number of accepted events.
    pub fn len(&self) -> usize {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Returns true if no events have been accepted.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
