//! The event value type.

use std::fmt;

/// First hour an event may start at.
pub const DAY_START: i64 = 0;

/// Last hour an event may end at.
pub const DAY_END: i64 = 23;

/// A half-open hour interval `[start, end)` within one day.
///
/// Fields are wide and signed so any integer a caller sends can be
/// represented and refused by the manager rather than by a decoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Event {
    /// Inclusive start hour.
    pub start: i64,
    /// Exclusive end hour.
    pub end: i64,
}

impl Event {
    /// Creates an event spanning `[start, end)`. No validation is done here.
    pub fn new(start: i64, end: i64) -> Self {
        Self { start, end }
    }

    /// Returns true if the event lies within the day and is non-empty.
    pub fn is_valid_range(&self) -> bool {
        self.start >= DAY_START && self.end <= DAY_END && self.start < self.end
    }

    /// Returns true if the two intervals intersect.
    ///
    /// Touching endpoints (`self.end == other.start`) do not overlap.
    pub fn overlaps(&self, other: &Event) -> bool {
        self.start < other.end && other.start < self.end
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_range() {
        assert!(Event::new(0, 23).is_valid_range());
        assert!(Event::new(2, 5).is_valid_range());
        assert!(!Event::new(5, 5).is_valid_range());
        assert!(!Event::new(6, 5).is_valid_range());
        assert!(!Event::new(-1, 3).is_valid_range());
        assert!(!Event::new(20, 24).is_valid_range());
    }

    #[test]
    fn test_overlaps_is_symmetric() {
        let a = Event::new(2, 5);
        let b = Event::new(4, 6);
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));

        let inner = Event::new(3, 4);
        assert!(a.overlaps(&inner));
        assert!(inner.overlaps(&a));
    }

    #[test]
    fn test_touching_endpoints_do_not_overlap() {
        let a = Event::new(2, 5);
        let b = Event::new(5, 9);
        assert!(!a.overlaps(&b));
        assert!(!b.overlaps(&a));
    }

    #[test]
    fn test_huge_hours_are_invalid() {
        assert!(!Event::new(1, 5_000_000_000).is_valid_range());
        assert!(!Event::new(i64::MIN, 3).is_valid_range());
    }

    #[test]
    fn test_display() {
        assert_eq!(Event::new(7, 9).to_string(), "[7, 9)");
    }
}
