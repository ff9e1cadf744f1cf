//! Reservation entity and interval semantics.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Room reservation entity
///
/// A reservation occupies the half-open interval `[start_date, end_date)`:
/// a reservation ending exactly when another starts does not overlap it.
/// `start_date < end_date` must hold for every stored reservation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reservation {
    /// Database identifier (assigned on insert)
    pub id: i64,

    /// Room being reserved
    pub room_id: i64,

    /// Owning user
    pub user_id: i64,

    /// Start of the reserved interval (inclusive)
    pub start_date: DateTime<Utc>,

    /// End of the reserved interval (exclusive)
    pub end_date: DateTime<Utc>,
}

impl Reservation {
    /// Creates a new unsaved reservation
    pub fn new(room_id: i64, user_id: i64, start_date: DateTime<Utc>, end_date: DateTime<Utc>) -> Self {
        Self {
            id: 0,
            room_id,
            user_id,
            start_date,
            end_date,
        }
    }

    /// Whether this reservation's interval overlaps `[start, end)`
    ///
    /// Two half-open intervals `[s1, e1)` and `[s2, e2)` overlap iff
    /// `s1 < e2 && s2 < e1`.
    pub fn overlaps(&self, start: DateTime<Utc>, end: DateTime<Utc>) -> bool {
        self.start_date < end && start < self.end_date
    }

    /// Whether the interval invariant `start_date < end_date` holds
    pub fn has_valid_interval(&self) -> bool {
        self.start_date < self.end_date
    }
}
