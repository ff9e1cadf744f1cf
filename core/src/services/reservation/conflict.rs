//! Overlap detection for candidate bookings.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::errors::{DomainError, EntityError, ValidationError};
use crate::repositories::reservation::r#trait::ReservationRepository;
use crate::repositories::room::r#trait::RoomRepository;

/// Checks a candidate interval against the existing bookings for a room
///
/// Intervals are half-open: a booking ending exactly when another starts is
/// not a conflict. The conflict error names the room and carries the
/// interval of the existing booking that blocked the candidate, so clients
/// can show what to move around.
#[derive(Clone)]
pub struct ReservationConflictChecker {
    reservations: Arc<dyn ReservationRepository>,
    rooms: Arc<dyn RoomRepository>,
}

impl ReservationConflictChecker {
    /// Creates a new conflict checker
    pub fn new(
        reservations: Arc<dyn ReservationRepository>,
        rooms: Arc<dyn RoomRepository>,
    ) -> Self {
        Self {
            reservations,
            rooms,
        }
    }

    /// Verifies that `[start, end)` is bookable for the room
    ///
    /// `excluding` names a reservation whose own interval must not count as
    /// a conflict; updates pass their own id so a booking can always keep or
    /// shrink its current slot.
    ///
    /// # Returns
    /// * `Ok(())` - No conflicting booking
    /// * `Err(ValidationError::InvalidInterval)` - `start >= end`
    /// * `Err(EntityError::RoomNotFound)` - Unknown room
    /// * `Err(EntityError::ReservationConflict)` - An existing booking overlaps
    pub async fn check(
        &self,
        room_id: i64,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        excluding: Option<i64>,
    ) -> Result<(), DomainError> {
        if start >= end {
            return Err(ValidationError::InvalidInterval { start, end }.into());
        }

        let room = self
            .rooms
            .find_by_id(room_id)
            .await?
            .ok_or(EntityError::RoomNotFound { id: room_id })?;

        let overlapping = self
            .reservations
            .find_overlapping(room_id, start, end)
            .await?;

        if let Some(conflict) = overlapping
            .into_iter()
            .find(|r| excluding != Some(r.id))
        {
            return Err(EntityError::ReservationConflict {
                start: conflict.start_date,
                end: conflict.end_date,
                room_name: room.name,
            }
            .into());
        }

        Ok(())
    }
}
