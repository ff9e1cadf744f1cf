//! Reservation repository trait defining the interface for reservation
//! persistence, including the overlap query used for conflict detection.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::entities::reservation::Reservation;
use crate::errors::DomainError;

/// Repository contract for Reservation entities
#[async_trait]
pub trait ReservationRepository: Send + Sync {
    /// Find a reservation by its identifier
    async fn find_by_id(&self, id: i64) -> Result<Option<Reservation>, DomainError>;

    /// List all reservations
    async fn find_all(&self) -> Result<Vec<Reservation>, DomainError>;

    /// List the reservations owned by a user
    async fn find_by_user_id(&self, user_id: i64) -> Result<Vec<Reservation>, DomainError>;

    /// Find every reservation for `room_id` whose stored half-open interval
    /// overlaps `[start, end)`, i.e. `stored.start < end && stored.end > start`
    ///
    /// Callers that run an update must still exclude the reservation being
    /// updated from the returned set before treating a row as a conflict.
    async fn find_overlapping(
        &self,
        room_id: i64,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<Reservation>, DomainError>;

    /// Persist a new reservation, returning it with the assigned id
    ///
    /// Durable implementations must make the write atomic with respect to
    /// concurrent writes on the same room: the overlap re-check and the
    /// insert run in one transaction, so that two overlapping candidates
    /// can never both commit.
    async fn create(&self, reservation: Reservation) -> Result<Reservation, DomainError>;

    /// Update an existing reservation under the same atomicity rules as
    /// `create`, ignoring the reservation's own row in the overlap re-check
    async fn update(&self, reservation: Reservation) -> Result<Reservation, DomainError>;

    /// Delete a reservation by id
    ///
    /// # Returns
    /// * `Ok(true)` - Reservation was deleted
    /// * `Ok(false)` - Reservation not found
    async fn delete(&self, id: i64) -> Result<bool, DomainError>;
}
