//! Booking operations: listing, creating, rescheduling, and cancelling.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::domain::entities::reservation::Reservation;
use crate::domain::entities::token::Claims;
use crate::errors::{DomainError, EntityError};
use crate::repositories::reservation::r#trait::ReservationRepository;
use crate::repositories::room::r#trait::RoomRepository;
use crate::repositories::user::r#trait::UserRepository;
use crate::services::auth::{AuthorizationGuard, IdentityResolver};
use crate::services::notification::{ReservationConfirmation, ReservationNotifier};

use super::conflict::ReservationConflictChecker;

/// Service handling the reservation lifecycle
///
/// Ownership rules: a booking belongs to the caller that created it, and
/// only the owner or an administrator may reschedule or cancel it. The
/// conflict check runs before every write; durable stores additionally
/// re-check inside the write transaction, so the pre-check here is for
/// friendly errors, not the integrity guarantee.
pub struct ReservationService {
    reservations: Arc<dyn ReservationRepository>,
    rooms: Arc<dyn RoomRepository>,
    users: Arc<dyn UserRepository>,
    identity: IdentityResolver,
    conflicts: ReservationConflictChecker,
    notifier: Arc<dyn ReservationNotifier>,
}

impl ReservationService {
    /// Creates a new reservation service
    pub fn new(
        reservations: Arc<dyn ReservationRepository>,
        rooms: Arc<dyn RoomRepository>,
        users: Arc<dyn UserRepository>,
        notifier: Arc<dyn ReservationNotifier>,
    ) -> Self {
        let identity = IdentityResolver::new(Arc::clone(&users));
        let conflicts =
            ReservationConflictChecker::new(Arc::clone(&reservations), Arc::clone(&rooms));
        Self {
            reservations,
            rooms,
            users,
            identity,
            conflicts,
            notifier,
        }
    }

    /// Lists all reservations
    pub async fn find_all(&self) -> Result<Vec<Reservation>, DomainError> {
        self.reservations.find_all().await
    }

    /// Finds a reservation by id
    pub async fn find_by_id(&self, id: i64) -> Result<Reservation, DomainError> {
        self.reservations
            .find_by_id(id)
            .await?
            .ok_or_else(|| EntityError::ReservationNotFound { id }.into())
    }

    /// Lists the reservations owned by the caller
    pub async fn find_by_caller(&self, claims: &Claims) -> Result<Vec<Reservation>, DomainError> {
        let user = self.identity.resolve(&claims.sub).await?;
        self.reservations.find_by_user_id(user.id).await
    }

    /// Books a room for the caller over `[start, end)`
    ///
    /// The booking is attributed to the token subject; a client cannot book
    /// on behalf of another user.
    pub async fn create(
        &self,
        claims: &Claims,
        room_id: i64,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Reservation, DomainError> {
        let user = self.identity.resolve(&claims.sub).await?;
        self.conflicts.check(room_id, start, end, None).await?;

        let created = self
            .reservations
            .create(Reservation::new(room_id, user.id, start, end))
            .await?;

        // Best-effort confirmation; delivery failure never fails the booking.
        if let Ok(Some(room)) = self.rooms.find_by_id(room_id).await {
            let confirmation = ReservationConfirmation {
                recipient: user.email,
                recipient_name: user.name,
                room_name: room.name,
                start_date: created.start_date,
                end_date: created.end_date,
            };
            let _ = self.notifier.notify_confirmation(&confirmation).await;
        }

        Ok(created)
    }

    /// Reschedules a reservation, patching whichever bounds are given
    ///
    /// Only the owner or an administrator may reschedule. The conflict check
    /// excludes the reservation itself, so keeping or shrinking the current
    /// slot always succeeds.
    pub async fn update(
        &self,
        claims: &Claims,
        id: i64,
        start: Option<DateTime<Utc>>,
        end: Option<DateTime<Utc>>,
    ) -> Result<Reservation, DomainError> {
        let mut reservation = self.find_by_id(id).await?;
        self.authorize_owner(claims, &reservation).await?;

        if let Some(start) = start {
            reservation.start_date = start;
        }
        if let Some(end) = end {
            reservation.end_date = end;
        }

        self.conflicts
            .check(
                reservation.room_id,
                reservation.start_date,
                reservation.end_date,
                Some(id),
            )
            .await?;

        self.reservations.update(reservation).await
    }

    /// Cancels a reservation
    ///
    /// Only the owner or an administrator may cancel.
    pub async fn delete(&self, claims: &Claims, id: i64) -> Result<(), DomainError> {
        let reservation = self.find_by_id(id).await?;
        self.authorize_owner(claims, &reservation).await?;

        if !self.reservations.delete(id).await? {
            return Err(EntityError::ReservationNotFound { id }.into());
        }
        Ok(())
    }

    /// Resolves the booking's owner and applies the owner-or-admin rule
    async fn authorize_owner(
        &self,
        claims: &Claims,
        reservation: &Reservation,
    ) -> Result<(), DomainError> {
        let owner = self
            .users
            .find_by_id(reservation.user_id)
            .await?
            .ok_or(EntityError::UserNotFound {
                id: reservation.user_id,
            })?;
        AuthorizationGuard::authorize_owner_action(Some(claims), &owner.email)
    }
}
