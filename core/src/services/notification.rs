//! Reservation confirmation notifications.
//!
//! Delivery is best-effort: booking succeeds or fails on the store write
//! alone, and a notifier failure is logged by the caller, never propagated.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::errors::DomainError;

/// Confirmation details handed to the notifier after a successful booking
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReservationConfirmation {
    /// Recipient email address
    pub recipient: String,
    /// Recipient display name
    pub recipient_name: String,
    /// Booked room name
    pub room_name: String,
    /// Reservation start
    pub start_date: DateTime<Utc>,
    /// Reservation end
    pub end_date: DateTime<Utc>,
}

/// Outbound notification channel for booking confirmations
#[async_trait]
pub trait ReservationNotifier: Send + Sync {
    /// Send a booking confirmation
    async fn notify_confirmation(
        &self,
        confirmation: &ReservationConfirmation,
    ) -> Result<(), DomainError>;
}

/// Notifier that drops all notifications, for tests and minimal deployments
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopReservationNotifier;

#[async_trait]
impl ReservationNotifier for NoopReservationNotifier {
    async fn notify_confirmation(
        &self,
        _confirmation: &ReservationConfirmation,
    ) -> Result<(), DomainError> {
        Ok(())
    }
}
