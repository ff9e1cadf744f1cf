//! Outbound notification dispatch.
//!
//! There is no SMTP integration yet; confirmations are written to the log
//! so the dispatch path is exercised end to end.

use async_trait::async_trait;

use rb_core::errors::DomainError;
use rb_core::services::notification::{ReservationConfirmation, ReservationNotifier};

/// Notifier that logs each confirmation instead of sending mail
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingReservationNotifier;

#[async_trait]
impl ReservationNotifier for LoggingReservationNotifier {
    async fn notify_confirmation(
        &self,
        confirmation: &ReservationConfirmation,
    ) -> Result<(), DomainError> {
        tracing::info!(
            recipient = %confirmation.recipient,
            room = %confirmation.room_name,
            start = %confirmation.start_date,
            end = %confirmation.end_date,
            "Reservation confirmed for {}",
            confirmation.recipient_name
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[tokio::test]
    async fn test_logging_notifier_never_fails() {
        let notifier = LoggingReservationNotifier;
        let confirmation = ReservationConfirmation {
            recipient: "alice@example.com".to_string(),
            recipient_name: "Alice".to_string(),
            room_name: "Board Room".to_string(),
            start_date: Utc.with_ymd_and_hms(2025, 1, 1, 10, 0, 0).unwrap(),
            end_date: Utc.with_ymd_and_hms(2025, 1, 1, 11, 0, 0).unwrap(),
        };
        assert!(notifier.notify_confirmation(&confirmation).await.is_ok());
    }
}
