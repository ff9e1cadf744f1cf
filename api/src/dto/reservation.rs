use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use rb_core::domain::entities::reservation::Reservation;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReservationResponse {
    pub id: i64,
    pub room_id: i64,
    pub user_id: i64,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
}

impl From<Reservation> for ReservationResponse {
    fn from(reservation: Reservation) -> Self {
        Self {
            id: reservation.id,
            room_id: reservation.room_id,
            user_id: reservation.user_id,
            start_date: reservation.start_date,
            end_date: reservation.end_date,
        }
    }
}

/// Booking request; interval bounds are validated by the conflict checker
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateReservationRequest {
    pub room_id: i64,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
}

/// Partial reschedule; absent bounds are left unchanged
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateReservationRequest {
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_create_request_parses_rfc3339() {
        let json = r#"{
            "room_id": 1,
            "start_date": "2025-01-01T10:00:00Z",
            "end_date": "2025-01-01T11:00:00Z"
        }"#;
        let req: CreateReservationRequest = serde_json::from_str(json).unwrap();
        assert_eq!(
            req.start_date,
            Utc.with_ymd_and_hms(2025, 1, 1, 10, 0, 0).unwrap()
        );
        assert!(req.start_date < req.end_date);
    }
}
