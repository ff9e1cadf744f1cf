//! Mock implementation of ReservationRepository for testing
//!
//! The mock is a plain in-memory store: it answers the overlap query but
//! performs no write-side overlap enforcement. The transactional guarantee
//! described on the trait belongs to durable implementations and cannot be
//! exercised without a real store.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::reservation::Reservation;
use crate::errors::{DomainError, EntityError};

use super::trait_::ReservationRepository;

/// In-memory reservation repository for testing
pub struct MockReservationRepository {
    reservations: Arc<RwLock<HashMap<i64, Reservation>>>,
    next_id: AtomicI64,
}

impl MockReservationRepository {
    /// Create a new empty mock repository
    pub fn new() -> Self {
        Self {
            reservations: Arc::new(RwLock::new(HashMap::new())),
            next_id: AtomicI64::new(1),
        }
    }
}

impl Default for MockReservationRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ReservationRepository for MockReservationRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<Reservation>, DomainError> {
        let reservations = self.reservations.read().await;
        Ok(reservations.get(&id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Reservation>, DomainError> {
        let reservations = self.reservations.read().await;
        let mut all: Vec<Reservation> = reservations.values().cloned().collect();
        all.sort_by_key(|r| r.id);
        Ok(all)
    }

    async fn find_by_user_id(&self, user_id: i64) -> Result<Vec<Reservation>, DomainError> {
        let reservations = self.reservations.read().await;
        let mut owned: Vec<Reservation> = reservations
            .values()
            .filter(|r| r.user_id == user_id)
            .cloned()
            .collect();
        owned.sort_by_key(|r| r.id);
        Ok(owned)
    }

    async fn find_overlapping(
        &self,
        room_id: i64,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<Reservation>, DomainError> {
        let reservations = self.reservations.read().await;
        let mut overlapping: Vec<Reservation> = reservations
            .values()
            .filter(|r| r.room_id == room_id && r.overlaps(start, end))
            .cloned()
            .collect();
        overlapping.sort_by_key(|r| r.id);
        Ok(overlapping)
    }

    async fn create(&self, mut reservation: Reservation) -> Result<Reservation, DomainError> {
        let mut reservations = self.reservations.write().await;
        reservation.id = self.next_id.fetch_add(1, Ordering::SeqCst);
        reservations.insert(reservation.id, reservation.clone());
        Ok(reservation)
    }

    async fn update(&self, reservation: Reservation) -> Result<Reservation, DomainError> {
        let mut reservations = self.reservations.write().await;

        if !reservations.contains_key(&reservation.id) {
            return Err(EntityError::ReservationNotFound {
                id: reservation.id,
            }
            .into());
        }

        reservations.insert(reservation.id, reservation.clone());
        Ok(reservation)
    }

    async fn delete(&self, id: i64) -> Result<bool, DomainError> {
        let mut reservations = self.reservations.write().await;
        Ok(reservations.remove(&id).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(hour: u32, min: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, 1, hour, min, 0).unwrap()
    }

    #[tokio::test]
    async fn test_find_overlapping_uses_half_open_intervals() {
        let repo = MockReservationRepository::new();
        repo.create(Reservation::new(1, 1, at(10, 0), at(11, 0)))
            .await
            .unwrap();

        let hits = repo.find_overlapping(1, at(10, 30), at(11, 30)).await.unwrap();
        assert_eq!(hits.len(), 1);

        // Touching intervals do not overlap.
        let hits = repo.find_overlapping(1, at(11, 0), at(12, 0)).await.unwrap();
        assert!(hits.is_empty());

        // Other rooms are never considered.
        let hits = repo.find_overlapping(2, at(10, 0), at(11, 0)).await.unwrap();
        assert!(hits.is_empty());
    }

    #[tokio::test]
    async fn test_find_by_user_id() {
        let repo = MockReservationRepository::new();
        repo.create(Reservation::new(1, 7, at(10, 0), at(11, 0)))
            .await
            .unwrap();
        repo.create(Reservation::new(1, 8, at(12, 0), at(13, 0)))
            .await
            .unwrap();

        let owned = repo.find_by_user_id(7).await.unwrap();
        assert_eq!(owned.len(), 1);
        assert_eq!(owned[0].user_id, 7);
    }
}
