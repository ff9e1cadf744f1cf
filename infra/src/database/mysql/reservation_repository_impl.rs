//! MySQL implementation of the ReservationRepository trait.
//!
//! Writes run inside a transaction that re-checks for overlapping rows with
//! `SELECT ... FOR UPDATE` before inserting or updating. The row locks make
//! concurrent overlapping candidates serialize: the first commit wins and
//! the loser observes the conflict on its re-check. The service-level
//! pre-check exists only for friendly errors; this re-check is the
//! integrity guarantee.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};

use rb_core::domain::entities::reservation::Reservation;
use rb_core::errors::{DomainError, EntityError};
use rb_core::repositories::ReservationRepository;

/// MySQL implementation of ReservationRepository
pub struct MySqlReservationRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlReservationRepository {
    /// Create a new MySQL reservation repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert database row to Reservation entity
    fn row_to_reservation(row: &sqlx::mysql::MySqlRow) -> Result<Reservation, DomainError> {
        Ok(Reservation {
            id: row.try_get("id").map_err(|e| DomainError::Internal {
                message: format!("Failed to get id: {}", e),
            })?,
            room_id: row.try_get("room_id").map_err(|e| DomainError::Internal {
                message: format!("Failed to get room_id: {}", e),
            })?,
            user_id: row.try_get("user_id").map_err(|e| DomainError::Internal {
                message: format!("Failed to get user_id: {}", e),
            })?,
            start_date: row
                .try_get::<DateTime<Utc>, _>("start_date")
                .map_err(|e| DomainError::Internal {
                    message: format!("Failed to get start_date: {}", e),
                })?,
            end_date: row
                .try_get::<DateTime<Utc>, _>("end_date")
                .map_err(|e| DomainError::Internal {
                    message: format!("Failed to get end_date: {}", e),
                })?,
        })
    }

    /// Locks and returns the first row overlapping `[start, end)` for the
    /// room, excluding `excluding` when given
    ///
    /// Runs inside the caller's transaction so the lock is held until commit.
    async fn lock_conflicting_row(
        tx: &mut sqlx::Transaction<'_, sqlx::MySql>,
        room_id: i64,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        excluding: Option<i64>,
    ) -> Result<Option<(DateTime<Utc>, DateTime<Utc>, String)>, DomainError> {
        let query = r#"
            SELECT r.start_date, r.end_date, rm.name AS room_name
            FROM reservations r
            JOIN rooms rm ON rm.id = r.room_id
            WHERE r.room_id = ?
                AND r.start_date < ?
                AND r.end_date > ?
                AND r.id <> ?
            ORDER BY r.id
            LIMIT 1
            FOR UPDATE
        "#;

        let row = sqlx::query(query)
            .bind(room_id)
            .bind(end)
            .bind(start)
            .bind(excluding.unwrap_or(0))
            .fetch_optional(&mut **tx)
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("Failed to re-check reservation overlap: {}", e),
            })?;

        match row {
            Some(row) => {
                let start = row
                    .try_get::<DateTime<Utc>, _>("start_date")
                    .map_err(|e| DomainError::Internal {
                        message: format!("Failed to get start_date: {}", e),
                    })?;
                let end = row
                    .try_get::<DateTime<Utc>, _>("end_date")
                    .map_err(|e| DomainError::Internal {
                        message: format!("Failed to get end_date: {}", e),
                    })?;
                let room_name =
                    row.try_get("room_name").map_err(|e| DomainError::Internal {
                        message: format!("Failed to get room_name: {}", e),
                    })?;
                Ok(Some((start, end, room_name)))
            }
            None => Ok(None),
        }
    }
}

#[async_trait]
impl ReservationRepository for MySqlReservationRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<Reservation>, DomainError> {
        let query = r#"
            SELECT id, room_id, user_id, start_date, end_date
            FROM reservations
            WHERE id = ?
            LIMIT 1
        "#;

        let result = sqlx::query(query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("Failed to find reservation by id: {}", e),
            })?;

        match result {
            Some(row) => Ok(Some(Self::row_to_reservation(&row)?)),
            None => Ok(None),
        }
    }

    async fn find_all(&self) -> Result<Vec<Reservation>, DomainError> {
        let query = r#"
            SELECT id, room_id, user_id, start_date, end_date
            FROM reservations
            ORDER BY id
        "#;

        let rows = sqlx::query(query)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("Failed to list reservations: {}", e),
            })?;

        rows.iter().map(Self::row_to_reservation).collect()
    }

    async fn find_by_user_id(&self, user_id: i64) -> Result<Vec<Reservation>, DomainError> {
        let query = r#"
            SELECT id, room_id, user_id, start_date, end_date
            FROM reservations
            WHERE user_id = ?
            ORDER BY id
        "#;

        let rows = sqlx::query(query)
            .bind(user_id)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("Failed to list reservations by user: {}", e),
            })?;

        rows.iter().map(Self::row_to_reservation).collect()
    }

    async fn find_overlapping(
        &self,
        room_id: i64,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<Reservation>, DomainError> {
        let query = r#"
            SELECT id, room_id, user_id, start_date, end_date
            FROM reservations
            WHERE room_id = ?
                AND start_date < ?
                AND end_date > ?
            ORDER BY id
        "#;

        let rows = sqlx::query(query)
            .bind(room_id)
            .bind(end)
            .bind(start)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("Failed to query overlapping reservations: {}", e),
            })?;

        rows.iter().map(Self::row_to_reservation).collect()
    }

    async fn create(&self, mut reservation: Reservation) -> Result<Reservation, DomainError> {
        let mut tx = self.pool.begin().await.map_err(|e| DomainError::Internal {
            message: format!("Failed to begin transaction: {}", e),
        })?;

        if let Some((start, end, room_name)) = Self::lock_conflicting_row(
            &mut tx,
            reservation.room_id,
            reservation.start_date,
            reservation.end_date,
            None,
        )
        .await?
        {
            return Err(EntityError::ReservationConflict {
                start,
                end,
                room_name,
            }
            .into());
        }

        let query = r#"
            INSERT INTO reservations (room_id, user_id, start_date, end_date)
            VALUES (?, ?, ?, ?)
        "#;

        let result = sqlx::query(query)
            .bind(reservation.room_id)
            .bind(reservation.user_id)
            .bind(reservation.start_date)
            .bind(reservation.end_date)
            .execute(&mut *tx)
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("Failed to create reservation: {}", e),
            })?;

        reservation.id = result.last_insert_id() as i64;

        tx.commit().await.map_err(|e| DomainError::Internal {
            message: format!("Failed to commit reservation: {}", e),
        })?;
        Ok(reservation)
    }

    async fn update(&self, reservation: Reservation) -> Result<Reservation, DomainError> {
        let mut tx = self.pool.begin().await.map_err(|e| DomainError::Internal {
            message: format!("Failed to begin transaction: {}", e),
        })?;

        if let Some((start, end, room_name)) = Self::lock_conflicting_row(
            &mut tx,
            reservation.room_id,
            reservation.start_date,
            reservation.end_date,
            Some(reservation.id),
        )
        .await?
        {
            return Err(EntityError::ReservationConflict {
                start,
                end,
                room_name,
            }
            .into());
        }

        let query = r#"
            UPDATE reservations
            SET room_id = ?, user_id = ?, start_date = ?, end_date = ?
            WHERE id = ?
        "#;

        let result = sqlx::query(query)
            .bind(reservation.room_id)
            .bind(reservation.user_id)
            .bind(reservation.start_date)
            .bind(reservation.end_date)
            .bind(reservation.id)
            .execute(&mut *tx)
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("Failed to update reservation: {}", e),
            })?;

        if result.rows_affected() == 0 {
            return Err(EntityError::ReservationNotFound {
                id: reservation.id,
            }
            .into());
        }

        tx.commit().await.map_err(|e| DomainError::Internal {
            message: format!("Failed to commit reservation update: {}", e),
        })?;
        Ok(reservation)
    }

    async fn delete(&self, id: i64) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM reservations WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("Failed to delete reservation: {}", e),
            })?;

        Ok(result.rows_affected() > 0)
    }
}
