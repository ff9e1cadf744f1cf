//! MySQL implementation of the RoomRepository trait.

use async_trait::async_trait;
use sqlx::{MySqlPool, Row};

use rb_core::domain::entities::room::Room;
use rb_core::errors::{DomainError, EntityError};
use rb_core::repositories::RoomRepository;

/// MySQL implementation of RoomRepository
pub struct MySqlRoomRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlRoomRepository {
    /// Create a new MySQL room repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert database row to Room entity
    fn row_to_room(row: &sqlx::mysql::MySqlRow) -> Result<Room, DomainError> {
        Ok(Room {
            id: row.try_get("id").map_err(|e| DomainError::Internal {
                message: format!("Failed to get id: {}", e),
            })?,
            name: row.try_get("name").map_err(|e| DomainError::Internal {
                message: format!("Failed to get name: {}", e),
            })?,
            description: row
                .try_get("description")
                .map_err(|e| DomainError::Internal {
                    message: format!("Failed to get description: {}", e),
                })?,
            capacity: row.try_get("capacity").map_err(|e| DomainError::Internal {
                message: format!("Failed to get capacity: {}", e),
            })?,
            location: row.try_get("location").map_err(|e| DomainError::Internal {
                message: format!("Failed to get location: {}", e),
            })?,
        })
    }
}

#[async_trait]
impl RoomRepository for MySqlRoomRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<Room>, DomainError> {
        let query = r#"
            SELECT id, name, description, capacity, location
            FROM rooms
            WHERE id = ?
            LIMIT 1
        "#;

        let result = sqlx::query(query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("Failed to find room by id: {}", e),
            })?;

        match result {
            Some(row) => Ok(Some(Self::row_to_room(&row)?)),
            None => Ok(None),
        }
    }

    async fn find_all(&self) -> Result<Vec<Room>, DomainError> {
        let query = r#"
            SELECT id, name, description, capacity, location
            FROM rooms
            ORDER BY id
        "#;

        let rows = sqlx::query(query)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("Failed to list rooms: {}", e),
            })?;

        rows.iter().map(Self::row_to_room).collect()
    }

    async fn create(&self, mut room: Room) -> Result<Room, DomainError> {
        if self.exists_by_name(&room.name).await? {
            return Err(EntityError::RoomAlreadyExists {
                name: room.name.clone(),
            }
            .into());
        }

        let query = r#"
            INSERT INTO rooms (name, description, capacity, location)
            VALUES (?, ?, ?, ?)
        "#;

        let result = sqlx::query(query)
            .bind(&room.name)
            .bind(&room.description)
            .bind(room.capacity)
            .bind(&room.location)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("Failed to create room: {}", e),
            })?;

        room.id = result.last_insert_id() as i64;
        Ok(room)
    }

    async fn update(&self, room: Room) -> Result<Room, DomainError> {
        let query = r#"
            UPDATE rooms
            SET name = ?, description = ?, capacity = ?, location = ?
            WHERE id = ?
        "#;

        let result = sqlx::query(query)
            .bind(&room.name)
            .bind(&room.description)
            .bind(room.capacity)
            .bind(&room.location)
            .bind(room.id)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("Failed to update room: {}", e),
            })?;

        if result.rows_affected() == 0 {
            return Err(EntityError::RoomNotFound { id: room.id }.into());
        }
        Ok(room)
    }

    async fn delete(&self, id: i64) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM rooms WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("Failed to delete room: {}", e),
            })?;

        Ok(result.rows_affected() > 0)
    }

    async fn exists_by_name(&self, name: &str) -> Result<bool, DomainError> {
        let row = sqlx::query("SELECT EXISTS(SELECT 1 FROM rooms WHERE name = ?) AS present")
            .bind(name)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("Failed to check room existence: {}", e),
            })?;

        let present: i8 = row.try_get("present").map_err(|e| DomainError::Internal {
            message: format!("Failed to get existence result: {}", e),
        })?;
        Ok(present == 1)
    }
}
