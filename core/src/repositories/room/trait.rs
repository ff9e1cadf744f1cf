//! Room repository trait defining the interface for room persistence.

use async_trait::async_trait;

use crate::domain::entities::room::Room;
use crate::errors::DomainError;

/// Repository contract for Room entities
#[async_trait]
pub trait RoomRepository: Send + Sync {
    /// Find a room by its identifier
    async fn find_by_id(&self, id: i64) -> Result<Option<Room>, DomainError>;

    /// List all rooms
    async fn find_all(&self) -> Result<Vec<Room>, DomainError>;

    /// Persist a new room, returning it with the assigned id
    ///
    /// Fails when the name is already taken.
    async fn create(&self, room: Room) -> Result<Room, DomainError>;

    /// Update an existing room
    async fn update(&self, room: Room) -> Result<Room, DomainError>;

    /// Delete a room by id
    ///
    /// # Returns
    /// * `Ok(true)` - Room was deleted
    /// * `Ok(false)` - Room not found
    async fn delete(&self, id: i64) -> Result<bool, DomainError>;

    /// Check whether a room exists with the given name
    async fn exists_by_name(&self, name: &str) -> Result<bool, DomainError>;
}
