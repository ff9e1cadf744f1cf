//! Mock implementation of RoomRepository for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::room::Room;
use crate::errors::{DomainError, EntityError};

use super::trait_::RoomRepository;

/// In-memory room repository for testing
pub struct MockRoomRepository {
    rooms: Arc<RwLock<HashMap<i64, Room>>>,
    next_id: AtomicI64,
}

impl MockRoomRepository {
    /// Create a new empty mock repository
    pub fn new() -> Self {
        Self {
            rooms: Arc::new(RwLock::new(HashMap::new())),
            next_id: AtomicI64::new(1),
        }
    }
}

impl Default for MockRoomRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RoomRepository for MockRoomRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<Room>, DomainError> {
        let rooms = self.rooms.read().await;
        Ok(rooms.get(&id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Room>, DomainError> {
        let rooms = self.rooms.read().await;
        let mut all: Vec<Room> = rooms.values().cloned().collect();
        all.sort_by_key(|r| r.id);
        Ok(all)
    }

    async fn create(&self, mut room: Room) -> Result<Room, DomainError> {
        let mut rooms = self.rooms.write().await;

        if rooms.values().any(|r| r.name == room.name) {
            return Err(EntityError::RoomAlreadyExists {
                name: room.name.clone(),
            }
            .into());
        }

        room.id = self.next_id.fetch_add(1, Ordering::SeqCst);
        rooms.insert(room.id, room.clone());
        Ok(room)
    }

    async fn update(&self, room: Room) -> Result<Room, DomainError> {
        let mut rooms = self.rooms.write().await;

        if !rooms.contains_key(&room.id) {
            return Err(EntityError::RoomNotFound { id: room.id }.into());
        }

        rooms.insert(room.id, room.clone());
        Ok(room)
    }

    async fn delete(&self, id: i64) -> Result<bool, DomainError> {
        let mut rooms = self.rooms.write().await;
        Ok(rooms.remove(&id).is_some())
    }

    async fn exists_by_name(&self, name: &str) -> Result<bool, DomainError> {
        let rooms = self.rooms.read().await;
        Ok(rooms.values().any(|r| r.name == name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_rejects_duplicate_names() {
        let repo = MockRoomRepository::new();
        repo.create(Room::new("Board Room", None, 12, "HQ / 5F"))
            .await
            .unwrap();

        let err = repo
            .create(Room::new("Board Room", None, 6, "HQ / 2F"))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            DomainError::Entity(EntityError::RoomAlreadyExists { .. })
        ));
    }

    #[tokio::test]
    async fn test_find_all_sorted_by_id() {
        let repo = MockRoomRepository::new();
        repo.create(Room::new("A", None, 2, "1F")).await.unwrap();
        repo.create(Room::new("B", None, 4, "2F")).await.unwrap();

        let all = repo.find_all().await.unwrap();
        assert_eq!(all.len(), 2);
        assert!(all[0].id < all[1].id);
    }
}
