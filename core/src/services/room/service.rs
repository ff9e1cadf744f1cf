//! Room catalogue operations. Reading is open to any authenticated caller;
//! writing is reserved for administrators.

use std::sync::Arc;

use crate::domain::entities::room::Room;
use crate::domain::entities::token::Claims;
use crate::errors::{DomainError, EntityError};
use crate::repositories::room::r#trait::RoomRepository;
use crate::services::auth::AuthorizationGuard;

/// Service handling the room catalogue
pub struct RoomService {
    rooms: Arc<dyn RoomRepository>,
}

impl RoomService {
    /// Creates a new room service
    pub fn new(rooms: Arc<dyn RoomRepository>) -> Self {
        Self { rooms }
    }

    /// Lists all rooms
    pub async fn find_all(&self) -> Result<Vec<Room>, DomainError> {
        self.rooms.find_all().await
    }

    /// Finds a room by id
    pub async fn find_by_id(&self, id: i64) -> Result<Room, DomainError> {
        self.rooms
            .find_by_id(id)
            .await?
            .ok_or_else(|| EntityError::RoomNotFound { id }.into())
    }

    /// Adds a room to the catalogue (administrators only)
    pub async fn create(
        &self,
        claims: &Claims,
        name: &str,
        description: Option<String>,
        capacity: i32,
        location: &str,
    ) -> Result<Room, DomainError> {
        AuthorizationGuard::require_admin(Some(claims))?;

        if self.rooms.exists_by_name(name).await? {
            return Err(EntityError::RoomAlreadyExists {
                name: name.to_string(),
            }
            .into());
        }

        self.rooms
            .create(Room::new(name, description, capacity, location))
            .await
    }

    /// Updates a room, patching whichever fields are given (administrators
    /// only)
    pub async fn update(
        &self,
        claims: &Claims,
        id: i64,
        name: Option<&str>,
        description: Option<Option<String>>,
        capacity: Option<i32>,
        location: Option<&str>,
    ) -> Result<Room, DomainError> {
        AuthorizationGuard::require_admin(Some(claims))?;

        let mut room = self.find_by_id(id).await?;

        if let Some(name) = name {
            if name != room.name && self.rooms.exists_by_name(name).await? {
                return Err(EntityError::RoomAlreadyExists {
                    name: name.to_string(),
                }
                .into());
            }
            room.name = name.to_string();
        }
        if let Some(description) = description {
            room.description = description;
        }
        if let Some(capacity) = capacity {
            room.capacity = capacity;
        }
        if let Some(location) = location {
            room.location = location.to_string();
        }

        self.rooms.update(room).await
    }

    /// Removes a room from the catalogue (administrators only)
    pub async fn delete(&self, claims: &Claims, id: i64) -> Result<(), DomainError> {
        AuthorizationGuard::require_admin(Some(claims))?;

        if !self.rooms.delete(id).await? {
            return Err(EntityError::RoomNotFound { id }.into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::user::Role;
    use crate::errors::AuthError;
    use crate::repositories::room::mock::MockRoomRepository;
    use chrono::{TimeZone, Utc};

    fn claims_for(subject: &str, role: Role) -> Claims {
        let now = Utc.with_ymd_and_hms(2025, 1, 1, 12, 0, 0).unwrap();
        Claims::new_access_token(subject, role, now, 900)
    }

    fn service() -> RoomService {
        RoomService::new(Arc::new(MockRoomRepository::new()) as Arc<dyn RoomRepository>)
    }

    #[tokio::test]
    async fn test_writes_require_admin() {
        let service = service();
        let user = claims_for("alice@example.com", Role::User);

        let err = service
            .create(&user, "Board Room", None, 12, "HQ / 5F")
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Auth(AuthError::Forbidden)));

        let err = service.delete(&user, 1).await.unwrap_err();
        assert!(matches!(err, DomainError::Auth(AuthError::Forbidden)));
    }

    #[tokio::test]
    async fn test_admin_manages_catalogue() {
        let service = service();
        let admin = claims_for("admin@example.com", Role::Admin);

        let room = service
            .create(&admin, "Board Room", None, 12, "HQ / 5F")
            .await
            .unwrap();
        assert!(room.id > 0);

        let updated = service
            .update(&admin, room.id, None, None, Some(16), None)
            .await
            .unwrap();
        assert_eq!(updated.capacity, 16);
        assert_eq!(updated.name, "Board Room");

        service.delete(&admin, room.id).await.unwrap();
        let err = service.find_by_id(room.id).await.unwrap_err();
        assert!(matches!(
            err,
            DomainError::Entity(EntityError::RoomNotFound { .. })
        ));
    }

    #[tokio::test]
    async fn test_duplicate_names_are_rejected() {
        let service = service();
        let admin = claims_for("admin@example.com", Role::Admin);

        service
            .create(&admin, "Board Room", None, 12, "HQ / 5F")
            .await
            .unwrap();
        let other = service
            .create(&admin, "Huddle", None, 4, "HQ / 2F")
            .await
            .unwrap();

        let err = service
            .create(&admin, "Board Room", None, 6, "HQ / 2F")
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            DomainError::Entity(EntityError::RoomAlreadyExists { .. })
        ));

        let err = service
            .update(&admin, other.id, Some("Board Room"), None, None, None)
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            DomainError::Entity(EntityError::RoomAlreadyExists { .. })
        ));
    }

    #[tokio::test]
    async fn test_anyone_may_read() {
        let service = service();
        let admin = claims_for("admin@example.com", Role::Admin);
        service
            .create(&admin, "Board Room", None, 12, "HQ / 5F")
            .await
            .unwrap();

        let all = service.find_all().await.unwrap();
        assert_eq!(all.len(), 1);
    }
}
