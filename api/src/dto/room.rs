use serde::{Deserialize, Serialize};
use validator::Validate;

use rb_core::domain::entities::room::Room;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomResponse {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub capacity: i32,
    pub location: String,
}

impl From<Room> for RoomResponse {
    fn from(room: Room) -> Self {
        Self {
            id: room.id,
            name: room.name,
            description: room.description,
            capacity: room.capacity,
            location: room.location,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateRoomRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[validate(length(max = 500))]
    pub description: Option<String>,
    #[validate(range(min = 1, max = 10_000))]
    pub capacity: i32,
    #[validate(length(min = 1, max = 200))]
    pub location: String,
}

/// Partial room update; absent fields are left unchanged
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateRoomRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: Option<String>,
    #[validate(length(max = 500))]
    pub description: Option<String>,
    #[validate(range(min = 1, max = 10_000))]
    pub capacity: Option<i32>,
    #[validate(length(min = 1, max = 200))]
    pub location: Option<String>,
}
