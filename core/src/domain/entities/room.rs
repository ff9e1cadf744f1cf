//! Room entity.

use serde::{Deserialize, Serialize};

/// Bookable room entity
///
/// Room names are unique across the system.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    /// Database identifier (assigned on insert)
    pub id: i64,

    /// Unique room name
    pub name: String,

    /// Optional free-form description
    pub description: Option<String>,

    /// Seating capacity
    pub capacity: i32,

    /// Physical location, e.g. building and floor
    pub location: String,
}

impl Room {
    /// Creates a new unsaved room
    pub fn new(
        name: impl Into<String>,
        description: Option<String>,
        capacity: i32,
        location: impl Into<String>,
    ) -> Self {
        Self {
            id: 0,
            name: name.into(),
            description,
            capacity,
            location: location.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_room() {
        let room = Room::new("Board Room", Some("Top floor".to_string()), 12, "HQ / 5F");
        assert_eq!(room.id, 0);
        assert_eq!(room.name, "Board Room");
        assert_eq!(room.capacity, 12);
    }
}
