
use std::sync::Arc;

use chrono::{DateTime, TimeZone, Utc};

use crate::domain::entities::room::Room;
use crate::domain::entities::token::Claims;
use crate::domain::entities::user::{Role, User};
use crate::repositories::reservation::mock::MockReservationRepository;
use crate::repositories::reservation::r#trait::ReservationRepository;
use crate::repositories::room::mock::MockRoomRepository;
use crate::repositories::room::r#trait::RoomRepository;
use crate::repositories::user::mock::MockUserRepository;
use crate::repositories::user::r#trait::UserRepository;
use crate::services::notification::ReservationNotifier;

use super::ReservationService;

pub(crate) fn at(hour: u32, min: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 1, 1, hour, min, 0).unwrap()
}

pub(crate) fn claims_for(subject: &str, role: Role) -> Claims {
    Claims::new_access_token(subject, role, at(8, 0), 900)
}

pub(crate) struct Fixture {
    pub service: ReservationService,
    pub users: Arc<MockUserRepository>,
    pub rooms: Arc<MockRoomRepository>,
    pub reservations: Arc<MockReservationRepository>,
}

/// Seeds a room and three accounts: alice, bob, and an administrator.
pub(crate) async fn fixture_with_notifier(notifier: Arc<dyn ReservationNotifier>) -> Fixture {
    let users = Arc::new(MockUserRepository::new());
    let rooms = Arc::new(MockRoomRepository::new());
    let reservations = Arc::new(MockReservationRepository::new());

    users
        .create(User::new("Alice", "alice@example.com", "hash", "111"))
        .await
        .unwrap();
    users
        .create(User::new("Bob", "bob@example.com", "hash", "222"))
        .await
        .unwrap();
    let mut admin = User::new("Admin", "admin@example.com", "hash", "333");
    admin.role = Role::Admin;
    users.create(admin).await.unwrap();

    rooms
        .create(Room::new("Board Room", None, 12, "HQ / 5F"))
        .await
        .unwrap();

    let service = ReservationService::new(
        Arc::clone(&reservations) as Arc<dyn ReservationRepository>,
        Arc::clone(&rooms) as Arc<dyn RoomRepository>,
        Arc::clone(&users) as Arc<dyn UserRepository>,
        notifier,
    );

    Fixture {
        service,
        users,
        rooms,
        reservations,
    }
}

pub(crate) async fn fixture() -> Fixture {
    use crate::services::notification::NoopReservationNotifier;
    fixture_with_notifier(Arc::new(NoopReservationNotifier)).await
}
