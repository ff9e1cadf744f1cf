//! Repository interfaces for durable storage, with in-memory mocks for tests.

pub mod reservation;
pub mod room;
pub mod user;

pub use reservation::{MockReservationRepository, ReservationRepository};
pub use room::{MockRoomRepository, RoomRepository};
pub use user::{MockUserRepository, UserRepository};
