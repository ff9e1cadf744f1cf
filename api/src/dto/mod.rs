//! Request and response data transfer objects.

pub mod auth;
pub mod reservation;
pub mod room;
pub mod user;

pub use auth::{AuthResponse, LoginRequest, RefreshTokenRequest, RegisterRequest};
pub use reservation::{CreateReservationRequest, ReservationResponse, UpdateReservationRequest};
pub use room::{CreateRoomRequest, RoomResponse, UpdateRoomRequest};
pub use user::{UpdateUserRequest, UserResponse};
