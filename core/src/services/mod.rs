//! Business services containing domain logic and use cases.

pub mod auth;
pub mod clock;
pub mod notification;
pub mod reservation;
pub mod room;
pub mod token;
pub mod user;

// Re-export commonly used types
pub use auth::{AuthService, AuthorizationGuard, IdentityResolver};
pub use clock::{Clock, FixedClock, SystemClock};
pub use notification::{NoopReservationNotifier, ReservationConfirmation, ReservationNotifier};
pub use reservation::{ReservationConflictChecker, ReservationService};
pub use room::RoomService;
pub use token::{KeyClass, TokenCodec, TokenService, TokenServiceConfig};
pub use user::UserService;
