//! Domain entities representing core business objects.

pub mod reservation;
pub mod room;
pub mod token;
pub mod user;

// Re-export commonly used types
pub use reservation::Reservation;
pub use room::Room;
pub use token::{
    Claims, TokenPair, DEFAULT_ACCESS_TOKEN_EXPIRY_SECS, DEFAULT_REFRESH_TOKEN_EXPIRY_SECS,
    JWT_AUDIENCE, JWT_ISSUER,
};
pub use user::{Role, User};
