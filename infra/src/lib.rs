//! # Infrastructure Layer
//!
//! Concrete implementations behind the `rb_core` repository and notifier
//! traits: MySQL persistence via SQLx and outbound notification dispatch.

pub mod database;
pub mod email;

pub use database::connection::create_pool;
pub use database::mysql::{MySqlReservationRepository, MySqlRoomRepository, MySqlUserRepository};
pub use email::LoggingReservationNotifier;
