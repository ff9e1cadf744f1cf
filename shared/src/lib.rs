//! # RoomBooking Shared
//!
//! Cross-cutting types shared by every layer of the RoomBooking backend:
//! configuration structures and common API response types.

pub mod config;
pub mod types;

pub use config::AppConfig;
pub use types::response::ErrorResponse;
