//! Room catalogue management.

pub mod service;

pub use service::RoomService;
