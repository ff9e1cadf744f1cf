//! Domain layer containing business entities and invariants.

pub mod entities;

// Re-export commonly used domain types
pub use entities::*;
