//! Reservation booking services.

pub mod conflict;
pub mod service;

#[cfg(test)]
mod tests;

pub use conflict::ReservationConflictChecker;
pub use service::ReservationService;
