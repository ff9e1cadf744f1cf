//! # RoomBooking API
//!
//! HTTP layer for the RoomBooking backend: route handlers, request/response
//! DTOs, JWT authentication middleware, and the domain-error-to-HTTP
//! mapping.

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
