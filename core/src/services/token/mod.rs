//! JWT token issuance and validation.

pub mod codec;
pub mod config;
pub mod service;

#[cfg(test)]
mod tests;

pub use codec::{KeyClass, TokenCodec};
pub use config::TokenServiceConfig;
pub use service::TokenService;
