//! Authentication and authorization services.

pub mod guard;
pub mod identity;
pub mod service;

#[cfg(test)]
mod tests;

pub use guard::AuthorizationGuard;
pub use identity::IdentityResolver;
pub use service::AuthService;
