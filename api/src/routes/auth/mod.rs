//! Authentication endpoints: register, login, refresh, and current user.

mod login;
mod me;
mod refresh;
mod register;

pub use login::login;
pub use me::me;
pub use refresh::refresh;
pub use register::register;
