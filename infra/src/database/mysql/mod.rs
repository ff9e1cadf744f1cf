//! MySQL repository implementations.

pub mod reservation_repository_impl;
pub mod room_repository_impl;
pub mod user_repository_impl;

pub use reservation_repository_impl::MySqlReservationRepository;
pub use room_repository_impl::MySqlRoomRepository;
pub use user_repository_impl::MySqlUserRepository;
