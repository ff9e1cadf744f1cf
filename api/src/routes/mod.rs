//! Route handlers and shared application state.

pub mod auth;
pub mod reservations;
pub mod rooms;
pub mod users;

use std::sync::Arc;

use actix_web::web;

use rb_core::services::{
    AuthService, ReservationService, RoomService, TokenService, UserService,
};

use crate::middleware::JwtAuth;

/// Shared service container injected into every handler
#[derive(Clone)]
pub struct AppState {
    pub auth: Arc<AuthService>,
    pub users: Arc<UserService>,
    pub rooms: Arc<RoomService>,
    pub reservations: Arc<ReservationService>,
    pub tokens: Arc<TokenService>,
}

/// Registers the `/api/v1` route tree
///
/// Authentication endpoints are public apart from `/auth/me`; every other
/// scope sits behind the JWT middleware.
pub fn configure_api(tokens: Arc<TokenService>) -> impl FnOnce(&mut web::ServiceConfig) {
    move |cfg| {
        cfg.service(
            web::scope("/api/v1")
                .service(
                    web::scope("/auth")
                        .route("/register", web::post().to(auth::register))
                        .route("/login", web::post().to(auth::login))
                        .route("/refresh-token", web::post().to(auth::refresh))
                        .service(
                            web::resource("/me")
                                .wrap(JwtAuth::new(Arc::clone(&tokens)))
                                .route(web::get().to(auth::me)),
                        ),
                )
                .service(
                    web::scope("/users")
                        .configure(users::configure)
                        .wrap(JwtAuth::new(Arc::clone(&tokens))),
                )
                .service(
                    web::scope("/rooms")
                        .configure(rooms::configure)
                        .wrap(JwtAuth::new(Arc::clone(&tokens))),
                )
                .service(
                    web::scope("/reservations")
                        .configure(reservations::configure)
                        .wrap(JwtAuth::new(tokens)),
                ),
        );
    }
}
