use std::sync::Arc;

use actix_web::{middleware::Logger, web, App, HttpResponse, HttpServer};
use log::info;

use rb_api::middleware::create_cors;
use rb_api::routes::{self, AppState};
use rb_core::repositories::{ReservationRepository, RoomRepository, UserRepository};
use rb_core::services::{
    AuthService, ReservationService, RoomService, SystemClock, TokenCodec, TokenService,
    TokenServiceConfig, UserService,
};
use rb_infra::database::create_pool;
use rb_infra::database::mysql::{
    MySqlReservationRepository, MySqlRoomRepository, MySqlUserRepository,
};
use rb_infra::LoggingReservationNotifier;
use rb_shared::config::AppConfig;
use rb_shared::types::response::ErrorResponse;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    info!("Starting RoomBooking API server");

    let config = AppConfig::from_env();
    if config.jwt.is_using_default_secrets() {
        log::warn!(
            "Development JWT secrets in use; set JWT_SECRET and JWT_REFRESH_SECRET in production"
        );
    }

    let pool = create_pool(&config.database)
        .await
        .expect("Failed to connect to MySQL");

    let users: Arc<dyn UserRepository> = Arc::new(MySqlUserRepository::new(pool.clone()));
    let rooms: Arc<dyn RoomRepository> = Arc::new(MySqlRoomRepository::new(pool.clone()));
    let reservations: Arc<dyn ReservationRepository> =
        Arc::new(MySqlReservationRepository::new(pool));

    let codec =
        TokenCodec::from_base64_secrets(&config.jwt.access_secret, &config.jwt.refresh_secret)
            .expect("JWT secrets must be valid base64");
    let tokens = Arc::new(TokenService::new(
        codec,
        Arc::new(SystemClock),
        TokenServiceConfig {
            access_ttl_secs: config.jwt.access_token_expiry,
            refresh_ttl_secs: config.jwt.refresh_token_expiry,
        },
    ));

    let state = AppState {
        auth: Arc::new(AuthService::new(Arc::clone(&users), Arc::clone(&tokens))),
        users: Arc::new(UserService::new(Arc::clone(&users))),
        rooms: Arc::new(RoomService::new(Arc::clone(&rooms))),
        reservations: Arc::new(ReservationService::new(
            reservations,
            Arc::clone(&rooms),
            Arc::clone(&users),
            Arc::new(LoggingReservationNotifier),
        )),
        tokens: Arc::clone(&tokens),
    };

    let bind_address = config.server.bind_address();
    info!("Server listening on {}", bind_address);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(create_cors())
            .app_data(web::Data::new(state.clone()))
            .route("/health", web::get().to(health_check))
            .configure(routes::configure_api(Arc::clone(&state.tokens)))
            .default_service(web::route().to(not_found))
    })
    .bind(&bind_address)?
    .run()
    .await
}

async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "roombooking-api",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse::new(
        "NOT_FOUND",
        "The requested resource was not found",
    ))
}
