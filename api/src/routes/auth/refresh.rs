use actix_web::{web, HttpResponse};

use crate::dto::{AuthResponse, RefreshTokenRequest};
use crate::handlers::domain_error_response;
use crate::routes::AppState;

/// POST /api/v1/auth/refresh-token
///
/// Exchanges a valid refresh token for a fresh token pair. The account's
/// current role is re-read from the store, so promotions and demotions take
/// effect here.
pub async fn refresh(
    state: web::Data<AppState>,
    body: web::Json<RefreshTokenRequest>,
) -> HttpResponse {
    match state.auth.refresh(&body.refresh_token).await {
        Ok(pair) => HttpResponse::Ok().json(AuthResponse::from(pair)),
        Err(e) => domain_error_response(e),
    }
}
