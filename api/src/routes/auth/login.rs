use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::dto::{AuthResponse, LoginRequest};
use crate::handlers::{domain_error_response, validation_error_response};
use crate::routes::AppState;

/// POST /api/v1/auth/login
///
/// Verifies credentials and returns an access/refresh token pair.
pub async fn login(state: web::Data<AppState>, body: web::Json<LoginRequest>) -> HttpResponse {
    if let Err(errors) = body.validate() {
        return validation_error_response(errors);
    }

    match state.auth.login(&body.email, &body.password).await {
        Ok(pair) => HttpResponse::Ok().json(AuthResponse::from(pair)),
        Err(e) => domain_error_response(e),
    }
}
