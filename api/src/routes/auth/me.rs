use actix_web::{web, HttpResponse};

use crate::dto::UserResponse;
use crate::handlers::domain_error_response;
use crate::middleware::AuthContext;
use crate::routes::AppState;

/// GET /api/v1/auth/me
///
/// Returns the profile behind the presented access token.
pub async fn me(state: web::Data<AppState>, ctx: AuthContext) -> HttpResponse {
    match state.auth.current_user(ctx.claims()).await {
        Ok(user) => HttpResponse::Ok().json(UserResponse::from(user)),
        Err(e) => domain_error_response(e),
    }
}
