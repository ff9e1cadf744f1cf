use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::dto::{RegisterRequest, UserResponse};
use crate::handlers::{domain_error_response, validation_error_response};
use crate::routes::AppState;

/// POST /api/v1/auth/register
///
/// Creates an account with the default role and returns its public profile.
pub async fn register(
    state: web::Data<AppState>,
    body: web::Json<RegisterRequest>,
) -> HttpResponse {
    if let Err(errors) = body.validate() {
        return validation_error_response(errors);
    }

    match state
        .auth
        .register(&body.name, &body.email, &body.password, &body.phone)
        .await
    {
        Ok(user) => {
            log::info!("Registered account for {}", user.email);
            HttpResponse::Created().json(UserResponse::from(user))
        }
        Err(e) => domain_error_response(e),
    }
}
