//! User management endpoints. Listing is reserved for administrators;
//! updates and deletes follow the owner-or-admin rule inside the service.

use actix_web::{web, HttpResponse};
use validator::Validate;

use rb_core::services::AuthorizationGuard;

use crate::dto::{UpdateUserRequest, UserResponse};
use crate::handlers::{domain_error_response, validation_error_response};
use crate::middleware::AuthContext;
use crate::routes::AppState;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("", web::get().to(list))
        .route("/{id}", web::get().to(get_by_id))
        .route("/{id}", web::put().to(update))
        .route("/{id}", web::delete().to(delete));
}

/// GET /api/v1/users (administrators only)
async fn list(state: web::Data<AppState>, ctx: AuthContext) -> HttpResponse {
    if let Err(e) = AuthorizationGuard::require_admin(Some(ctx.claims())) {
        return domain_error_response(e);
    }

    match state.users.find_all().await {
        Ok(users) => HttpResponse::Ok().json(
            users
                .into_iter()
                .map(UserResponse::from)
                .collect::<Vec<_>>(),
        ),
        Err(e) => domain_error_response(e),
    }
}

/// GET /api/v1/users/{id}
async fn get_by_id(
    state: web::Data<AppState>,
    _ctx: AuthContext,
    path: web::Path<i64>,
) -> HttpResponse {
    match state.users.find_by_id(path.into_inner()).await {
        Ok(user) => HttpResponse::Ok().json(UserResponse::from(user)),
        Err(e) => domain_error_response(e),
    }
}

/// PUT /api/v1/users/{id} (owner or administrator)
async fn update(
    state: web::Data<AppState>,
    ctx: AuthContext,
    path: web::Path<i64>,
    body: web::Json<UpdateUserRequest>,
) -> HttpResponse {
    if let Err(errors) = body.validate() {
        return validation_error_response(errors);
    }

    match state
        .users
        .update(
            ctx.claims(),
            path.into_inner(),
            body.name.as_deref(),
            body.phone.as_deref(),
            body.password.as_deref(),
        )
        .await
    {
        Ok(user) => HttpResponse::Ok().json(UserResponse::from(user)),
        Err(e) => domain_error_response(e),
    }
}

/// DELETE /api/v1/users/{id} (owner or administrator)
async fn delete(
    state: web::Data<AppState>,
    ctx: AuthContext,
    path: web::Path<i64>,
) -> HttpResponse {
    match state.users.delete(ctx.claims(), path.into_inner()).await {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(e) => domain_error_response(e),
    }
}
