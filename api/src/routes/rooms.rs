//! Room catalogue endpoints. Reads are open to any authenticated caller;
//! writes are restricted to administrators inside the service.

use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::dto::{CreateRoomRequest, RoomResponse, UpdateRoomRequest};
use crate::handlers::{domain_error_response, validation_error_response};
use crate::middleware::AuthContext;
use crate::routes::AppState;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("", web::get().to(list))
        .route("", web::post().to(create))
        .route("/{id}", web::get().to(get_by_id))
        .route("/{id}", web::put().to(update))
        .route("/{id}", web::delete().to(delete));
}

/// GET /api/v1/rooms
async fn list(state: web::Data<AppState>, _ctx: AuthContext) -> HttpResponse {
    match state.rooms.find_all().await {
        Ok(rooms) => HttpResponse::Ok().json(
            rooms
                .into_iter()
                .map(RoomResponse::from)
                .collect::<Vec<_>>(),
        ),
        Err(e) => domain_error_response(e),
    }
}

/// GET /api/v1/rooms/{id}
async fn get_by_id(
    state: web::Data<AppState>,
    _ctx: AuthContext,
    path: web::Path<i64>,
) -> HttpResponse {
    match state.rooms.find_by_id(path.into_inner()).await {
        Ok(room) => HttpResponse::Ok().json(RoomResponse::from(room)),
        Err(e) => domain_error_response(e),
    }
}

/// POST /api/v1/rooms (administrators only)
async fn create(
    state: web::Data<AppState>,
    ctx: AuthContext,
    body: web::Json<CreateRoomRequest>,
) -> HttpResponse {
    if let Err(errors) = body.validate() {
        return validation_error_response(errors);
    }

    match state
        .rooms
        .create(
            ctx.claims(),
            &body.name,
            body.description.clone(),
            body.capacity,
            &body.location,
        )
        .await
    {
        Ok(room) => HttpResponse::Created().json(RoomResponse::from(room)),
        Err(e) => domain_error_response(e),
    }
}

/// PUT /api/v1/rooms/{id} (administrators only)
async fn update(
    state: web::Data<AppState>,
    ctx: AuthContext,
    path: web::Path<i64>,
    body: web::Json<UpdateRoomRequest>,
) -> HttpResponse {
    if let Err(errors) = body.validate() {
        return validation_error_response(errors);
    }

    match state
        .rooms
        .update(
            ctx.claims(),
            path.into_inner(),
            body.name.as_deref(),
            body.description.clone().map(Some),
            body.capacity,
            body.location.as_deref(),
        )
        .await
    {
        Ok(room) => HttpResponse::Ok().json(RoomResponse::from(room)),
        Err(e) => domain_error_response(e),
    }
}

/// DELETE /api/v1/rooms/{id} (administrators only)
async fn delete(
    state: web::Data<AppState>,
    ctx: AuthContext,
    path: web::Path<i64>,
) -> HttpResponse {
    match state.rooms.delete(ctx.claims(), path.into_inner()).await {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(e) => domain_error_response(e),
    }
}
