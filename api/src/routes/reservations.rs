//! Reservation endpoints. Bookings always belong to the authenticated
//! caller; rescheduling and cancelling follow the owner-or-admin rule
//! inside the service.

use actix_web::{web, HttpResponse};

use rb_core::services::AuthorizationGuard;

use crate::dto::{CreateReservationRequest, ReservationResponse, UpdateReservationRequest};
use crate::handlers::domain_error_response;
use crate::middleware::AuthContext;
use crate::routes::AppState;

pub fn configure(cfg: &mut web::ServiceConfig) {
    // "/me" must be registered ahead of "/{id}".
    cfg.route("", web::get().to(list))
        .route("", web::post().to(create))
        .route("/me", web::get().to(my_reservations))
        .route("/{id}", web::get().to(get_by_id))
        .route("/{id}", web::put().to(update))
        .route("/{id}", web::delete().to(delete));
}

/// GET /api/v1/reservations (administrators only)
async fn list(state: web::Data<AppState>, ctx: AuthContext) -> HttpResponse {
    if let Err(e) = AuthorizationGuard::require_admin(Some(ctx.claims())) {
        return domain_error_response(e);
    }

    match state.reservations.find_all().await {
        Ok(reservations) => HttpResponse::Ok().json(
            reservations
                .into_iter()
                .map(ReservationResponse::from)
                .collect::<Vec<_>>(),
        ),
        Err(e) => domain_error_response(e),
    }
}

/// GET /api/v1/reservations/me
async fn my_reservations(state: web::Data<AppState>, ctx: AuthContext) -> HttpResponse {
    match state.reservations.find_by_caller(ctx.claims()).await {
        Ok(reservations) => HttpResponse::Ok().json(
            reservations
                .into_iter()
                .map(ReservationResponse::from)
                .collect::<Vec<_>>(),
        ),
        Err(e) => domain_error_response(e),
    }
}

/// GET /api/v1/reservations/{id}
async fn get_by_id(
    state: web::Data<AppState>,
    _ctx: AuthContext,
    path: web::Path<i64>,
) -> HttpResponse {
    match state.reservations.find_by_id(path.into_inner()).await {
        Ok(reservation) => HttpResponse::Ok().json(ReservationResponse::from(reservation)),
        Err(e) => domain_error_response(e),
    }
}

/// POST /api/v1/reservations
async fn create(
    state: web::Data<AppState>,
    ctx: AuthContext,
    body: web::Json<CreateReservationRequest>,
) -> HttpResponse {
    match state
        .reservations
        .create(ctx.claims(), body.room_id, body.start_date, body.end_date)
        .await
    {
        Ok(reservation) => {
            log::info!(
                "Booked room {} for {} from {} to {}",
                reservation.room_id,
                ctx.subject(),
                reservation.start_date,
                reservation.end_date
            );
            HttpResponse::Created().json(ReservationResponse::from(reservation))
        }
        Err(e) => domain_error_response(e),
    }
}

/// PUT /api/v1/reservations/{id} (owner or administrator)
async fn update(
    state: web::Data<AppState>,
    ctx: AuthContext,
    path: web::Path<i64>,
    body: web::Json<UpdateReservationRequest>,
) -> HttpResponse {
    match state
        .reservations
        .update(
            ctx.claims(),
            path.into_inner(),
            body.start_date,
            body.end_date,
        )
        .await
    {
        Ok(reservation) => HttpResponse::Ok().json(ReservationResponse::from(reservation)),
        Err(e) => domain_error_response(e),
    }
}

/// DELETE /api/v1/reservations/{id} (owner or administrator)
async fn delete(
    state: web::Data<AppState>,
    ctx: AuthContext,
    path: web::Path<i64>,
) -> HttpResponse {
    match state
        .reservations
        .delete(ctx.claims(), path.into_inner())
        .await
    {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(e) => domain_error_response(e),
    }
}
