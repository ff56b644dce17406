//! Booking handlers

use axum::{extract::State, Json};
use lab_service::dto::{BookingEnvelope, BookingListResponse, CreateBookingRequest};
use lab_service::BookingService;

use crate::extractors::{AuthUser, OptionalAuthUser, Pagination, UuidPath, ValidatedJson};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// Book a package. Guests may book; a signed-in caller owns the booking.
///
/// POST /api/bookings
pub async fn create_booking(
    State(state): State<AppState>,
    auth: OptionalAuthUser,
    ValidatedJson(request): ValidatedJson<CreateBookingRequest>,
) -> ApiResult<Created<Json<BookingEnvelope>>> {
    let service = BookingService::new(state.service_context());
    let booking = service.create(auth.id(), request).await?;
    Ok(Created(Json(BookingEnvelope::with_message(
        "Booking created successfully",
        booking,
    ))))
}

/// GET /api/bookings
pub async fn list_bookings(
    State(state): State<AppState>,
    auth: AuthUser,
    Pagination(page): Pagination,
) -> ApiResult<Json<BookingListResponse>> {
    let service = BookingService::new(state.service_context());
    Ok(Json(service.list(auth.id(), page).await?))
}

/// GET /api/bookings/:id
pub async fn get_booking(
    State(state): State<AppState>,
    auth: AuthUser,
    UuidPath(booking_id): UuidPath,
) -> ApiResult<Json<BookingEnvelope>> {
    let service = BookingService::new(state.service_context());
    let booking = service.get(auth.id(), booking_id).await?;
    Ok(Json(BookingEnvelope::new(booking)))
}

/// PATCH /api/bookings/:id/cancel
pub async fn cancel_booking(
    State(state): State<AppState>,
    auth: AuthUser,
    UuidPath(booking_id): UuidPath,
) -> ApiResult<Json<BookingEnvelope>> {
    let service = BookingService::new(state.service_context());
    let booking = service.cancel(auth.id(), booking_id).await?;
    Ok(Json(BookingEnvelope::with_message(
        "Booking cancelled successfully",
        booking,
    )))
}
