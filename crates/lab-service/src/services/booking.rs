//! Booking service
//!
//! Creates, lists and cancels sample collection bookings.

use chrono::{FixedOffset, NaiveDate, Utc};
use lab_core::entities::{Booking, BookingStatus, CollectionType};
use lab_core::value_objects::PageRequest;
use lab_core::DomainError;
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::dto::{BookingListResponse, BookingResponse, CreateBookingRequest};

use super::auth::normalize_email;
use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// India Standard Time, UTC+05:30
const IST_OFFSET_SECS: i32 = 5 * 3600 + 30 * 60;

/// Today's date at the labs
fn today_ist() -> NaiveDate {
    let now = Utc::now();
    FixedOffset::east_opt(IST_OFFSET_SECS)
        .map_or_else(|| now.date_naive(), |ist| now.with_timezone(&ist).date_naive())
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Booking service
pub struct BookingService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> BookingService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Create a booking for a guest (`user_id = None`) or a signed-in user
    #[instrument(skip(self, request), fields(package_id = request.package_id))]
    pub async fn create(
        &self,
        user_id: Option<Uuid>,
        request: CreateBookingRequest,
    ) -> ServiceResult<BookingResponse> {
        if request.preferred_date < today_ist() {
            return Err(DomainError::PreferredDateInPast.into());
        }

        let address = non_empty(request.address);
        if request.collection_type == CollectionType::Home && address.is_none() {
            return Err(ServiceError::validation(
                "Address is required for home collection",
            ));
        }

        if self
            .ctx
            .package_repo()
            .find_by_id(request.package_id)
            .await?
            .is_none()
        {
            return Err(DomainError::PackageNotFound(request.package_id.to_string()).into());
        }

        let now = Utc::now();
        let booking = Booking {
            id: Uuid::new_v4(),
            user_id,
            package_id: request.package_id,
            patient_name: request.patient_name.trim().to_string(),
            email: normalize_email(&request.email),
            phone: request.phone.trim().to_string(),
            address,
            preferred_date: request.preferred_date,
            preferred_time: non_empty(request.preferred_time),
            collection_type: request.collection_type,
            status: BookingStatus::Pending,
            notes: non_empty(request.notes),
            created_at: now,
            updated_at: now,
        };

        self.ctx.booking_repo().create(&booking).await?;

        info!(booking_id = %booking.id, guest = user_id.is_none(), "Booking created");
        Ok(BookingResponse::from(&booking))
    }

    /// The caller's bookings, newest first
    #[instrument(skip(self))]
    pub async fn list(&self, user_id: Uuid, page: PageRequest) -> ServiceResult<BookingListResponse> {
        let bookings = self.ctx.booking_repo().list_by_user(user_id, page).await?;
        let items = bookings.iter().map(BookingResponse::from).collect();
        Ok(BookingListResponse::new(items, page))
    }

    /// One of the caller's bookings
    #[instrument(skip(self))]
    pub async fn get(&self, user_id: Uuid, booking_id: Uuid) -> ServiceResult<BookingResponse> {
        let booking = self.load_owned(user_id, booking_id).await?;
        Ok(BookingResponse::from(&booking))
    }

    /// Cancel one of the caller's bookings while it is still pending or confirmed
    #[instrument(skip(self))]
    pub async fn cancel(&self, user_id: Uuid, booking_id: Uuid) -> ServiceResult<BookingResponse> {
        let mut booking = self.load_owned(user_id, booking_id).await?;

        if !booking.status.is_cancellable() {
            warn!(status = %booking.status, "Cancellation rejected");
            return Err(DomainError::BookingNotCancellable(booking.status).into());
        }

        if !self.ctx.booking_repo().cancel(booking.id).await? {
            // Status moved on between the read and the update
            let current = self.load_owned(user_id, booking_id).await?.status;
            warn!(status = %current, "Cancellation lost to a concurrent status change");
            return Err(DomainError::BookingNotCancellable(current).into());
        }
        booking.cancel();

        info!(booking_id = %booking.id, "Booking cancelled");
        Ok(BookingResponse::from(&booking))
    }

    /// Someone else's booking is indistinguishable from a missing one
    async fn load_owned(&self, user_id: Uuid, booking_id: Uuid) -> ServiceResult<Booking> {
        self.ctx
            .booking_repo()
            .find_by_id(booking_id)
            .await?
            .filter(|b| b.is_owned_by(user_id))
            .ok_or_else(|| DomainError::BookingNotFound(booking_id).into())
    }
}
