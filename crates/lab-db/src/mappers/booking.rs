//! Booking entity <-> model mapper

use chrono::NaiveDate;
use lab_core::entities::{Booking, BookingStatus, CollectionType};
use uuid::Uuid;

use crate::models::BookingModel;

/// Convert BookingModel to Booking entity
impl From<BookingModel> for Booking {
    fn from(model: BookingModel) -> Self {
        Booking {
            id: model.id,
            user_id: model.user_id,
            package_id: model.package_id,
            patient_name: model.patient_name,
            email: model.email,
            phone: model.phone,
            address: model.address,
            preferred_date: model.preferred_date,
            preferred_time: model.preferred_time,
            collection_type: CollectionType::from(model.collection_type.as_str()),
            status: BookingStatus::from(model.status.as_str()),
            notes: model.notes,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

/// Booking values for database insertion
pub struct BookingInsert<'a> {
    pub id: Uuid,
    pub user_id: Option<Uuid>,
    pub package_id: i64,
    pub patient_name: &'a str,
    pub email: &'a str,
    pub phone: &'a str,
    pub address: Option<&'a str>,
    pub preferred_date: NaiveDate,
    pub preferred_time: Option<&'a str>,
    pub collection_type: &'static str,
    pub status: &'static str,
    pub notes: Option<&'a str>,
}

impl<'a> BookingInsert<'a> {
    pub fn new(booking: &'a Booking) -> Self {
        Self {
            id: booking.id,
            user_id: booking.user_id,
            package_id: booking.package_id,
            patient_name: &booking.patient_name,
            email: &booking.email,
            phone: &booking.phone,
            address: booking.address.as_deref(),
            preferred_date: booking.preferred_date,
            preferred_time: booking.preferred_time.as_deref(),
            collection_type: booking.collection_type.as_str(),
            status: booking.status.as_str(),
            notes: booking.notes.as_deref(),
        }
    }
}
