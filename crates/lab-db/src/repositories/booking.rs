//! PostgreSQL implementation of BookingRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use lab_core::entities::Booking;
use lab_core::traits::{BookingRepository, RepoResult};
use lab_core::value_objects::PageRequest;

use crate::mappers::BookingInsert;
use crate::models::BookingModel;

use super::error::map_db_error;

/// PostgreSQL implementation of BookingRepository
#[derive(Clone)]
pub struct PgBookingRepository {
    pool: PgPool,
}

impl PgBookingRepository {
    /// Create a new PgBookingRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BookingRepository for PgBookingRepository {
    #[instrument(skip(self, booking), fields(booking_id = %booking.id))]
    async fn create(&self, booking: &Booking) -> RepoResult<()> {
        let row = BookingInsert::new(booking);

        // Unknown package_id fails the foreign key and surfaces as "Resource not found"
        sqlx::query(
            r"
            INSERT INTO bookings (id, user_id, package_id, patient_name, email, phone, address,
                                  preferred_date, preferred_time, collection_type, status, notes,
                                  created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
            ",
        )
        .bind(row.id)
        .bind(row.user_id)
        .bind(row.package_id)
        .bind(row.patient_name)
        .bind(row.email)
        .bind(row.phone)
        .bind(row.address)
        .bind(row.preferred_date)
        .bind(row.preferred_time)
        .bind(row.collection_type)
        .bind(row.status)
        .bind(row.notes)
        .bind(booking.created_at)
        .bind(booking.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Booking>> {
        let result = sqlx::query_as::<_, BookingModel>(
            r"
            SELECT id, user_id, package_id, patient_name, email, phone, address, preferred_date,
                   preferred_time, collection_type, status, notes, created_at, updated_at
            FROM bookings
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Booking::from))
    }

    #[instrument(skip(self))]
    async fn list_by_user(&self, user_id: Uuid, page: PageRequest) -> RepoResult<Vec<Booking>> {
        let rows = sqlx::query_as::<_, BookingModel>(
            r"
            SELECT id, user_id, package_id, patient_name, email, phone, address, preferred_date,
                   preferred_time, collection_type, status, notes, created_at, updated_at
            FROM bookings
            WHERE user_id = $1
            ORDER BY created_at DESC
            LIMIT $2 OFFSET $3
            ",
        )
        .bind(user_id)
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(Booking::from).collect())
    }

    #[instrument(skip(self))]
    async fn cancel(&self, id: Uuid) -> RepoResult<bool> {
        // The status guard makes the check and the write one statement
        let result = sqlx::query(
            r"
            UPDATE bookings
            SET status = 'cancelled', updated_at = NOW()
            WHERE id = $1 AND status IN ('pending', 'confirmed')
            ",
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }
}
