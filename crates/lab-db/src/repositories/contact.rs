//! PostgreSQL implementation of ContactRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use lab_core::entities::ContactInquiry;
use lab_core::traits::{ContactRepository, RepoResult};

use super::error::map_db_error;

/// PostgreSQL implementation of ContactRepository
#[derive(Clone)]
pub struct PgContactRepository {
    pool: PgPool,
}

impl PgContactRepository {
    /// Create a new PgContactRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ContactRepository for PgContactRepository {
    #[instrument(skip(self, inquiry), fields(inquiry_id = %inquiry.id))]
    async fn create(&self, inquiry: &ContactInquiry) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO contact_inquiries (id, name, email, phone, subject, message, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            ",
        )
        .bind(inquiry.id)
        .bind(&inquiry.name)
        .bind(&inquiry.email)
        .bind(inquiry.phone.as_deref())
        .bind(inquiry.subject.as_deref())
        .bind(&inquiry.message)
        .bind(inquiry.created_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }
}
