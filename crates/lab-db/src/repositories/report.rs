//! PostgreSQL implementation of ReportRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use lab_core::entities::Report;
use lab_core::traits::{RepoResult, ReportRepository};
use lab_core::value_objects::PageRequest;

use crate::models::ReportModel;

use super::error::map_db_error;

/// PostgreSQL implementation of ReportRepository
#[derive(Clone)]
pub struct PgReportRepository {
    pool: PgPool,
}

impl PgReportRepository {
    /// Create a new PgReportRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReportRepository for PgReportRepository {
    #[instrument(skip(self))]
    async fn list_by_user(&self, user_id: Uuid, page: PageRequest) -> RepoResult<Vec<Report>> {
        let rows = sqlx::query_as::<_, ReportModel>(
            r"
            SELECT id, user_id, booking_id, title, status, report_date, file_url, created_at
            FROM reports
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

        Ok(rows.into_iter().map(Report::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Report>> {
        let result = sqlx::query_as::<_, ReportModel>(
            r"
            SELECT id, user_id, booking_id, title, status, report_date, file_url, created_at
            FROM reports
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Report::from))
    }
}
