//! PostgreSQL implementation of LocationRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use lab_core::entities::Location;
use lab_core::traits::{LocationRepository, RepoResult};

use crate::models::LocationModel;

use super::error::map_db_error;

/// PostgreSQL implementation of LocationRepository
#[derive(Clone)]
pub struct PgLocationRepository {
    pool: PgPool,
}

impl PgLocationRepository {
    /// Create a new PgLocationRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LocationRepository for PgLocationRepository {
    #[instrument(skip(self))]
    async fn list_active(&self, city: Option<&str>) -> RepoResult<Vec<Location>> {
        let rows = sqlx::query_as::<_, LocationModel>(
            r"
            SELECT id, name, city, address, phone, map_link, opening_hours, connectivity,
                   is_active, created_at
            FROM locations
            WHERE is_active = TRUE
              AND ($1::TEXT IS NULL OR LOWER(city) = LOWER($1))
            ORDER BY name ASC
            ",
        )
        .bind(city)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(Location::from).collect())
    }
}
