//! PostgreSQL implementation of PackageRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use lab_core::entities::Package;
use lab_core::traits::{PackageFilter, PackageRepository, PackageSearch, RepoResult};

use crate::models::PackageModel;

use super::error::map_db_error;

/// PostgreSQL implementation of PackageRepository
#[derive(Clone)]
pub struct PgPackageRepository {
    pool: PgPool,
}

impl PgPackageRepository {
    /// Create a new PgPackageRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// `%term%` with LIKE wildcards in the term escaped
fn contains_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

#[async_trait]
impl PackageRepository for PgPackageRepository {
    #[instrument(skip(self))]
    async fn list_active(&self, filter: &PackageFilter) -> RepoResult<Vec<Package>> {
        // LIMIT NULL means no limit
        let rows = sqlx::query_as::<_, PackageModel>(
            r"
            SELECT id, name, slug, description, price, original_price, parameter_count,
                   category, duration, sample_type, is_featured, is_active, popularity_score,
                   created_at, updated_at
            FROM packages
            WHERE is_active = TRUE
              AND ($1::BOOLEAN IS NULL OR is_featured = $1)
              AND ($2::TEXT IS NULL OR LOWER(category) = LOWER($2))
            ORDER BY name ASC
            LIMIT $3
            ",
        )
        .bind(filter.featured)
        .bind(filter.category.as_deref())
        .bind(filter.limit)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(Package::from).collect())
    }

    #[instrument(skip(self))]
    async fn search(&self, search: &PackageSearch) -> RepoResult<Vec<Package>> {
        let rows = sqlx::query_as::<_, PackageModel>(
            r"
            SELECT id, name, slug, description, price, original_price, parameter_count,
                   category, duration, sample_type, is_featured, is_active, popularity_score,
                   created_at, updated_at
            FROM packages
            WHERE is_active = TRUE
              AND (name ILIKE $1 OR description ILIKE $1 OR category ILIKE $1)
              AND ($2::TEXT IS NULL OR LOWER(category) = LOWER($2))
            ORDER BY popularity_score DESC, name ASC
            LIMIT $3
            ",
        )
        .bind(contains_pattern(&search.term))
        .bind(search.category.as_deref())
        .bind(search.limit)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(Package::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_by_slug(&self, slug: &str) -> RepoResult<Option<Package>> {
        let result = sqlx::query_as::<_, PackageModel>(
            r"
            SELECT id, name, slug, description, price, original_price, parameter_count,
                   category, duration, sample_type, is_featured, is_active, popularity_score,
                   created_at, updated_at
            FROM packages
            WHERE slug = $1 AND is_active = TRUE
            ",
        )
        .bind(slug)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Package::from))
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Package>> {
        let result = sqlx::query_as::<_, PackageModel>(
            r"
            SELECT id, name, slug, description, price, original_price, parameter_count,
                   category, duration, sample_type, is_featured, is_active, popularity_score,
                   created_at, updated_at
            FROM packages
            WHERE id = $1 AND is_active = TRUE
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Package::from))
    }
}
