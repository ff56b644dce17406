//! Package catalogue service

use lab_core::entities::Package;
use lab_core::traits::{PackageFilter, PackageSearch};
use lab_core::DomainError;
use tracing::instrument;

use crate::dto::{PackageListQuery, PackageListResponse, PackageResponse, PackageSearchQuery};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Default number of search hits
const DEFAULT_SEARCH_LIMIT: i64 = 20;

/// Package catalogue service
pub struct PackageService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> PackageService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Active packages ordered by name, as a bare list
    #[instrument(skip(self))]
    pub async fn list(&self, query: PackageListQuery) -> ServiceResult<Vec<PackageResponse>> {
        let filter = PackageFilter {
            featured: query.featured,
            category: query.category.map(|c| c.trim().to_string()),
            limit: query.limit,
        };

        let packages = self.ctx.package_repo().list_active(&filter).await?;
        Ok(to_responses(&packages))
    }

    /// Case-insensitive search on name, description and category
    #[instrument(skip(self))]
    pub async fn search(&self, query: PackageSearchQuery) -> ServiceResult<PackageListResponse> {
        let search = PackageSearch {
            term: query.q.trim().to_string(),
            category: query.category.map(|c| c.trim().to_string()),
            limit: query.limit.unwrap_or(DEFAULT_SEARCH_LIMIT),
        };

        let packages = self.ctx.package_repo().search(&search).await?;
        Ok(PackageListResponse::new(to_responses(&packages)))
    }

    /// Active package by slug
    #[instrument(skip(self))]
    pub async fn get_by_slug(&self, slug: &str) -> ServiceResult<PackageResponse> {
        let package = self
            .ctx
            .package_repo()
            .find_by_slug(slug)
            .await?
            .ok_or_else(|| DomainError::PackageNotFound(slug.to_string()))?;

        Ok(PackageResponse::from(&package))
    }
}

fn to_responses(packages: &[Package]) -> Vec<PackageResponse> {
    packages.iter().map(PackageResponse::from).collect()
}
