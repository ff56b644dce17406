//! Collection centre service

use tracing::instrument;

use crate::dto::{LocationListResponse, LocationQuery, LocationResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;

pub struct LocationService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> LocationService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Active centres, optionally for one city
    #[instrument(skip(self))]
    pub async fn list(&self, query: LocationQuery) -> ServiceResult<LocationListResponse> {
        let city = query
            .city
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty());

        let locations = self.ctx.location_repo().list_active(city).await?;
        Ok(LocationListResponse::new(
            locations.iter().map(LocationResponse::from).collect(),
        ))
    }
}
