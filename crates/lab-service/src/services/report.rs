//! Report service

use lab_core::value_objects::PageRequest;
use lab_core::DomainError;
use tracing::instrument;
use uuid::Uuid;

use crate::dto::{ReportListResponse, ReportResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Report service
pub struct ReportService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ReportService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// The caller's reports, newest first
    #[instrument(skip(self))]
    pub async fn list(&self, user_id: Uuid, page: PageRequest) -> ServiceResult<ReportListResponse> {
        let reports = self.ctx.report_repo().list_by_user(user_id, page).await?;
        let items = reports.iter().map(ReportResponse::from).collect();
        Ok(ReportListResponse::new(items, page))
    }

    /// One of the caller's reports
    #[instrument(skip(self))]
    pub async fn get(&self, user_id: Uuid, report_id: Uuid) -> ServiceResult<ReportResponse> {
        let report = self
            .ctx
            .report_repo()
            .find_by_id(report_id)
            .await?
            .filter(|r| r.user_id == user_id)
            .ok_or(DomainError::ReportNotFound(report_id))?;

        Ok(ReportResponse::from(&report))
    }
}
