//! Contact form service

use lab_core::entities::ContactInquiry;
use tracing::{info, instrument};

use crate::dto::ContactRequest;

use super::auth::normalize_email;
use super::context::ServiceContext;
use super::error::ServiceResult;

/// Contact form service
pub struct ContactService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ContactService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Store an inquiry for the front desk
    #[instrument(skip(self, request))]
    pub async fn submit(&self, request: ContactRequest) -> ServiceResult<()> {
        let inquiry = ContactInquiry::new(
            request.name.trim().to_string(),
            normalize_email(&request.email),
            request.phone.map(|p| p.trim().to_string()),
            request
                .subject
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
            request.message.trim().to_string(),
        );

        self.ctx.contact_repo().create(&inquiry).await?;

        info!(inquiry_id = %inquiry.id, "Contact inquiry received");
        Ok(())
    }
}
