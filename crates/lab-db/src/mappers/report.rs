//! Report entity <-> model mapper

use lab_core::entities::{Report, ReportStatus};

use crate::models::ReportModel;

impl From<ReportModel> for Report {
    fn from(model: ReportModel) -> Self {
        Report {
            id: model.id,
            user_id: model.user_id,
            booking_id: model.booking_id,
            title: model.title,
            status: ReportStatus::from(model.status.as_str()),
            report_date: model.report_date,
            file_url: model.file_url,
            created_at: model.created_at,
        }
    }
}
