//! Contact form handler

use axum::{extract::State, Json};
use lab_service::dto::{ContactRequest, MessageResponse};
use lab_service::ContactService;

use crate::extractors::ValidatedJson;
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// POST /api/contact
pub async fn submit_contact(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<ContactRequest>,
) -> ApiResult<Created<Json<MessageResponse>>> {
    let service = ContactService::new(state.service_context());
    service.submit(request).await?;
    Ok(Created(Json(MessageResponse::new(
        "Thank you for contacting us. We will get back to you soon.",
    ))))
}
