use axum::extract::State;
use axum::Json;

use crate::models::EmailRequest;
use crate::startup::AppState;
use service_core::error::AppError;

/// `POST /api/email/generator`
///
/// Relays the generated reply as a plain-text body. Provider failures become
/// 5xx responses through `AppError`.
#[tracing::instrument(skip_all)]
pub async fn generate_email(
    State(state): State<AppState>,
    Json(request): Json<EmailRequest>,
) -> Result<String, AppError> {
    tracing::debug!(
        content_len = request.email_content.len(),
        tone = %request.tone,
        "Received email generation request"
    );

    let reply = state.generator.generate_email_reply(&request).await?;
    Ok(reply)
}
