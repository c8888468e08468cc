//! HTTP handlers for newsletter signup

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};

use crate::{
    error::{AppError, AppResult},
    models::{MessageResponse, SubscribeRequest},
    services::NewsletterService,
    AppState,
};

/// Subscribe an email address to the newsletter
pub async fn subscribe(
    State(state): State<AppState>,
    payload: Result<Json<SubscribeRequest>, JsonRejection>,
) -> AppResult<Json<MessageResponse>> {
    let Json(input) = payload.map_err(|e| AppError::ValidationError(e.body_text()))?;

    let service = NewsletterService::new(state.db, state.crm);
    service.subscribe(input).await?;

    Ok(Json(MessageResponse {
        message: "Subscription successful".to_string(),
    }))
}
