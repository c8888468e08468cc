//! HTTP handlers for the rating catalog

use axum::{extract::State, Json};

use crate::{error::AppResult, models::Rating, services::RatingService, AppState};

/// List every rating with its affiliate offers, best overall score first
pub async fn list_ratings(State(state): State<AppState>) -> AppResult<Json<Vec<Rating>>> {
    let service = RatingService::new(state.db);
    let ratings = service.list_ratings().await?;
    Ok(Json(ratings))
}
