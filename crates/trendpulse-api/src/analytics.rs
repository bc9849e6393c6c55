use axum::{Json, extract::State};

use trendpulse_types::models::Analytics;

use crate::AppState;
use crate::error::ApiError;

/// GET /api/analytics. The most recently created analytics row; 404 when
/// no row exists yet.
pub async fn get_analytics(State(state): State<AppState>) -> Result<Json<Analytics>, ApiError> {
    let analytics = state
        .store
        .latest_analytics()?
        .ok_or(ApiError::NotFound("analytics"))?;
    Ok(Json(analytics))
}
