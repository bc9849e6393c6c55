use axum::{
    Json,
    extract::{Query, State},
};

use trendpulse_store::VideoFilter;
use trendpulse_types::{api::VideoQuery, models::TrendingVideo};

use crate::AppState;
use crate::error::ApiError;

/// GET /api/trending-videos. Optional `platform` and `category` filters;
/// an absent param or `"all"` means no filter on that attribute.
pub async fn list_trending_videos(
    State(state): State<AppState>,
    Query(query): Query<VideoQuery>,
) -> Result<Json<Vec<TrendingVideo>>, ApiError> {
    let filter = VideoFilter {
        platform: query.platform,
        category: query.category,
    };
    let videos = state.store.trending_videos(&filter)?;
    Ok(Json(videos))
}
