use axum::{Json, extract::State};
use tracing::info;

use trendpulse_ai::{AnalysisResult, SuggestionResult, analyze_content, generate_suggestions};
use trendpulse_types::{
    api::{AnalyzeRequest, SuggestRequest},
    models::{ContentSuggestion, InsertContentSuggestion},
};

use crate::AppState;
use crate::error::{ApiError, FieldError};

/// GET /api/content-suggestions. History of every suggestion set served.
pub async fn list_content_suggestions(
    State(state): State<AppState>,
) -> Result<Json<Vec<ContentSuggestion>>, ApiError> {
    Ok(Json(state.store.content_suggestions()?))
}

/// POST /api/ai-suggestions.
///
/// Valid input always yields 200 with a well-shaped result: upstream
/// failures resolve to deterministic fallback content inside the adapter.
/// Every served result is persisted so the history endpoint reflects
/// exactly what the user saw.
pub async fn create_suggestions(
    State(state): State<AppState>,
    Json(req): Json<SuggestRequest>,
) -> Result<Json<SuggestionResult>, ApiError> {
    let (topic, platform, style) = validate_suggest(req)?;

    let result = generate_suggestions(
        state.ai.as_ref(),
        &state.ai_options,
        &topic,
        &platform,
        &style,
    )
    .await;

    let suggestion = state.store.create_content_suggestion(InsertContentSuggestion {
        topic,
        platform,
        style,
        titles: result.titles.clone(),
        tags: result.tags.clone(),
        content_ideas: result.content_ideas.clone(),
    })?;
    info!(id = suggestion.id, topic = %suggestion.topic, "Suggestion set stored");

    Ok(Json(result))
}

/// POST /api/analyze-content. Read-only; nothing is persisted.
pub async fn analyze(
    State(state): State<AppState>,
    Json(req): Json<AnalyzeRequest>,
) -> Result<Json<AnalysisResult>, ApiError> {
    let (content, platform) = validate_analyze(req)?;

    let result = analyze_content(state.ai.as_ref(), &state.ai_options, &content, &platform).await;

    Ok(Json(result))
}

fn validate_suggest(req: SuggestRequest) -> Result<(String, String, String), ApiError> {
    let mut fields = Vec::new();
    let topic = required_text("topic", req.topic, &mut fields);
    let platform = required_text("platform", req.platform, &mut fields);
    let style = required_text("style", req.style, &mut fields);

    match (topic, platform, style) {
        (Some(topic), Some(platform), Some(style)) if fields.is_empty() => {
            Ok((topic, platform, style))
        }
        _ => Err(ApiError::Validation(fields)),
    }
}

fn validate_analyze(req: AnalyzeRequest) -> Result<(String, String), ApiError> {
    let mut fields = Vec::new();
    let content = required_text("content", req.content, &mut fields);
    let platform = required_text("platform", req.platform, &mut fields);

    match (content, platform) {
        (Some(content), Some(platform)) if fields.is_empty() => Ok((content, platform)),
        _ => Err(ApiError::Validation(fields)),
    }
}

fn required_text(
    field: &'static str,
    value: Option<String>,
    fields: &mut Vec<FieldError>,
) -> Option<String> {
    match value.as_deref().map(str::trim) {
        Some(v) if !v.is_empty() => Some(v.to_string()),
        Some(_) => {
            fields.push(FieldError::new(field, "must not be empty"));
            None
        }
        None => {
            fields.push(FieldError::new(field, "is required"));
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field_names(err: ApiError) -> Vec<&'static str> {
        match err {
            ApiError::Validation(fields) => fields.iter().map(|f| f.field).collect(),
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn suggest_requires_all_three_fields() {
        let err = validate_suggest(SuggestRequest::default()).unwrap_err();
        assert_eq!(field_names(err), vec!["topic", "platform", "style"]);
    }

    #[test]
    fn suggest_rejects_whitespace_topic() {
        let err = validate_suggest(SuggestRequest {
            topic: Some("   ".to_string()),
            platform: Some("youtube".to_string()),
            style: Some("casual".to_string()),
        })
        .unwrap_err();
        assert_eq!(field_names(err), vec!["topic"]);
    }

    #[test]
    fn suggest_trims_inputs() {
        let (topic, platform, style) = validate_suggest(SuggestRequest {
            topic: Some(" yoga ".to_string()),
            platform: Some("youtube".to_string()),
            style: Some("casual".to_string()),
        })
        .unwrap();
        assert_eq!(topic, "yoga");
        assert_eq!(platform, "youtube");
        assert_eq!(style, "casual");
    }

    #[test]
    fn analyze_requires_content_and_platform() {
        let err = validate_analyze(AnalyzeRequest {
            content: None,
            platform: Some("tiktok".to_string()),
        })
        .unwrap_err();
        assert_eq!(field_names(err), vec!["content"]);
    }
}
