use serde::Deserialize;

// -- Trending videos --

/// Query params for the trending-videos listing. An absent value or the
/// literal `"all"` disables that filter.
#[derive(Debug, Default, Deserialize)]
pub struct VideoQuery {
    pub platform: Option<String>,
    pub category: Option<String>,
}

// -- Projects --

/// Body of a project create. Every field is optional at the parse stage so
/// the handler can report all missing or invalid fields in one response;
/// `id`, `createdAt` and `updatedAt` are never accepted from the caller and
/// are simply ignored if present.
#[derive(Debug, Default, Deserialize)]
pub struct CreateProjectRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<String>,
    pub progress: Option<i64>,
}

/// Body of a project update: the subset of fields to merge.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateProjectRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<String>,
    pub progress: Option<i64>,
}

// -- AI --

#[derive(Debug, Default, Deserialize)]
pub struct SuggestRequest {
    pub topic: Option<String>,
    pub platform: Option<String>,
    pub style: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct AnalyzeRequest {
    pub content: Option<String>,
    pub platform: Option<String>,
}
