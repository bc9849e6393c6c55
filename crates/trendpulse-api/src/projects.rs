use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use tracing::info;

use trendpulse_types::{
    api::{CreateProjectRequest, UpdateProjectRequest},
    models::{InsertProject, Project, ProjectStatus, ProjectUpdate},
};

use crate::AppState;
use crate::error::{ApiError, FieldError};

/// GET /api/projects. An empty store yields an empty array, not an error.
pub async fn list_projects(State(state): State<AppState>) -> Result<Json<Vec<Project>>, ApiError> {
    Ok(Json(state.store.projects()?))
}

/// GET /api/projects/{id}.
pub async fn get_project(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Project>, ApiError> {
    let project = state
        .store
        .project_by_id(id)?
        .ok_or(ApiError::NotFound("project"))?;
    Ok(Json(project))
}

/// POST /api/projects. 201 with the stored project, 400 with field errors.
pub async fn create_project(
    State(state): State<AppState>,
    Json(req): Json<CreateProjectRequest>,
) -> Result<(StatusCode, Json<Project>), ApiError> {
    let insert = validate_create(req)?;
    let project = state.store.create_project(insert)?;
    info!(id = project.id, "Project created");
    Ok((StatusCode::CREATED, Json(project)))
}

/// PATCH/PUT /api/projects/{id}. Merges the provided fields only.
pub async fn update_project(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(req): Json<UpdateProjectRequest>,
) -> Result<Json<Project>, ApiError> {
    let update = validate_update(req)?;
    let project = state
        .store
        .update_project(id, update)?
        .ok_or(ApiError::NotFound("project"))?;
    Ok(Json(project))
}

fn validate_create(req: CreateProjectRequest) -> Result<InsertProject, ApiError> {
    let mut fields = Vec::new();

    let title = match req.title.as_deref().map(str::trim) {
        Some(t) if !t.is_empty() => Some(t.to_string()),
        Some(_) => {
            fields.push(FieldError::new("title", "must not be empty"));
            None
        }
        None => {
            fields.push(FieldError::new("title", "is required"));
            None
        }
    };

    let status = match req.status.as_deref() {
        Some(s) => match ProjectStatus::parse(s) {
            Some(status) => Some(status),
            None => {
                fields.push(FieldError::new(
                    "status",
                    "must be one of planning, in-progress, completed",
                ));
                None
            }
        },
        None => {
            fields.push(FieldError::new("status", "is required"));
            None
        }
    };

    let progress = validate_progress(req.progress, &mut fields);

    match (title, status) {
        (Some(title), Some(status)) if fields.is_empty() => Ok(InsertProject {
            title,
            status,
            description: req.description,
            progress,
        }),
        _ => Err(ApiError::Validation(fields)),
    }
}

fn validate_update(req: UpdateProjectRequest) -> Result<ProjectUpdate, ApiError> {
    let mut fields = Vec::new();

    let title = match req.title.as_deref().map(str::trim) {
        Some("") => {
            fields.push(FieldError::new("title", "must not be empty"));
            None
        }
        Some(t) => Some(t.to_string()),
        None => None,
    };

    let status = match req.status.as_deref() {
        Some(s) => match ProjectStatus::parse(s) {
            Some(status) => Some(status),
            None => {
                fields.push(FieldError::new(
                    "status",
                    "must be one of planning, in-progress, completed",
                ));
                None
            }
        },
        None => None,
    };

    let progress = validate_progress(req.progress, &mut fields);

    if fields.is_empty() {
        Ok(ProjectUpdate {
            title,
            description: req.description,
            status,
            progress,
        })
    } else {
        Err(ApiError::Validation(fields))
    }
}

fn validate_progress(progress: Option<i64>, fields: &mut Vec<FieldError>) -> Option<u8> {
    match progress {
        Some(p) if (0..=100).contains(&p) => Some(p as u8),
        Some(_) => {
            fields.push(FieldError::new("progress", "must be between 0 and 100"));
            None
        }
        None => None,
    }
}
