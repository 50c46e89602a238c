//! Handlers for the `/projects` resource.

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use projectbank_core::error::CoreError;
use projectbank_core::faculty_validation::parse_review_status;
use projectbank_core::project_fields::{
    validate_lengths, validate_no_blank_updates, validate_required,
};
use projectbank_core::rating::validate_rating;
use projectbank_db::models::project::{
    CreateProject, Project, ProjectAuthor, ProjectFilter, ProjectPage, ProjectStats,
    UpdateProject,
};
use projectbank_db::repositories::ProjectRepo;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::{RequireAuth, RequireFaculty};
use crate::query::ListProjectsParams;
use crate::response::ApiResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response bodies
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct ProjectBody {
    pub project: Project,
}

#[derive(Debug, Serialize)]
pub struct ViewsBody {
    pub views: u64,
}

#[derive(Debug, Serialize)]
pub struct RatingBody {
    pub rating: f64,
}

#[derive(Debug, Serialize)]
pub struct StatsBody {
    pub stats: ProjectStats,
}

#[derive(Debug, Serialize)]
pub struct YearsBody {
    pub years: Vec<String>,
}

/// Body of `POST /projects/{id}/rate`.
#[derive(Debug, Deserialize)]
pub struct RateProject {
    pub rating: i64,
}

/// Body of `POST /projects/{id}/faculty-validation`.
#[derive(Debug, Deserialize)]
pub struct FacultyValidationInput {
    pub status: String,
    pub comments: Option<String>,
}

fn not_found(id: &str) -> AppError {
    AppError::Core(CoreError::project_not_found(id))
}

// ---------------------------------------------------------------------------
// Reads
// ---------------------------------------------------------------------------

/// GET /api/projects
///
/// Query pairs are read raw so repeated keys never reject the request.
pub async fn list(
    State(state): State<AppState>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> AppResult<Json<ApiResponse<ProjectPage>>> {
    let Query(pairs) = query?;
    let filter = ProjectFilter::from(ListProjectsParams::from_pairs(pairs));
    let page = ProjectRepo::list(&state.pool, &filter).await;
    Ok(Json(ApiResponse::ok(page)))
}

/// GET /api/projects/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<ApiResponse<ProjectBody>>> {
    let project = ProjectRepo::find_by_id(&state.pool, &id)
        .await
        .ok_or_else(|| not_found(&id))?;
    Ok(Json(ApiResponse::ok(ProjectBody { project })))
}

/// GET /api/projects/stats
pub async fn stats(State(state): State<AppState>) -> AppResult<Json<ApiResponse<StatsBody>>> {
    let stats = ProjectRepo::stats(&state.pool).await;
    Ok(Json(ApiResponse::ok(StatsBody { stats })))
}

/// GET /api/projects/years
pub async fn available_years(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<YearsBody>>> {
    let years = ProjectRepo::available_years(&state.pool).await;
    Ok(Json(ApiResponse::ok(YearsBody { years })))
}

// ---------------------------------------------------------------------------
// Mutations
// ---------------------------------------------------------------------------

/// POST /api/projects
///
/// The caller becomes the project's author.
pub async fn create(
    RequireAuth(user): RequireAuth,
    State(state): State<AppState>,
    payload: Result<Json<CreateProject>, JsonRejection>,
) -> AppResult<(StatusCode, Json<ApiResponse<ProjectBody>>)> {
    let Json(input) = payload?;

    validate_required(&input.title, &input.description, &input.department, &input.year)
        .map_err(CoreError::Validation)?;
    validate_lengths(
        Some(input.title.as_str()),
        Some(input.description.as_str()),
        Some(input.tags.as_slice()),
    )
    .map_err(CoreError::Validation)?;

    let author = ProjectAuthor {
        id: user.user_id,
        name: user.name,
    };
    let project = ProjectRepo::create(&state.pool, &input, &author).await;

    tracing::info!(
        project_id = %project.id,
        author_id = %project.author_id,
        "Project created",
    );

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_message(
            "Project created successfully",
            ProjectBody { project },
        )),
    ))
}

/// PUT /api/projects/{id}
///
/// Only the project's author or an admin may update it.
pub async fn update(
    RequireAuth(user): RequireAuth,
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateProject>, JsonRejection>,
) -> AppResult<Json<ApiResponse<ProjectBody>>> {
    let Json(input) = payload?;

    validate_no_blank_updates(&[
        input.title.as_deref(),
        input.description.as_deref(),
        input.department.as_deref(),
        input.year.as_deref(),
    ])
    .map_err(CoreError::Validation)?;
    validate_lengths(
        input.title.as_deref(),
        input.description.as_deref(),
        input.tags.as_deref(),
    )
    .map_err(CoreError::Validation)?;

    let author_id = ProjectRepo::find_author_id(&state.pool, &id)
        .await
        .ok_or_else(|| not_found(&id))?;
    if author_id != user.user_id && !user.is_admin() {
        return Err(AppError::Core(CoreError::Forbidden(
            "Only the project's author can update it".into(),
        )));
    }

    let project = ProjectRepo::update(&state.pool, &id, &input)
        .await
        .ok_or_else(|| not_found(&id))?;

    tracing::info!(project_id = %id, user_id = %user.user_id, "Project updated");

    Ok(Json(ApiResponse::with_message(
        "Project updated successfully",
        ProjectBody { project },
    )))
}

/// POST /api/projects/{id}/view
pub async fn record_view(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<ApiResponse<ViewsBody>>> {
    let views = ProjectRepo::record_view(&state.pool, &id)
        .await
        .ok_or_else(|| not_found(&id))?;

    tracing::debug!(project_id = %id, views, "View recorded");

    Ok(Json(ApiResponse::with_message(
        "View recorded",
        ViewsBody { views },
    )))
}

/// POST /api/projects/{id}/rate
///
/// The caller is the rater; a repeat rating replaces their previous one.
pub async fn rate(
    RequireAuth(user): RequireAuth,
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<RateProject>, JsonRejection>,
) -> AppResult<Json<ApiResponse<RatingBody>>> {
    let Json(input) = payload?;

    validate_rating(input.rating).map_err(AppError::BadRequest)?;

    let rating = ProjectRepo::rate(&state.pool, &id, &user.user_id, input.rating)
        .await
        .ok_or_else(|| not_found(&id))?;

    tracing::info!(
        project_id = %id,
        user_id = %user.user_id,
        submitted = input.rating,
        rating,
        "Project rated",
    );

    Ok(Json(ApiResponse::with_message(
        "Rating submitted successfully",
        RatingBody { rating },
    )))
}

/// POST /api/projects/{id}/faculty-validation
pub async fn faculty_validation(
    RequireFaculty(user): RequireFaculty,
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<FacultyValidationInput>, JsonRejection>,
) -> AppResult<Json<ApiResponse<ProjectBody>>> {
    let Json(input) = payload?;

    let status = parse_review_status(&input.status).map_err(AppError::BadRequest)?;

    let project = ProjectRepo::set_faculty_validation(&state.pool, &id, status, input.comments)
        .await
        .ok_or_else(|| not_found(&id))?;

    tracing::info!(
        project_id = %id,
        reviewer_id = %user.user_id,
        status = %status,
        "Faculty validation updated",
    );

    Ok(Json(ApiResponse::with_message(
        "Faculty validation updated successfully",
        ProjectBody { project },
    )))
}
