//! HTTP Handlers
//!
//! Every handler runs behind the Session Gate and acts on behalf of the
//! resolved identity.

use std::sync::Arc;

use auth::CurrentIdentity;
use axum::Json;
use axum::body::Bytes;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::application::{
    CreateProjectInput, CreateProjectUseCase, DeleteProjectUseCase, GetProjectUseCase,
    ListProjectsUseCase,
};
use crate::domain::repository::ProjectRepository;
use crate::error::{ProjectError, ProjectResult};
use crate::presentation::dto::{
    CreateProjectRequest, ListProjectsQuery, ProjectListItem, ProjectResponse,
};

/// Shared state for project handlers
pub struct ProjectAppState<R>
where
    R: ProjectRepository + Send + Sync + 'static,
{
    pub repo: Arc<R>,
}

impl<R> Clone for ProjectAppState<R>
where
    R: ProjectRepository + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        Self {
            repo: self.repo.clone(),
        }
    }
}

/// GET /api/proj
pub async fn list_projects<R>(
    State(state): State<ProjectAppState<R>>,
    CurrentIdentity(identity): CurrentIdentity,
    Query(query): Query<ListProjectsQuery>,
) -> ProjectResult<Json<Vec<ProjectListItem>>>
where
    R: ProjectRepository + Send + Sync + 'static,
{
    let use_case = ListProjectsUseCase::new(state.repo.clone());
    let projects = use_case.execute(&identity.user_id).await?;

    Ok(Json(
        projects
            .iter()
            .map(|p| ProjectListItem::from_project(p, query.select_related))
            .collect(),
    ))
}

/// GET /api/proj/{id}
pub async fn get_project<R>(
    State(state): State<ProjectAppState<R>>,
    CurrentIdentity(identity): CurrentIdentity,
    Path(id): Path<String>,
) -> ProjectResult<Json<ProjectResponse>>
where
    R: ProjectRepository + Send + Sync + 'static,
{
    let use_case = GetProjectUseCase::new(state.repo.clone());
    let project = use_case.execute(&id, &identity.user_id).await?;

    Ok(Json(ProjectResponse::from(&project)))
}

/// POST /api/proj
///
/// Responds 201 with the new id as plain text.
pub async fn create_project<R>(
    State(state): State<ProjectAppState<R>>,
    CurrentIdentity(identity): CurrentIdentity,
    body: Bytes,
) -> ProjectResult<impl IntoResponse>
where
    R: ProjectRepository + Send + Sync + 'static,
{
    let req: CreateProjectRequest = serde_json::from_slice(&body)
        .map_err(|e| ProjectError::InvalidField(e.to_string()))?;

    let use_case = CreateProjectUseCase::new(state.repo.clone());
    let id = use_case
        .execute(
            CreateProjectInput {
                name: req.name,
                description: req.description,
            },
            identity.user_id,
        )
        .await?;

    Ok((StatusCode::CREATED, id.to_hex()))
}

/// DELETE /api/proj/{id}
pub async fn delete_project<R>(
    State(state): State<ProjectAppState<R>>,
    CurrentIdentity(identity): CurrentIdentity,
    Path(id): Path<String>,
) -> ProjectResult<StatusCode>
where
    R: ProjectRepository + Send + Sync + 'static,
{
    let use_case = DeleteProjectUseCase::new(state.repo.clone());
    use_case.execute(&id, &identity.user_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
