//! Application Layer
//!
//! Owner-scoped project use cases.

pub mod create_project;
pub mod delete_project;
pub mod get_project;
pub mod list_projects;

// Re-exports
pub use create_project::{CreateProjectInput, CreateProjectUseCase};
pub use delete_project::DeleteProjectUseCase;
pub use get_project::GetProjectUseCase;
pub use list_projects::ListProjectsUseCase;

use crate::domain::value_objects::ProjectId;
use crate::error::{ProjectError, ProjectResult};

/// Parse a project id taken from a request path
pub fn parse_project_id(raw: &str) -> ProjectResult<ProjectId> {
    ProjectId::parse_str(raw).map_err(|e| ProjectError::InvalidId(e.to_string()))
}
