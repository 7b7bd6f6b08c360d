//! Get Project Use Case

use std::sync::Arc;

use crate::domain::entities::Project;
use crate::domain::repository::ProjectRepository;
use crate::domain::value_objects::UserId;
use crate::error::{ProjectError, ProjectResult};

/// Fetch one project by id
///
/// A project owned by someone else is reported as not found.
pub struct GetProjectUseCase<R>
where
    R: ProjectRepository,
{
    repo: Arc<R>,
}

impl<R> GetProjectUseCase<R>
where
    R: ProjectRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, raw_id: &str, owner: &UserId) -> ProjectResult<Project> {
        let id = super::parse_project_id(raw_id)?;

        self.repo
            .find_owned(&id, owner)
            .await?
            .ok_or(ProjectError::NotFound)
    }
}
