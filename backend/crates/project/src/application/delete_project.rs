//! Delete Project Use Case

use std::sync::Arc;

use crate::domain::repository::ProjectRepository;
use crate::domain::value_objects::UserId;
use crate::error::{ProjectError, ProjectResult};

/// Delete one of the caller's projects
pub struct DeleteProjectUseCase<R>
where
    R: ProjectRepository,
{
    repo: Arc<R>,
}

impl<R> DeleteProjectUseCase<R>
where
    R: ProjectRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, raw_id: &str, owner: &UserId) -> ProjectResult<()> {
        let id = super::parse_project_id(raw_id)?;

        if !self.repo.delete_owned(&id, owner).await? {
            return Err(ProjectError::NotFound);
        }

        tracing::info!(project_id = %id, owner = %owner, "Project deleted");
        Ok(())
    }
}
