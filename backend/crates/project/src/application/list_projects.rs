//! List Projects Use Case

use std::sync::Arc;

use crate::domain::entities::Project;
use crate::domain::repository::ProjectRepository;
use crate::domain::value_objects::UserId;
use crate::error::ProjectResult;

/// List the caller's projects
pub struct ListProjectsUseCase<R>
where
    R: ProjectRepository,
{
    repo: Arc<R>,
}

impl<R> ListProjectsUseCase<R>
where
    R: ProjectRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, owner: &UserId) -> ProjectResult<Vec<Project>> {
        self.repo.list_by_owner(owner).await
    }
}
