//! Create Project Use Case

use std::sync::Arc;

use crate::domain::entities::Project;
use crate::domain::repository::ProjectRepository;
use crate::domain::value_objects::{ProjectDescription, ProjectId, ProjectName, UserId};
use crate::error::ProjectResult;

/// Create project input
#[derive(Debug)]
pub struct CreateProjectInput {
    pub name: String,
    pub description: Option<String>,
}

/// Create project use case
pub struct CreateProjectUseCase<R>
where
    R: ProjectRepository,
{
    repo: Arc<R>,
}

impl<R> CreateProjectUseCase<R>
where
    R: ProjectRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, input: CreateProjectInput, owner: UserId) -> ProjectResult<ProjectId> {
        let name = ProjectName::new(&input.name)?;
        let description = ProjectDescription::new(input.description)?;

        let project = Project::new(owner, name, description);
        self.repo.create(&project).await?;

        tracing::info!(
            project_id = %project.id,
            owner = %owner,
            "Project created"
        );

        Ok(project.id)
    }
}
