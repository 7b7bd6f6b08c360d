//! In-Memory Repository Implementation

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::domain::entities::Project;
use crate::domain::repository::ProjectRepository;
use crate::domain::value_objects::{ProjectId, UserId};
use crate::error::ProjectResult;

/// In-memory project repository; clones share the same map
#[derive(Clone, Default)]
pub struct MemoryProjectRepository {
    projects: Arc<RwLock<HashMap<ProjectId, Project>>>,
}

impl MemoryProjectRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ProjectRepository for MemoryProjectRepository {
    async fn create(&self, project: &Project) -> ProjectResult<()> {
        self.projects
            .write()
            .await
            .insert(project.id, project.clone());
        Ok(())
    }

    async fn list_by_owner(&self, owner: &UserId) -> ProjectResult<Vec<Project>> {
        let mut projects: Vec<Project> = self
            .projects
            .read()
            .await
            .values()
            .filter(|p| p.is_owned_by(owner))
            .cloned()
            .collect();

        projects.sort_by(|a, b| {
            a.created_at
                .cmp(&b.created_at)
                .then_with(|| a.id.as_bytes().cmp(b.id.as_bytes()))
        });
        Ok(projects)
    }

    async fn find_owned(&self, id: &ProjectId, owner: &UserId) -> ProjectResult<Option<Project>> {
        Ok(self
            .projects
            .read()
            .await
            .get(id)
            .filter(|p| p.is_owned_by(owner))
            .cloned())
    }

    async fn delete_owned(&self, id: &ProjectId, owner: &UserId) -> ProjectResult<bool> {
        let mut projects = self.projects.write().await;

        match projects.get(id) {
            Some(p) if p.is_owned_by(owner) => {
                projects.remove(id);
                Ok(true)
            }
            _ => Ok(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::{ProjectDescription, ProjectName};

    fn project(owner: UserId, name: &str) -> Project {
        Project::new(
            owner,
            ProjectName::new(name).unwrap(),
            ProjectDescription::default(),
        )
    }

    #[tokio::test]
    async fn test_scoped_by_owner() {
        let repo = MemoryProjectRepository::new();
        let alice = UserId::new();
        let bob = UserId::new();

        let a = project(alice, "a");
        let b = project(bob, "b");
        repo.create(&a).await.unwrap();
        repo.create(&b).await.unwrap();

        let listed = repo.list_by_owner(&alice).await.unwrap();
        assert_eq!(listed, vec![a.clone()]);

        assert_eq!(repo.find_owned(&a.id, &alice).await.unwrap(), Some(a.clone()));
        assert_eq!(repo.find_owned(&a.id, &bob).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_delete_only_own() {
        let repo = MemoryProjectRepository::new();
        let alice = UserId::new();
        let a = project(alice, "a");
        repo.create(&a).await.unwrap();

        assert!(!repo.delete_owned(&a.id, &UserId::new()).await.unwrap());
        assert!(repo.delete_owned(&a.id, &alice).await.unwrap());
        assert!(!repo.delete_owned(&a.id, &alice).await.unwrap());
        assert!(repo.list_by_owner(&alice).await.unwrap().is_empty());
    }
}
