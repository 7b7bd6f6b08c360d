//! Repository Traits
//!
//! Interfaces for project persistence. Every lookup is scoped to an owner.

use crate::domain::entities::Project;
use crate::domain::value_objects::{ProjectId, UserId};
use crate::error::ProjectResult;

/// Project repository trait
#[trait_variant::make(ProjectRepository: Send)]
pub trait LocalProjectRepository {
    /// Store a new project
    async fn create(&self, project: &Project) -> ProjectResult<()>;

    /// All projects of `owner`, oldest first
    async fn list_by_owner(&self, owner: &UserId) -> ProjectResult<Vec<Project>>;

    /// The project with `id` if it belongs to `owner`
    async fn find_owned(&self, id: &ProjectId, owner: &UserId) -> ProjectResult<Option<Project>>;

    /// Delete the project with `id` if it belongs to `owner`
    ///
    /// Returns whether a project was deleted.
    async fn delete_owned(&self, id: &ProjectId, owner: &UserId) -> ProjectResult<bool>;
}
