//! Domain Entities

use chrono::{DateTime, Utc};

use crate::domain::value_objects::{ProjectDescription, ProjectId, ProjectName, UserId};

/// Project entity, always owned by exactly one user
#[derive(Debug, Clone, PartialEq)]
pub struct Project {
    pub id: ProjectId,
    pub owner: UserId,
    pub name: ProjectName,
    pub description: ProjectDescription,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Project {
    /// Create a new project for `owner`
    pub fn new(owner: UserId, name: ProjectName, description: ProjectDescription) -> Self {
        let now = Utc::now();
        Self {
            id: ProjectId::new(),
            owner,
            name,
            description,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn is_owned_by(&self, user_id: &UserId) -> bool {
        &self.owner == user_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_project() {
        let owner = UserId::new();
        let project = Project::new(
            owner,
            ProjectName::new("Apollo").unwrap(),
            ProjectDescription::default(),
        );

        assert!(project.is_owned_by(&owner));
        assert!(!project.is_owned_by(&UserId::new()));
        assert_eq!(project.created_at, project.updated_at);
        assert_ne!(project.id.to_hex(), owner.to_hex());
    }
}
