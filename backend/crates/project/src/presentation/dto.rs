//! API DTOs (Data Transfer Objects)

use serde::{Deserialize, Serialize};

use crate::domain::entities::Project;

/// Query for GET /api/proj
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListProjectsQuery {
    /// Return full documents instead of ids only
    #[serde(default)]
    pub select_related: bool,
}

/// Body of POST /api/proj
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CreateProjectRequest {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// Full project document
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectResponse {
    pub id: String,
    pub owner: String,
    pub name: String,
    pub description: String,
    pub created_at_ms: i64,
    pub updated_at_ms: i64,
}

impl From<&Project> for ProjectResponse {
    fn from(project: &Project) -> Self {
        Self {
            id: project.id.to_hex(),
            owner: project.owner.to_hex(),
            name: project.name.as_str().to_string(),
            description: project.description.as_str().to_string(),
            created_at_ms: project.created_at.timestamp_millis(),
            updated_at_ms: project.updated_at.timestamp_millis(),
        }
    }
}

/// Id-only project summary
#[derive(Debug, Clone, Serialize)]
pub struct ProjectIdResponse {
    pub id: String,
}

/// Element of the list response, shaped by `select_related`
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum ProjectListItem {
    Full(ProjectResponse),
    IdOnly(ProjectIdResponse),
}

impl ProjectListItem {
    pub fn from_project(project: &Project, select_related: bool) -> Self {
        if select_related {
            ProjectListItem::Full(project.into())
        } else {
            ProjectListItem::IdOnly(ProjectIdResponse {
                id: project.id.to_hex(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::{ProjectDescription, ProjectName, UserId};

    #[test]
    fn test_create_request_rejects_unknown_fields() {
        assert!(serde_json::from_str::<CreateProjectRequest>(r#"{"name":"a"}"#).is_ok());
        assert!(
            serde_json::from_str::<CreateProjectRequest>(r#"{"name":"a","owner":"x"}"#).is_err()
        );
        assert!(serde_json::from_str::<CreateProjectRequest>(r#"{}"#).is_err());
    }

    #[test]
    fn test_list_item_shapes() {
        let project = Project::new(
            UserId::new(),
            ProjectName::new("Apollo").unwrap(),
            ProjectDescription::default(),
        );

        let id_only = serde_json::to_value(ProjectListItem::from_project(&project, false)).unwrap();
        assert_eq!(id_only, serde_json::json!({ "id": project.id.to_hex() }));

        let full = serde_json::to_value(ProjectListItem::from_project(&project, true)).unwrap();
        assert_eq!(full["name"], "Apollo");
        assert_eq!(full["owner"], project.owner.to_hex());
        assert!(full["createdAtMs"].is_i64());
    }
}
