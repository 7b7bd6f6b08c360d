//! PostgreSQL Repository Implementation

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::domain::entities::Project;
use crate::domain::repository::ProjectRepository;
use crate::domain::value_objects::{ProjectDescription, ProjectId, ProjectName, UserId};
use crate::error::{ProjectError, ProjectResult};

/// PostgreSQL-backed project repository
#[derive(Clone)]
pub struct PgProjectRepository {
    pool: PgPool,
}

impl PgProjectRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl ProjectRepository for PgProjectRepository {
    async fn create(&self, project: &Project) -> ProjectResult<()> {
        sqlx::query(
            r#"
            INSERT INTO projects (
                project_id,
                owner_id,
                name,
                description,
                created_at,
                updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(project.id.to_hex())
        .bind(project.owner.to_hex())
        .bind(project.name.as_str())
        .bind(project.description.as_str())
        .bind(project.created_at)
        .bind(project.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn list_by_owner(&self, owner: &UserId) -> ProjectResult<Vec<Project>> {
        let rows = sqlx::query_as::<_, ProjectRow>(
            r#"
            SELECT
                project_id,
                owner_id,
                name,
                description,
                created_at,
                updated_at
            FROM projects
            WHERE owner_id = $1
            ORDER BY created_at, project_id
            "#,
        )
        .bind(owner.to_hex())
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(ProjectRow::into_project).collect()
    }

    async fn find_owned(&self, id: &ProjectId, owner: &UserId) -> ProjectResult<Option<Project>> {
        let row = sqlx::query_as::<_, ProjectRow>(
            r#"
            SELECT
                project_id,
                owner_id,
                name,
                description,
                created_at,
                updated_at
            FROM projects
            WHERE project_id = $1 AND owner_id = $2
            "#,
        )
        .bind(id.to_hex())
        .bind(owner.to_hex())
        .fetch_optional(&self.pool)
        .await?;

        row.map(ProjectRow::into_project).transpose()
    }

    async fn delete_owned(&self, id: &ProjectId, owner: &UserId) -> ProjectResult<bool> {
        let deleted = sqlx::query("DELETE FROM projects WHERE project_id = $1 AND owner_id = $2")
            .bind(id.to_hex())
            .bind(owner.to_hex())
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(deleted > 0)
    }
}

#[derive(sqlx::FromRow)]
struct ProjectRow {
    project_id: String,
    owner_id: String,
    name: String,
    description: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl ProjectRow {
    fn into_project(self) -> ProjectResult<Project> {
        let id = ProjectId::parse_str(self.project_id.trim())
            .map_err(|e| ProjectError::Internal(format!("Invalid project_id: {e}")))?;
        let owner = UserId::parse_str(self.owner_id.trim())
            .map_err(|e| ProjectError::Internal(format!("Invalid owner_id: {e}")))?;

        Ok(Project {
            id,
            owner,
            name: ProjectName::from_db(self.name),
            description: ProjectDescription::from_db(self.description),
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}
