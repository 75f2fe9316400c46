use async_trait::async_trait;
use sqlx::{postgres::PgRow, Row};

use crate::{
    app::repositories::ProjectsRepository,
    model::{projects::ProjectChanges, ProjectDescription, ProjectId, UserId},
};

use super::{DatabaseConnectionRef, DbError};

const COLUMNS: &str = "project_id, name, creator, created_at";

fn project_from_row(row: &PgRow) -> Result<ProjectDescription, DbError> {
    Ok(ProjectDescription {
        project_id: ProjectId::from_raw(row.try_get(0)?),
        name: row.try_get(1)?,
        creator: UserId::from_raw(row.try_get(2)?),
        created_at: row.try_get(3)?,
    })
}

pub struct DbProjects {
    db: DatabaseConnectionRef,
}

impl DbProjects {
    pub fn new(db: DatabaseConnectionRef) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProjectsRepository for DbProjects {
    async fn fetch_projects(&self, creator: UserId) -> anyhow::Result<Vec<ProjectDescription>> {
        let rows = sqlx::query(&format!(
            "SELECT {COLUMNS} FROM projects WHERE creator=$1 ORDER BY project_id"
        ))
        .bind(creator.raw())
        .fetch_all(self.db.as_pool())
        .await?;

        Ok(rows
            .iter()
            .map(project_from_row)
            .collect::<Result<_, _>>()?)
    }

    async fn find_project(
        &self,
        project_id: ProjectId,
    ) -> anyhow::Result<Option<ProjectDescription>> {
        let optional_row =
            sqlx::query(&format!("SELECT {COLUMNS} FROM projects WHERE project_id=$1"))
                .bind(project_id.raw())
                .fetch_optional(self.db.as_pool())
                .await?;

        Ok(optional_row.as_ref().map(project_from_row).transpose()?)
    }

    async fn create_project(
        &self,
        creator: UserId,
        name: &str,
    ) -> anyhow::Result<ProjectDescription> {
        let row = sqlx::query(&format!(
            "INSERT INTO projects (name, creator) VALUES ($1, $2) RETURNING {COLUMNS}"
        ))
        .bind(name)
        .bind(creator.raw())
        .fetch_one(self.db.as_pool())
        .await?;

        Ok(project_from_row(&row)?)
    }

    async fn update_project(
        &self,
        project_id: ProjectId,
        changes: ProjectChanges,
    ) -> anyhow::Result<Option<ProjectDescription>> {
        let optional_row = sqlx::query(&format!(
            "UPDATE projects SET name=COALESCE($1, name) WHERE project_id=$2 RETURNING {COLUMNS}"
        ))
        .bind(changes.name)
        .bind(project_id.raw())
        .fetch_optional(self.db.as_pool())
        .await?;

        Ok(optional_row.as_ref().map(project_from_row).transpose()?)
    }

    async fn delete_project(&self, project_id: ProjectId) -> anyhow::Result<bool> {
        let res = sqlx::query("DELETE FROM projects WHERE project_id=$1")
            .bind(project_id.raw())
            .execute(self.db.as_pool())
            .await?;

        Ok(res.rows_affected() > 0)
    }
}
