use async_trait::async_trait;
use sqlx::{postgres::PgRow, Row};

use crate::{
    app::repositories::TasksRepository,
    model::{tasks::TaskChanges, ProjectId, TaskDescription, TaskId, UserId},
};

use super::{DatabaseConnectionRef, DbError};

const COLUMNS: &str = "task_id, name, creator, project_id, done, created_at";

fn task_from_row(row: &PgRow) -> Result<TaskDescription, DbError> {
    Ok(TaskDescription {
        task_id: TaskId::from_raw(row.try_get(0)?),
        name: row.try_get(1)?,
        creator: UserId::from_raw(row.try_get(2)?),
        project_id: ProjectId::from_raw(row.try_get(3)?),
        done: row.try_get(4)?,
        created_at: row.try_get(5)?,
    })
}

pub struct DbTasks {
    db: DatabaseConnectionRef,
}

impl DbTasks {
    pub fn new(db: DatabaseConnectionRef) -> Self {
        Self { db }
    }
}

#[async_trait]
impl TasksRepository for DbTasks {
    async fn fetch_tasks(
        &self,
        creator: UserId,
        project_id: ProjectId,
    ) -> anyhow::Result<Vec<TaskDescription>> {
        let rows = sqlx::query(&format!(
            "SELECT {COLUMNS} FROM tasks WHERE creator=$1 AND project_id=$2 ORDER BY task_id"
        ))
        .bind(creator.raw())
        .bind(project_id.raw())
        .fetch_all(self.db.as_pool())
        .await?;

        Ok(rows.iter().map(task_from_row).collect::<Result<_, _>>()?)
    }

    async fn find_task(&self, task_id: TaskId) -> anyhow::Result<Option<TaskDescription>> {
        let optional_row = sqlx::query(&format!("SELECT {COLUMNS} FROM tasks WHERE task_id=$1"))
            .bind(task_id.raw())
            .fetch_optional(self.db.as_pool())
            .await?;

        Ok(optional_row.as_ref().map(task_from_row).transpose()?)
    }

    async fn create_task(
        &self,
        creator: UserId,
        project_id: ProjectId,
        name: &str,
    ) -> anyhow::Result<TaskDescription> {
        let row = sqlx::query(&format!(
            "INSERT INTO tasks (name, creator, project_id) VALUES ($1, $2, $3) RETURNING {COLUMNS}"
        ))
        .bind(name)
        .bind(creator.raw())
        .bind(project_id.raw())
        .fetch_one(self.db.as_pool())
        .await?;

        Ok(task_from_row(&row)?)
    }

    async fn update_task(
        &self,
        task_id: TaskId,
        changes: TaskChanges,
    ) -> anyhow::Result<Option<TaskDescription>> {
        let optional_row = sqlx::query(&format!(
            "UPDATE tasks SET name=COALESCE($1, name), project_id=COALESCE($2, project_id), \
             done=COALESCE($3, done) WHERE task_id=$4 RETURNING {COLUMNS}"
        ))
        .bind(changes.name)
        .bind(changes.project_id.map(|id| id.raw()))
        .bind(changes.done)
        .bind(task_id.raw())
        .fetch_optional(self.db.as_pool())
        .await?;

        Ok(optional_row.as_ref().map(task_from_row).transpose()?)
    }

    async fn delete_task(&self, task_id: TaskId) -> anyhow::Result<bool> {
        let res = sqlx::query("DELETE FROM tasks WHERE task_id=$1")
            .bind(task_id.raw())
            .execute(self.db.as_pool())
            .await?;

        // Expected to delete at most 1 task.
        Ok(res.rows_affected() > 0)
    }
}
