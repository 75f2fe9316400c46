use std::sync::Arc;

use crate::model::{tasks::TaskChanges, ProjectId, TaskDescription, TaskId, UserId};

use super::{
    ownership::{require_existing_owner, OwnershipError},
    repositories::TasksRepository,
};

pub struct TasksService {
    tasks: Arc<dyn TasksRepository>,
}

impl TasksService {
    pub fn new(tasks: Arc<dyn TasksRepository>) -> Self {
        Self { tasks }
    }

    /// Tasks created by `caller` inside `project_id`.
    pub async fn fetch_tasks(
        &self,
        caller: UserId,
        project_id: ProjectId,
    ) -> anyhow::Result<Vec<TaskDescription>> {
        self.tasks.fetch_tasks(caller, project_id).await
    }

    pub async fn create_task(
        &self,
        caller: UserId,
        project_id: ProjectId,
        name: &str,
    ) -> anyhow::Result<TaskDescription> {
        self.tasks
            .create_task(caller, project_id, name)
            .await
            .inspect_err(|err| log::error!("failed to store task for user {}: {:?}", caller, err))
    }

    /// Applies `changes` to a task owned by `caller`. The status always comes
    /// from `done`; whatever status `changes` carries is discarded.
    pub async fn modify_task(
        &self,
        caller: UserId,
        task_id: TaskId,
        changes: TaskChanges,
        done: Option<bool>,
    ) -> anyhow::Result<Result<TaskDescription, OwnershipError>> {
        let found = self.tasks.find_task(task_id).await?;
        if let Err(err) = require_existing_owner(found, caller) {
            return Ok(Err(err));
        }

        let changes = TaskChanges { done, ..changes };
        let updated = self.tasks.update_task(task_id, changes).await?;

        Ok(updated.ok_or(OwnershipError::NotFound))
    }

    pub async fn delete_task(
        &self,
        caller: UserId,
        task_id: TaskId,
    ) -> anyhow::Result<Result<(), OwnershipError>> {
        let found = self.tasks.find_task(task_id).await?;
        if let Err(err) = require_existing_owner(found, caller) {
            return Ok(Err(err));
        }

        if !self.tasks.delete_task(task_id).await? {
            return Ok(Err(OwnershipError::NotFound));
        }

        Ok(Ok(()))
    }
}
