use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;

use crate::{
    app::repositories::TasksRepository,
    model::{tasks::TaskChanges, ProjectId, TaskDescription, TaskId, UserId},
};

struct MutableTasksStorage {
    next_id: TaskId,
    tasks: Vec<TaskDescription>,
}

pub struct InMemoryTasks {
    storage: Mutex<MutableTasksStorage>,
}

impl InMemoryTasks {
    pub fn new() -> Self {
        Self {
            storage: Mutex::new(MutableTasksStorage {
                next_id: TaskId::from_raw(1),
                tasks: Vec::new(),
            }),
        }
    }
}

#[async_trait]
impl TasksRepository for InMemoryTasks {
    async fn fetch_tasks(
        &self,
        creator: UserId,
        project_id: ProjectId,
    ) -> anyhow::Result<Vec<TaskDescription>> {
        let storage = super::lock(&self.storage, "tasks")?;

        Ok(storage
            .tasks
            .iter()
            .filter(|t| t.creator == creator && t.project_id == project_id)
            .cloned()
            .collect())
    }

    async fn find_task(&self, task_id: TaskId) -> anyhow::Result<Option<TaskDescription>> {
        let storage = super::lock(&self.storage, "tasks")?;

        Ok(storage.tasks.iter().find(|t| t.task_id == task_id).cloned())
    }

    async fn create_task(
        &self,
        creator: UserId,
        project_id: ProjectId,
        name: &str,
    ) -> anyhow::Result<TaskDescription> {
        let mut storage = super::lock(&self.storage, "tasks")?;

        let task_id = storage.next_id;
        storage.next_id = TaskId::from_raw(task_id.raw() + 1);

        let task = TaskDescription {
            task_id,
            name: name.to_string(),
            creator,
            project_id,
            done: false,
            created_at: Utc::now(),
        };
        storage.tasks.push(task.clone());

        Ok(task)
    }

    async fn update_task(
        &self,
        task_id: TaskId,
        changes: TaskChanges,
    ) -> anyhow::Result<Option<TaskDescription>> {
        let mut storage = super::lock(&self.storage, "tasks")?;

        let Some(task) = storage.tasks.iter_mut().find(|t| t.task_id == task_id) else {
            return Ok(None);
        };

        task.apply(changes);
        Ok(Some(task.clone()))
    }

    async fn delete_task(&self, task_id: TaskId) -> anyhow::Result<bool> {
        let mut storage = super::lock(&self.storage, "tasks")?;

        let before = storage.tasks.len();
        storage.tasks.retain(|t| t.task_id != task_id);

        Ok(storage.tasks.len() != before)
    }
}
