use async_trait::async_trait;

use crate::model::{
    projects::ProjectChanges, tasks::TaskChanges, ProjectDescription, ProjectId,
    TaskDescription, TaskId, UserDescription, UserId,
};

#[async_trait]
pub trait UsersRepository: Send + Sync {
    async fn does_user_exist_by_email(&self, email: &str) -> anyhow::Result<bool>;

    async fn find_user_by_email(&self, email: &str) -> anyhow::Result<Option<UserDescription>>;

    /// Stores a new user. Fails if the email is already taken.
    async fn create_user(
        &self,
        name: &str,
        email: &str,
        password_hash: &str,
    ) -> anyhow::Result<UserId>;
}

#[async_trait]
pub trait ProjectsRepository: Send + Sync {
    async fn fetch_projects(&self, creator: UserId) -> anyhow::Result<Vec<ProjectDescription>>;

    async fn find_project(
        &self,
        project_id: ProjectId,
    ) -> anyhow::Result<Option<ProjectDescription>>;

    async fn create_project(
        &self,
        creator: UserId,
        name: &str,
    ) -> anyhow::Result<ProjectDescription>;

    /// Returns the updated project, or `None` if it no longer exists.
    async fn update_project(
        &self,
        project_id: ProjectId,
        changes: ProjectChanges,
    ) -> anyhow::Result<Option<ProjectDescription>>;

    /// Returns `false` if there was nothing to delete.
    async fn delete_project(&self, project_id: ProjectId) -> anyhow::Result<bool>;
}

#[async_trait]
pub trait TasksRepository: Send + Sync {
    async fn fetch_tasks(
        &self,
        creator: UserId,
        project_id: ProjectId,
    ) -> anyhow::Result<Vec<TaskDescription>>;

    async fn find_task(&self, task_id: TaskId) -> anyhow::Result<Option<TaskDescription>>;

    async fn create_task(
        &self,
        creator: UserId,
        project_id: ProjectId,
        name: &str,
    ) -> anyhow::Result<TaskDescription>;

    async fn update_task(
        &self,
        task_id: TaskId,
        changes: TaskChanges,
    ) -> anyhow::Result<Option<TaskDescription>>;

    async fn delete_task(&self, task_id: TaskId) -> anyhow::Result<bool>;
}
