use std::sync::Arc;

use crate::model::{projects::ProjectChanges, ProjectDescription, ProjectId, UserId};

use super::{
    ownership::{require_existing_owner, OwnershipError},
    repositories::ProjectsRepository,
};

pub struct ProjectsService {
    projects: Arc<dyn ProjectsRepository>,
}

impl ProjectsService {
    pub fn new(projects: Arc<dyn ProjectsRepository>) -> Self {
        Self { projects }
    }

    pub async fn fetch_projects(&self, caller: UserId) -> anyhow::Result<Vec<ProjectDescription>> {
        self.projects.fetch_projects(caller).await
    }

    /// Creates a project owned by `caller`.
    pub async fn create_project(
        &self,
        caller: UserId,
        name: &str,
    ) -> anyhow::Result<ProjectDescription> {
        self.projects
            .create_project(caller, name)
            .await
            .inspect_err(|err| {
                log::error!("failed to store project for user {}: {:?}", caller, err)
            })
    }

    pub async fn update_project(
        &self,
        caller: UserId,
        project_id: ProjectId,
        changes: ProjectChanges,
    ) -> anyhow::Result<Result<ProjectDescription, OwnershipError>> {
        let found = self.projects.find_project(project_id).await?;
        if let Err(err) = require_existing_owner(found, caller) {
            return Ok(Err(err));
        }

        let updated = self.projects.update_project(project_id, changes).await?;

        Ok(updated.ok_or(OwnershipError::NotFound))
    }

    /// Deletes a project. Its tasks are left in place.
    pub async fn delete_project(
        &self,
        caller: UserId,
        project_id: ProjectId,
    ) -> anyhow::Result<Result<(), OwnershipError>> {
        let found = self.projects.find_project(project_id).await?;
        if let Err(err) = require_existing_owner(found, caller) {
            return Ok(Err(err));
        }

        if !self.projects.delete_project(project_id).await? {
            return Ok(Err(OwnershipError::NotFound));
        }

        Ok(Ok(()))
    }
}
