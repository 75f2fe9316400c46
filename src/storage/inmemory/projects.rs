use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;

use crate::{
    app::repositories::ProjectsRepository,
    model::{projects::ProjectChanges, ProjectDescription, ProjectId, UserId},
};

struct MutableProjectsStorage {
    next_id: ProjectId,
    projects: Vec<ProjectDescription>,
}

pub struct InMemoryProjects {
    storage: Mutex<MutableProjectsStorage>,
}

impl InMemoryProjects {
    pub fn new() -> Self {
        Self {
            storage: Mutex::new(MutableProjectsStorage {
                next_id: ProjectId::from_raw(1),
                projects: Vec::new(),
            }),
        }
    }
}

#[async_trait]
impl ProjectsRepository for InMemoryProjects {
    async fn fetch_projects(&self, creator: UserId) -> anyhow::Result<Vec<ProjectDescription>> {
        let storage = super::lock(&self.storage, "projects")?;

        Ok(storage
            .projects
            .iter()
            .filter(|p| p.creator == creator)
            .cloned()
            .collect())
    }

    async fn find_project(
        &self,
        project_id: ProjectId,
    ) -> anyhow::Result<Option<ProjectDescription>> {
        let storage = super::lock(&self.storage, "projects")?;

        Ok(storage
            .projects
            .iter()
            .find(|p| p.project_id == project_id)
            .cloned())
    }

    async fn create_project(
        &self,
        creator: UserId,
        name: &str,
    ) -> anyhow::Result<ProjectDescription> {
        let mut storage = super::lock(&self.storage, "projects")?;

        let project_id = storage.next_id;
        storage.next_id = ProjectId::from_raw(project_id.raw() + 1);

        let project = ProjectDescription {
            project_id,
            name: name.to_string(),
            creator,
            created_at: Utc::now(),
        };
        storage.projects.push(project.clone());

        Ok(project)
    }

    async fn update_project(
        &self,
        project_id: ProjectId,
        changes: ProjectChanges,
    ) -> anyhow::Result<Option<ProjectDescription>> {
        let mut storage = super::lock(&self.storage, "projects")?;

        let Some(project) = storage
            .projects
            .iter_mut()
            .find(|p| p.project_id == project_id)
        else {
            return Ok(None);
        };

        project.apply(changes);
        Ok(Some(project.clone()))
    }

    async fn delete_project(&self, project_id: ProjectId) -> anyhow::Result<bool> {
        let mut storage = super::lock(&self.storage, "projects")?;

        let before = storage.projects.len();
        storage.projects.retain(|p| p.project_id != project_id);

        Ok(storage.projects.len() != before)
    }
}
