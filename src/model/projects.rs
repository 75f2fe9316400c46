use chrono::{DateTime, Utc};

use super::{UniqueId, UserId};

pub type ProjectId = UniqueId;

#[derive(Debug, Clone, PartialEq)]
pub struct ProjectDescription {
    pub project_id: ProjectId,
    pub name: String,
    pub creator: UserId,
    pub created_at: DateTime<Utc>,
}

/// Fields of a project that an update may overwrite. `None` keeps the stored value.
#[derive(Debug, Clone, Default)]
pub struct ProjectChanges {
    pub name: Option<String>,
}

impl ProjectDescription {
    pub fn apply(&mut self, changes: ProjectChanges) {
        if let Some(name) = changes.name {
            self.name = name;
        }
    }
}
