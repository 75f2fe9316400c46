use chrono::{DateTime, Utc};

use super::{ProjectId, UniqueId, UserId};

pub type TaskId = UniqueId;

#[derive(Debug, Clone, PartialEq)]
pub struct TaskDescription {
    pub task_id: TaskId,
    pub name: String,
    pub creator: UserId,
    pub project_id: ProjectId,
    /// Completion status, `false` for new tasks.
    pub done: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default)]
pub struct TaskChanges {
    pub name: Option<String>,
    pub project_id: Option<ProjectId>,
    pub done: Option<bool>,
}

impl TaskDescription {
    pub fn apply(&mut self, changes: TaskChanges) {
        if let Some(name) = changes.name {
            self.name = name;
        }
        if let Some(project_id) = changes.project_id {
            self.project_id = project_id;
        }
        if let Some(done) = changes.done {
            self.done = done;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apply_keeps_fields_that_are_not_changed() {
        let mut task = TaskDescription {
            task_id: TaskId::from_raw(1),
            name: "write docs".to_string(),
            creator: UserId::from_raw(2),
            project_id: ProjectId::from_raw(3),
            done: false,
            created_at: Utc::now(),
        };

        task.apply(TaskChanges {
            done: Some(true),
            ..Default::default()
        });

        assert_eq!(task.name, "write docs");
        assert_eq!(task.project_id, ProjectId::from_raw(3));
        assert!(task.done);
    }
}
