use async_graphql::{InputObject, SimpleObject, ID};
use chrono::{DateTime, Utc};

use crate::model::{ProjectDescription, TaskDescription, UniqueId};

use super::errors::{user_error, ErrorCode};

pub fn to_id(id: UniqueId) -> ID {
    ID(id.to_string())
}

pub fn parse_id(id: &ID) -> async_graphql::Result<UniqueId> {
    id.parse()
        .map_err(|_| user_error(ErrorCode::BadUserInput, format!("ID no válido: {}", id.as_str())))
}

#[derive(SimpleObject)]
pub struct Token {
    pub token: String,
}

#[derive(SimpleObject)]
#[graphql(name = "Proyecto")]
pub struct Project {
    pub id: ID,
    #[graphql(name = "nombre")]
    pub name: String,
    #[graphql(name = "creador")]
    pub creator: ID,
    #[graphql(name = "creado")]
    pub created_at: DateTime<Utc>,
}

impl From<ProjectDescription> for Project {
    fn from(project: ProjectDescription) -> Self {
        Self {
            id: to_id(project.project_id),
            name: project.name,
            creator: to_id(project.creator),
            created_at: project.created_at,
        }
    }
}

#[derive(SimpleObject)]
#[graphql(name = "Tarea")]
pub struct Task {
    pub id: ID,
    #[graphql(name = "nombre")]
    pub name: String,
    #[graphql(name = "creador")]
    pub creator: ID,
    #[graphql(name = "proyecto")]
    pub project: ID,
    #[graphql(name = "estado")]
    pub done: bool,
    #[graphql(name = "creado")]
    pub created_at: DateTime<Utc>,
}

impl From<TaskDescription> for Task {
    fn from(task: TaskDescription) -> Self {
        Self {
            id: to_id(task.task_id),
            name: task.name,
            creator: to_id(task.creator),
            project: to_id(task.project_id),
            done: task.done,
            created_at: task.created_at,
        }
    }
}

#[derive(InputObject)]
#[graphql(name = "UsuarioInput")]
pub struct NewUserInput {
    #[graphql(name = "nombre")]
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(InputObject)]
#[graphql(name = "AutenticarInput")]
pub struct LoginInput {
    pub email: String,
    pub password: String,
}

#[derive(InputObject)]
#[graphql(name = "ProyectoInput")]
pub struct ProjectInput {
    #[graphql(name = "nombre")]
    pub name: String,
}

#[derive(InputObject)]
#[graphql(name = "TareaInput")]
pub struct TaskInput {
    #[graphql(name = "nombre")]
    pub name: String,
    #[graphql(name = "proyecto")]
    pub project: ID,
    /// Ignored: the status is only set through the `estado` argument of `actualizarTarea`.
    #[graphql(name = "estado")]
    pub done: Option<bool>,
}

#[derive(InputObject)]
#[graphql(name = "ProyectoIDInput")]
pub struct ProjectFilterInput {
    #[graphql(name = "proyecto")]
    pub project: ID,
}
