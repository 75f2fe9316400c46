use std::sync::Arc;

use rocket::State;

use crate::app::{auth::AuthService, projects::ProjectsService, tasks::TasksService};

pub type ContextState = State<Arc<Context>>;

pub struct Context {
    pub auth: Box<AuthService>,
    pub projects: Box<ProjectsService>,
    pub tasks: Box<TasksService>,
}
