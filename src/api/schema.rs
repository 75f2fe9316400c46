use std::sync::Arc;

use async_graphql::{Context, EmptySubscription, Object, Result, Schema, ID};

use crate::model::{projects::ProjectChanges, tasks::TaskChanges, UserId};

use super::{
    errors::{
        create_user_error, internal_error, login_error, ownership_error, unauthenticated,
        GuardedMutation,
    },
    types::{
        parse_id, LoginInput, NewUserInput, Project, ProjectFilterInput, ProjectInput, Task,
        TaskInput, Token,
    },
    AuthorizedUser, Context as Services,
};

pub type ApiSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

const USER_CREATED: &str = "Usuario creado correctamente";
const PROJECT_DELETED: &str = "Proyecto eliminado";
const TASK_DELETED: &str = "Tarea eliminada";

pub fn build_schema(context: Arc<Services>) -> ApiSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(context)
        .finish()
}

fn services<'a>(ctx: &Context<'a>) -> Result<&'a Arc<Services>> {
    ctx.data::<Arc<Services>>()
}

fn caller(ctx: &Context<'_>) -> Result<UserId> {
    ctx.data_opt::<AuthorizedUser>()
        .map(|user| user.user_id)
        .ok_or_else(unauthenticated)
}

#[derive(Default)]
pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// Projects created by the caller.
    #[graphql(name = "obtenerProyectos")]
    async fn projects(&self, ctx: &Context<'_>) -> Result<Vec<Project>> {
        let caller = caller(ctx)?;

        let projects = services(ctx)?
            .projects
            .fetch_projects(caller)
            .await
            .map_err(internal_error)?;

        Ok(projects.into_iter().map(Project::from).collect())
    }

    /// Tasks created by the caller inside the given project.
    #[graphql(name = "obtenerTareas")]
    async fn tasks(&self, ctx: &Context<'_>, input: ProjectFilterInput) -> Result<Vec<Task>> {
        let caller = caller(ctx)?;
        let project_id = parse_id(&input.project)?;

        let tasks = services(ctx)?
            .tasks
            .fetch_tasks(caller, project_id)
            .await
            .map_err(internal_error)?;

        Ok(tasks.into_iter().map(Task::from).collect())
    }
}

#[derive(Default)]
pub struct MutationRoot;

#[Object]
impl MutationRoot {
    #[graphql(name = "crearUsuario")]
    async fn create_user(&self, ctx: &Context<'_>, input: NewUserInput) -> Result<String> {
        let created = services(ctx)?
            .auth
            .create_user(&input.name, &input.email, &input.password)
            .await
            .map_err(internal_error)?;

        match created {
            Ok(_) => Ok(USER_CREATED.to_string()),
            Err(err) => Err(create_user_error(err)),
        }
    }

    #[graphql(name = "autenticarUsuario")]
    async fn login_user(&self, ctx: &Context<'_>, input: LoginInput) -> Result<Token> {
        let logged_in = services(ctx)?
            .auth
            .login_user(&input.email, &input.password)
            .await
            .map_err(internal_error)?;

        match logged_in {
            Ok(token) => Ok(Token {
                token: token.into_string(),
            }),
            Err(err) => Err(login_error(err)),
        }
    }

    #[graphql(name = "nuevoProyecto")]
    async fn create_project(&self, ctx: &Context<'_>, input: ProjectInput) -> Result<Project> {
        let caller = caller(ctx)?;

        let project = services(ctx)?
            .projects
            .create_project(caller, &input.name)
            .await
            .map_err(internal_error)?;

        Ok(project.into())
    }

    #[graphql(name = "actualizarProyecto")]
    async fn update_project(
        &self,
        ctx: &Context<'_>,
        id: ID,
        input: ProjectInput,
    ) -> Result<Project> {
        let caller = caller(ctx)?;
        let project_id = parse_id(&id)?;
        let changes = ProjectChanges {
            name: Some(input.name),
        };

        let updated = services(ctx)?
            .projects
            .update_project(caller, project_id, changes)
            .await
            .map_err(internal_error)?;

        updated
            .map(Project::from)
            .map_err(|err| ownership_error(err, GuardedMutation::UpdateProject))
    }

    #[graphql(name = "eliminarProyecto")]
    async fn delete_project(&self, ctx: &Context<'_>, id: ID) -> Result<String> {
        let caller = caller(ctx)?;
        let project_id = parse_id(&id)?;

        let deleted = services(ctx)?
            .projects
            .delete_project(caller, project_id)
            .await
            .map_err(internal_error)?;

        deleted
            .map(|()| PROJECT_DELETED.to_string())
            .map_err(|err| ownership_error(err, GuardedMutation::DeleteProject))
    }

    #[graphql(name = "nuevaTarea")]
    async fn create_task(&self, ctx: &Context<'_>, input: TaskInput) -> Result<Task> {
        let caller = caller(ctx)?;
        let project_id = parse_id(&input.project)?;

        let task = services(ctx)?
            .tasks
            .create_task(caller, project_id, &input.name)
            .await
            .map_err(internal_error)?;

        Ok(task.into())
    }

    #[graphql(name = "actualizarTarea")]
    async fn update_task(
        &self,
        ctx: &Context<'_>,
        id: ID,
        input: TaskInput,
        #[graphql(name = "estado")] done: Option<bool>,
    ) -> Result<Task> {
        let caller = caller(ctx)?;
        let task_id = parse_id(&id)?;
        let changes = TaskChanges {
            name: Some(input.name),
            project_id: Some(parse_id(&input.project)?),
            done: input.done,
        };

        let updated = services(ctx)?
            .tasks
            .modify_task(caller, task_id, changes, done)
            .await
            .map_err(internal_error)?;

        updated
            .map(Task::from)
            .map_err(|err| ownership_error(err, GuardedMutation::UpdateTask))
    }

    #[graphql(name = "eliminarTarea")]
    async fn delete_task(&self, ctx: &Context<'_>, id: ID) -> Result<String> {
        let caller = caller(ctx)?;
        let task_id = parse_id(&id)?;

        let deleted = services(ctx)?
            .tasks
            .delete_task(caller, task_id)
            .await
            .map_err(internal_error)?;

        deleted
            .map(|()| TASK_DELETED.to_string())
            .map_err(|err| ownership_error(err, GuardedMutation::DeleteTask))
    }
}
