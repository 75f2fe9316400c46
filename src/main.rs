#[macro_use]
extern crate rocket;

mod api;
mod app;
mod config;
mod model;
mod storage;

use std::sync::Arc;

use api::{initialize_api, Context};
use app::{
    auth::AuthService,
    projects::ProjectsService,
    repositories::{ProjectsRepository, TasksRepository, UsersRepository},
    tasks::TasksService,
    tokens::{TokenIssuer, SESSION_TTL},
};
use config::{read_environment, Environment};
use storage::{
    db::{self, DatabaseConnection, DatabaseConnectionRef},
    inmemory,
};

fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
}

struct Repositories {
    users: Arc<dyn UsersRepository>,
    projects: Arc<dyn ProjectsRepository>,
    tasks: Arc<dyn TasksRepository>,
}

fn create_inmemory_repositories() -> Repositories {
    Repositories {
        users: Arc::new(inmemory::InMemoryUsers::new()),
        projects: Arc::new(inmemory::InMemoryProjects::new()),
        tasks: Arc::new(inmemory::InMemoryTasks::new()),
    }
}

fn create_db_repositories(db: DatabaseConnectionRef) -> Repositories {
    Repositories {
        users: Arc::new(db::DbUsers::new(db.clone())),
        projects: Arc::new(db::DbProjects::new(db.clone())),
        tasks: Arc::new(db::DbTasks::new(db)),
    }
}

fn create_context(repos: Repositories, tokens: TokenIssuer) -> Context {
    Context {
        auth: Box::new(AuthService::new(repos.users, tokens)),
        projects: Box::new(ProjectsService::new(repos.projects)),
        tasks: Box::new(TasksService::new(repos.tasks)),
    }
}

async fn create_repos(env: &Environment) -> anyhow::Result<Repositories> {
    if let Some(uri) = &env.database_url {
        log::info!("Connecting to database");
        let db = Arc::new(DatabaseConnection::connect(uri)?);
        db.ensure_schema().await?;

        Ok(create_db_repositories(db))
    } else {
        log::info!("Using in-memory repositories, since database URI is not set.");
        Ok(create_inmemory_repositories())
    }
}

#[rocket::main]
async fn main() -> anyhow::Result<()> {
    init_logging();

    log::info!("Start");

    let environment = read_environment()?;
    let repos = create_repos(&environment).await?;
    let tokens = TokenIssuer::new(&environment.token_secret, SESSION_TTL);

    let context = Arc::new(create_context(repos, tokens));

    initialize_api(context)
        .launch()
        .await
        .map_err(|err| anyhow::anyhow!("server failed: {}", err))?;

    Ok(())
}
