mod database;
mod projects;
mod tasks;
mod users;

pub use database::{DatabaseConnection, DatabaseConnectionRef, DbError};
pub use projects::DbProjects;
pub use tasks::DbTasks;
pub use users::DbUsers;

// These tests run against a real PostgreSQL instance and are skipped unless
// `DATABASE` points at one. Every test uses fresh emails so they can share a database.
#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use chrono::Utc;

    use super::*;
    use crate::{
        app::repositories::{ProjectsRepository, TasksRepository, UsersRepository},
        model::{projects::ProjectChanges, tasks::TaskChanges, UserId},
    };

    async fn connect() -> Option<DatabaseConnectionRef> {
        let Ok(url) = std::env::var("DATABASE") else {
            eprintln!("DATABASE is not set, skipping database test");
            return None;
        };

        let db = Arc::new(DatabaseConnection::connect(&url).unwrap());
        db.ensure_schema().await.unwrap();

        Some(db)
    }

    fn unique_email(prefix: &str) -> String {
        let nanos = Utc::now().timestamp_nanos_opt().unwrap_or_default();

        format!("{}-{}@test.com", prefix, nanos)
    }

    async fn new_user(db: &DatabaseConnectionRef, prefix: &str) -> UserId {
        DbUsers::new(db.clone())
            .create_user("Test User", &unique_email(prefix), "$2b$10$hash")
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn schema_bootstrap_is_idempotent() {
        let Some(db) = connect().await else { return };

        db.ensure_schema().await.unwrap();
    }

    #[tokio::test]
    async fn duplicate_email_is_rejected_by_the_database() {
        let Some(db) = connect().await else { return };
        let users = DbUsers::new(db);
        let email = unique_email("dup");

        users.create_user("Ana", &email, "h1").await.unwrap();
        let second = users.create_user("Otra", &email, "h2").await;

        assert!(second.is_err());
        assert!(users.does_user_exist_by_email(&email).await.unwrap());
        let stored = users.find_user_by_email(&email).await.unwrap().unwrap();
        assert_eq!(stored.password_hash, "h1");
    }

    #[tokio::test]
    async fn project_update_changes_only_given_fields() {
        let Some(db) = connect().await else { return };
        let owner = new_user(&db, "projects").await;
        let projects = DbProjects::new(db);
        let project = projects.create_project(owner, "Tienda").await.unwrap();

        let unchanged = projects
            .update_project(project.project_id, ProjectChanges::default())
            .await
            .unwrap()
            .unwrap();
        let renamed = projects
            .update_project(
                project.project_id,
                ProjectChanges {
                    name: Some("Tienda v2".to_string()),
                },
            )
            .await
            .unwrap()
            .unwrap();

        assert_eq!(unchanged.name, "Tienda");
        assert_eq!(renamed.name, "Tienda v2");
        assert_eq!(renamed.creator, owner);
        assert_eq!(projects.fetch_projects(owner).await.unwrap(), vec![renamed]);
    }

    #[tokio::test]
    async fn task_update_without_status_keeps_the_stored_one() {
        let Some(db) = connect().await else { return };
        let owner = new_user(&db, "tasks").await;
        let project = DbProjects::new(db.clone())
            .create_project(owner, "Tienda")
            .await
            .unwrap();
        let tasks = DbTasks::new(db);
        let task = tasks
            .create_task(owner, project.project_id, "Carrito")
            .await
            .unwrap();

        let done = tasks
            .update_task(
                task.task_id,
                TaskChanges {
                    done: Some(true),
                    ..Default::default()
                },
            )
            .await
            .unwrap()
            .unwrap();
        let renamed = tasks
            .update_task(
                task.task_id,
                TaskChanges {
                    name: Some("Pago".to_string()),
                    done: None,
                    ..Default::default()
                },
            )
            .await
            .unwrap()
            .unwrap();

        assert!(!task.done);
        assert!(done.done);
        assert!(renamed.done);
        assert_eq!(renamed.name, "Pago");
        assert_eq!(renamed.project_id, project.project_id);
    }

    #[tokio::test]
    async fn fetch_tasks_requires_creator_and_project() {
        let Some(db) = connect().await else { return };
        let owner = new_user(&db, "owner").await;
        let stranger = new_user(&db, "stranger").await;
        let projects = DbProjects::new(db.clone());
        let shop = projects.create_project(owner, "Tienda").await.unwrap();
        let blog = projects.create_project(owner, "Blog").await.unwrap();
        let tasks = DbTasks::new(db);

        let wanted = tasks
            .create_task(owner, shop.project_id, "Carrito")
            .await
            .unwrap();
        tasks.create_task(owner, blog.project_id, "Posts").await.unwrap();
        tasks
            .create_task(stranger, shop.project_id, "Intruso")
            .await
            .unwrap();

        let fetched = tasks.fetch_tasks(owner, shop.project_id).await.unwrap();

        assert_eq!(fetched, vec![wanted]);
    }

    #[tokio::test]
    async fn deleting_a_project_leaves_its_tasks() {
        let Some(db) = connect().await else { return };
        let owner = new_user(&db, "cascade").await;
        let projects = DbProjects::new(db.clone());
        let project = projects.create_project(owner, "Tienda").await.unwrap();
        let tasks = DbTasks::new(db);
        let task = tasks
            .create_task(owner, project.project_id, "Carrito")
            .await
            .unwrap();

        assert!(projects.delete_project(project.project_id).await.unwrap());
        assert!(!projects.delete_project(project.project_id).await.unwrap());
        assert_eq!(projects.find_project(project.project_id).await.unwrap(), None);
        assert_eq!(tasks.find_task(task.task_id).await.unwrap(), Some(task));
    }
}
