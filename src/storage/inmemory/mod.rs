mod projects;
mod tasks;
mod users;

pub use projects::InMemoryProjects;
pub use tasks::InMemoryTasks;
pub use users::InMemoryUsers;

use std::sync::{Mutex, MutexGuard};

fn lock<'a, T>(mutex: &'a Mutex<T>, what: &str) -> anyhow::Result<MutexGuard<'a, T>> {
    mutex
        .lock()
        .map_err(|_| anyhow::anyhow!("in-memory {} storage is poisoned", what))
}
