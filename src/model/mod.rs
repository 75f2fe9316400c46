pub mod projects;
mod sessions;
pub mod tasks;
mod types;
pub mod users;

pub use projects::{ProjectDescription, ProjectId};
pub use sessions::{Identity, SessionClaims, SessionToken};
pub use tasks::{TaskDescription, TaskId};
pub use types::UniqueId;
pub use users::{UserDescription, UserId};
