pub mod auth;
pub mod ownership;
pub mod passwords;
pub mod projects;
pub mod repositories;
pub mod tasks;
pub mod tokens;
