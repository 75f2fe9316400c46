use async_trait::async_trait;
use sqlx::Row;

use crate::{
    app::repositories::UsersRepository,
    model::{UserDescription, UserId},
};

use super::DatabaseConnectionRef;

pub struct DbUsers {
    db: DatabaseConnectionRef,
}

impl DbUsers {
    pub fn new(db: DatabaseConnectionRef) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UsersRepository for DbUsers {
    async fn does_user_exist_by_email(&self, email: &str) -> anyhow::Result<bool> {
        let row = sqlx::query("SELECT 1 FROM users WHERE email=$1")
            .bind(email)
            .fetch_optional(self.db.as_pool())
            .await?;

        Ok(row.is_some())
    }

    async fn find_user_by_email(&self, email: &str) -> anyhow::Result<Option<UserDescription>> {
        let optional_row =
            sqlx::query("SELECT user_id, name, email, password FROM users WHERE email=$1")
                .bind(email)
                .fetch_optional(self.db.as_pool())
                .await?;

        let Some(row) = optional_row else {
            return Ok(None);
        };

        Ok(Some(UserDescription {
            user_id: UserId::from_raw(row.try_get(0)?),
            name: row.try_get(1)?,
            email: row.try_get(2)?,
            password_hash: row.try_get(3)?,
        }))
    }

    async fn create_user(
        &self,
        name: &str,
        email: &str,
        password_hash: &str,
    ) -> anyhow::Result<UserId> {
        // The UNIQUE constraint on email rejects a concurrent duplicate registration.
        let row = sqlx::query(
            "INSERT INTO users (name, email, password) VALUES ($1, $2, $3) RETURNING user_id",
        )
        .bind(name)
        .bind(email)
        .bind(password_hash)
        .fetch_one(self.db.as_pool())
        .await?;

        Ok(UserId::from_raw(row.try_get(0)?))
    }
}
