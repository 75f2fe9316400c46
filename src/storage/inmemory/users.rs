use std::{collections::HashMap, sync::Mutex};

use async_trait::async_trait;

use crate::{
    app::repositories::UsersRepository,
    model::{UserDescription, UserId},
};

struct MutableUsersStorage {
    next_id: UserId,
    users_by_id: HashMap<UserId, UserDescription>,
    users_by_email: HashMap<String, UserId>,
}

pub struct InMemoryUsers {
    users: Mutex<MutableUsersStorage>,
}

impl InMemoryUsers {
    pub fn new() -> Self {
        Self {
            users: Mutex::new(MutableUsersStorage {
                next_id: UserId::from_raw(1),
                users_by_id: HashMap::new(),
                users_by_email: HashMap::new(),
            }),
        }
    }
}

#[async_trait]
impl UsersRepository for InMemoryUsers {
    async fn does_user_exist_by_email(&self, email: &str) -> anyhow::Result<bool> {
        let users = super::lock(&self.users, "users")?;

        Ok(users.users_by_email.contains_key(email))
    }

    async fn find_user_by_email(&self, email: &str) -> anyhow::Result<Option<UserDescription>> {
        let users = super::lock(&self.users, "users")?;

        Ok(users
            .users_by_email
            .get(email)
            .and_then(|user_id| users.users_by_id.get(user_id))
            .cloned())
    }

    async fn create_user(
        &self,
        name: &str,
        email: &str,
        password_hash: &str,
    ) -> anyhow::Result<UserId> {
        let mut users = super::lock(&self.users, "users")?;

        if users.users_by_email.contains_key(email) {
            return Err(anyhow::anyhow!("email {} is already registered", email));
        }

        let user_id = users.next_id;
        users.next_id = UserId::from_raw(user_id.raw() + 1);

        users.users_by_id.insert(
            user_id,
            UserDescription {
                user_id,
                name: name.to_string(),
                email: email.to_string(),
                password_hash: password_hash.to_string(),
            },
        );
        users.users_by_email.insert(email.to_string(), user_id);

        Ok(user_id)
    }
}
