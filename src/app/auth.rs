use std::sync::Arc;

use thiserror::Error;

use crate::model::{Identity, SessionToken, UserId};

use super::{
    passwords::{hash_password, verify_password},
    repositories::UsersRepository,
    tokens::TokenIssuer,
};

pub struct AuthService {
    users: Arc<dyn UsersRepository>,
    tokens: TokenIssuer,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LoginError {
    #[error("El usuario no está registrado")]
    UserNotFound,
    #[error("La password no es correcta")]
    IncorrectPassword,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CreateUserError {
    #[error("El usuario ya está registrado")]
    UserAlreadyExists,
}

impl AuthService {
    pub fn new(users: Arc<dyn UsersRepository>, tokens: TokenIssuer) -> Self {
        Self { users, tokens }
    }

    /// Resolves a bearer token to the identity it was issued for.
    pub fn authorize(&self, token: &str) -> Option<Identity> {
        self.tokens.verify(token)
    }

    pub async fn create_user(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> anyhow::Result<Result<UserId, CreateUserError>> {
        // The lookup and the insert are not atomic; the repository rejects a
        // duplicate email that slips in between.
        if self.users.does_user_exist_by_email(email).await? {
            return Ok(Err(CreateUserError::UserAlreadyExists));
        }

        let password_hash = hash_password(password).await?;

        let user_id = self
            .users
            .create_user(name, email, &password_hash)
            .await
            .inspect_err(|err| log::error!("failed to store new user: {:?}", err))?;

        log::info!("registered user {}", user_id);

        Ok(Ok(user_id))
    }

    pub async fn login_user(
        &self,
        email: &str,
        password: &str,
    ) -> anyhow::Result<Result<SessionToken, LoginError>> {
        let Some(user) = self.users.find_user_by_email(email).await? else {
            return Ok(Err(LoginError::UserNotFound));
        };

        if !verify_password(password, &user.password_hash).await? {
            return Ok(Err(LoginError::IncorrectPassword));
        }

        let token = self.tokens.issue(&Identity {
            id: user.user_id,
            email: user.email,
            name: user.name,
        })?;

        Ok(Ok(token))
    }
}
