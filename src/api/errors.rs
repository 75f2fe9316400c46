use async_graphql::{Error, ErrorExtensions};

use crate::app::{
    auth::{CreateUserError, LoginError},
    ownership::OwnershipError,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    DuplicateUser,
    UserNotFound,
    InvalidCredentials,
    NotFound,
    Forbidden,
    Unauthenticated,
    BadUserInput,
    Internal,
}

impl ErrorCode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::DuplicateUser => "DUPLICATE_USER",
            Self::UserNotFound => "USER_NOT_FOUND",
            Self::InvalidCredentials => "INVALID_CREDENTIALS",
            Self::NotFound => "NOT_FOUND",
            Self::Forbidden => "FORBIDDEN",
            Self::Unauthenticated => "UNAUTHENTICATED",
            Self::BadUserInput => "BAD_USER_INPUT",
            Self::Internal => "INTERNAL_SERVER_ERROR",
        }
    }
}

/// Guarded mutations, used to pick the message of an ownership failure.
#[derive(Debug, Clone, Copy)]
pub enum GuardedMutation {
    UpdateProject,
    DeleteProject,
    UpdateTask,
    DeleteTask,
}

pub fn user_error(code: ErrorCode, message: impl Into<String>) -> Error {
    Error::new(message.into()).extend_with(|_, extensions| extensions.set("code", code.as_str()))
}

/// Logs an infrastructure failure and hides its details from the client.
pub fn internal_error(err: anyhow::Error) -> Error {
    log::error!("request failed: {:?}", err);

    user_error(ErrorCode::Internal, "Error interno del servidor")
}

pub fn unauthenticated() -> Error {
    user_error(ErrorCode::Unauthenticated, "Debes iniciar sesión")
}

pub fn create_user_error(err: CreateUserError) -> Error {
    match err {
        CreateUserError::UserAlreadyExists => user_error(ErrorCode::DuplicateUser, err.to_string()),
    }
}

pub fn login_error(err: LoginError) -> Error {
    let code = match err {
        LoginError::UserNotFound => ErrorCode::UserNotFound,
        LoginError::IncorrectPassword => ErrorCode::InvalidCredentials,
    };

    user_error(code, err.to_string())
}

pub fn ownership_error(err: OwnershipError, mutation: GuardedMutation) -> Error {
    use GuardedMutation::*;

    match err {
        OwnershipError::NotFound => {
            let message = match mutation {
                UpdateProject | DeleteProject => "El proyecto no existe",
                UpdateTask | DeleteTask => "La tarea no existe",
            };
            user_error(ErrorCode::NotFound, message)
        }
        OwnershipError::Forbidden => {
            let message = match mutation {
                UpdateProject => "No puedes modificar el proyecto porque no eres el creador",
                DeleteProject => "No puedes eliminar el proyecto porque no eres el creador",
                UpdateTask => "No puedes modificar la tarea porque no eres el propietario",
                DeleteTask => "No puedes eliminar la tarea porque no eres el creador",
            };
            user_error(ErrorCode::Forbidden, message)
        }
    }
}
