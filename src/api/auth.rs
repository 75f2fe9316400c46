use rocket::{
    http::Status,
    request::{FromRequest, Outcome},
    Request,
};

use crate::model::{Identity, UserId};

use super::ContextState;

/// Caller identity taken from a verified `Authorization` header.
#[derive(Debug, Clone)]
pub struct AuthorizedUser {
    pub user_id: UserId,
    #[allow(unused)]
    pub identity: Identity,
}

impl AuthorizedUser {
    const HEADER_NAME: &'static str = "Authorization";

    fn read_token<'a>(request: &'a Request<'_>) -> Option<&'a str> {
        let raw = request.headers().get_one(Self::HEADER_NAME)?.trim();
        let token = raw.strip_prefix("Bearer ").unwrap_or(raw).trim();

        (!token.is_empty()).then_some(token)
    }
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for AuthorizedUser {
    type Error = ();

    async fn from_request(request: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        let Some(token) = Self::read_token(request) else {
            return Outcome::Forward(Status::Unauthorized);
        };

        let Some(context) = ContextState::get(request.rocket()) else {
            return Outcome::Error((Status::InternalServerError, ()));
        };

        match context.auth.authorize(token) {
            Some(identity) => Outcome::Success(AuthorizedUser {
                user_id: identity.id,
                identity,
            }),
            None => Outcome::Forward(Status::Unauthorized),
        }
    }
}
