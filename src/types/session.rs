use std::future::{ready, Ready};

use actix_web::{dev::Payload, FromRequest, HttpMessage, HttpRequest};
use uuid::Uuid;

use crate::types::error::AppError;

/// A validated bearer session, placed in request extensions by the auth
/// middleware and extracted by handlers behind it.
#[derive(Debug, Clone)]
pub struct AuthSession {
    pub session_id: Uuid,
    pub user: entity::user::Model,
}

impl AuthSession {
    pub fn user_id(&self) -> Uuid {
        self.user.id
    }
}

impl FromRequest for AuthSession {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(
            req.extensions()
                .get::<AuthSession>()
                .cloned()
                .ok_or(AppError::Unauthorized),
        )
    }
}
