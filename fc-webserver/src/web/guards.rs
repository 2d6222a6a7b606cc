use rocket::{
    self,
    request::{FromRequest, Outcome, Request},
    State,
};

use crate::web::jwt;
use fc_application::error::AppError;
use fc_core::{
    entities::{Id, IdempotencyKey, User},
    gateways::{code_cipher::CodeCipher, notify::NotificationGateway},
    repositories::UserRepo,
    usecases::{self, Error as ParameterError},
};

pub const IDEMPOTENCY_KEY_HEADER: &str = "Idempotency-Key";

type Result<T> = std::result::Result<T, AppError>;

fn get_bearer_token(auth_header_val: &str) -> Option<&str> {
    let x: Vec<_> = auth_header_val.split(' ').collect();
    if x.len() == 2 && x[0] == "Bearer" {
        Some(x[1])
    } else {
        None
    }
}

/// The session of the requesting user, if any.
#[derive(Debug)]
pub struct Auth {
    user_id: Option<Id>,
}

impl Auth {
    pub fn user_id(&self) -> Result<&Id> {
        self.user_id
            .as_ref()
            .ok_or_else(|| ParameterError::Unauthorized.into())
    }

    pub fn user<R: UserRepo>(&self, repo: &R) -> Result<User> {
        Ok(usecases::authorize_user_by_id(repo, self.user_id()?)?)
    }

    fn bearer_tokens_from_header(request: &Request) -> Vec<String> {
        request
            .headers()
            .get("Authorization")
            .filter_map(get_bearer_token)
            .map(ToOwned::to_owned)
            .collect()
    }

    async fn user_id_from_jwt_in_header(
        request: &Request<'_>,
        bearer_tokens: &[String],
    ) -> Option<Id> {
        let jwt_state = request.guard::<&State<jwt::JwtState>>().await.succeeded()?;
        bearer_tokens
            .iter()
            .find_map(|token| jwt_state.validate_token_and_get_user_id(token).ok())
    }
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for Auth {
    type Error = ();
    async fn from_request(request: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        let bearer_tokens = Self::bearer_tokens_from_header(request);
        let user_id = Self::user_id_from_jwt_in_header(request, &bearer_tokens).await;
        Outcome::Success(Self { user_id })
    }
}

/// The optional `Idempotency-Key` header of a mutating request.
#[derive(Debug)]
pub struct Idempotency(Option<String>);

impl Idempotency {
    pub fn key(&self) -> Result<Option<IdempotencyKey>> {
        self.0
            .as_deref()
            .map(|key| {
                key.parse::<IdempotencyKey>()
                    .map_err(|()| ParameterError::IdempotencyKey.into())
            })
            .transpose()
    }
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for Idempotency {
    type Error = ();
    async fn from_request(request: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        let key = request
            .headers()
            .get_one(IDEMPOTENCY_KEY_HEADER)
            .map(ToOwned::to_owned);
        Outcome::Success(Self(key))
    }
}

pub struct Cipher(pub Box<dyn CodeCipher + Send + Sync>);

pub struct Notify(pub Box<dyn NotificationGateway + Send + Sync>);

pub struct Version(pub &'static str);
