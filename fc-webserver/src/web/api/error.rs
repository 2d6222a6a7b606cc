use super::json_error_response;
use anyhow::anyhow;
use fc_application::error::{AppError, BError};
use fc_boundary::ErrorKind;
pub use fc_core::{repositories::Error as RepoError, usecases::Error as ParameterError};
use rocket::{
    self,
    http::Status,
    response::{self, Responder},
    serde::json::Error as JsonError,
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    App(#[from] AppError),
    #[error("{0}")]
    OtherWithStatus(#[source] anyhow::Error, Status),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<JsonError<'_>> for Error {
    fn from(err: JsonError) -> Self {
        match err {
            JsonError::Io(err) => Self::OtherWithStatus(anyhow!(err), Status::UnprocessableEntity),
            JsonError::Parse(_str, err) => {
                Self::OtherWithStatus(anyhow!(err), Status::UnprocessableEntity)
            }
        }
    }
}

fn parameter_error_status(err: &ParameterError) -> (Status, ErrorKind) {
    use ParameterError as E;
    match err {
        E::Credentials | E::Unauthorized => (Status::Unauthorized, ErrorKind::Unauthorized),
        E::Forbidden => (Status::Forbidden, ErrorKind::Forbidden),
        E::UserExists | E::AlreadyApproved | E::IdempotencyKeyReused => {
            (Status::Conflict, ErrorKind::Conflict)
        }
        E::InvalidCode => (Status::BadRequest, ErrorKind::InvalidCode),
        E::CodeExpired => (Status::Gone, ErrorKind::Expired),
        E::AlreadyRedeemed => (Status::Conflict, ErrorKind::AlreadyRedeemed),
        E::Repo(RepoError::NotFound) => (Status::NotFound, ErrorKind::NotFound),
        E::Repo(RepoError::AlreadyExists) => (Status::Conflict, ErrorKind::Conflict),
        E::CodeCipher(_) | E::Repo(_) => (Status::InternalServerError, ErrorKind::Internal),
        E::Username
        | E::EmailAddress
        | E::Password
        | E::RatingValue
        | E::ReviewText
        | E::TooManyPhotos
        | E::Url
        | E::InvalidPosition
        | E::OfferId
        | E::SelfFollow
        | E::IdempotencyKey => (Status::BadRequest, ErrorKind::ValidationError),
    }
}

fn internal_error_response<'r, 'o: 'r>(
    req: &'r rocket::Request<'_>,
    err: &dyn std::fmt::Display,
) -> response::Result<'o> {
    error!("Error: {err}");
    json_error_response(
        req,
        &"Internal server error",
        Status::InternalServerError,
        ErrorKind::Internal,
    )
}

impl<'r, 'o: 'r> Responder<'r, 'o> for Error {
    fn respond_to(self, req: &rocket::Request) -> response::Result<'o> {
        match self {
            Error::App(err) => {
                if let AppError::Business(err) = &err {
                    match err {
                        BError::Parameter(ref err) => {
                            let (status, kind) = parameter_error_status(err);
                            if kind == ErrorKind::Internal {
                                return internal_error_response(req, err);
                            }
                            return json_error_response(req, err, status, kind);
                        }
                        BError::Repo(RepoError::NotFound) => {
                            return json_error_response(
                                req,
                                err,
                                Status::NotFound,
                                ErrorKind::NotFound,
                            );
                        }
                        BError::Repo(RepoError::AlreadyExists) => {
                            return json_error_response(
                                req,
                                err,
                                Status::Conflict,
                                ErrorKind::Conflict,
                            );
                        }
                        _ => {}
                    }
                }
                internal_error_response(req, &err)
            }
            Error::OtherWithStatus(err, status) => {
                json_error_response(req, &err, status, ErrorKind::ValidationError)
            }
            Error::Other(err) => internal_error_response(req, &err),
        }
    }
}

impl From<RepoError> for Error {
    fn from(err: RepoError) -> Self {
        AppError::from(err).into()
    }
}

impl From<BError> for Error {
    fn from(err: BError) -> Self {
        AppError::from(err).into()
    }
}

impl From<ParameterError> for Error {
    fn from(err: ParameterError) -> Self {
        Self::App(err.into())
    }
}
