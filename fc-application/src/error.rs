use fc_core::{repositories::Error as RepoError, usecases::Error as ParameterError};
use thiserror::Error;

pub use fc_core::repositories;

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> AppError {
        AppError::Business(BError::Repo(err))
    }
}

impl From<ParameterError> for AppError {
    fn from(err: ParameterError) -> AppError {
        AppError::Business(err.into())
    }
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Business(#[from] BError),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[derive(Debug, Error)]
pub enum BError {
    #[error(transparent)]
    Parameter(ParameterError),
    #[error(transparent)]
    Repo(#[from] repositories::Error),
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<ParameterError> for BError {
    fn from(err: ParameterError) -> Self {
        // Repository errors are reported as such
        match err {
            ParameterError::Repo(err) => Self::Repo(err),
            err => Self::Parameter(err),
        }
    }
}

impl From<String> for BError {
    fn from(s: String) -> Self {
        Self::Internal(s)
    }
}
