//! Deliveries service errors.

use sqlx::{
    Error,
    error::{DatabaseError, ErrorKind},
};
use thiserror::Error;

use crate::domain::deliveries::data::InvalidDelivery;

#[derive(Debug, Error)]
pub enum DeliveriesServiceError {
    #[error("delivery already exists")]
    AlreadyExists,

    #[error("delivery not found")]
    NotFound,

    #[error("missing required data")]
    MissingRequiredData,

    #[error("invalid data")]
    InvalidData,

    #[error("invalid delivery: {0}")]
    Invalid(#[from] InvalidDelivery),

    #[error("storage error")]
    Sql(#[source] Error),
}

impl From<Error> for DeliveriesServiceError {
    fn from(error: Error) -> Self {
        if matches!(error, Error::RowNotFound) {
            return Self::NotFound;
        }

        match error.as_database_error().map(DatabaseError::kind) {
            Some(ErrorKind::UniqueViolation) => Self::AlreadyExists,
            Some(ErrorKind::NotNullViolation) => Self::MissingRequiredData,
            Some(ErrorKind::CheckViolation) => Self::InvalidData,
            Some(ErrorKind::Other | _) | None => Self::Sql(error),
        }
    }
}
