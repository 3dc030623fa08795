use rocket::http::Status;
use rocket::response::{self, Responder};
use rocket::serde::json::Json;
use rocket::serde::{Deserialize, Serialize};
use rocket::Request;

use crate::validation::ValidationError;

/// JSON body of every error response.
#[derive(Clone, Serialize, Deserialize, PartialEq, Debug)]
#[serde(crate = "rocket::serde")]
pub struct ErrorBody {
    pub detail: String,
}

impl ErrorBody {
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum RequestError {
    #[error("malformed request body: {0}")]
    MalformedBody(String),
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("Internal Server Error")]
    Storage(#[from] sqlx::Error),
}

impl RequestError {
    pub fn status(&self) -> Status {
        match self {
            Self::MalformedBody(_) => Status::UnprocessableEntity,
            Self::Validation(ValidationError::InvalidDifficulty) => Status::BadRequest,
            Self::Validation(_) => Status::UnprocessableEntity,
            Self::Storage(_) => Status::InternalServerError,
        }
    }
}

impl<'r> Responder<'r, 'static> for RequestError {
    fn respond_to(self, request: &'r Request<'_>) -> response::Result<'static> {
        if let Self::Storage(err) = &self {
            log::error!("{} {}: storage failure: {}", request.method(), request.uri(), err);
        }

        (self.status(), Json(ErrorBody::new(self.to_string()))).respond_to(request)
    }
}

pub type RequestResult<T, E = RequestError> = std::result::Result<T, E>;
