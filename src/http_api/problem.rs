use std::convert::Infallible;

use serde::Serialize;
use warp::{
    Rejection, Reply,
    http::StatusCode,
    reject::{LengthRequired, MethodNotAllowed, PayloadTooLarge, Reject},
};

use crate::errors::AppError;

/// An error response: the status to send plus the `{"error": ...}` body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Problem {
    #[serde(skip)]
    pub status: StatusCode,
    pub error: String,
}

impl Reject for Problem {}

impl Problem {
    pub fn new(status: StatusCode, error: impl Into<String>) -> Self {
        Self {
            status,
            error: error.into(),
        }
    }

    pub fn internal() -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
    }

    fn into_reply(self) -> warp::reply::WithStatus<warp::reply::Json> {
        let status = self.status;
        warp::reply::with_status(warp::reply::json(&self), status)
    }
}

pub fn from_app_error(e: AppError) -> Problem {
    match e {
        AppError::Validation(msg) => {
            tracing::warn!("rejected request: {}", msg);
            Problem::new(StatusCode::BAD_REQUEST, msg)
        }
        AppError::Json(e) => {
            tracing::warn!("deserialization error: {}", e);
            Problem::new(StatusCode::BAD_REQUEST, "Invalid data")
        }
        AppError::NotFound(what) => {
            tracing::debug!("{} not found", what);
            Problem::new(StatusCode::NOT_FOUND, "Contact not found")
        }
        e => {
            tracing::error!("internal error occurred: {:#}", e);
            Problem::internal()
        }
    }
}

/// Renders every rejection reaching the top of the filter tree.
///
/// Handler problems win over routing rejections: a failed `GET` on an item
/// also collects a method mismatch from the `PATCH` route for the same path.
pub async fn unpack_problem(rejection: Rejection) -> Result<impl Reply, Infallible> {
    let problem = if let Some(problem) = rejection.find::<Problem>() {
        problem.clone()
    } else if rejection.find::<PayloadTooLarge>().is_some() {
        tracing::warn!("rejected oversized request body");
        Problem::new(StatusCode::PAYLOAD_TOO_LARGE, "Payload too large")
    } else if rejection.find::<LengthRequired>().is_some() {
        Problem::new(StatusCode::LENGTH_REQUIRED, "Content-Length required")
    } else if rejection.find::<MethodNotAllowed>().is_some() {
        Problem::new(StatusCode::METHOD_NOT_ALLOWED, "Method not allowed")
    } else if rejection.is_not_found() {
        Problem::new(StatusCode::NOT_FOUND, "Endpoint not found")
    } else {
        tracing::error!("unhandled rejection: {:?}", rejection);
        Problem::internal()
    };

    Ok(problem.into_reply())
}
