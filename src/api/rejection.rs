//! Error replies
//!
//! Handlers reject with [`ApiError`]; [`handle_rejection`] turns every
//! rejection, including warp's own, into `{"error": {"message", "status"}}`.

use serde_json::{json, Value};
use std::convert::Infallible;
use store_object::StoreError;
use warp::http::StatusCode;
use warp::reject::Reject;
use warp::{Rejection, Reply};

#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    /// Schema violations, one message per failed keyword
    Invalid(Vec<String>),
    Unauthorized,
    NotFound(String),
    Internal(String),
}

impl Reject for ApiError {}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) | ApiError::Invalid(_) => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized => StatusCode::UNAUTHORIZED,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn message(&self) -> Value {
        match self {
            ApiError::BadRequest(msg) | ApiError::NotFound(msg) => json!(msg),
            ApiError::Invalid(errors) => json!(errors),
            ApiError::Unauthorized => json!("Unauthorized"),
            // database details stay in the log
            ApiError::Internal(_) => json!("Internal Server Error"),
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound { .. } => ApiError::NotFound(err.to_string()),
            ref e if e.is_bad_request() => ApiError::BadRequest(e.to_string()),
            other => ApiError::Internal(other.to_string()),
        }
    }
}

/// Shorthand for handlers: lift a store error into a warp rejection.
pub fn reject(err: impl Into<ApiError>) -> Rejection {
    warp::reject::custom(err.into())
}

fn error_reply(status: StatusCode, message: Value) -> warp::reply::WithStatus<warp::reply::Json> {
    let body = json!({
        "error": {
            "message": message,
            "status": status.as_u16(),
        }
    });
    warp::reply::with_status(warp::reply::json(&body), status)
}

pub async fn handle_rejection(rejection: Rejection) -> Result<impl Reply, Infallible> {
    if let Some(err) = rejection.find::<ApiError>() {
        if let ApiError::Internal(detail) = err {
            tracing::error!("request failed: {}", detail);
        }
        return Ok(error_reply(err.status(), err.message()));
    }

    if rejection.is_not_found() {
        return Ok(error_reply(StatusCode::NOT_FOUND, json!("Not Found")));
    }

    if let Some(err) = rejection.find::<warp::filters::body::BodyDeserializeError>() {
        return Ok(error_reply(StatusCode::BAD_REQUEST, json!(err.to_string())));
    }

    if let Some(err) = rejection.find::<warp::reject::InvalidQuery>() {
        return Ok(error_reply(StatusCode::BAD_REQUEST, json!(err.to_string())));
    }

    if rejection.find::<warp::reject::MethodNotAllowed>().is_some() {
        return Ok(error_reply(
            StatusCode::METHOD_NOT_ALLOWED,
            json!("Method Not Allowed"),
        ));
    }

    tracing::error!("unhandled rejection: {:?}", rejection);
    Ok(error_reply(
        StatusCode::INTERNAL_SERVER_ERROR,
        json!("Internal Server Error"),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_errors_map_to_status() {
        let cases = [
            (StoreError::InvalidUpdateRequest, StatusCode::BAD_REQUEST),
            (
                StoreError::InvalidRange { min: 3, max: 1 },
                StatusCode::BAD_REQUEST,
            ),
            (
                StoreError::Duplicate {
                    entity: "company",
                    key: "c1".into(),
                },
                StatusCode::BAD_REQUEST,
            ),
            (StoreError::not_found("job", 0), StatusCode::NOT_FOUND),
            (
                StoreError::database_operation("jobs", "select", sqlx::Error::PoolTimedOut),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (store_err, status) in cases {
            assert_eq!(ApiError::from(store_err).status(), status);
        }
    }

    #[test]
    fn test_not_found_keeps_store_message() {
        let err = ApiError::from(StoreError::not_found("company", "nope"));
        assert_eq!(err.message(), json!("No company: nope"));
    }

    #[test]
    fn test_internal_message_is_generic() {
        let err = ApiError::Internal("connection refused".into());
        assert_eq!(err.message(), json!("Internal Server Error"));
    }
}
