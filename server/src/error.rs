use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

#[derive(thiserror::Error, Debug)]
pub enum HandlerError {
    #[error("{0:?}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for HandlerError {
    fn into_response(self) -> Response {
        match self {
            HandlerError::Internal(err) => {
                tracing::error!("{:?}", err);
                ErrorBody::internal().into_response()
            }
        }
    }
}

/// Every error leaves the service in this shape. Internal detail never goes in here.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    #[serde(skip)]
    status: StatusCode,

    pub error: &'static str,
    pub message: &'static str,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

/// Marks a 5xx response whose body is already safe to show to the client.
#[derive(Debug, Clone, Copy)]
pub struct Sanitized;

impl ErrorBody {
    pub fn not_found(path: impl Into<String>) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            error: "Not Found",
            message: "Endpoint does not exist",
            path: Some(path.into()),
        }
    }

    pub fn method_not_allowed(path: impl Into<String>) -> Self {
        Self {
            status: StatusCode::METHOD_NOT_ALLOWED,
            error: "Method Not Allowed",
            message: "Method is not allowed for this endpoint",
            path: Some(path.into()),
        }
    }

    pub fn internal() -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            error: "Internal Server Error",
            message: "An unexpected error occurred",
            path: None,
        }
    }
}

impl IntoResponse for ErrorBody {
    fn into_response(self) -> Response {
        let status = self.status;
        let mut response = (status, Json(self)).into_response();
        if status.is_server_error() {
            response.extensions_mut().insert(Sanitized);
        }
        response
    }
}
