use std::any::Any;

use axum::{
    body::{Body, to_bytes},
    http::{Request, Response},
    middleware::Next,
    response::IntoResponse,
};

use crate::error::{ErrorBody, Sanitized};

/// usually 5xx errors are rendered through `HandlerError`
/// but under unforseen circumstances a raw one may leak towards the client
/// this is the last line of defense to catch them
pub async fn mw_handle_leaked_5xx(request: Request<Body>, next: Next) -> Response<Body> {
    let response = next.run(request).await;
    let status = response.status();

    if status.is_server_error() && response.extensions().get::<Sanitized>().is_none() {
        match to_bytes(response.into_body(), usize::MAX).await {
            Ok(content) if !content.is_empty() => {
                tracing::error!("leaked {} :: {:?}", status, content)
            }
            Ok(_) => tracing::error!("leaked {} with empty body", status),
            Err(e) => tracing::error!(
                "unable to convert leaked {} response body to bytes :: {:?}",
                status,
                e
            ),
        }

        return ErrorBody::internal().into_response();
    }

    response
}

pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response<Body> {
    if let Some(s) = err.downcast_ref::<String>() {
        tracing::error!("handler panicked :: {s}");
    } else if let Some(s) = err.downcast_ref::<&str>() {
        tracing::error!("handler panicked :: {s}");
    } else {
        tracing::error!("handler panicked :: unknown panic message");
    }

    ErrorBody::internal().into_response()
}
