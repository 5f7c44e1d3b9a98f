use axum::http::{Method, Uri};

use crate::error::ErrorBody;

#[tracing::instrument(skip_all)]
pub async fn not_found(uri: Uri) -> ErrorBody {
    tracing::info!("no route for {}", uri.path());
    ErrorBody::not_found(uri.path())
}

#[tracing::instrument(skip_all)]
pub async fn method_not_allowed(method: Method, uri: Uri) -> ErrorBody {
    tracing::info!("{} not allowed on {}", method, uri.path());
    ErrorBody::method_not_allowed(uri.path())
}
