use anyhow::Context;
use axum::{Json, extract::State, response::IntoResponse};
use axum_macros::debug_handler;
use serde::Serialize;

use crate::{AppState, error::HandlerError, timestamp::now_utc_timestamp};

pub const PATH: &str = "/health";

#[derive(Debug, Serialize)]
pub struct ResponseBody {
    pub status: &'static str,
    pub timestamp: String,
    pub uptime_seconds: u64,
}

#[debug_handler]
#[tracing::instrument(skip_all, ret)]
pub async fn handler(
    State(AppState { started_at }): State<AppState>,
) -> Result<ResponseBody, HandlerError> {
    Ok(ResponseBody {
        status: "healthy",
        timestamp: now_utc_timestamp().context("format health timestamp")?,
        uptime_seconds: started_at.uptime().seconds,
    })
}

impl IntoResponse for ResponseBody {
    fn into_response(self) -> axum::response::Response {
        Json(self).into_response()
    }
}
