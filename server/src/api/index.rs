use std::convert::Infallible;

use anyhow::Context;
use axum::{
    Json,
    extract::{FromRequestParts, State},
    http::{header::USER_AGENT, request::Parts},
    response::IntoResponse,
};
use axum_macros::debug_handler;
use middleware::ClientIp;
use serde::Serialize;

use crate::{
    AppState, api::Endpoint, error::HandlerError, system::SystemInfo,
    timestamp::now_utc_timestamp,
};

pub const PATH: &str = "/";

const UNKNOWN: &str = "unknown";

#[derive(Debug, Serialize)]
pub struct ResponseBody {
    pub service: ServiceInfo,
    pub system: SystemInfo,
    pub runtime: RuntimeInfo,
    pub request: RequestInfo,
    pub endpoints: &'static [Endpoint],
}

#[derive(Debug, Serialize)]
pub struct ServiceInfo {
    pub name: &'static str,
    pub version: &'static str,
    pub description: &'static str,
    pub framework: &'static str,
}

pub const SERVICE: ServiceInfo = ServiceInfo {
    name: "devops-info-service",
    version: env!("CARGO_PKG_VERSION"),
    description: env!("CARGO_PKG_DESCRIPTION"),
    framework: "axum",
};

#[derive(Debug, Serialize)]
pub struct RuntimeInfo {
    pub uptime_seconds: u64,
    pub uptime_human: String,
    pub current_time: String,
    pub timezone: &'static str,
}

/// What the client told us about itself.
#[derive(Debug, Serialize)]
pub struct RequestInfo {
    pub client_ip: String,
    pub user_agent: String,
    pub method: String,
    pub path: String,
}

impl<S> FromRequestParts<S> for RequestInfo
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let ClientIp(client_ip) = ClientIp::from_request_parts(parts, state).await?;

        Ok(Self {
            client_ip: client_ip
                .map(|ip| ip.to_string())
                .unwrap_or_else(|| UNKNOWN.into()),
            user_agent: parts
                .headers
                .get(USER_AGENT)
                .and_then(|value| value.to_str().ok())
                .unwrap_or(UNKNOWN)
                .into(),
            method: parts.method.to_string(),
            path: parts.uri.path().into(),
        })
    }
}

#[debug_handler]
#[tracing::instrument(skip_all, ret)]
pub async fn handler(
    State(AppState { started_at }): State<AppState>,
    request: RequestInfo,
) -> Result<ResponseBody, HandlerError> {
    let uptime = started_at.uptime();

    Ok(ResponseBody {
        service: SERVICE,
        system: SystemInfo::snapshot(),
        runtime: RuntimeInfo {
            uptime_seconds: uptime.seconds,
            uptime_human: uptime.human,
            current_time: now_utc_timestamp().context("format current_time")?,
            timezone: "UTC",
        },
        request,
        endpoints: &super::ENDPOINTS,
    })
}

impl IntoResponse for ResponseBody {
    fn into_response(self) -> axum::response::Response {
        Json(self).into_response()
    }
}
