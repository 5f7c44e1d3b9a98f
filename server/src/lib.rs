mod api;
mod error;
mod leaked_5xx;
mod span;
mod system;
mod timestamp;
mod uptime;

use std::net::SocketAddr;

use axum::{Router, middleware::from_fn, routing::get};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{
    catch_panic::CatchPanicLayer,
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use uptime::StartTime;

#[derive(Debug)]
pub struct ServerOpts {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Copy)]
pub struct AppState {
    started_at: StartTime,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            started_at: StartTime::now(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

pub fn server(state: AppState) -> Router {
    let router = Router::new()
        .route(api::index::PATH, get(api::index::handler))
        .route(api::health::PATH, get(api::health::handler))
        .fallback(api::fallback::not_found)
        .method_not_allowed_fallback(api::fallback::method_not_allowed)
        .with_state(state);

    with_middleware(router)
}

fn with_middleware(router: Router) -> Router {
    let middleware = ServiceBuilder::new()
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(from_fn(middleware::mw_client_ip))
        .layer(TraceLayer::new_for_http().make_span_with(span::span))
        .layer(from_fn(middleware::latency_ms))
        .layer(from_fn(leaked_5xx::mw_handle_leaked_5xx))
        .layer(CatchPanicLayer::custom(leaked_5xx::handle_panic));

    router.layer(middleware)
}

pub async fn serve<F>(opts: ServerOpts, shutdown: F) -> Result<(), ServerError>
where
    F: Future<Output = ()> + Send + 'static,
{
    tracing::info!("{:?}", opts);

    let state = AppState::new();
    tracing::info!(started_at = %state.started_at.utc, "application started");
    let app = server(state).into_make_service_with_connect_info::<SocketAddr>();

    let listener = TcpListener::bind((opts.host.as_str(), opts.port))
        .await
        .map_err(|source| ServerError::Bind {
            addr: format!("{}:{}", opts.host, opts.port),
            source,
        })?;
    tracing::info!(
        "listening on {}",
        listener.local_addr().map_err(ServerError::LocalAddr)?
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(ServerError::Serve)
}

/// Resolves once the process is asked to stop.
#[cfg(unix)]
pub async fn shutdown_signal() {
    use tokio::signal::unix::{SignalKind, signal};

    let (mut sigterm, mut sigint) =
        match (signal(SignalKind::terminate()), signal(SignalKind::interrupt())) {
            (Ok(sigterm), Ok(sigint)) => (sigterm, sigint),
            (Err(e), _) | (_, Err(e)) => {
                tracing::error!("unable to install signal handlers :: {:?}", e);
                return std::future::pending().await;
            }
        };

    let signal = tokio::select! {
        _ = sigterm.recv() => "SIGTERM",
        _ = sigint.recv() => "SIGINT",
    };

    tracing::info!("received {signal}, shutting down");
}

/// Resolves once the process is asked to stop.
#[cfg(windows)]
pub async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("received Ctrl-C, shutting down"),
        Err(e) => {
            tracing::error!("unable to listen for Ctrl-C :: {:?}", e);
            std::future::pending().await
        }
    }
}

#[derive(thiserror::Error, Debug)]
pub enum ServerError {
    #[error("bind :: {addr} :: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("local_addr :: {0}")]
    LocalAddr(#[source] std::io::Error),

    #[error("axum::serve :: {0}")]
    Serve(#[source] std::io::Error),
}
