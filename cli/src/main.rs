use anyhow::Context;
use clap::{Parser, builder::BoolishValueParser};
use tracing_subscriber::EnvFilter;

use server::{ServerOpts, serve, shutdown_signal};

/// Reports service identity, host facts and uptime over HTTP.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// The address the server binds to.
    /// Example: `0.0.0.0` (all interfaces), `127.0.0.1`, `localhost`
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    host: String,

    /// The port number on which the server will listen for incoming connections.
    /// Example: `8000`
    #[arg(long, env = "PORT", default_value_t = 8000)]
    port: u16,

    /// Log at debug level instead of info. Ignored when `RUST_LOG` is set.
    #[arg(long, env = "DEBUG", value_parser = BoolishValueParser::new())]
    debug: bool,
}

impl Args {
    /// `rust_log` is the value of `RUST_LOG`, which replaces the filter entirely when set.
    fn log_filter(&self, rust_log: Option<&str>) -> EnvFilter {
        match rust_log {
            Some(directives) => EnvFilter::new(directives),
            None if self.debug => EnvFilter::new("debug"),
            None => EnvFilter::new("info"),
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(args.log_filter(std::env::var("RUST_LOG").ok().as_deref()))
        .init();

    tracing::info!("application starting");

    serve(
        ServerOpts {
            host: args.host,
            port: args.port,
        },
        shutdown_signal(),
    )
    .await
    .context("serve")
}
