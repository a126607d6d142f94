//! Site entry-point: loads settings, initialises tracing and serves pages
//! until `SIGINT` or `SIGTERM` starts a graceful drain.

mod server;

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

use server::{LogFormat, ServerConfig, SiteSettings, create_server, drain_on, shutdown_signal};
use site::inbound::http::health::HealthState;

fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = fmt().with_env_filter(filter);
    let result = match format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Pretty => builder.pretty().try_init(),
    };
    if let Err(e) = result {
        warn!(error = %e, "tracing init failed");
    }
}

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let settings = SiteSettings::load_from_iter(std::env::args_os())
        .map_err(|e| std::io::Error::other(e.to_string()))?;
    init_tracing(settings.log_format().map_err(std::io::Error::other)?);

    let config = ServerConfig::from_settings(&settings).map_err(std::io::Error::other)?;
    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state.clone(), config)?;
    actix_web::rt::spawn(drain_on(shutdown_signal(), health_state, server.handle()));
    server.await
}
