//! Server construction, middleware wiring and shutdown.

mod config;

pub use config::{LogFormat, ServerConfig, SiteSettings};

use std::future::Future;
use std::sync::Arc;

use actix_web::dev::{Server, ServerHandle, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::middleware::NormalizePath;
use actix_web::{App, HttpServer, web};
use tracing::{error, info};

use site::Trace;
use site::domain::ports::{NoOpRenderObserver, RenderObserver, TracingRenderObserver};
use site::inbound::http::health::{self, HealthState};
use site::inbound::http::{PageState, RouteTable};
use site::views::HelloFragment;

fn build_page_state(render_diagnostics: bool) -> PageState {
    let observer: Arc<dyn RenderObserver> = if render_diagnostics {
        Arc::new(TracingRenderObserver)
    } else {
        Arc::new(NoOpRenderObserver)
    };
    PageState::new(Arc::new(HelloFragment), observer)
}

fn build_app(
    health_state: web::Data<HealthState>,
    page_state: web::Data<PageState>,
    routes: RouteTable,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(health_state)
        .app_data(page_state)
        .wrap(NormalizePath::trim())
        .wrap(Trace)
        .configure(health::configure)
        .configure(move |cfg| routes.configure(cfg))
}

/// Construct the HTTP server serving the site's pages and health checks.
///
/// Signal handling is left to [`drain_on`], which fails readiness before
/// stopping the workers.
///
/// # Errors
/// Returns [`std::io::Error`] when the route table is inconsistent or the
/// socket cannot be bound.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let routes = RouteTable::site().map_err(std::io::Error::other)?;
    let page_state = web::Data::new(build_page_state(config.render_diagnostics));
    let server_health_state = health_state.clone();

    let server = HttpServer::new(move || {
        build_app(
            server_health_state.clone(),
            page_state.clone(),
            routes.clone(),
        )
    })
    .disable_signals()
    .bind(config.bind_addr)?
    .run();

    info!(
        bind_addr = %config.bind_addr,
        render_diagnostics = config.render_diagnostics,
        "site listening"
    );
    health_state.mark_ready();
    Ok(server)
}

/// Resolves on `SIGINT` or `SIGTERM`.
///
/// # Errors
/// Returns [`std::io::Error`] when a signal handler cannot be installed.
#[cfg(unix)]
pub async fn shutdown_signal() -> std::io::Result<()> {
    use tokio::signal::unix::{SignalKind, signal};

    let mut terminate = signal(SignalKind::terminate())?;
    tokio::select! {
        result = tokio::signal::ctrl_c() => result,
        _ = terminate.recv() => Ok(()),
    }
}

/// Resolves on `Ctrl-C`.
///
/// # Errors
/// Returns [`std::io::Error`] when the signal handler cannot be installed.
#[cfg(not(unix))]
pub async fn shutdown_signal() -> std::io::Result<()> {
    tokio::signal::ctrl_c().await
}

/// Wait for `signal`, fail readiness, then stop the server gracefully so
/// in-flight requests complete.
///
/// If `signal` fails the server keeps running without a drain path; the
/// failure is logged.
pub async fn drain_on<F>(signal: F, health_state: web::Data<HealthState>, handle: ServerHandle)
where
    F: Future<Output = std::io::Result<()>>,
{
    if let Err(err) = signal.await {
        error!(error = %err, "shutdown signal handler unavailable");
        return;
    }
    health_state.begin_drain();
    info!("shutdown requested, draining connections");
    handle.stop(true).await;
}
