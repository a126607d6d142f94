//! Orchestration endpoints under `/health`.
//!
//! Readiness gates traffic. It opens once the listener is bound and closes
//! again as soon as shutdown begins, so load balancers stop routing new
//! requests while in-flight pages finish. Liveness only reports that a
//! worker is answering; a draining instance is still alive.

use std::sync::atomic::{AtomicBool, Ordering};

use actix_web::{HttpResponse, http::header, web};

/// The checks an orchestrator can run against the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HealthCheck {
    /// `GET /health/ready`: may this instance receive traffic?
    Readiness,
    /// `GET /health/live`: is a worker answering at all?
    Liveness,
}

impl HealthCheck {
    /// Path the check is served on.
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Readiness => "/health/ready",
            Self::Liveness => "/health/live",
        }
    }
}

/// Lifecycle flags shared between the server and its health checks.
#[derive(Debug, Default)]
pub struct HealthState {
    bound: AtomicBool,
    draining: AtomicBool,
}

impl HealthState {
    /// Fresh state: not yet bound, not draining.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that the listener is bound and pages can be served.
    pub fn mark_ready(&self) {
        self.bound.store(true, Ordering::Release);
    }

    /// Record that shutdown has started. Readiness fails from now on.
    pub fn begin_drain(&self) {
        self.draining.store(true, Ordering::Release);
    }

    /// Whether `check` currently passes.
    #[must_use]
    pub fn passes(&self, check: HealthCheck) -> bool {
        match check {
            HealthCheck::Readiness => {
                self.bound.load(Ordering::Acquire) && !self.draining.load(Ordering::Acquire)
            }
            HealthCheck::Liveness => true,
        }
    }
}

fn check_response(passing: bool) -> HttpResponse {
    let mut response = if passing {
        HttpResponse::Ok()
    } else {
        HttpResponse::ServiceUnavailable()
    };
    response
        .insert_header((header::CACHE_CONTROL, "no-store"))
        .finish()
}

/// Register both checks. Handlers read [`HealthState`] from application
/// data.
pub fn configure(cfg: &mut web::ServiceConfig) {
    for check in [HealthCheck::Readiness, HealthCheck::Liveness] {
        cfg.route(
            check.path(),
            web::get().to(move |state: web::Data<HealthState>| async move {
                check_response(state.passes(check))
            }),
        );
    }
}
