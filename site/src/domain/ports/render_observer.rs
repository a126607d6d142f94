//! Port for observing page renders.
//!
//! Rendering itself is a pure function of route parameters. Anything a
//! page wants logged while it is served, such as a fixed diagnostic
//! message, is reported here after the markup has been produced.

use tracing::{debug, info};

use crate::domain::{PageId, TraceId};

/// A completed page render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderEvent<'a> {
    /// Page that was rendered.
    pub page: PageId,
    /// Request path that selected the page.
    pub path: &'a str,
    /// Diagnostic message attached to the route, if any.
    pub diagnostic: Option<&'static str>,
}

/// Observer notified once per successful page render.
pub trait RenderObserver: Send + Sync {
    /// Record a render.
    fn page_rendered(&self, event: &RenderEvent<'_>);
}

/// Discards every event. Used when render diagnostics are switched off.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoOpRenderObserver;

impl RenderObserver for NoOpRenderObserver {
    fn page_rendered(&self, _event: &RenderEvent<'_>) {}
}

/// Emits render events through `tracing`.
///
/// Route diagnostics are logged at `info`; plain renders at `debug`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingRenderObserver;

impl RenderObserver for TracingRenderObserver {
    fn page_rendered(&self, event: &RenderEvent<'_>) {
        let trace_id = TraceId::current().map(|id| id.to_string());
        match event.diagnostic {
            Some(message) => info!(
                page = %event.page,
                path = event.path,
                trace_id = trace_id.as_deref(),
                "{message}"
            ),
            None => debug!(
                page = %event.page,
                path = event.path,
                trace_id = trace_id.as_deref(),
                "page rendered"
            ),
        }
    }
}
