//! Shared state for page handlers.
//!
//! Handlers read this via `actix_web::web::Data`. Everything in it is
//! immutable once the server starts.

use std::sync::Arc;

use crate::domain::ports::{NoOpRenderObserver, RenderObserver};
use crate::views::{Fragment, HelloFragment};

/// Collaborators used while serving pages.
#[derive(Clone)]
pub struct PageState {
    fragment: Arc<dyn Fragment>,
    observer: Arc<dyn RenderObserver>,
}

impl PageState {
    /// Bundle a fragment and an observer.
    pub fn new(fragment: Arc<dyn Fragment>, observer: Arc<dyn RenderObserver>) -> Self {
        Self { fragment, observer }
    }

    /// Replace the render observer.
    #[must_use]
    pub fn with_observer(mut self, observer: Arc<dyn RenderObserver>) -> Self {
        self.observer = observer;
        self
    }

    /// Shared fragment included by the home and about pages.
    #[must_use]
    pub fn fragment(&self) -> &dyn Fragment {
        self.fragment.as_ref()
    }

    /// Render observer.
    #[must_use]
    pub fn observer(&self) -> &dyn RenderObserver {
        self.observer.as_ref()
    }
}

impl Default for PageState {
    /// The `Hello` fragment with render diagnostics switched off.
    fn default() -> Self {
        Self::new(Arc::new(HelloFragment), Arc::new(NoOpRenderObserver))
    }
}
