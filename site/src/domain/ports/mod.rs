//! Domain ports.
//!
//! Adapters depend on these traits rather than on concrete logging or
//! rendering back ends so handlers stay testable in isolation.

mod render_observer;

pub use render_observer::{
    NoOpRenderObserver, RenderEvent, RenderObserver, TracingRenderObserver,
};
