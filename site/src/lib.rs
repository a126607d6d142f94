//! Server-rendered dashboard pages.
//!
//! - [`views`]: pure HTML templates.
//! - [`inbound::http`]: the explicit route table and actix-web handlers.
//! - [`domain`]: user references, errors, and the render observer port.
//! - [`middleware`]: request tracing.

pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod views;

pub use middleware::Trace;
