//! HTTP inbound adapter serving HTML pages and health checks.

pub mod error;
pub mod health;
mod pages;
pub mod routes;
pub mod state;

pub use error::ApiResult;
pub use routes::{PageRoute, RouteParams, RouteTable, RouteTableError};
pub use state::PageState;
