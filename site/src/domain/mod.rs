//! Domain primitives.
//!
//! Public surface:
//! - [`Error`] / [`ErrorCode`]: rendering and routing failures.
//! - [`UserRef`]: the identifier-only user reference.
//! - [`PageId`]: names of the served pages.
//! - [`TraceId`]: request correlation identifier.
//! - [`ports`]: observer seams used by the HTTP adapter.

pub mod error;
pub mod page;
pub mod ports;
pub mod trace_id;
pub mod user;

pub use self::error::{Error, ErrorCode};
pub use self::page::PageId;
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::user::{SAMPLE_USER_IDS, USER_DETAILS_BASE, UserRef};
