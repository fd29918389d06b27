//! The query-descriptor surface handed to the start hook by the host.

mod execution;
pub use execution::*;
