//! Reporting for prcheck.
//!
//! Checks produce [`Finding`]s; the runner forwards each one to a
//! [`ReportSink`]. [`StatusReport`] is the sink used by the local host and
//! by tests: it accumulates errors, warnings and messages in order.

mod render;
mod sink;
mod types;


// Re-export public API
pub use render::OutputFormat;
pub use sink::{ReportSink, StatusReport};
pub use types::{Finding, Severity};
