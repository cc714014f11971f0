//! Use case orchestration for teamguard.
//!
//! This crate provides the application layer: use cases that coordinate the
//! remote client, the classifier, and report assembly. It is intentionally
//! thin and delegates heavy lifting to the appropriate layers.
//!
//! The CLI crate depends on this; it only handles argument parsing and I/O.

#![forbid(unsafe_code)]

mod audit;
mod explain;
mod membership;
mod render;
mod report;

pub use audit::{run_audit, run_emails, AuditInput};
pub use explain::{format_explanation, format_not_found, run_explain, ExplainOutput};
pub use membership::{run_revoke, run_verify};
pub use render::to_renderable;
pub use report::{
    emails_report, membership_report, report_exit_code, runtime_error_report, serialize_report,
    ReportTarget,
};
