//! Stable DTOs and IDs used across the teamguard workspace.
//!
//! This crate is intentionally boring:
//! - account and role types as fetched from the membership provider
//! - verdict and outcome types for the emitted report
//! - stable string codes for policy violations
//! - explain registry for remediation guidance
//!
//! No I/O and no policy logic live here.

#![forbid(unsafe_code)]

pub mod account;
pub mod explain;
pub mod ids;
pub mod report;

pub use account::{Account, Role};
pub use explain::{ExamplePair, Explanation, lookup_explanation};
pub use report::{
    ActionOutcome, ActionTaken, ClassificationVerdict, ReportEnvelope, TeamguardData,
    TeamguardReport, ToolMeta, Verdict, ViolationCode, SCHEMA_REPORT_V1,
};
