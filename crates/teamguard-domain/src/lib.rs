//! Pure policy evaluation (no IO).
//!
//! Input: a roster snapshot and an ordered rule set constructed elsewhere.
//! Output: one verdict per account + summary counts.

#![forbid(unsafe_code)]

pub mod policy;
pub mod report;

mod classify;
mod fingerprint;

#[cfg(test)]
mod proptests;

pub use classify::{classify, classify_all};
pub use fingerprint::fingerprint_for_violation;
