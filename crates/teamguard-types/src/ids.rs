//! Stable identifiers for violation codes and scopes.
//!
//! Codes are short snake_case discriminators that survive message rewording.

// Violation codes
pub const CODE_NO_MATCHING_RULE: &str = "no_matching_rule";
pub const CODE_EXCESS_PERMISSION: &str = "excess_permission";
pub const CODE_MISSING_MFA: &str = "missing_mfa";

// Tool-level
pub const CODE_RUNTIME_ERROR: &str = "runtime_error";

// Scope strings used in report data
pub const SCOPE_TEAM: &str = "team";
pub const SCOPE_ENTERPRISE: &str = "enterprise";
