use crate::account::Account;
use crate::ids;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Stable schema identifier for teamguard reports.
pub const SCHEMA_REPORT_V1: &str = "teamguard.report.v1";

/// Why an account fails policy. Codes are stable; messages are not.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ViolationCode {
    /// No rule in the ordered set matched the account's email (fail-closed).
    NoMatchingRule,
    /// A pattern matched, but the role exceeds the rule's permission ceiling.
    ExcessPermission,
    /// A pattern matched, but the rule requires MFA and the account has
    /// neither SSO nor 2FA.
    MissingMfa,
}

impl ViolationCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ViolationCode::NoMatchingRule => ids::CODE_NO_MATCHING_RULE,
            ViolationCode::ExcessPermission => ids::CODE_EXCESS_PERMISSION,
            ViolationCode::MissingMfa => ids::CODE_MISSING_MFA,
        }
    }
}

/// Outcome of classifying one account against the policy rule set.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ClassificationVerdict {
    pub account: Account,
    pub compliant: bool,

    /// Pattern of the first rule that matched, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matched_pattern: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub violation: Option<ViolationCode>,

    pub message: String,

    /// Stable identifier intended for dedup and trending. A hash of:
    /// `code + email + matched pattern`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fingerprint: Option<String>,
}

/// State change applied to one account by a mutating action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ActionTaken {
    None,
    Verified,
    Revoked,
}

/// Result of an attempted verify/revoke on one email.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ActionOutcome {
    pub email: String,
    pub found: bool,
    pub action_taken: ActionTaken,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Pass,
    Fail,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ToolMeta {
    pub name: String,
    pub version: String,
}

/// Teamguard-specific summary payload for the report.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema, Default)]
pub struct TeamguardData {
    /// Which action produced this report: `list`, `emails`, `verify`, `revoke`.
    pub action: String,
    /// `team` or `enterprise`.
    pub scope: String,
    /// Team or enterprise-account identifier the action ran against.
    pub target: String,

    pub members_scanned: u32,
    pub violations: u32,
    pub failures: u32,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_compliant: Option<bool>,

    /// Populated only on runtime-error reports.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// A generic report envelope.
///
/// Keeping this generic allows teamguard to embed action-specific data while
/// still enforcing a stable outer shape.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ReportEnvelope<TData = TeamguardData> {
    /// Versioned schema identifier for the envelope shape.
    pub schema: String,
    pub tool: ToolMeta,
    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub started_at: OffsetDateTime,
    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub finished_at: OffsetDateTime,
    pub verdict: Verdict,

    /// Per-account verdicts (populated by `list`).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub verdicts: Vec<ClassificationVerdict>,

    /// Per-email outcomes (populated by `verify`/`revoke`).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub outcomes: Vec<ActionOutcome>,

    pub data: TData,
}

pub type TeamguardReport = ReportEnvelope<TeamguardData>;
