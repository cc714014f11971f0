use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// `teamguard.toml` schema v1.
///
/// This is a *user-facing* config model: it is intentionally permissive so
/// forward-compat is easy. Strings are validated during resolution, not
/// during parsing.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct TeamguardConfigV1 {
    /// Optional schema string for tooling (`teamguard.config.v1`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    /// Ordered policy rules; the first matching rule governs.
    #[serde(default)]
    pub rules: Vec<RuleConfig>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client: Option<ClientSection>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct RuleConfig {
    /// Glob over the full email address (`*@allowed.org`).
    pub pattern: String,

    /// Maximum compliant role for matching accounts:
    /// `collaborator`, `viewer`, `member`, `admin`, or `owner`.
    pub ceiling: String,

    /// Matching accounts must have SSO or 2FA enabled.
    #[serde(default)]
    pub require_mfa: bool,
}

/// Optional remote client tuning.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ClientSection {
    /// Retry ceiling for transient failures.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_attempts: Option<u32>,

    /// Per-request timeout in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}
