use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Permission level of a membership record, ordered for ceiling checks.
///
/// The order is `Collaborator < Viewer < Member < Admin < Owner`. Role
/// vocabulary belongs to the remote provider; strings we do not recognize
/// are preserved as [`Role::Other`] and rank above every known role, so an
/// unknown role can never satisfy a configured ceiling.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Role {
    Collaborator,
    Viewer,
    Member,
    Admin,
    Owner,
    Other(String),
}

impl Role {
    pub fn parse(s: &str) -> Role {
        match s.to_ascii_lowercase().as_str() {
            "collaborator" => Role::Collaborator,
            "viewer" => Role::Viewer,
            "member" => Role::Member,
            "admin" => Role::Admin,
            "owner" => Role::Owner,
            _ => Role::Other(s.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Role::Collaborator => "collaborator",
            Role::Viewer => "viewer",
            Role::Member => "member",
            Role::Admin => "admin",
            Role::Owner => "owner",
            Role::Other(s) => s.as_str(),
        }
    }

    fn rank(&self) -> u8 {
        match self {
            Role::Collaborator => 0,
            Role::Viewer => 1,
            Role::Member => 2,
            Role::Admin => 3,
            Role::Owner => 4,
            Role::Other(_) => u8::MAX,
        }
    }

    /// Ceiling check: does this role carry more permission than `ceiling` allows?
    pub fn exceeds(&self, ceiling: &Role) -> bool {
        self.rank() > ceiling.rank()
    }
}

impl From<String> for Role {
    fn from(value: String) -> Self {
        Role::parse(&value)
    }
}

impl From<Role> for String {
    fn from(value: Role) -> Self {
        value.as_str().to_string()
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One team/enterprise membership record.
///
/// Constructed and validated at the roster client boundary; the classifier
/// and executor only ever see this fixed shape, never raw API payloads.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Account {
    /// Stable correlation key across list/verify/revoke calls.
    pub email: String,

    /// Opaque remote identifier; may be absent until a lookup resolves it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[schemars(with = "String")]
    pub role: Role,

    /// Account authenticates through SSO (SAML).
    #[serde(default)]
    pub federated: bool,

    #[serde(default)]
    pub two_factor_enabled: bool,
}

impl Account {
    /// Whether the account satisfies an MFA requirement: federated accounts
    /// authenticate through the IdP, so either flag counts.
    pub fn has_mfa(&self) -> bool {
        self.federated || self.two_factor_enabled
    }
}
