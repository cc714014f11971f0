//! Pure page parsing and merging for roster responses.
//!
//! The Platform API returns different member shapes for teams and for
//! enterprise accounts; both are normalized into [`Account`] here, at the
//! client boundary, so nothing downstream ever sees a raw payload.

use crate::error::RemoteError;
use serde::Deserialize;
use teamguard_types::{Account, Role};

#[derive(Debug, Deserialize)]
struct RawUserRef {
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    email: Option<String>,
}

/// Team member record (`GET /teams/{team}/members`).
#[derive(Debug, Deserialize)]
struct RawTeamMember {
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    role: Option<String>,
    #[serde(default)]
    federated: bool,
    #[serde(default)]
    two_factor_authentication: bool,
    #[serde(default)]
    user: Option<RawUserRef>,
}

/// Enterprise account member record
/// (`GET /enterprise-accounts/{id}/members`).
#[derive(Debug, Deserialize)]
struct RawEnterpriseMember {
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    permissions: Vec<RawPermission>,
    #[serde(default)]
    two_factor_authentication: bool,
    #[serde(default)]
    identity_provider: Option<serde_json::Value>,
    #[serde(default)]
    user: Option<RawUserRef>,
}

/// Permission entries appear both as bare strings and as objects with a
/// `name` field, depending on API version.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawPermission {
    Bare(String),
    Named { name: String },
}

impl RawPermission {
    fn name(&self) -> &str {
        match self {
            RawPermission::Bare(s) => s,
            RawPermission::Named { name } => name,
        }
    }
}

/// Parse one team roster page.
pub fn parse_team_page(body: &serde_json::Value) -> Result<Vec<Account>, RemoteError> {
    let raw: Vec<RawTeamMember> = serde_json::from_value(body.clone())
        .map_err(|e| RemoteError::Payload(format!("team member list: {e}")))?;
    raw.into_iter().map(team_account).collect()
}

/// Parse one enterprise-account roster page.
pub fn parse_enterprise_page(body: &serde_json::Value) -> Result<Vec<Account>, RemoteError> {
    let raw: Vec<RawEnterpriseMember> = serde_json::from_value(body.clone())
        .map_err(|e| RemoteError::Payload(format!("enterprise member list: {e}")))?;
    raw.into_iter().map(enterprise_account).collect()
}

/// Parse a single team member record (targeted lookup response).
pub fn parse_team_member(body: &serde_json::Value) -> Result<Account, RemoteError> {
    let raw: RawTeamMember = serde_json::from_value(body.clone())
        .map_err(|e| RemoteError::Payload(format!("team member: {e}")))?;
    team_account(raw)
}

fn team_account(raw: RawTeamMember) -> Result<Account, RemoteError> {
    let email = raw
        .email
        .or_else(|| raw.user.as_ref().and_then(|u| u.email.clone()))
        .ok_or_else(|| RemoteError::Payload("team member record without an email".to_string()))?;
    let id = raw.user.as_ref().and_then(|u| u.id.clone()).or(raw.id);

    Ok(Account {
        email,
        id,
        // A record without a role cannot satisfy any ceiling (fail-closed).
        role: raw
            .role
            .as_deref()
            .map(Role::parse)
            .unwrap_or_else(|| Role::Other("unknown".to_string())),
        federated: raw.federated,
        two_factor_enabled: raw.two_factor_authentication,
    })
}

fn enterprise_account(raw: RawEnterpriseMember) -> Result<Account, RemoteError> {
    let email = raw
        .user
        .as_ref()
        .and_then(|u| u.email.clone())
        .ok_or_else(|| {
            RemoteError::Payload("enterprise member record without an email".to_string())
        })?;

    Ok(Account {
        email,
        id: raw.id,
        role: role_from_permissions(&raw.permissions),
        federated: raw
            .identity_provider
            .as_ref()
            .is_some_and(|v| !v.is_null()),
        two_factor_enabled: raw.two_factor_authentication,
    })
}

/// Enterprise members carry a permission list instead of a role; collapse it
/// to the strongest equivalent role for ceiling checks.
fn role_from_permissions(permissions: &[RawPermission]) -> Role {
    let mut role = Role::Viewer;
    for p in permissions {
        let candidate = match p.name() {
            "manage" => Role::Admin,
            "create" | "billing" => Role::Member,
            "view" => Role::Viewer,
            other => Role::Other(other.to_string()),
        };
        if candidate.exceeds(&role) {
            role = candidate;
        }
    }
    role
}

/// Merge roster pages into one snapshot, in page order.
///
/// A duplicate email across pages indicates an inconsistent remote state;
/// it is reported, never silently dropped.
pub fn merge_pages(pages: Vec<Vec<Account>>) -> Result<Vec<Account>, RemoteError> {
    let mut seen = std::collections::HashSet::new();
    let mut roster = Vec::new();
    for page in pages {
        for account in page {
            if !seen.insert(account.email.to_ascii_lowercase()) {
                return Err(RemoteError::InconsistentRoster {
                    email: account.email,
                });
            }
            roster.push(account);
        }
    }
    Ok(roster)
}
