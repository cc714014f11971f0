//! Shared test utilities for the teamguard workspace.
//!
//! Two things live here: an in-memory [`FakeMembershipApi`] for executor and
//! CLI tests, and report-JSON normalization for golden comparisons. It is a
//! real (non-`cfg(test)`) crate because integration tests in several crates
//! need the same fixtures.

use std::cell::{Cell, RefCell};
use std::collections::HashSet;
use teamguard_remote::{MembershipApi, RemoteError};
use teamguard_types::{Account, Role};

/// Roster fixture builder.
pub fn account(email: &str, role: Role) -> Account {
    Account {
        email: email.to_string(),
        id: Some(format!("id-{email}")),
        role,
        federated: false,
        two_factor_enabled: false,
    }
}

/// In-memory membership API with scriptable failures.
///
/// Revocations mutate the fake's state, so a second revoke of the same email
/// observes the member as already absent, like the real API would.
#[derive(Default)]
pub struct FakeMembershipApi {
    roster: Vec<Account>,
    /// Every request fails with an authentication error.
    fail_auth: bool,
    /// Lookups for these emails fail with an exhausted-retry transient error.
    transient_emails: HashSet<String>,
    revoked: RefCell<HashSet<String>>,
    revoke_calls: Cell<u32>,
}

impl FakeMembershipApi {
    pub fn with_roster(roster: Vec<Account>) -> Self {
        Self {
            roster,
            ..Self::default()
        }
    }

    pub fn failing_auth() -> Self {
        Self {
            fail_auth: true,
            ..Self::default()
        }
    }

    pub fn with_transient_failure(mut self, email: &str) -> Self {
        self.transient_emails.insert(email.to_string());
        self
    }

    /// Number of calls made to the mutating endpoint.
    pub fn revoke_calls(&self) -> u32 {
        self.revoke_calls.get()
    }

    fn is_revoked(&self, email: &str) -> bool {
        self.revoked.borrow().contains(&email.to_ascii_lowercase())
    }
}

impl MembershipApi for FakeMembershipApi {
    fn fetch_roster(&self) -> Result<Vec<Account>, RemoteError> {
        if self.fail_auth {
            return Err(RemoteError::Auth { status: 401 });
        }
        Ok(self
            .roster
            .iter()
            .filter(|a| !self.is_revoked(&a.email))
            .cloned()
            .collect())
    }

    fn find_account(&self, email: &str) -> Result<Option<Account>, RemoteError> {
        if self.fail_auth {
            return Err(RemoteError::Auth { status: 401 });
        }
        if self.transient_emails.contains(email) {
            return Err(RemoteError::Transient {
                attempts: 3,
                reason: "connection timed out".to_string(),
            });
        }
        if self.is_revoked(email) {
            return Ok(None);
        }
        Ok(self
            .roster
            .iter()
            .find(|a| a.email.eq_ignore_ascii_case(email))
            .cloned())
    }

    fn revoke_membership(&self, account: &Account) -> Result<(), RemoteError> {
        self.revoke_calls.set(self.revoke_calls.get() + 1);
        if self.fail_auth {
            return Err(RemoteError::Auth { status: 401 });
        }
        if !self
            .revoked
            .borrow_mut()
            .insert(account.email.to_ascii_lowercase())
        {
            return Err(RemoteError::NotFound {
                email: account.email.clone(),
            });
        }
        Ok(())
    }
}

/// Normalize non-deterministic report fields for golden-file comparison.
///
/// `tool.version` is replaced only when the root object looks like a report
/// envelope; timestamp keys are normalized at any depth because their
/// placeholder values cannot collide with real data.
pub fn normalize_nondeterministic(mut value: serde_json::Value) -> serde_json::Value {
    if let Some(obj) = value.as_object_mut() {
        let is_envelope = obj.contains_key("schema")
            && obj.contains_key("tool")
            && obj.contains_key("verdict")
            && obj.contains_key("data");
        if is_envelope
            && let Some(tool) = obj.get_mut("tool")
            && let Some(tool_obj) = tool.as_object_mut()
            && tool_obj.contains_key("version")
        {
            tool_obj.insert(
                "version".to_string(),
                serde_json::Value::String("__VERSION__".to_string()),
            );
        }
    }
    normalize_timestamps_recursive(&mut value);
    value
}

fn normalize_timestamps_recursive(value: &mut serde_json::Value) {
    match value {
        serde_json::Value::Object(map) => {
            for key in ["started_at", "finished_at"] {
                if map.contains_key(key) {
                    map.insert(
                        key.to_string(),
                        serde_json::Value::String("__TIMESTAMP__".to_string()),
                    );
                }
            }
            for val in map.values_mut() {
                normalize_timestamps_recursive(val);
            }
        }
        serde_json::Value::Array(arr) => {
            for val in arr.iter_mut() {
                normalize_timestamps_recursive(val);
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn fake_revoke_is_idempotent_like_the_real_api() {
        let api = FakeMembershipApi::with_roster(vec![account("a@x.org", Role::Member)]);
        let acct = api.find_account("a@x.org").expect("lookup").expect("found");

        api.revoke_membership(&acct).expect("first revoke");
        assert!(api.find_account("a@x.org").expect("lookup").is_none());
        assert!(matches!(
            api.revoke_membership(&acct),
            Err(RemoteError::NotFound { .. })
        ));
        assert_eq!(api.revoke_calls(), 2);
    }

    #[test]
    fn normalize_touches_envelope_version_and_timestamps_only() {
        let input = json!({
            "schema": "teamguard.report.v1",
            "tool": { "name": "teamguard", "version": "0.1.0" },
            "started_at": "2025-01-01T00:00:00Z",
            "finished_at": "2025-01-01T00:00:01Z",
            "verdict": "pass",
            "data": { "target": "acme", "version_like": "1.2.3" }
        });

        let result = normalize_nondeterministic(input);
        assert_eq!(result["tool"]["version"], "__VERSION__");
        assert_eq!(result["started_at"], "__TIMESTAMP__");
        assert_eq!(result["finished_at"], "__TIMESTAMP__");
        assert_eq!(result["data"]["version_like"], "1.2.3");
    }

    #[test]
    fn non_envelope_root_keeps_its_version() {
        let input = json!({
            "tool": { "name": "other", "version": "2.0.0" }
        });
        let result = normalize_nondeterministic(input);
        assert_eq!(result["tool"]["version"], "2.0.0");
    }
}
