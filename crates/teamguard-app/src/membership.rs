//! The `verify` and `revoke` use cases: per-email, batch-safe.
//!
//! Each email is processed independently; one failure never aborts the rest
//! of the batch, and the result always holds one outcome per input email in
//! input order. The single exception is a fatal error (bad token, scope
//! mismatch), which halts remaining work and is surfaced once.

use teamguard_remote::{MembershipApi, RemoteError};
use teamguard_types::{ActionOutcome, ActionTaken};

/// Check membership for each email. Never mutates state, so it is always
/// safe to run before (or instead of) `revoke`.
pub fn run_verify(
    api: &impl MembershipApi,
    emails: &[String],
) -> Result<Vec<ActionOutcome>, RemoteError> {
    let mut outcomes = Vec::with_capacity(emails.len());
    for email in emails {
        let outcome = match api.find_account(email) {
            Ok(found) => ActionOutcome {
                email: email.clone(),
                found: found.is_some(),
                action_taken: ActionTaken::None,
                error: None,
            },
            Err(err) if err.is_fatal() => return Err(err),
            Err(err) => ActionOutcome {
                email: email.clone(),
                found: false,
                action_taken: ActionTaken::None,
                error: Some(err.to_string()),
            },
        };
        outcomes.push(outcome);
    }
    Ok(outcomes)
}

/// Revoke membership for each email, resolving the account first.
///
/// The lookup-before-mutate step is the safety guarantee: an email that does
/// not resolve is reported as not found and never sent to the mutating
/// endpoint. Per email: Pending -> Resolving -> {NotFound | Resolved} ->
/// {Revoked | RevokeFailed}; no state re-enters Pending.
pub fn run_revoke(
    api: &impl MembershipApi,
    emails: &[String],
) -> Result<Vec<ActionOutcome>, RemoteError> {
    let mut outcomes = Vec::with_capacity(emails.len());
    for email in emails {
        let account = match api.find_account(email) {
            Ok(Some(account)) => account,
            Ok(None) => {
                outcomes.push(ActionOutcome {
                    email: email.clone(),
                    found: false,
                    action_taken: ActionTaken::None,
                    error: None,
                });
                continue;
            }
            Err(err) if err.is_fatal() => return Err(err),
            Err(err) => {
                outcomes.push(ActionOutcome {
                    email: email.clone(),
                    found: false,
                    action_taken: ActionTaken::None,
                    error: Some(err.to_string()),
                });
                continue;
            }
        };

        let outcome = match api.revoke_membership(&account) {
            Ok(()) => ActionOutcome {
                email: email.clone(),
                found: true,
                action_taken: ActionTaken::Revoked,
                error: None,
            },
            Err(err) if err.is_fatal() => return Err(err),
            Err(err) => ActionOutcome {
                email: email.clone(),
                found: true,
                action_taken: ActionTaken::None,
                error: Some(err.to_string()),
            },
        };
        outcomes.push(outcome);
    }
    Ok(outcomes)
}
