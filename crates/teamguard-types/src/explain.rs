//! Explain registry for violation codes.
//!
//! Maps stable codes to human-readable explanations with remediation
//! guidance, so operators can act on a finding without leaving the terminal.

use crate::ids;

/// Explanation entry for a violation code.
#[derive(Debug, Clone)]
pub struct Explanation {
    /// Short description of the code.
    pub title: &'static str,
    /// What the finding means and why it matters.
    pub description: &'static str,
    /// How to resolve it.
    pub remediation: &'static str,
    /// Before/after config examples.
    pub examples: ExamplePair,
}

/// Before and after configuration examples.
#[derive(Debug, Clone)]
pub struct ExamplePair {
    /// Configuration (or state) that would trigger a finding.
    pub before: &'static str,
    /// Configuration (or state) that passes.
    pub after: &'static str,
}

/// Look up an explanation by violation code.
///
/// Returns `None` if the identifier is not recognized.
pub fn lookup_explanation(identifier: &str) -> Option<Explanation> {
    match identifier {
        ids::CODE_NO_MATCHING_RULE => Some(explain_no_matching_rule()),
        ids::CODE_EXCESS_PERMISSION => Some(explain_excess_permission()),
        ids::CODE_MISSING_MFA => Some(explain_missing_mfa()),
        ids::CODE_RUNTIME_ERROR => Some(explain_runtime_error()),
        _ => None,
    }
}

/// List all known codes.
pub fn all_codes() -> &'static [&'static str] {
    &[
        ids::CODE_NO_MATCHING_RULE,
        ids::CODE_EXCESS_PERMISSION,
        ids::CODE_MISSING_MFA,
        ids::CODE_RUNTIME_ERROR,
    ]
}

fn explain_no_matching_rule() -> Explanation {
    Explanation {
        title: "No Matching Rule",
        description: "\
The account's email matched no pattern in the ordered rule set. teamguard is
fail-closed: an account without an explicit allow rule is a problem member,
because silence in the policy cannot be distinguished from an oversight.",
        remediation: "\
Either add a rule whose pattern covers the account (with an appropriate
ceiling), or revoke the membership with `teamguard revoke <email>`.",
        examples: ExamplePair {
            before: "# no rule covers contractor@other.com\n[[rules]]\npattern = \"*@allowed.org\"\nceiling = \"member\"\n",
            after: "[[rules]]\npattern = \"*@allowed.org\"\nceiling = \"member\"\n\n[[rules]]\npattern = \"contractor@other.com\"\nceiling = \"collaborator\"\n",
        },
    }
}

fn explain_excess_permission() -> Explanation {
    Explanation {
        title: "Excess Permission",
        description: "\
A rule matched the account's identity, but the account's role sits above the
rule's permission ceiling. The identity is allowed; the privilege is not.",
        remediation: "\
Lower the member's role in the provider dashboard, or raise the rule's
ceiling if the elevated role is intended.",
        examples: ExamplePair {
            before: "# a@allowed.org holds the admin role\n[[rules]]\npattern = \"*@allowed.org\"\nceiling = \"member\"\n",
            after: "[[rules]]\npattern = \"a@allowed.org\"\nceiling = \"admin\"\n\n[[rules]]\npattern = \"*@allowed.org\"\nceiling = \"member\"\n",
        },
    }
}

fn explain_missing_mfa() -> Explanation {
    Explanation {
        title: "Missing MFA",
        description: "\
The matching rule requires a second authentication factor, and the account
has neither SSO federation nor two-factor authentication enabled.",
        remediation: "\
Ask the member to enable 2FA on their account, or move them behind the SSO
identity provider. Accounts that cannot do either should be revoked.",
        examples: ExamplePair {
            before: "# member has federated = false, 2FA disabled\n[[rules]]\npattern = \"*@allowed.org\"\nceiling = \"member\"\nrequire_mfa = true\n",
            after: "# member enabled 2FA; the same rule now passes\n[[rules]]\npattern = \"*@allowed.org\"\nceiling = \"member\"\nrequire_mfa = true\n",
        },
    }
}

fn explain_runtime_error() -> Explanation {
    Explanation {
        title: "Runtime Error",
        description: "\
teamguard aborted before producing a complete result: bad credentials, a
scope mismatch, an untrustworthy roster, or an exhausted retry budget on the
roster fetch itself. No partial results are reported for fatal errors.",
        remediation: "\
Check the token (HEROKU_TOKEN), the target identifier, and whether
--enterprise matches the kind of identifier supplied, then rerun.",
        examples: ExamplePair {
            before: "teamguard --team my-enterprise-acct list   # team scope, enterprise id",
            after: "teamguard --team my-enterprise-acct --enterprise list",
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_registered_code_resolves() {
        for code in all_codes() {
            assert!(
                lookup_explanation(code).is_some(),
                "code '{code}' has no explanation"
            );
        }
    }

    #[test]
    fn unknown_identifier_returns_none() {
        assert!(lookup_explanation("definitely_not_a_code").is_none());
    }
}
