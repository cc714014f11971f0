use crate::fingerprint::fingerprint_for_violation;
use crate::policy::PolicyRule;
use teamguard_types::{Account, ClassificationVerdict, ViolationCode};

/// Classify one account against the ordered rule set.
///
/// First matching rule wins. For the governing rule the checks run in order:
/// ceiling, then MFA. An account matching no rule is a violation (fail-closed).
pub fn classify(account: &Account, rules: &[PolicyRule]) -> ClassificationVerdict {
    let Some(rule) = rules.iter().find(|r| r.matches(&account.email)) else {
        return violation(account, None, ViolationCode::NoMatchingRule);
    };

    if account.role.exceeds(rule.ceiling()) {
        return violation(account, Some(rule), ViolationCode::ExcessPermission);
    }

    if rule.require_mfa() && !account.has_mfa() {
        return violation(account, Some(rule), ViolationCode::MissingMfa);
    }

    ClassificationVerdict {
        compliant: true,
        matched_pattern: Some(rule.pattern().to_string()),
        violation: None,
        message: format!(
            "{} is a {} account within policy ({})",
            account.email,
            account.role,
            rule.pattern()
        ),
        fingerprint: None,
        account: account.clone(),
    }
}

/// Classify every account in the roster, preserving roster order.
pub fn classify_all(roster: &[Account], rules: &[PolicyRule]) -> Vec<ClassificationVerdict> {
    roster.iter().map(|a| classify(a, rules)).collect()
}

fn violation(
    account: &Account,
    rule: Option<&PolicyRule>,
    code: ViolationCode,
) -> ClassificationVerdict {
    let pattern = rule.map(|r| r.pattern().to_string());
    let message = match code {
        ViolationCode::NoMatchingRule => format!(
            "{} ({}) matches no policy rule",
            account.email, account.role
        ),
        ViolationCode::ExcessPermission => format!(
            "{} is allowed by '{}' but role {} exceeds ceiling {}",
            account.email,
            pattern.as_deref().unwrap_or(""),
            account.role,
            rule.map(|r| r.ceiling().as_str()).unwrap_or(""),
        ),
        ViolationCode::MissingMfa => format!(
            "{} is allowed by '{}' but has neither SSO nor 2FA",
            account.email,
            pattern.as_deref().unwrap_or(""),
        ),
    };
    let fingerprint = fingerprint_for_violation(code.as_str(), &account.email, pattern.as_deref());

    ClassificationVerdict {
        compliant: false,
        matched_pattern: pattern,
        violation: Some(code),
        message,
        fingerprint: Some(fingerprint),
        account: account.clone(),
    }
}
