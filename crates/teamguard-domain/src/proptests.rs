//! Property tests for the classifier invariants.

use crate::classify::{classify, classify_all};
use crate::policy::PolicyRule;
use proptest::prelude::*;
use teamguard_types::{Account, Role, ViolationCode};

fn arb_local_part() -> impl Strategy<Value = String> {
    // Keep to glob-inert characters so generated emails never collide with
    // pattern syntax.
    "[a-z][a-z0-9]{0,11}"
}

fn arb_domain() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("allowed.org".to_string()),
        Just("other.com".to_string()),
        Just("third.net".to_string()),
    ]
}

fn arb_role() -> impl Strategy<Value = Role> {
    prop_oneof![
        Just(Role::Collaborator),
        Just(Role::Viewer),
        Just(Role::Member),
        Just(Role::Admin),
        Just(Role::Owner),
    ]
}

fn arb_account() -> impl Strategy<Value = Account> {
    (arb_local_part(), arb_domain(), arb_role(), any::<bool>(), any::<bool>()).prop_map(
        |(local, domain, role, federated, two_factor)| Account {
            email: format!("{local}@{domain}"),
            id: None,
            role,
            federated,
            two_factor_enabled: two_factor,
        },
    )
}

fn arb_rule() -> impl Strategy<Value = PolicyRule> {
    (arb_domain(), arb_role(), any::<bool>()).prop_map(|(domain, ceiling, require_mfa)| {
        PolicyRule::new(&format!("*@{domain}"), ceiling, require_mfa).expect("valid glob")
    })
}

proptest! {
    #[test]
    fn one_verdict_per_account_in_roster_order(
        roster in prop::collection::vec(arb_account(), 0..16),
        rules in prop::collection::vec(arb_rule(), 0..4),
    ) {
        let verdicts = classify_all(&roster, &rules);
        prop_assert_eq!(verdicts.len(), roster.len());
        for (account, verdict) in roster.iter().zip(&verdicts) {
            prop_assert_eq!(&account.email, &verdict.account.email);
        }
    }

    #[test]
    fn empty_rules_classify_everything_as_violation(account in arb_account()) {
        let verdict = classify(&account, &[]);
        prop_assert!(!verdict.compliant);
        prop_assert_eq!(verdict.violation, Some(ViolationCode::NoMatchingRule));
    }

    #[test]
    fn governing_rule_is_the_first_match(
        account in arb_account(),
        rules in prop::collection::vec(arb_rule(), 1..6),
    ) {
        let verdict = classify(&account, &rules);
        let first_match = rules.iter().find(|r| r.matches(&account.email));
        match first_match {
            Some(rule) => prop_assert_eq!(
                verdict.matched_pattern.as_deref(),
                Some(rule.pattern())
            ),
            None => {
                prop_assert!(verdict.matched_pattern.is_none());
                prop_assert_eq!(verdict.violation, Some(ViolationCode::NoMatchingRule));
            }
        }
    }

    #[test]
    fn compliant_verdicts_carry_no_violation_or_fingerprint(
        account in arb_account(),
        rules in prop::collection::vec(arb_rule(), 0..4),
    ) {
        let verdict = classify(&account, &rules);
        if verdict.compliant {
            prop_assert!(verdict.violation.is_none());
            prop_assert!(verdict.fingerprint.is_none());
            prop_assert!(verdict.matched_pattern.is_some());
        } else {
            prop_assert!(verdict.violation.is_some());
            prop_assert!(verdict.fingerprint.is_some());
        }
    }
}
