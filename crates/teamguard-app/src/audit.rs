//! The `list` and `emails` use cases: roster-wide, read-only.

use crate::report::ReportTarget;
use anyhow::Context;
use teamguard_domain::policy::PolicyRule;
use teamguard_domain::report::{compute_verdict, ViolationCounts};
use teamguard_remote::MembershipApi;
use teamguard_types::{TeamguardData, TeamguardReport, ToolMeta, SCHEMA_REPORT_V1};
use time::OffsetDateTime;

/// Input for the audit (`list`) use case.
#[derive(Clone, Debug)]
pub struct AuditInput<'a> {
    pub rules: &'a [PolicyRule],
    /// When false, the report carries violations only.
    pub include_compliant: bool,
    pub target: &'a ReportTarget,
}

/// Fetch the roster, classify every account, and assemble the report.
///
/// Any roster-fetch error is fatal here: an untrusted or partial roster must
/// never be presented as an audit result.
pub fn run_audit(api: &impl MembershipApi, input: AuditInput<'_>) -> anyhow::Result<TeamguardReport> {
    let started_at = OffsetDateTime::now_utc();

    let roster = api.fetch_roster().context("fetch roster")?;
    let verdicts = teamguard_domain::classify_all(&roster, input.rules);

    let counts = ViolationCounts::from_verdicts(&verdicts);
    let verdict = compute_verdict(&verdicts);

    let emitted = if input.include_compliant {
        verdicts
    } else {
        verdicts.into_iter().filter(|v| !v.compliant).collect()
    };

    Ok(TeamguardReport {
        schema: SCHEMA_REPORT_V1.to_string(),
        tool: ToolMeta {
            name: "teamguard".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        started_at,
        finished_at: OffsetDateTime::now_utc(),
        verdict,
        verdicts: emitted,
        outcomes: Vec::new(),
        data: TeamguardData {
            action: "list".to_string(),
            scope: input.target.scope.clone(),
            target: input.target.target.clone(),
            members_scanned: roster.len() as u32,
            violations: counts.total(),
            failures: 0,
            include_compliant: Some(input.include_compliant),
            error: None,
        },
    })
}

/// Project the full roster to email addresses, in roster order.
///
/// No classification involved; the same fatality rules as the audit apply to
/// the fetch itself.
pub fn run_emails(api: &impl MembershipApi) -> anyhow::Result<Vec<String>> {
    let roster = api.fetch_roster().context("fetch roster")?;
    Ok(roster.into_iter().map(|a| a.email).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::report_exit_code;
    use teamguard_test_util::{account, FakeMembershipApi};
    use teamguard_types::{Role, Verdict, ViolationCode};

    fn target() -> ReportTarget {
        ReportTarget {
            scope: "team".to_string(),
            target: "acme".to_string(),
        }
    }

    fn rules() -> Vec<PolicyRule> {
        vec![PolicyRule::new("*@allowed.org", Role::Member, false).expect("compile")]
    }

    #[test]
    fn audit_reports_only_violations_by_default() {
        let api = FakeMembershipApi::with_roster(vec![
            account("a@allowed.org", Role::Member),
            account("x@other.com", Role::Admin),
        ]);
        let rules = rules();
        let tgt = target();

        let report = run_audit(
            &api,
            AuditInput {
                rules: &rules,
                include_compliant: false,
                target: &tgt,
            },
        )
        .expect("audit");

        assert_eq!(report.verdict, Verdict::Fail);
        assert_eq!(report.data.members_scanned, 2);
        assert_eq!(report.data.violations, 1);
        assert_eq!(report.verdicts.len(), 1);
        assert_eq!(report.verdicts[0].account.email, "x@other.com");
        assert_eq!(
            report.verdicts[0].violation,
            Some(ViolationCode::NoMatchingRule)
        );
        assert_eq!(report_exit_code(&report), 2);
    }

    #[test]
    fn audit_with_include_compliant_lists_everyone() {
        let api = FakeMembershipApi::with_roster(vec![
            account("a@allowed.org", Role::Member),
            account("x@other.com", Role::Admin),
        ]);
        let rules = rules();
        let tgt = target();

        let report = run_audit(
            &api,
            AuditInput {
                rules: &rules,
                include_compliant: true,
                target: &tgt,
            },
        )
        .expect("audit");

        assert_eq!(report.verdicts.len(), 2);
        // Roster order is preserved in the emitted list.
        assert_eq!(report.verdicts[0].account.email, "a@allowed.org");
        assert!(report.verdicts[0].compliant);
    }

    #[test]
    fn clean_roster_passes_and_exits_zero() {
        let api = FakeMembershipApi::with_roster(vec![account("a@allowed.org", Role::Member)]);
        let rules = rules();
        let tgt = target();

        let report = run_audit(
            &api,
            AuditInput {
                rules: &rules,
                include_compliant: false,
                target: &tgt,
            },
        )
        .expect("audit");

        assert_eq!(report.verdict, Verdict::Pass);
        assert!(report.verdicts.is_empty());
        assert_eq!(report_exit_code(&report), 0);
    }

    #[test]
    fn audit_aborts_on_auth_failure() {
        let api = FakeMembershipApi::failing_auth();
        let rules = rules();
        let tgt = target();

        let err = run_audit(
            &api,
            AuditInput {
                rules: &rules,
                include_compliant: false,
                target: &tgt,
            },
        )
        .expect_err("should abort");
        assert!(format!("{err:#}").contains("authentication failed"));
    }

    #[test]
    fn emails_projects_roster_order() {
        let api = FakeMembershipApi::with_roster(vec![
            account("b@allowed.org", Role::Member),
            account("a@allowed.org", Role::Admin),
        ]);
        let emails = run_emails(&api).expect("emails");
        assert_eq!(emails, vec!["b@allowed.org", "a@allowed.org"]);
    }
}
