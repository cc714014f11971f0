//! Report envelope assembly and exit-code mapping.

use anyhow::Context;
use teamguard_types::{
    ActionOutcome, TeamguardData, TeamguardReport, ToolMeta, Verdict, SCHEMA_REPORT_V1,
};
use time::OffsetDateTime;

/// Which roster a report was produced against.
#[derive(Clone, Debug)]
pub struct ReportTarget {
    /// `team` or `enterprise`.
    pub scope: String,
    pub target: String,
}

fn tool_meta() -> ToolMeta {
    ToolMeta {
        name: "teamguard".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    }
}

/// Wrap verify/revoke outcomes in the report envelope.
///
/// An outcome with a recorded error counts as a failure; a clean "not a
/// member" answer does not (it is an answer, not a failure).
pub fn membership_report(
    action: &str,
    target: &ReportTarget,
    started_at: OffsetDateTime,
    outcomes: Vec<ActionOutcome>,
) -> TeamguardReport {
    let failures = outcomes.iter().filter(|o| o.error.is_some()).count() as u32;
    let verdict = if failures == 0 {
        Verdict::Pass
    } else {
        Verdict::Fail
    };

    TeamguardReport {
        schema: SCHEMA_REPORT_V1.to_string(),
        tool: tool_meta(),
        started_at,
        finished_at: OffsetDateTime::now_utc(),
        verdict,
        verdicts: Vec::new(),
        data: TeamguardData {
            action: action.to_string(),
            scope: target.scope.clone(),
            target: target.target.clone(),
            members_scanned: outcomes.len() as u32,
            violations: 0,
            failures,
            include_compliant: None,
            error: None,
        },
        outcomes,
    }
}

/// Envelope for the `emails` projection.
///
/// No classification is involved, so the verdict is always a pass; the
/// envelope exists so the action still produces a report artifact.
pub fn emails_report(
    target: &ReportTarget,
    started_at: OffsetDateTime,
    members_scanned: u32,
) -> TeamguardReport {
    TeamguardReport {
        schema: SCHEMA_REPORT_V1.to_string(),
        tool: tool_meta(),
        started_at,
        finished_at: OffsetDateTime::now_utc(),
        verdict: Verdict::Pass,
        verdicts: Vec::new(),
        outcomes: Vec::new(),
        data: TeamguardData {
            action: "emails".to_string(),
            scope: target.scope.clone(),
            target: target.target.clone(),
            members_scanned,
            violations: 0,
            failures: 0,
            include_compliant: None,
            error: None,
        },
    }
}

/// Report emitted when the invocation aborts on a fatal error.
///
/// No partial structured output: the envelope carries only the error.
pub fn runtime_error_report(action: &str, target: &ReportTarget, message: &str) -> TeamguardReport {
    let now = OffsetDateTime::now_utc();
    TeamguardReport {
        schema: SCHEMA_REPORT_V1.to_string(),
        tool: tool_meta(),
        started_at: now,
        finished_at: now,
        verdict: Verdict::Fail,
        verdicts: Vec::new(),
        outcomes: Vec::new(),
        data: TeamguardData {
            action: action.to_string(),
            scope: target.scope.clone(),
            target: target.target.clone(),
            members_scanned: 0,
            violations: 0,
            failures: 0,
            include_compliant: None,
            error: Some(message.to_string()),
        },
    }
}

pub fn serialize_report(report: &TeamguardReport) -> anyhow::Result<Vec<u8>> {
    serde_json::to_vec_pretty(report).context("serialize report")
}

/// Map a report to a process exit code: 0 = clean, 2 = violations or item
/// failures, 1 = aborted on a fatal error.
pub fn report_exit_code(report: &TeamguardReport) -> i32 {
    if report.data.error.is_some() {
        return 1;
    }
    match report.verdict {
        Verdict::Pass => 0,
        Verdict::Fail => 2,
    }
}
