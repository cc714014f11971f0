//! Projection from the report envelope to the renderer's view of it.

use teamguard_render::{
    RenderableAction, RenderableData, RenderableOutcome, RenderableReport, RenderableVerdict,
    RenderableVerdictStatus,
};
use teamguard_types::{ActionTaken, TeamguardReport, Verdict};

pub fn to_renderable(report: &TeamguardReport) -> RenderableReport {
    RenderableReport {
        verdict: match report.verdict {
            Verdict::Pass => RenderableVerdictStatus::Pass,
            Verdict::Fail => RenderableVerdictStatus::Fail,
        },
        verdicts: report
            .verdicts
            .iter()
            .map(|v| RenderableVerdict {
                email: v.account.email.clone(),
                role: v.account.role.as_str().to_string(),
                compliant: v.compliant,
                code: v.violation.map(|c| c.as_str().to_string()),
                message: v.message.clone(),
            })
            .collect(),
        outcomes: report
            .outcomes
            .iter()
            .map(|o| RenderableOutcome {
                email: o.email.clone(),
                found: o.found,
                action: match o.action_taken {
                    ActionTaken::None => RenderableAction::None,
                    ActionTaken::Verified => RenderableAction::Verified,
                    ActionTaken::Revoked => RenderableAction::Revoked,
                },
                error: o.error.clone(),
            })
            .collect(),
        data: RenderableData {
            action: report.data.action.clone(),
            scope: report.data.scope.clone(),
            target: report.data.target.clone(),
            members_scanned: report.data.members_scanned,
            violations: report.data.violations,
            failures: report.data.failures,
            error: report.data.error.clone(),
        },
    }
}
