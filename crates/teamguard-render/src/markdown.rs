use crate::model::{RenderableAction, RenderableReport, RenderableVerdictStatus};

pub fn render_markdown(report: &RenderableReport) -> String {
    let mut out = String::new();

    out.push_str("# Teamguard report\n\n");
    let verdict = match report.verdict {
        RenderableVerdictStatus::Pass => "PASS",
        RenderableVerdictStatus::Fail => "FAIL",
    };
    out.push_str(&format!(
        "- Action: `{}` against {} `{}`\n- Verdict: **{}**\n- Members scanned: {} / Violations: {} / Failures: {}\n\n",
        report.data.action,
        report.data.scope,
        report.data.target,
        verdict,
        report.data.members_scanned,
        report.data.violations,
        report.data.failures
    ));

    if let Some(err) = &report.data.error {
        out.push_str(&format!("> Error: {}\n\n", err));
        return out;
    }

    if !report.verdicts.is_empty() {
        out.push_str("## Accounts\n\n");
        for v in &report.verdicts {
            if v.compliant {
                out.push_str(&format!("- [OK] `{}` ({}) — {}\n", v.email, v.role, v.message));
            } else {
                out.push_str(&format!(
                    "- [VIOLATION] `{}` ({}) / `{}` — {}\n",
                    v.email,
                    v.role,
                    v.code.as_deref().unwrap_or(""),
                    v.message
                ));
            }
        }
    }

    if !report.outcomes.is_empty() {
        out.push_str("## Outcomes\n\n");
        for o in &report.outcomes {
            let status = match (&o.error, o.action, o.found) {
                (Some(err), _, _) => format!("failed: {err}"),
                (None, RenderableAction::Revoked, _) => "revoked".to_string(),
                (None, _, true) => "member".to_string(),
                (None, _, false) => "not a member".to_string(),
            };
            out.push_str(&format!("- `{}` — {}\n", o.email, status));
        }
    }

    if report.verdicts.is_empty() && report.outcomes.is_empty() {
        out.push_str("Nothing to report.\n");
    }

    out
}
