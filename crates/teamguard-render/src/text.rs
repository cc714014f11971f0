use crate::model::{RenderableAction, RenderableReport};

/// Plain-text rendering: one line per account/outcome, suitable for a
/// terminal or for pasting into an offboarding email.
pub fn render_text(report: &RenderableReport) -> String {
    let mut out = String::new();
    let data = &report.data;

    if let Some(err) = &data.error {
        out.push_str(&format!("teamguard aborted: {err}\n"));
        return out;
    }

    out.push_str(&format!(
        "result of running {} against {} {}\n",
        data.action, data.scope, data.target
    ));

    for v in &report.verdicts {
        if v.compliant {
            out.push_str(&format!("okay: {}\n", v.message));
        } else {
            out.push_str(&format!(
                "BAD! {}: {}\n",
                v.code.as_deref().unwrap_or(""),
                v.message
            ));
        }
    }

    for o in &report.outcomes {
        let line = match (&o.error, o.action, o.found) {
            (Some(err), _, _) if data.action == "revoke" => {
                format!("{} failed membership revocation from {}: {err}", o.email, data.target)
            }
            (Some(err), _, _) => format!("{}: lookup failed ({err})", o.email),
            (None, RenderableAction::Revoked, _) => {
                format!("{} revoked from {}", o.email, data.target)
            }
            (None, _, true) => format!("{} is a member of {}", o.email, data.target),
            (None, _, false) if data.action == "revoke" => {
                format!("{} was NOT a member of {}", o.email, data.target)
            }
            (None, _, false) => format!("{} is NOT a member of {}", o.email, data.target),
        };
        out.push_str(&line);
        out.push('\n');
    }

    if data.action == "list" {
        out.push_str(&format!(
            "{} members scanned, {} violation(s)\n",
            data.members_scanned, data.violations
        ));
    } else if data.failures > 0 {
        out.push_str(&format!("{} item(s) failed\n", data.failures));
    }

    out
}
