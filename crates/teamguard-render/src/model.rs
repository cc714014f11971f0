#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderableVerdictStatus {
    Pass,
    Fail,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderableAction {
    None,
    Verified,
    Revoked,
}

/// One classified account, reduced to what the output formats need.
#[derive(Clone, Debug)]
pub struct RenderableVerdict {
    pub email: String,
    pub role: String,
    pub compliant: bool,
    /// Stable violation code, absent for compliant accounts.
    pub code: Option<String>,
    pub message: String,
}

/// One verify/revoke outcome.
#[derive(Clone, Debug)]
pub struct RenderableOutcome {
    pub email: String,
    pub found: bool,
    pub action: RenderableAction,
    pub error: Option<String>,
}

#[derive(Clone, Debug)]
pub struct RenderableData {
    pub action: String,
    pub scope: String,
    pub target: String,
    pub members_scanned: u32,
    pub violations: u32,
    pub failures: u32,
    pub error: Option<String>,
}

#[derive(Clone, Debug)]
pub struct RenderableReport {
    pub verdict: RenderableVerdictStatus,
    pub verdicts: Vec<RenderableVerdict>,
    pub outcomes: Vec<RenderableOutcome>,
    pub data: RenderableData,
}
