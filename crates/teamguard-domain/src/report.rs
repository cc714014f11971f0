use teamguard_types::{ClassificationVerdict, Verdict, ViolationCode};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ViolationCounts {
    pub no_matching_rule: u32,
    pub excess_permission: u32,
    pub missing_mfa: u32,
}

impl ViolationCounts {
    pub fn from_verdicts(verdicts: &[ClassificationVerdict]) -> Self {
        let mut counts = ViolationCounts::default();
        for v in verdicts {
            match v.violation {
                Some(ViolationCode::NoMatchingRule) => counts.no_matching_rule += 1,
                Some(ViolationCode::ExcessPermission) => counts.excess_permission += 1,
                Some(ViolationCode::MissingMfa) => counts.missing_mfa += 1,
                None => {}
            }
        }
        counts
    }

    pub fn total(&self) -> u32 {
        self.no_matching_rule + self.excess_permission + self.missing_mfa
    }
}

/// A roster passes only when every account is compliant.
pub fn compute_verdict(verdicts: &[ClassificationVerdict]) -> Verdict {
    if verdicts.iter().any(|v| !v.compliant) {
        Verdict::Fail
    } else {
        Verdict::Pass
    }
}
