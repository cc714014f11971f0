use globset::{GlobBuilder, GlobMatcher};
use teamguard_types::Role;

/// One policy rule: an email pattern paired with a permission ceiling.
///
/// Rules are evaluated in the order supplied; the first rule whose pattern
/// matches an account's email governs the verdict. Patterns use glob
/// semantics over the full email address and match case-insensitively
/// (`*@allowed.org`, `heroku-*@allowed.org`, `exact@other.com`).
#[derive(Clone, Debug)]
pub struct PolicyRule {
    pattern: String,
    ceiling: Role,
    require_mfa: bool,
    matcher: GlobMatcher,
}

impl PolicyRule {
    /// Compile a rule. Fails on an invalid glob, so a bad pattern is caught
    /// at configuration time rather than mid-audit.
    pub fn new(pattern: &str, ceiling: Role, require_mfa: bool) -> Result<Self, globset::Error> {
        let matcher = GlobBuilder::new(pattern)
            .case_insensitive(true)
            .build()?
            .compile_matcher();
        Ok(Self {
            pattern: pattern.to_string(),
            ceiling,
            require_mfa,
            matcher,
        })
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn ceiling(&self) -> &Role {
        &self.ceiling
    }

    pub fn require_mfa(&self) -> bool {
        self.require_mfa
    }

    pub fn matches(&self, email: &str) -> bool {
        self.matcher.is_match(email)
    }
}
