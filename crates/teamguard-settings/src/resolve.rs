use crate::model::TeamguardConfigV1;
use anyhow::Context;
use std::time::Duration;
use teamguard_domain::policy::PolicyRule;
use teamguard_types::Role;

/// CLI overrides applied on top of the config file.
#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub max_attempts: Option<u32>,
    pub timeout_secs: Option<u64>,
}

/// The effective configuration consumed by the engine and the remote client.
#[derive(Clone, Debug)]
pub struct ResolvedConfig {
    /// Compiled rules, in config order.
    pub rules: Vec<PolicyRule>,
    pub max_attempts: u32,
    pub timeout: Duration,
}

pub fn resolve_config(
    cfg: TeamguardConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    let mut rules = Vec::with_capacity(cfg.rules.len());
    for (index, rc) in cfg.rules.iter().enumerate() {
        let ceiling = parse_ceiling(&rc.ceiling)
            .with_context(|| format!("rule {} ({})", index + 1, rc.pattern))?;
        let rule = PolicyRule::new(&rc.pattern, ceiling, rc.require_mfa)
            .with_context(|| format!("invalid pattern in rule {}: {}", index + 1, rc.pattern))?;
        rules.push(rule);
    }

    let client = cfg.client.unwrap_or_default();
    let max_attempts = overrides
        .max_attempts
        .or(client.max_attempts)
        .unwrap_or(3)
        .max(1);
    let timeout_secs = overrides.timeout_secs.or(client.timeout_secs).unwrap_or(30);

    Ok(ResolvedConfig {
        rules,
        max_attempts,
        timeout: Duration::from_secs(timeout_secs),
    })
}

fn parse_ceiling(v: &str) -> anyhow::Result<Role> {
    match Role::parse(v) {
        Role::Other(s) => anyhow::bail!(
            "unknown ceiling: {s} (expected collaborator|viewer|member|admin|owner)"
        ),
        role => Ok(role),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse_config_toml;

    #[test]
    fn resolves_rules_in_config_order() {
        let cfg = parse_config_toml(
            r#"
schema = "teamguard.config.v1"

[[rules]]
pattern = "ops@allowed.org"
ceiling = "admin"

[[rules]]
pattern = "*@allowed.org"
ceiling = "member"
require_mfa = true
"#,
        )
        .expect("parse");

        let resolved = resolve_config(cfg, Overrides::default()).expect("resolve");
        assert_eq!(resolved.rules.len(), 2);
        assert_eq!(resolved.rules[0].pattern(), "ops@allowed.org");
        assert_eq!(resolved.rules[1].pattern(), "*@allowed.org");
        assert!(resolved.rules[1].require_mfa());
        assert_eq!(resolved.max_attempts, 3);
        assert_eq!(resolved.timeout, Duration::from_secs(30));
    }

    #[test]
    fn empty_config_resolves_to_no_rules() {
        let resolved =
            resolve_config(TeamguardConfigV1::default(), Overrides::default()).expect("resolve");
        assert!(resolved.rules.is_empty());
    }

    #[test]
    fn invalid_ceiling_is_rejected_with_the_rule_position() {
        let cfg = parse_config_toml(
            r#"
[[rules]]
pattern = "*@allowed.org"
ceiling = "superuser"
"#,
        )
        .expect("parse");

        let err = resolve_config(cfg, Overrides::default()).expect_err("should fail");
        let msg = format!("{err:#}");
        assert!(msg.contains("unknown ceiling"), "got: {msg}");
        assert!(msg.contains("rule 1"), "got: {msg}");
    }

    #[test]
    fn invalid_glob_is_rejected() {
        let cfg = parse_config_toml(
            r#"
[[rules]]
pattern = "[oops@allowed.org"
ceiling = "member"
"#,
        )
        .expect("parse");

        let err = resolve_config(cfg, Overrides::default()).expect_err("should fail");
        assert!(format!("{err:#}").contains("invalid pattern"));
    }

    #[test]
    fn client_section_and_overrides_tune_the_remote_client() {
        let cfg = parse_config_toml(
            r#"
[client]
max_attempts = 5
timeout_secs = 10
"#,
        )
        .expect("parse");

        let resolved = resolve_config(cfg.clone(), Overrides::default()).expect("resolve");
        assert_eq!(resolved.max_attempts, 5);
        assert_eq!(resolved.timeout, Duration::from_secs(10));

        let resolved = resolve_config(
            cfg,
            Overrides {
                max_attempts: Some(1),
                timeout_secs: Some(2),
            },
        )
        .expect("resolve");
        assert_eq!(resolved.max_attempts, 1);
        assert_eq!(resolved.timeout, Duration::from_secs(2));
    }

    #[test]
    fn zero_attempts_is_clamped_to_one() {
        let resolved = resolve_config(
            TeamguardConfigV1::default(),
            Overrides {
                max_attempts: Some(0),
                timeout_secs: None,
            },
        )
        .expect("resolve");
        assert_eq!(resolved.max_attempts, 1);
    }
}
