//! Config parsing and policy rule resolution.
//!
//! This crate is intentionally IO-free: it parses and resolves configuration
//! provided as strings. Policy rules are organizational configuration, never
//! code; nothing here hard-codes a pattern or a ceiling.

#![forbid(unsafe_code)]

mod model;
mod resolve;

pub use model::{ClientSection, RuleConfig, TeamguardConfigV1};
pub use resolve::{Overrides, ResolvedConfig};

/// Parse `teamguard.toml` (or equivalent) into a typed model.
pub fn parse_config_toml(input: &str) -> anyhow::Result<TeamguardConfigV1> {
    let cfg: TeamguardConfigV1 = toml::from_str(input)?;
    Ok(cfg)
}

/// Resolve the effective rule set and client tuning (config + overrides).
pub fn resolve_config(cfg: TeamguardConfigV1, overrides: Overrides) -> anyhow::Result<ResolvedConfig> {
    resolve::resolve_config(cfg, overrides)
}
