//! CLI entry point for teamguard.
//!
//! This module is intentionally thin: it handles argument parsing,
//! environment fallback, I/O, and exit codes. All business logic lives in
//! the `teamguard-app` crate.

use anyhow::Context;
use camino::Utf8PathBuf;
use clap::{Parser, Subcommand};
use teamguard_app::{
    emails_report, membership_report, report_exit_code, run_audit, run_emails, run_explain,
    run_revoke, run_verify, runtime_error_report, serialize_report, to_renderable, AuditInput,
    ExplainOutput, ReportTarget,
};
use teamguard_remote::{ClientConfig, HerokuClient, DEFAULT_API_URL};
use teamguard_render::{render_markdown, render_text};
use teamguard_settings::Overrides;
use teamguard_types::TeamguardReport;
use time::OffsetDateTime;

#[derive(Parser, Debug)]
#[command(
    name = "teamguard",
    version,
    about = "Membership policy audit and reconciliation for Heroku teams"
)]
struct Cli {
    /// API token. Falls back to HEROKU_TOKEN.
    #[arg(long, env = "HEROKU_TOKEN", hide_env_values = true, global = true)]
    token: Option<String>,

    /// Team name or enterprise-account identifier. Falls back to HEROKU_TEAM.
    #[arg(long, env = "HEROKU_TEAM", global = true)]
    team: Option<String>,

    /// Treat the target as an enterprise account.
    #[arg(long, global = true)]
    enterprise: bool,

    /// Path to teamguard config TOML.
    #[arg(long, default_value = "teamguard.toml", global = true)]
    config: Utf8PathBuf,

    /// Base URL of the membership API.
    #[arg(long, default_value = DEFAULT_API_URL, hide = true, global = true)]
    api_url: String,

    /// Override the retry ceiling for transient failures.
    #[arg(long, global = true)]
    max_attempts: Option<u32>,

    /// Override the per-request timeout in seconds.
    #[arg(long, global = true)]
    timeout_secs: Option<u64>,

    /// Where to write the JSON report artifact.
    #[arg(long, global = true)]
    report_out: Option<Utf8PathBuf>,

    /// Write a Markdown report alongside the JSON.
    #[arg(long, global = true)]
    write_markdown: bool,

    /// Where to write the Markdown report (if enabled).
    #[arg(long, default_value = "artifacts/teamguard/report.md", global = true)]
    markdown_out: Utf8PathBuf,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List accounts violating policy (all accounts with --all).
    List {
        /// Include compliant accounts in the output.
        #[arg(long)]
        all: bool,
    },

    /// Print the email roster, comma separated.
    Emails,

    /// Check whether each email is a member. Never mutates anything.
    Verify {
        /// Email addresses to check.
        #[arg(required = true)]
        emails: Vec<String>,
    },

    /// Revoke membership for each email. Resolves each account first.
    Revoke {
        /// Email addresses to revoke.
        #[arg(required = true)]
        emails: Vec<String>,
    },

    /// Explain a violation code with remediation guidance.
    Explain {
        /// The code to explain (e.g. "excess_permission").
        identifier: String,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let action = match &cli.cmd {
        Commands::List { .. } => "list",
        Commands::Emails => "emails",
        Commands::Verify { .. } => "verify",
        Commands::Revoke { .. } => "revoke",
        Commands::Explain { identifier } => return cmd_explain(identifier),
    };

    let target = ReportTarget {
        scope: if cli.enterprise {
            "enterprise".to_string()
        } else {
            "team".to_string()
        },
        target: cli.team.clone().unwrap_or_default(),
    };

    match run_action(&cli, action, &target) {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
            Ok(())
        }
        Err(err) => {
            let report = runtime_error_report(action, &target, &format!("{err:#}"));
            if let Some(report_out) = &cli.report_out
                && let Err(write_err) = write_report_file(report_out, &report)
            {
                eprintln!("teamguard: failed to write report artifact: {write_err:#}");
            }
            eprintln!("teamguard error: {err:#}");
            std::process::exit(1);
        }
    }
}

fn run_action(cli: &Cli, action: &str, target: &ReportTarget) -> anyhow::Result<i32> {
    let token = cli
        .token
        .clone()
        .context("missing API token: pass --token or set HEROKU_TOKEN")?;
    let team = cli
        .team
        .clone()
        .context("missing target: pass --team or set HEROKU_TEAM")?;

    // Missing config file is allowed; the empty rule set is fail-closed.
    let cfg_text = std::fs::read_to_string(&cli.config).unwrap_or_default();
    let cfg = if cfg_text.trim().is_empty() {
        teamguard_settings::TeamguardConfigV1::default()
    } else {
        teamguard_settings::parse_config_toml(&cfg_text)
            .with_context(|| format!("parse config: {}", cli.config))?
    };
    let overrides = Overrides {
        max_attempts: cli.max_attempts,
        timeout_secs: cli.timeout_secs,
    };
    let resolved =
        teamguard_settings::resolve_config(cfg, overrides).context("resolve config")?;

    let mut client_cfg = ClientConfig::new(token, team, cli.enterprise);
    client_cfg.api_url = cli.api_url.clone();
    client_cfg.timeout = resolved.timeout;
    client_cfg.max_attempts = resolved.max_attempts;
    let client = HerokuClient::new(client_cfg).context("build HTTP client")?;

    // The emails action prints the address list itself; everything else
    // prints the text rendering of its report.
    let (report, text) = match &cli.cmd {
        Commands::List { all } => {
            let report = run_audit(
                &client,
                AuditInput {
                    rules: &resolved.rules,
                    include_compliant: *all,
                    target,
                },
            )?;
            let text = render_text(&to_renderable(&report));
            (report, text)
        }
        Commands::Emails => {
            let started_at = OffsetDateTime::now_utc();
            let emails = run_emails(&client).context("collect roster emails")?;
            let report = emails_report(target, started_at, emails.len() as u32);
            (report, format!("{}\n", emails.join(", ")))
        }
        Commands::Verify { emails } => {
            let started_at = OffsetDateTime::now_utc();
            let outcomes = run_verify(&client, emails)?;
            let report = membership_report(action, target, started_at, outcomes);
            let text = render_text(&to_renderable(&report));
            (report, text)
        }
        Commands::Revoke { emails } => {
            let started_at = OffsetDateTime::now_utc();
            let outcomes = run_revoke(&client, emails)?;
            let report = membership_report(action, target, started_at, outcomes);
            let text = render_text(&to_renderable(&report));
            (report, text)
        }
        Commands::Explain { .. } => unreachable!("handled before dispatch"),
    };

    if let Some(report_out) = &cli.report_out {
        write_report_file(report_out, &report).context("write report json")?;
    }
    if cli.write_markdown {
        let md = render_markdown(&to_renderable(&report));
        write_text_file(&cli.markdown_out, &md).context("write markdown")?;
    }

    print!("{text}");

    Ok(report_exit_code(&report))
}

fn cmd_explain(identifier: &str) -> anyhow::Result<()> {
    match run_explain(identifier) {
        ExplainOutput::Found(exp) => {
            print!("{}", teamguard_app::format_explanation(&exp));
            Ok(())
        }
        ExplainOutput::NotFound {
            identifier,
            available_codes,
        } => {
            eprint!(
                "{}",
                teamguard_app::format_not_found(&identifier, available_codes)
            );
            std::process::exit(1);
        }
    }
}

fn write_report_file(path: &camino::Utf8Path, report: &TeamguardReport) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).with_context(|| format!("create directory: {}", parent))?;
    }
    let data = serialize_report(report)?;
    std::fs::write(path, data).with_context(|| format!("write report: {}", path))?;
    Ok(())
}

fn write_text_file(path: &camino::Utf8Path, text: &str) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).with_context(|| format!("create directory: {}", parent))?;
    }
    std::fs::write(path, text).with_context(|| format!("write text: {}", path))?;
    Ok(())
}
