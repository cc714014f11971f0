use assert_cmd::Command;
use predicates::prelude::*;

/// Helper to get a Command for the teamguard binary.
#[allow(deprecated)]
fn teamguard_cmd() -> Command {
    Command::cargo_bin("teamguard").unwrap()
}

#[test]
fn help_works() {
    teamguard_cmd().arg("--help").assert().success();
}

#[test]
fn help_lists_all_subcommands() {
    teamguard_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("list")
                .and(predicate::str::contains("emails"))
                .and(predicate::str::contains("verify"))
                .and(predicate::str::contains("revoke"))
                .and(predicate::str::contains("explain")),
        );
}

#[test]
fn version_works() {
    teamguard_cmd().arg("--version").assert().success();
}

#[test]
fn verify_requires_at_least_one_email() {
    teamguard_cmd()
        .arg("verify")
        .env_remove("HEROKU_TOKEN")
        .env_remove("HEROKU_TEAM")
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"));
}
