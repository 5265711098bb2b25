// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use std::fs;

use assert_cmd::Command;
use tempfile::TempDir;

/// Runs the CLI in an empty directory with a clean environment.
fn randgen_deploy(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("randgen-deploy").unwrap();
    cmd.env_clear().current_dir(dir.path());
    cmd
}

fn stdout(cmd: &mut Command) -> String {
    let output = cmd.assert().success().get_output().stdout.clone();
    String::from_utf8(output).unwrap()
}

fn stderr_of_failure(cmd: &mut Command) -> String {
    let output = cmd.assert().failure().get_output().stderr.clone();
    String::from_utf8(output).unwrap()
}

#[test]
fn params_from_environment() {
    let dir = tempfile::tempdir().unwrap();
    let out = stdout(
        randgen_deploy(&dir)
            .env("SEED", "123")
            .env("OWNER", "0xABC")
            .arg("params"),
    );
    assert_eq!(out, "SEED: 123\nOWNER: 0xABC\n");
}

#[test]
fn params_unset() {
    let dir = tempfile::tempdir().unwrap();
    let out = stdout(randgen_deploy(&dir).env("OWNER", "0xABC").arg("params"));
    assert_eq!(out, "SEED: <unset>\nOWNER: 0xABC\n");
}

#[test]
fn params_from_dotenv_in_current_dir() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join(".env"), "SEED=42\nOWNER=0xdef\n").unwrap();
    let out = stdout(randgen_deploy(&dir).arg("params"));
    assert_eq!(out, "SEED: 42\nOWNER: 0xdef\n");
}

#[test]
fn environment_wins_over_env_file() {
    let dir = tempfile::tempdir().unwrap();
    let env_file = dir.path().join("deploy.env");
    fs::write(&env_file, "SEED=42\nOWNER=0xdef\n").unwrap();
    let out = stdout(
        randgen_deploy(&dir)
            .env("SEED", "7")
            .arg("--env-file")
            .arg(&env_file)
            .arg("params"),
    );
    assert_eq!(out, "SEED: 7\nOWNER: 0xdef\n");
}

#[test]
fn missing_env_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let err = stderr_of_failure(randgen_deploy(&dir).args(["--env-file", "nope.env", "params"]));
    assert!(err.contains("failed to load env file nope.env"), "{err}");
}

#[test]
fn deploy_reports_unreachable_endpoint() {
    let dir = tempfile::tempdir().unwrap();
    let err = stderr_of_failure(randgen_deploy(&dir).env("SEED", "1").args([
        "deploy",
        "--endpoint",
        "http://127.0.0.1:1",
        "--private-key",
        "0x0000000000000000000000000000000000000000000000000000000000000001",
    ]));
    assert!(err.contains("could not reach http://127.0.0.1:1"), "{err}");
}

#[test]
fn deploy_rejects_bad_max_fee() {
    let dir = tempfile::tempdir().unwrap();
    let err = stderr_of_failure(
        randgen_deploy(&dir).args(["deploy", "--max-fee-per-gas-gwei=-3"]),
    );
    assert!(err.contains("Max fee per gas must be non-negative"), "{err}");
}
