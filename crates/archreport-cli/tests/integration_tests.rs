//! Integration tests for archreport-cli.

use std::fs;

use assert_cmd::Command;
use assert_cmd::cargo;
use predicates::prelude::*;
use tempfile::TempDir;

/// A command isolated from the user's config, bookmarks and environment.
fn archreport(temp: &TempDir) -> Command {
    let mut cmd = cargo::cargo_bin_cmd!("archreport");
    cmd.current_dir(temp.path())
        .env("HOME", temp.path())
        .env("XDG_CONFIG_HOME", temp.path().join("config"))
        .env("XDG_DATA_HOME", temp.path().join("data"))
        .env_remove("RUST_LOG")
        .env_remove("ARCHREPORT_STUDIO__DROP_POLICY")
        .env_remove("ARCHREPORT_OUTPUT__FORMAT")
        .arg("--bookmarks")
        .arg(temp.path().join("bookmarks.json"));
    cmd
}

fn json_stdout(cmd: &mut Command) -> serde_json::Value {
    let out = cmd.assert().success().get_output().stdout.clone();
    serde_json::from_slice(&out).expect("stdout is JSON")
}

// ── basics ────────────────────────────────────────────────────────────────────

#[test]
fn test_help_flag() {
    let temp = TempDir::new().unwrap();
    archreport(&temp)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("studio"))
        .stdout(predicate::str::contains("generate"));
}

#[test]
fn test_version_flag() {
    let temp = TempDir::new().unwrap();
    archreport(&temp)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_shell_completions() {
    let temp = TempDir::new().unwrap();
    archreport(&temp)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("complete"));
}

#[test]
fn test_quiet_flag() {
    let temp = TempDir::new().unwrap();
    archreport(&temp)
        .args(["-q", "report", "list"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

// ── report / patterns / resources ─────────────────────────────────────────────

#[test]
fn test_report_list() {
    let temp = TempDir::new().unwrap();
    archreport(&temp)
        .args(["report", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("service-objects"))
        .stdout(predicate::str::contains("hexagonal-architecture"));
}

#[test]
fn test_report_toc_keeps_report_order() {
    let temp = TempDir::new().unwrap();
    let out = archreport(&temp)
        .args(["report", "toc"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let text = String::from_utf8(out).unwrap();
    let conclusion = text.find("conclusion-product-vs-data").unwrap();
    let recommendations = text.find("recommendations").unwrap();
    assert!(conclusion < recommendations);
}

#[test]
fn test_report_show_unknown_section() {
    let temp = TempDir::new().unwrap();
    archreport(&temp)
        .args(["report", "show", "mvc"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("archreport report list"));
}

#[test]
fn test_report_bookmark_then_list() {
    let temp = TempDir::new().unwrap();
    archreport(&temp)
        .args(["report", "bookmark", "testing", "--note", "compare later"])
        .assert()
        .success();

    archreport(&temp)
        .args(["bookmarks", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("testing"));

    let raw = fs::read_to_string(temp.path().join("bookmarks.json")).unwrap();
    assert!(raw.contains("\"items\""));
    assert!(raw.contains("compare later"));
}

#[test]
fn test_resources_filter_by_category() {
    let temp = TempDir::new().unwrap();
    archreport(&temp)
        .args(["resources", "--category", "tooling"])
        .assert()
        .success()
        .stdout(predicate::str::contains("rspec-tool"))
        .stdout(predicate::str::contains("shopify-case-study").not());
}

#[test]
fn test_patterns_show_unknown() {
    let temp = TempDir::new().unwrap();
    archreport(&temp)
        .args(["patterns", "show", "singleton"])
        .assert()
        .code(3);
}

// ── studio ────────────────────────────────────────────────────────────────────

#[test]
fn test_studio_adapters() {
    let temp = TempDir::new().unwrap();
    archreport(&temp)
        .args(["studio", "adapters"])
        .assert()
        .success()
        .stdout(predicate::str::contains("adapter-3"))
        .stdout(predicate::str::contains("Background Job"));
}

#[test]
fn test_studio_play_places_adapter() {
    let temp = TempDir::new().unwrap();
    let doc = json_stdout(archreport(&temp).args([
        "--output-format",
        "json",
        "studio",
        "play",
        "--drop",
        "adapter-3=port-4",
    ]));

    let entries = doc["arrangement"].as_array().unwrap();
    assert_eq!(entries.len(), 6);
    let port4 = entries.iter().find(|e| e["port"] == "port-4").unwrap();
    assert_eq!(port4["adapter"], "Background Job");
    assert_eq!(doc["available"].as_array().unwrap().len(), 4);
    assert!(doc["holding"].is_null());
}

#[test]
fn test_studio_play_drop_outside_changes_nothing() {
    let temp = TempDir::new().unwrap();
    let doc = json_stdout(archreport(&temp).args([
        "--output-format",
        "json",
        "studio",
        "play",
        "--drop",
        "adapter-1=outside",
    ]));

    assert_eq!(doc["available"].as_array().unwrap().len(), 5);
    assert_eq!(doc["transitions"][2]["transition"], "cancelled");
}

#[test]
fn test_studio_play_pick_and_hover_keeps_holding() {
    let temp = TempDir::new().unwrap();
    let doc = json_stdout(archreport(&temp).args([
        "--output-format",
        "json",
        "studio",
        "play",
        "--pick",
        "adapter-2",
        "--hover",
        "port-3",
    ]));

    assert_eq!(doc["holding"], "adapter-2");
    assert_eq!(doc["transitions"][0]["transition"], "picked");
    assert_eq!(doc["transitions"][1]["transition"], "hovered");
    assert_eq!(doc["transitions"][1]["port"], "port-3");

    let inspector = &doc["inspector"];
    assert_eq!(inspector["view"], "details");
    assert_eq!(inspector["title"], "Payment Gateway");
    assert_eq!(inspector["role"], "driven");

    // Held, not placed: the catalog and the ports are unchanged.
    assert_eq!(doc["available"].as_array().unwrap().len(), 5);
    let entries = doc["arrangement"].as_array().unwrap();
    assert!(entries.iter().all(|e| e["adapter"].is_null()));
}

#[test]
fn test_studio_play_reject_policy_keeps_occupant() {
    let temp = TempDir::new().unwrap();
    let doc = json_stdout(archreport(&temp).args([
        "--output-format",
        "json",
        "studio",
        "play",
        "--policy",
        "reject",
        "--drop",
        "adapter-1=port-1",
        "--drop",
        "adapter-2=port-1",
    ]));

    let port1 = &doc["arrangement"][0];
    assert_eq!(port1["adapter"], "HTTP Controller");
    assert!(
        doc["available"]
            .as_array()
            .unwrap()
            .iter()
            .any(|id| id == "adapter-2")
    );
}

#[test]
fn test_studio_play_policy_from_env() {
    let temp = TempDir::new().unwrap();
    archreport(&temp)
        .env("ARCHREPORT_STUDIO__DROP_POLICY", "reject")
        .args([
            "studio",
            "play",
            "--drop",
            "adapter-1=port-1",
            "--drop",
            "adapter-2=port-1",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("policy: reject"))
        .stdout(predicate::str::contains("port-1 is taken by adapter-1"));
}

#[test]
fn test_studio_play_save_creates_bookmark() {
    let temp = TempDir::new().unwrap();
    archreport(&temp)
        .args(["studio", "play", "--drop", "adapter-2=port-2", "--save"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved"));

    archreport(&temp)
        .args(["bookmarks", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Hexagonal Architecture Arrangement"));
}

#[test]
fn test_studio_play_unknown_port_is_usage_error() {
    let temp = TempDir::new().unwrap();
    archreport(&temp)
        .args(["studio", "play", "--drop", "adapter-1=port-9"])
        .assert()
        .code(2);
}

#[test]
fn test_studio_layout_hit() {
    let temp = TempDir::new().unwrap();
    archreport(&temp)
        .args(["studio", "layout", "--at", "160,0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("is over port-1"));
}

#[test]
fn test_studio_custom_catalog() {
    let temp = TempDir::new().unwrap();
    let catalog = temp.path().join("catalog.toml");
    fs::write(
        &catalog,
        r#"
[[adapters]]
id = "adapter-cli"
title = "CLI Runner"
role = "driving"
description = "Drives use cases from a terminal."
details = "Parses flags and calls a use case."
"#,
    )
    .unwrap();

    archreport(&temp)
        .args(["studio", "adapters", "--catalog"])
        .arg(&catalog)
        .assert()
        .success()
        .stdout(predicate::str::contains("CLI Runner"))
        .stdout(predicate::str::contains("Background Job").not());
}

// ── generate ──────────────────────────────────────────────────────────────────

#[test]
fn test_generate_default_service() {
    let temp = TempDir::new().unwrap();
    archreport(&temp)
        .arg("generate")
        .assert()
        .success()
        .stdout(predicate::str::contains("ActiveRecord::Base.transaction do"))
        .stdout(predicate::str::contains("deliver_later"));
}

#[test]
fn test_generate_without_transaction() {
    let temp = TempDir::new().unwrap();
    archreport(&temp)
        .args(["gen", "--class-name", "CancelPlan", "--no-transaction"])
        .assert()
        .success()
        .stdout(predicate::str::contains("CancelPlan"))
        .stdout(predicate::str::contains("ActiveRecord::Base.transaction").not());
}

#[test]
fn test_generate_invalid_class_name() {
    let temp = TempDir::new().unwrap();
    archreport(&temp)
        .args(["generate", "--class-name", "lowercase"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Error:"));
}

// ── config / init ─────────────────────────────────────────────────────────────

#[test]
fn test_config_get_unknown_key() {
    let temp = TempDir::new().unwrap();
    archreport(&temp)
        .args(["config", "get", "studio.nope"])
        .assert()
        .code(4);
}

#[test]
fn test_config_get_reads_env_override() {
    let temp = TempDir::new().unwrap();
    archreport(&temp)
        .env("ARCHREPORT_STUDIO__DROP_POLICY", "reject")
        .args(["config", "get", "studio.drop_policy"])
        .assert()
        .success()
        .stdout(predicate::str::contains("reject"));
}

#[test]
fn test_init_local_keeps_existing_file() {
    let temp = TempDir::new().unwrap();
    archreport(&temp).args(["init", "--local"]).assert().success();
    assert!(temp.path().join(".archreport.toml").exists());

    archreport(&temp)
        .args(["init", "--local"])
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));

    archreport(&temp)
        .args(["init", "--local", "--force"])
        .assert()
        .success();
}

#[test]
fn test_missing_config_file_exits_with_config_code() {
    let temp = TempDir::new().unwrap();
    archreport(&temp)
        .arg("--config")
        .arg(temp.path().join("absent.toml"))
        .args(["report", "list"])
        .assert()
        .code(4);
}
