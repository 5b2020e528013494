//! End-to-end tests for the endereco binary.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const AUGUSTA: &str = "Rua Augusta, 1500 - Consolação, São Paulo - SP, 01304-001, Brasil";

/// Binary with the user configuration directory pointed at `home`.
fn endereco(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("endereco").unwrap();
    cmd.env("XDG_CONFIG_HOME", home).env("HOME", home);
    cmd
}

#[test]
fn test_parse_prints_record() {
    let home = TempDir::new().unwrap();

    endereco(home.path())
        .args(["parse", AUGUSTA])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""street": "Rua Augusta""#))
        .stdout(predicate::str::contains(r#""neighborhood": "Consolação""#))
        .stdout(predicate::str::contains(r#""state": "São Paulo""#))
        .stdout(predicate::str::contains(r#""extra": "Extra não encontrado""#));
}

#[test]
fn test_parse_explain_lists_missing_fields() {
    let home = TempDir::new().unwrap();

    let output = endereco(home.path())
        .args(["parse", "--explain", "--compact", "Rua sem número"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["postalCode"], "CEP não encontrado");
    let missing = value["missing"].as_array().unwrap();
    assert!(missing.iter().any(|f| f == "postalCode"));
}

#[test]
fn test_parse_explain_shows_repaired_input() {
    let home = TempDir::new().unwrap();

    let output = endereco(home.path())
        .args(["parse", "--explain", "--compact", "Rua S\u{c3}\u{a3}o Bento, 10"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["input"], "Rua São Bento, 10");
    assert_eq!(value["street"], "Rua São Bento");
    assert_eq!(value["number"], "10");
}

#[test]
fn test_process_csv_without_enrichment() {
    let home = TempDir::new().unwrap();
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("enderecos.csv");
    let output = dir.path().join("out.json");

    fs::write(
        &input,
        format!("Endereços,\nid,endereco\n1,\"{}\"\n2,\n3,\"Rua Bahia, 12\"\n", AUGUSTA),
    )
    .unwrap();

    endereco(home.path())
        .args(["process", "--no-enrich", "--output"])
        .arg(&output)
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("Processed 2 addresses"));

    let records: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
    let records = records.as_array().unwrap();

    assert_eq!(records.len(), 2);
    assert_eq!(records[0]["city"], "São Paulo");
    assert_eq!(records[0]["postalCode"], "01304-001");
    assert_eq!(records[1]["street"], "Rua Bahia");
    assert_eq!(records[1]["number"], "12");
    assert_eq!(records[1]["city"], "Cidade não encontrada");
}

#[test]
fn test_process_csv_format_to_stdout() {
    let home = TempDir::new().unwrap();
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("enderecos.csv");
    fs::write(&input, format!("x\ny\n1,\"{}\"\n", AUGUSTA)).unwrap();

    endereco(home.path())
        .args(["process", "--no-enrich", "--format", "csv", "--output", "-"])
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "street,number,neighborhood,postalCode,city,state,country,extra",
        ));
}

#[test]
fn test_process_missing_input() {
    let home = TempDir::new().unwrap();

    endereco(home.path())
        .args(["process", "--no-enrich", "does-not-exist.xlsx"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Input file not found"));
}

#[test]
fn test_config_init_set_get() {
    let home = TempDir::new().unwrap();
    let config = home.path().join("custom.json");

    endereco(home.path())
        .arg("--config")
        .arg(&config)
        .args(["config", "init"])
        .assert()
        .success();
    assert!(config.exists());

    endereco(home.path())
        .arg("--config")
        .arg(&config)
        .args(["config", "set", "enrichment.max_concurrency", "3"])
        .assert()
        .success();

    endereco(home.path())
        .arg("--config")
        .arg(&config)
        .args(["config", "get", "enrichment.max_concurrency"])
        .assert()
        .success()
        .stdout(predicate::str::diff("3\n"));

    endereco(home.path())
        .arg("--config")
        .arg(&config)
        .args(["config", "set", "enrichment.max_concurrency", "0"])
        .assert()
        .failure();
}

#[test]
fn test_config_path_reports_missing_file() {
    let home = TempDir::new().unwrap();

    endereco(home.path())
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("not created"));
}
