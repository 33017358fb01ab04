//! Integration tests for the volgrid binary.

use assert_cmd::Command;
use predicates::prelude::*;

fn dataset_csv(pairs: &[&str]) -> String {
    let deltas = ["10P", "25P", "ATM", "25C", "10C"];
    let metrics = ["Carry", "Pctl 6m", "Pctl 1y", "Pctl 2y", "Pctl 5y", "Pctl all"];

    let mut header0 = vec!["CCY"];
    let mut header1 = vec![""];
    for cat in ["Vol", "Vol 4wk-chg", "Vol Pctl all"] {
        for delta in deltas {
            header0.push(cat);
            header1.push(delta);
        }
    }
    for metric in metrics {
        header0.push("Carry");
        header1.push(metric);
    }

    let mut out = format!("{}\n{}\n", header0.join(","), header1.join(","));
    for (p, pair) in pairs.iter().enumerate() {
        for t in 0..5 {
            let mut cells = vec![(*pair).to_string()];
            for c in 0..21 {
                cells.push(format!("{:.2}", (p * 11 + t * 3 + c) as f64 / 4.0));
            }
            out.push_str(&cells.join(","));
            out.push('\n');
        }
    }
    out
}

fn write_dataset(dir: &std::path::Path, pairs: &[&str]) -> std::path::PathBuf {
    let path = dir.join("vol_data.csv");
    std::fs::write(&path, dataset_csv(pairs)).unwrap();
    path
}

#[test]
fn grids_generates_composite_per_valid_pair() {
    let dir = tempfile::tempdir().unwrap();
    let data = write_dataset(dir.path(), &["EUR/USD", "GBP/JPY"]);

    Command::cargo_bin("volgrid")
        .unwrap()
        .args(["grids", "--data"])
        .arg(&data)
        .arg("--out-dir")
        .arg(dir.path())
        .args(["eur/usd", "xyz"])
        .assert()
        .success()
        .stderr(predicate::str::contains("XYZ"));

    assert!(dir.path().join("EUR|USD.png").exists());
    assert!(!dir.path().join("GBP|JPY.png").exists());
}

#[test]
fn grids_all_generates_every_pair() {
    let dir = tempfile::tempdir().unwrap();
    let data = write_dataset(dir.path(), &["EUR/USD", "GBP/JPY"]);

    Command::cargo_bin("volgrid")
        .unwrap()
        .args(["grids", "--data"])
        .arg(&data)
        .arg("--out-dir")
        .arg(dir.path())
        .arg("ALL")
        .assert()
        .success();

    assert!(dir.path().join("EUR|USD.png").exists());
    assert!(dir.path().join("GBP|JPY.png").exists());
}

#[test]
fn grids_without_ccys_fails() {
    let dir = tempfile::tempdir().unwrap();
    let data = write_dataset(dir.path(), &["EUR/USD"]);

    Command::cargo_bin("volgrid")
        .unwrap()
        .args(["grids", "--data"])
        .arg(&data)
        .assert()
        .failure();
}

#[test]
fn grids_with_only_unknown_ccys_fails() {
    let dir = tempfile::tempdir().unwrap();
    let data = write_dataset(dir.path(), &["EUR/USD"]);

    Command::cargo_bin("volgrid")
        .unwrap()
        .args(["grids", "--data"])
        .arg(&data)
        .arg("--out-dir")
        .arg(dir.path())
        .args(["xyz", "aaa/bbb"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No valid currency pairs"));
}

#[test]
fn carry_defaults_to_g10_pairs() {
    let dir = tempfile::tempdir().unwrap();
    let data = write_dataset(dir.path(), &["EUR/USD", "EUR/TRY", "JPY/NOK"]);

    Command::cargo_bin("volgrid")
        .unwrap()
        .args(["carry", "--data"])
        .arg(&data)
        .arg("--out-dir")
        .arg(dir.path())
        .assert()
        .success();

    assert!(dir.path().join("EUR|USD_carry.png").exists());
    assert!(dir.path().join("JPY|NOK_carry.png").exists());
    assert!(!dir.path().join("EUR|TRY_carry.png").exists());
}

#[test]
fn list_outputs_pairs_as_json() {
    let dir = tempfile::tempdir().unwrap();
    let data = write_dataset(dir.path(), &["EUR/USD", "EUR/TRY"]);

    Command::cargo_bin("volgrid")
        .unwrap()
        .args(["list", "--format", "json", "--data"])
        .arg(&data)
        .assert()
        .success()
        .stdout(predicate::str::contains("EUR/USD").and(predicate::str::contains("EUR/TRY")));
}

#[test]
fn list_g10_filters_pairs() {
    let dir = tempfile::tempdir().unwrap();
    let data = write_dataset(dir.path(), &["EUR/USD", "EUR/TRY"]);

    Command::cargo_bin("volgrid")
        .unwrap()
        .args(["list", "--g10", "--format", "json", "--data"])
        .arg(&data)
        .assert()
        .success()
        .stdout(predicate::str::contains("EUR/USD").and(predicate::str::contains("EUR/TRY").not()));
}

#[test]
fn missing_dataset_fails_with_diagnostic() {
    let dir = tempfile::tempdir().unwrap();

    Command::cargo_bin("volgrid")
        .unwrap()
        .args(["grids", "--data"])
        .arg(dir.path().join("absent.csv"))
        .arg("eur/usd")
        .assert()
        .failure()
        .stderr(predicate::str::contains("absent.csv"));
}
