use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use serde_json::Value;

fn codevault_bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_codevault"))
}

fn run(args: &[&str]) -> Output {
    Command::new(codevault_bin())
        .args(args)
        .env("RUST_LOG", "off")
        .output()
        .expect("run codevault")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn write_small_config(dir: &Path, data: &Path) -> PathBuf {
    let config = serde_json::json!({
        "data_path": data,
        "link": "https://example.com/canonical",
        "categories": [
            { "key": "Flask", "label": "04-40套-Flask", "tags": ["Flask", "Python"], "count": 3 },
            { "key": "微信小程序", "label": "13-45套-微信小程序", "tags": ["微信小程序"], "count": 2 }
        ]
    });
    let path = dir.join("config.json");
    fs::write(&path, serde_json::to_string_pretty(&config).unwrap()).unwrap();
    path
}

#[test]
fn generate_then_audit_then_update_links() {
    let dir = tempfile::tempdir().unwrap();
    let data = dir.path().join("out/data.json");
    let config = write_small_config(dir.path(), &data);
    let config = config.to_str().unwrap();

    let out = run(&["generate", "--config", config, "--seed", "11"]);
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));
    assert!(stdout(&out).contains("total projects: 5"));

    let text = fs::read_to_string(&data).unwrap();
    assert!(text.starts_with("[\n  {\n    \"id\": 1000000000,"));
    assert!(text.contains("微信小程序"), "non-ASCII must not be escaped");
    let records: Value = serde_json::from_str(&text).unwrap();
    assert_eq!(records.as_array().unwrap().len(), 5);

    let out = run(&["audit", "--config", config]);
    assert!(out.status.success(), "{}", stdout(&out));

    let out = run(&["update-links", "--config", config, "--link", "https://example.com/v2"]);
    assert!(out.status.success());
    let report = stdout(&out);
    assert!(report.contains("updated records: 5"), "{report}");
    assert!(report.contains("unchanged records: 0"), "{report}");

    // second pass finds nothing left to change
    let out = run(&["update-links", "--config", config, "--link", "https://example.com/v2"]);
    assert!(stdout(&out).contains("updated records: 0"));

    // the audit now disagrees with the configured link
    let out = run(&["audit", "--config", config]);
    assert!(!out.status.success());
    assert!(stdout(&out).contains("violation:"));
}

#[test]
fn same_seed_writes_identical_files() {
    let dir = tempfile::tempdir().unwrap();
    let a = dir.path().join("a.json");
    let b = dir.path().join("b.json");
    let config = write_small_config(dir.path(), &a);
    let config = config.to_str().unwrap();

    run(&["generate", "--config", config, "--seed", "99"]);
    run(&["generate", "--config", config, "--seed", "99", "--data", b.to_str().unwrap()]);
    assert_eq!(fs::read(&a).unwrap(), fs::read(&b).unwrap());
}

#[test]
fn update_links_reports_mixed_records() {
    let dir = tempfile::tempdir().unwrap();
    let data = dir.path().join("data.json");
    fs::write(&data, r#"[{"id":1,"link":"old"},{"id":2}]"#).unwrap();

    let out = run(&[
        "update-links",
        "--data",
        data.to_str().unwrap(),
        "--link",
        "new",
    ]);
    assert!(out.status.success());
    let report = stdout(&out);
    assert!(report.contains("total records: 2"));
    assert!(report.contains("updated records: 1"));
    assert!(report.contains("unchanged records: 1"));

    let written = fs::read_to_string(&data).unwrap();
    assert_eq!(
        written,
        "[\n  {\n    \"id\": 1,\n    \"link\": \"new\"\n  },\n  {\n    \"id\": 2\n  }\n]"
    );
}

#[test]
fn update_links_prints_progress_and_logs_completion() {
    let dir = tempfile::tempdir().unwrap();
    let data = dir.path().join("data.json");
    fs::write(&data, r#"[{"id":1,"link":"old"},{"id":2,"link":"new"}]"#).unwrap();

    let out = Command::new(codevault_bin())
        .args(["update-links", "--data", data.to_str().unwrap(), "--link", "new"])
        .env("RUST_LOG", "info")
        .output()
        .expect("run codevault");
    assert!(out.status.success());

    let progress = stdout(&out);
    let reading = progress.find("reading ").expect("reading step");
    let processing = progress.find("processing 2 record(s)").expect("processing step");
    let saving = progress.find("saving to ").expect("saving step");
    assert!(reading < processing && processing < saving, "{progress}");

    let log = String::from_utf8_lossy(&out.stderr);
    assert!(log.contains("links normalized"), "{log}");
}

#[test]
fn update_links_survives_missing_and_malformed_files() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.json");
    let out = run(&["update-links", "--data", missing.to_str().unwrap()]);
    assert!(out.status.success());
    assert!(stdout(&out).contains("file not found"));
    assert!(!missing.exists());

    let broken = dir.path().join("broken.json");
    fs::write(&broken, "[{\"id\": 1,").unwrap();
    let out = run(&["update-links", "--data", broken.to_str().unwrap()]);
    assert!(out.status.success());
    assert!(stdout(&out).contains("malformed JSON"));
    assert_eq!(fs::read_to_string(&broken).unwrap(), "[{\"id\": 1,");

    let object = dir.path().join("object.json");
    fs::write(&object, r#"{"link": "old"}"#).unwrap();
    let out = run(&["update-links", "--data", object.to_str().unwrap()]);
    assert!(out.status.success());
    assert!(stdout(&out).contains("expected a JSON array"));
}

#[test]
fn generate_fails_loudly_on_bad_config() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("config.json");
    fs::write(&config, r#"{ "templates": [] }"#).unwrap();
    let out = run(&["generate", "--config", config.to_str().unwrap()]);
    assert!(!out.status.success());
}

#[test]
fn search_and_categories_read_the_catalog() {
    let dir = tempfile::tempdir().unwrap();
    let data = dir.path().join("data.json");
    let config = write_small_config(dir.path(), &data);
    let config = config.to_str().unwrap();
    run(&["generate", "--config", config, "--seed", "5"]);

    let out = run(&["categories", "--config", config]);
    assert_eq!(stdout(&out), "Flask\n微信小程序\n");

    let out = run(&["search", "FLASK00", "--config", config, "--json"]);
    assert!(out.status.success());
    let hits: Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(hits.as_array().unwrap().len(), 3);

    let out = run(&["search", "--category", "微信小程序", "--config", config, "--json"]);
    let hits: Value = serde_json::from_slice(&out.stdout).unwrap();
    assert!(hits
        .as_array()
        .unwrap()
        .iter()
        .all(|r| r["short_category"] == "微信小程序"));
}
