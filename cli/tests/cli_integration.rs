use std::path::{Path, PathBuf};
use std::process::Command;

fn ontodoc_bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_ontodoc"))
}

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("lib")
        .join("fixtures")
        .join(name)
}

fn run(args: &[&str], dir: &Path) -> (bool, String) {
    let out = Command::new(ontodoc_bin())
        .args(args)
        .current_dir(dir)
        .env_remove("ONTODOC_LOG")
        .env_remove("RUST_LOG")
        .output()
        .expect("run ontodoc");
    (out.status.success(), String::from_utf8_lossy(&out.stdout).to_string())
}

#[test]
fn show_record_as_json() {
    let dir = tempfile::tempdir().unwrap();
    let record = fixture("full.properties");
    let (ok, stdout) = run(
        &["show", "--record", record.to_str().unwrap(), "--json"],
        dir.path(),
    );
    assert!(ok);
    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(json["title"], "Example Ontology");
    assert_eq!(json["creators"].as_array().unwrap().len(), 2);
    assert_eq!(json["include_abstract"], true);
}

#[test]
fn ontology_and_overrides_replace_record() {
    let dir = tempfile::tempdir().unwrap();
    let record = fixture("full.properties");
    let ontology = fixture("example.ttl");
    let (ok, stdout) = run(
        &[
            "show",
            "--record",
            record.to_str().unwrap(),
            "--ontology",
            ontology.to_str().unwrap(),
            "--revision",
            "3.0.0",
            "--no-abstract",
            "--json",
        ],
        dir.path(),
    );
    assert!(ok);
    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(json["title"], "Example Ontology");
    assert_eq!(json["revision"], "3.0.0");
    assert_eq!(json["release_date"], "2021-06-01");
    assert_eq!(json["include_abstract"], false);
    assert_eq!(json["from_file"], true);
    assert!(json["extended_ontologies"].as_array().unwrap().is_empty());
}

#[test]
fn ambiguous_ontology_fails() {
    let dir = tempfile::tempdir().unwrap();
    let ontology = fixture("two_ontologies.ttl");
    let (ok, _) = run(&["show", "--ontology", ontology.to_str().unwrap()], dir.path());
    assert!(!ok);
}

#[test]
fn missing_record_prints_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nothing.properties");
    let (ok, stdout) = run(&["show", "--record", missing.to_str().unwrap()], dir.path());
    assert!(ok);
    assert!(stdout.contains("Configuration:"));
    assert!(stdout.contains("Title: <none>"));
}

#[test]
fn check_url_classifies_values() {
    let dir = tempfile::tempdir().unwrap();
    let (ok, stdout) = run(
        &["check-url", "http://example.org/onto", "Alice Smith"],
        dir.path(),
    );
    assert!(ok);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines, vec!["http://example.org/onto\turl", "Alice Smith\tname"]);
}

#[test]
fn version_prints_package_version() {
    let dir = tempfile::tempdir().unwrap();
    let (ok, stdout) = run(&["version"], dir.path());
    assert!(ok);
    assert!(stdout.starts_with("ontodoc "));
}
