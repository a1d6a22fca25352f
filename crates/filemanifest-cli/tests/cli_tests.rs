use assert_cmd::Command;
use std::fs;
use tempfile::TempDir;

fn stdout_json(output: &std::process::Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).expect("stdout is JSON")
}

#[test]
fn manifest_prints_json_array() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("icon.png"), [0xDE, 0xAD, 0xBE, 0xEF]).unwrap();
    fs::create_dir(dir.path().join("sub")).unwrap();
    fs::write(dir.path().join("sub").join("firmware.bin"), b"").unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_filemanifest"))
        .arg(dir.path())
        .env_remove("RUST_LOG")
        .output()
        .expect("filemanifest runs");

    assert!(output.status.success());
    let value = stdout_json(&output);
    let items = value.as_array().expect("array");
    assert_eq!(items.len(), 2);

    let icon = items.iter().find(|v| v["path"] == "icon.png").expect("icon record");
    assert_eq!(icon["size"], 4);
    assert_eq!(icon["checksum"], 2_090_640_218u64);
    assert_eq!(icon["flags"]["icon"], true);

    let fw = items.iter().find(|v| v["path"] == "sub/firmware.bin").expect("firmware record");
    assert_eq!(fw["flags"]["appfs"], true);
    assert_eq!(fw["flags"]["skip"], true);
}

#[test]
fn manifest_empty_root_prints_empty_array() {
    let dir = TempDir::new().unwrap();
    let output = Command::new(env!("CARGO_BIN_EXE_filemanifest"))
        .arg(dir.path())
        .output()
        .expect("filemanifest runs");

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "[]");
}

#[test]
fn manifest_missing_root_fails_without_stdout() {
    let dir = TempDir::new().unwrap();
    let output = Command::new(env!("CARGO_BIN_EXE_filemanifest"))
        .arg(dir.path().join("missing"))
        .output()
        .expect("filemanifest runs");

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(!output.stderr.is_empty());
}

#[test]
fn manifest_requires_root_argument() {
    let output = Command::new(env!("CARGO_BIN_EXE_filemanifest"))
        .output()
        .expect("filemanifest runs");

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn repo_index_prints_categories() {
    let dir = TempDir::new().unwrap();
    let app = dir.path().join("snake");
    fs::create_dir(&app).unwrap();
    fs::write(app.join("metadata.json"), br#"{"categories":["Games"]}"#).unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_repo-index"))
        .arg(dir.path())
        .output()
        .expect("repo-index runs");

    assert!(output.status.success());
    let value = stdout_json(&output);
    assert_eq!(value["categories"]["games"]["name"], "Games");
    assert_eq!(value["categories"]["games"]["apps"][0], "snake");
}
