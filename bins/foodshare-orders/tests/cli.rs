use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const STORE: &str = r#"{
  "foods": [
    { "id": 1, "food_name": "Pad Thai", "food_category": "Noodles", "restaurant_name": "Thai Palace", "price": 12.5 },
    { "id": 2, "food_name": "Sushi Roll", "food_category": "Japanese", "restaurant_name": "Tokyo Bar", "price": 9.0 }
  ],
  "orders": [
    { "id": 10, "person_phone_number": "555-0100", "status": "preparation" },
    { "id": 11, "person_phone_number": "555-0101", "status": "delivered", "comment": "leave at door" }
  ]
}"#;

fn workspace() -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let store = dir.path().join("orders.json");
    fs::write(&store, STORE).unwrap();
    (dir, store)
}

fn cmd(dir: &Path, store: &Path) -> Command {
    let mut cmd = Command::cargo_bin("foodshare-orders").unwrap();
    cmd.current_dir(dir)
        .env_remove("FOODSHARE_ORDERS_STORE")
        .arg("--store")
        .arg(store);
    cmd
}

#[test]
fn test_search_finds_misspelled_food() {
    let (dir, store) = workspace();
    cmd(dir.path(), &store)
        .args(["search", "--food", "pad tai"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Pad Thai"))
        .stdout(predicate::str::contains("Sushi Roll").not());
}

#[test]
fn test_search_without_matches() {
    let (dir, store) = workspace();
    cmd(dir.path(), &store)
        .args(["search", "--food", "lasagna"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No matching foods found."));
}

#[test]
fn test_negative_distance_is_invalid_input() {
    let (dir, store) = workspace();
    cmd(dir.path(), &store)
        .args(["search", "--food", "pizza", "--max-distance", "-1"])
        .assert()
        .code(2);
}

#[test]
fn test_cancel_twice() {
    let (dir, store) = workspace();
    cmd(dir.path(), &store)
        .args(["cancel", "10", "555-0100"])
        .assert()
        .success()
        .stdout(predicate::str::contains("has been successfully canceled"));

    cmd(dir.path(), &store)
        .args(["cancel", "10", "555-0100"])
        .assert()
        .success()
        .stdout(predicate::str::contains("cannot be canceled as it is in 'canceled' status"));

    let saved = fs::read_to_string(&store).unwrap();
    assert!(saved.contains("\"canceled\""));
}

#[test]
fn test_comment_persists() {
    let (dir, store) = workspace();
    cmd(dir.path(), &store)
        .args(["comment", "11", "Ada", "ring the bell"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Comment for Order ID 11 from Ada has been updated."));

    let saved = fs::read_to_string(&store).unwrap();
    assert!(saved.contains("ring the bell"));
    assert!(!saved.contains("leave at door"));
}

#[test]
fn test_status_of_missing_order() {
    let (dir, store) = workspace();
    cmd(dir.path(), &store)
        .args(["status", "42"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Order ID 42 does not exist."));
}

#[test]
fn test_json_output() {
    let (dir, store) = workspace();
    cmd(dir.path(), &store)
        .args(["--format", "json", "status", "10"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""outcome": "success""#))
        .stdout(predicate::str::contains(r#""status": "preparation""#));
}

#[test]
fn test_json_stdout_is_a_single_document() {
    let (dir, store) = workspace();
    let output = cmd(dir.path(), &store)
        .args(["--format", "json", "--verbose", "cancel", "10", "555-0100"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let document: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(document["outcome"], "success");
    assert_eq!(document["data"]["order_id"], 10);
}

#[test]
fn test_missing_store_is_storage_error() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("nope.json");
    cmd(dir.path(), &missing)
        .args(["status", "10"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Record store unavailable"))
        .stderr(predicate::str::contains("nope.json"))
        .stderr(predicate::str::contains("pass --store"));
}

#[test]
fn test_store_created_when_configured() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("foodshare-orders.toml");
    fs::write(&config, "[store]\ncreate_if_missing = true\n").unwrap();
    let store = dir.path().join("fresh.json");

    cmd(dir.path(), &store)
        .arg("--config")
        .arg(&config)
        .args(["status", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("does not exist"));
}

#[test]
fn test_missing_config_file() {
    let (dir, store) = workspace();
    cmd(dir.path(), &store)
        .args(["--config", "absent.toml", "status", "10"])
        .assert()
        .code(3);
}
