//! Binary-level tests for the `cyberbuddy` command line

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Command with HOME pointed at an empty directory so no user config leaks in
fn cyberbuddy_cmd(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("cyberbuddy").expect("Failed to find cyberbuddy binary for testing");
    cmd.env("HOME", home.path()).env_remove("RUST_LOG").arg("--no-color");
    cmd
}

#[test]
fn test_help_flag() {
    let home = TempDir::new().unwrap();
    cyberbuddy_cmd(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("ask"));
}

#[test]
fn test_ask_tasks_round_trip() {
    let home = TempDir::new().unwrap();
    cyberbuddy_cmd(&home)
        .args(["ask", "add task Buy milk", "show tasks"])
        .assert()
        .success()
        .stdout(predicate::str::contains("✅ Task added: Buy milk"))
        .stdout(predicate::str::contains("Buy milk - Pending"));
}

#[test]
fn test_ask_stops_at_exit() {
    let home = TempDir::new().unwrap();
    cyberbuddy_cmd(&home)
        .args(["ask", "--name", "Robin", "exit", "add task never"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Thanks for chatting, Robin!"))
        .stdout(predicate::str::contains("Task added").not());
}

#[test]
fn test_ask_seeded_output_is_stable() {
    let home = TempDir::new().unwrap();
    let run = |home: &TempDir| {
        cyberbuddy_cmd(home)
            .args(["--seed", "11", "ask", "phishing", "phishing", "phishing"])
            .output()
            .unwrap()
            .stdout
    };
    assert_eq!(run(&home), run(&home));
}

#[test]
fn test_topics_lists_builtin_keys() {
    let home = TempDir::new().unwrap();
    cyberbuddy_cmd(&home)
        .arg("topics")
        .assert()
        .success()
        .stdout(predicate::str::contains("phishing"))
        .stdout(predicate::str::contains("10 quiz question(s) loaded"));
}

#[test]
fn test_config_init_then_show() {
    let home = TempDir::new().unwrap();
    let path = home.path().join("custom.toml");

    cyberbuddy_cmd(&home)
        .arg("--config")
        .arg(&path)
        .args(["config", "--init"])
        .assert()
        .success();
    assert!(path.exists());

    cyberbuddy_cmd(&home)
        .arg("--config")
        .arg(&path)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("CyberBuddy"))
        .stdout(predicate::str::contains("built-in"));

    cyberbuddy_cmd(&home)
        .arg("--config")
        .arg(&path)
        .args(["config", "--init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn test_knowledge_file_from_config() {
    let home = TempDir::new().unwrap();
    let knowledge = home.path().join("kb.toml");
    std::fs::write(
        &knowledge,
        "[[topics]]\nkey = \"backup\"\nresponses = [\"Follow the 3-2-1 rule.\"]\n",
    )
    .unwrap();
    let config = home.path().join("config.toml");
    std::fs::write(
        &config,
        format!("[knowledge]\nfile = \"{}\"\n", knowledge.display()),
    )
    .unwrap();

    cyberbuddy_cmd(&home)
        .arg("--config")
        .arg(&config)
        .args(["ask", "how do I backup?"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Follow the 3-2-1 rule."));
}

#[test]
fn test_invalid_knowledge_file_fails_cleanly() {
    let home = TempDir::new().unwrap();
    let knowledge = home.path().join("kb.toml");
    std::fs::write(&knowledge, "[[topics]]\nkey = \"\"\nresponses = [\"x\"]\n").unwrap();
    let config = home.path().join("config.toml");
    std::fs::write(&config, format!("[knowledge]\nfile = \"{}\"\n", knowledge.display())).unwrap();

    cyberbuddy_cmd(&home)
        .arg("--config")
        .arg(&config)
        .args(["ask", "hello"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid knowledge base"));
}

#[test]
fn test_quiet_and_verbose_conflict() {
    let home = TempDir::new().unwrap();
    cyberbuddy_cmd(&home)
        .args(["-q", "-v", "topics"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--quiet"));
}
