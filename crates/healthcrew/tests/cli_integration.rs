//! CLI integration tests for the healthcrew command-line interface.
//!
//! These tests verify:
//! - Help text is displayed correctly
//! - Argument parsing works as expected
//! - Commands talk to stub services and render their answers
//! - Demo mode keeps going when individual operations fail

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::json;
use tempfile::TempDir;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Get a command for the healthcrew binary, isolated from any user config.
fn healthcrew(config_home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("healthcrew").unwrap();
    cmd.env("XDG_CONFIG_HOME", config_home.path())
        .env_remove("HEALTHCREW_CONFIG")
        .env_remove("HEALTHCREW_AGENT_URL")
        .env_remove("HEALTHCREW_CREW_URL");
    cmd
}

// ─────────────────────────────────────────────────────────────────────────────
// Help and Version Tests
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_help_displays() {
    let home = TempDir::new().unwrap();
    healthcrew(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("healthcrew"));
}

#[test]
fn test_version_displays() {
    let home = TempDir::new().unwrap();
    healthcrew(&home)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("healthcrew"));
}

#[test]
fn test_help_lists_subcommands() {
    let home = TempDir::new().unwrap();
    healthcrew(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("status"))
        .stdout(predicate::str::contains("chat"))
        .stdout(predicate::str::contains("plan"))
        .stdout(predicate::str::contains("meal-plan"))
        .stdout(predicate::str::contains("nutrition"))
        .stdout(predicate::str::contains("crew-info"))
        .stdout(predicate::str::contains("process"))
        .stdout(predicate::str::contains("demo"));
}

#[test]
fn test_global_flags_accepted() {
    let home = TempDir::new().unwrap();
    healthcrew(&home)
        .args([
            "--verbose",
            "--json",
            "--agent-url",
            "http://localhost:9999",
            "--crew-url",
            "http://localhost:9998",
            "--help",
        ])
        .assert()
        .success();
}

// ─────────────────────────────────────────────────────────────────────────────
// Argument Validation Tests
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_chat_requires_message() {
    let home = TempDir::new().unwrap();
    healthcrew(&home).arg("chat").assert().failure();
}

#[test]
fn test_plan_rejects_unknown_goal() {
    let home = TempDir::new().unwrap();
    healthcrew(&home)
        .args(["plan", "--goal", "bulk"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown goal"));
}

#[test]
fn test_plan_weights_must_come_together() {
    let home = TempDir::new().unwrap();
    healthcrew(&home)
        .args(["plan", "--current-weight", "75"])
        .assert()
        .failure();
}

#[test]
fn test_process_rejects_non_object_context() {
    let home = TempDir::new().unwrap();
    healthcrew(&home)
        .args(["process", "plan my week", "--context-json", "[1]"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("JSON object"));
}

#[test]
fn test_demo_rejects_unknown_target() {
    let home = TempDir::new().unwrap();
    healthcrew(&home).args(["demo", "everything"]).assert().failure();
}

#[test]
fn test_invalid_config_file_fails() {
    let home = TempDir::new().unwrap();
    let config = home.path().join("broken.toml");
    std::fs::write(&config, "[agent\n").unwrap();

    healthcrew(&home)
        .args(["--config", config.to_str().unwrap(), "status"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("loading config"));
}

// ─────────────────────────────────────────────────────────────────────────────
// Stub Service Tests
// ─────────────────────────────────────────────────────────────────────────────

#[tokio::test(flavor = "multi_thread")]
async fn test_crew_chat_prints_response() {
    let home = TempDir::new().unwrap();
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/crewai/conversation"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": {"response": "hi there", "session_id": "s1", "framework": "crewai"}
        })))
        .mount(&server)
        .await;

    healthcrew(&home)
        .args(["--crew-url", &server.uri(), "chat", "--crew", "hello"])
        .assert()
        .success()
        .stdout(predicate::str::contains("hi there"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_process_sends_context_and_prints_answer() {
    let home = TempDir::new().unwrap();
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/crewai/process"))
        .and(body_json(json!({
            "message": "plan my week",
            "user_id": 42,
            "context": {"target_calories": 1800}
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": {
                "response": "eat more greens",
                "scenario": "weight_loss",
                "coordinated_agents": ["nutrition", "meal_planner"]
            }
        })))
        .mount(&server)
        .await;

    healthcrew(&home)
        .args([
            "--crew-url",
            &server.uri(),
            "process",
            "plan my week",
            "--user",
            "42",
            "--context-json",
            r#"{"target_calories": 1800}"#,
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("eat more greens"))
        .stdout(predicate::str::contains("weight_loss"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_crew_failure_exits_nonzero() {
    let home = TempDir::new().unwrap();
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/crewai/crew-info"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({
            "success": false,
            "error": "crew failed to start"
        })))
        .mount(&server)
        .await;

    healthcrew(&home)
        .args(["--crew-url", &server.uri(), "crew-info"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("crew failed to start"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_status_json_uses_config_file() {
    let home = TempDir::new().unwrap();
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "ok"})))
        .mount(&server)
        .await;

    let config = home.path().join("healthcrew.toml");
    std::fs::write(
        &config,
        format!(
            "[agent]\nbase_url = \"{}\"\n\n[crew]\nbase_url = \"http://127.0.0.1:9\"\ntimeout_secs = 2\n",
            server.uri()
        ),
    )
    .unwrap();

    let output = healthcrew(&home)
        .args(["--json", "--config", config.to_str().unwrap(), "status"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let status: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(status["agent"]["running"], json!(true));
    assert_eq!(status["agent"]["health"]["status"], json!("ok"));
    assert_eq!(status["crew"]["running"], json!(false));
    assert!(status["crew"]["error"].is_string());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_demo_continues_after_failures() {
    let home = TempDir::new().unwrap();
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/crewai/health"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "healthy",
            "framework": "CrewAI"
        })))
        .mount(&server)
        .await;
    // Everything else gets wiremock's empty 404, which fails to decode.

    healthcrew(&home)
        .args(["--crew-url", &server.uri(), "demo", "crew"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 passed, 6 failed"));
}
