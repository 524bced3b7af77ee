//! End-to-end tests running the compiled binary against a mocked
//! chat-completion endpoint and checking the JSON report contract:
//! exactly one JSON line on stdout, exit code 0 only on success.

use serde_json::{json, Value};
use std::process::{Command, Output};
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn run_bin(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_glmping"))
        .args(args)
        .output()
        .expect("failed to run glmping")
}

fn parse_report(output: &Output) -> Value {
    let stdout = String::from_utf8(output.stdout.clone()).expect("stdout is not UTF-8");
    let trimmed = stdout.trim();
    assert_eq!(trimmed.lines().count(), 1, "expected one JSON line, got: {stdout:?}");
    serde_json::from_str(trimmed).expect("stdout is not valid JSON")
}

#[test]
fn no_arguments_reports_usage_error() {
    let output = run_bin(&[]);
    assert_eq!(output.status.code(), Some(1));

    let report = parse_report(&output);
    assert_eq!(report["success"], false);
    assert_eq!(
        report["error"],
        "insufficient arguments: api_key and model required"
    );
    assert!(report.get("content").is_none());
}

#[test]
fn single_argument_reports_usage_error() {
    let output = run_bin(&["sk-test"]);
    assert_eq!(output.status.code(), Some(1));

    let report = parse_report(&output);
    assert_eq!(report["success"], false);
    assert_eq!(
        report["error"],
        "insufficient arguments: api_key and model required"
    );
}

#[test]
fn unknown_provider_reports_failure_without_network() {
    let output = run_bin(&["sk-test", "glm-4", "--provider", "nonexistent"]);
    assert_eq!(output.status.code(), Some(1));

    let report = parse_report(&output);
    assert_eq!(report["success"], false);
    assert_eq!(report["error"], "unknown provider 'nonexistent'");
}

#[tokio::test(flavor = "multi_thread")]
async fn successful_probe_reports_content_and_exits_zero() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(body_partial_json(json!({
            "model": "glm-4",
            "temperature": 0.1,
            "max_tokens": 10
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "choices": [
                {"message": {"role": "assistant", "content": "你好！"}}
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let uri = server.uri();
    let output =
        tokio::task::spawn_blocking(move || run_bin(&["sk-test", "glm-4", "--base-url", &uri]))
            .await
            .unwrap();

    assert_eq!(output.status.code(), Some(0));
    let report = parse_report(&output);
    assert_eq!(report["success"], true);
    assert_eq!(report["content"], "你好！");
    assert!(report.get("error").is_none());

    // non-ASCII reply text must appear unescaped in the raw line
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("你好！"));
}

#[tokio::test(flavor = "multi_thread")]
async fn auth_failure_surfaces_remote_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(
            ResponseTemplate::new(401).set_body_string(r#"{"error":{"message":"invalid key"}}"#),
        )
        .mount(&server)
        .await;

    // empty credential is still sent; rejection is the remote side's call
    let uri = server.uri();
    let output = tokio::task::spawn_blocking(move || run_bin(&["", "glm-4", "--base-url", &uri]))
        .await
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let report = parse_report(&output);
    assert_eq!(report["success"], false);
    let error = report["error"].as_str().unwrap();
    assert!(error.contains("401"));
    assert!(error.contains("invalid key"));
}

#[tokio::test(flavor = "multi_thread")]
async fn empty_choices_reports_invalid_response_format() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"choices": []})))
        .mount(&server)
        .await;

    let uri = server.uri();
    let output =
        tokio::task::spawn_blocking(move || run_bin(&["sk-test", "glm-4", "--base-url", &uri]))
            .await
            .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let report = parse_report(&output);
    assert_eq!(report["success"], false);
    assert_eq!(report["error"], "invalid response format");
}
