use std::time::Duration;

use httpmock::prelude::*;
use pso_core::error::codes;
use pso_fetch::{run_command, HttpSource, Observer, ObserverConfig, StatusSource};
use serde_json::json;

fn source(timeout: Duration) -> HttpSource {
    let config = ObserverConfig::new("http://127.0.0.1:9", timeout).expect("config");
    HttpSource::new(&config)
}

#[test]
fn fetches_and_decodes_json() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/gemini");
        then.status(200)
            .json_body(json!({"overall": "Operational", "services": []}));
    });

    let value = source(Duration::from_secs(5))
        .fetch_json(&server.url("/gemini"))
        .expect("payload");
    assert_eq!(value["overall"], "Operational");
    mock.assert();
}

#[test]
fn error_status_is_reported_with_retryability() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/down");
        then.status(503).body("unavailable");
    });
    server.mock(|when, then| {
        when.method(GET).path("/missing");
        then.status(404);
    });

    let src = source(Duration::from_secs(5));
    let err = src.fetch_json(&server.url("/down")).expect_err("503");
    assert_eq!(err.code, codes::SOURCE_HTTP_STATUS);
    assert!(err.retryable);
    assert!(err.details.as_deref().is_some_and(|d| d.contains("status=503")));

    let err = src.fetch_json(&server.url("/missing")).expect_err("404");
    assert_eq!(err.code, codes::SOURCE_HTTP_STATUS);
    assert!(!err.retryable);
}

#[test]
fn non_json_body_is_a_decode_failure() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/html");
        then.status(200).body("<html>maintenance page</html>");
    });

    let err = source(Duration::from_secs(5))
        .fetch_json(&server.url("/html"))
        .expect_err("not json");
    assert_eq!(err.code, codes::SOURCE_DECODE_FAILED);
}

#[test]
fn unreachable_and_slow_endpoints_fail_as_unreachable() {
    let err = source(Duration::from_secs(2))
        .fetch_json("http://127.0.0.1:1/status")
        .expect_err("connection refused");
    assert_eq!(err.code, codes::SOURCE_UNREACHABLE);
    assert!(err.retryable);

    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/slow");
        then.status(200)
            .delay(Duration::from_secs(3))
            .json_body(json!({"overall": "Operational"}));
    });
    let err = source(Duration::from_millis(200))
        .fetch_json(&server.url("/slow"))
        .expect_err("timed out");
    assert_eq!(err.code, codes::SOURCE_UNREACHABLE);
}

#[test]
fn proxied_platform_end_to_end() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/openrouter");
        then.status(200).body(include_str!(concat!(
            env!("CARGO_MANIFEST_DIR"),
            "/../../fixtures/payloads/openrouter.json"
        )));
    });

    let config = ObserverConfig::new(&server.base_url(), Duration::from_secs(5)).expect("config");
    let registry = config.registry();
    let source = HttpSource::new(&config);
    let observer = Observer::new(&registry, &source);

    let out = run_command(&observer, "--openrouter").expect("status");
    mock.assert();
    assert!(out.starts_with(concat!(
        "OpenRouter Status:\n",
        "Overall: Operational ✅\n",
        "\n",
        "Core Components:\n",
        "- API: Operational ✅\n",
    )));
    assert!(out.ends_with("Last Updated: 2026-03-20 12:00:00 UTC"));
}
