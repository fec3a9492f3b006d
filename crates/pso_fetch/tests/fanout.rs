use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;
use std::time::Duration;

use pretty_assertions::assert_eq;
use pso_core::error::{codes, AppError};
use pso_core::registry::Registry;
use pso_core::report::ALL_PLATFORMS_DELIMITER;
use pso_fetch::{Observer, StatusSource};
use serde_json::{json, Value};
use time::macros::datetime;
use time::OffsetDateTime;

enum Canned {
    Payload(Value),
    Slow(Value, Duration),
    Fail,
    Panic,
}

struct FakeSource {
    responses: HashMap<String, Canned>,
    calls: AtomicUsize,
}

impl FakeSource {
    fn new(responses: Vec<(&str, Canned)>) -> Self {
        Self {
            responses: responses
                .into_iter()
                .map(|(url, c)| (url.to_string(), c))
                .collect(),
            calls: AtomicUsize::new(0),
        }
    }
}

impl StatusSource for FakeSource {
    fn fetch_json(&self, url: &str) -> Result<Value, AppError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.responses.get(url) {
            Some(Canned::Payload(v)) => Ok(v.clone()),
            Some(Canned::Slow(v, delay)) => {
                thread::sleep(*delay);
                Ok(v.clone())
            }
            Some(Canned::Panic) => panic!("source blew up for {url}"),
            Some(Canned::Fail) | None => Err(AppError::new(
                codes::SOURCE_UNREACHABLE,
                "Failed to reach status endpoint",
            )
            .with_details(format!("url={url}"))
            .with_retryable(true)),
        }
    }
}

fn fixed_now() -> OffsetDateTime {
    datetime!(2026-03-20 12:00:00 UTC)
}

fn registry() -> Registry {
    let mut r = Registry::new();
    r.register("alpha", "Alpha", "mem://alpha", "first");
    r.register("beta", "Beta", "mem://beta", "second");
    r.register("gamma", "Gamma", "mem://gamma", "third");
    r.register("delta", "Delta", "mem://delta", "fourth");
    r
}

fn summary(description: &str) -> Value {
    json!({"status": {"indicator": "minor", "description": description}, "components": []})
}

fn parts(output: &str) -> Vec<&str> {
    output
        .strip_prefix("Status for All Platforms:\n\n")
        .expect("aggregate header")
        .split(ALL_PLATFORMS_DELIMITER)
        .collect()
}

#[test]
fn one_failing_platform_does_not_affect_the_others() {
    let registry = registry();
    let source = FakeSource::new(vec![
        (
            "mem://alpha",
            Canned::Slow(summary("All Systems Operational"), Duration::from_millis(50)),
        ),
        ("mem://beta", Canned::Fail),
        ("mem://gamma", Canned::Payload(summary("Partial outage"))),
        ("mem://delta", Canned::Payload(json!("maintenance page"))),
    ]);
    let observer = Observer::new(&registry, &source).with_clock(fixed_now);

    let out = observer.query_all();
    assert_eq!(
        parts(&out),
        vec![
            "Alpha: Operational ✅",
            "Beta: Unable to fetch status",
            "Gamma: Degraded Performance ⚠️",
            "Delta: Unable to fetch status",
        ]
    );
    assert_eq!(source.calls.load(Ordering::SeqCst), 4);
}

#[test]
fn aggregate_lines_ignore_malformed_component_lists() {
    let registry = registry();
    let mut broken = summary("Partial outage");
    broken["components"] = json!("not a list");
    let source = FakeSource::new(vec![
        ("mem://alpha", Canned::Payload(summary("Operational"))),
        ("mem://beta", Canned::Payload(broken)),
        ("mem://gamma", Canned::Payload(summary("Operational"))),
        ("mem://delta", Canned::Payload(summary("Operational"))),
    ]);
    let observer = Observer::new(&registry, &source).with_clock(fixed_now);

    let out = observer.query_all();
    assert_eq!(
        parts(&out),
        vec![
            "Alpha: Operational ✅",
            "Beta: Degraded Performance ⚠️",
            "Gamma: Operational ✅",
            "Delta: Operational ✅",
        ]
    );

    let beta = registry.lookup("beta").expect("registered");
    let err = observer.report(beta).expect_err("detailed view decodes components");
    assert_eq!(err.code, codes::SOURCE_SHAPE_MISMATCH);
}

#[test]
fn a_panicking_query_becomes_that_platforms_failure_line() {
    let registry = registry();
    let source = FakeSource::new(vec![
        ("mem://alpha", Canned::Payload(summary("Operational"))),
        ("mem://beta", Canned::Panic),
        ("mem://gamma", Canned::Payload(summary("Operational"))),
        ("mem://delta", Canned::Payload(summary("Operational"))),
    ]);
    let observer = Observer::new(&registry, &source).with_clock(fixed_now);

    let out = observer.query_all();
    let lines = parts(&out);
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[1], "Beta: Unable to fetch status");
    assert_eq!(lines[3], "Delta: Operational ✅");
}

#[test]
fn every_platform_failing_still_yields_one_line_each() {
    let registry = Registry::builtin("http://proxy.test");
    let source = FakeSource::new(Vec::new());
    let observer = Observer::new(&registry, &source).with_clock(fixed_now);

    let out = observer.query_all();
    let lines = parts(&out);
    assert_eq!(lines.len(), registry.len());
    for (line, platform) in lines.iter().zip(registry.list_all()) {
        assert_eq!(*line, format!("{}: Unable to fetch status", platform.name));
    }
}

#[test]
fn empty_registry_renders_only_the_header() {
    let registry = Registry::new();
    let source = FakeSource::new(Vec::new());
    let observer = Observer::new(&registry, &source);
    assert_eq!(observer.query_all(), "Status for All Platforms:\n\n");
    assert_eq!(source.calls.load(Ordering::SeqCst), 0);
}
