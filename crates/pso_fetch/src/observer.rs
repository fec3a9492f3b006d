use std::thread;

use pso_core::domain::{PlatformDescriptor, Report};
use pso_core::error::AppError;
use pso_core::registry::Registry;
use pso_core::report::{
    not_found_text, quick_unavailable_text, render_all, render_detailed, render_platform_list,
    render_quick, unavailable_text,
};
use serde_json::Value;
use time::OffsetDateTime;

use crate::dispatch::AdapterKind;
use crate::source::StatusSource;

pub type Clock = fn() -> OffsetDateTime;

/// Request-scoped entry point over an explicitly passed registry and status source.
///
/// Stateless: every call fetches fresh, and a failing platform only affects its own output.
pub struct Observer<'a, S: StatusSource> {
    registry: &'a Registry,
    source: &'a S,
    clock: Clock,
}

impl<'a, S: StatusSource> Observer<'a, S> {
    pub fn new(registry: &'a Registry, source: &'a S) -> Self {
        Self {
            registry,
            source,
            clock: OffsetDateTime::now_utc,
        }
    }

    /// Override "now" (recency window and missing last-updated stamps).
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    fn fetch(&self, platform: &PlatformDescriptor) -> Result<(AdapterKind, Value), AppError> {
        let payload = self.source.fetch_json(&platform.url)?;
        Ok((AdapterKind::for_platform(&platform.id), payload))
    }

    /// Fetch and adapt one platform's payload.
    pub fn report(&self, platform: &PlatformDescriptor) -> Result<Report, AppError> {
        let (kind, payload) = self.fetch(platform)?;
        kind.build(platform, payload, (self.clock)())
    }

    /// Fetch one platform's payload and read only what the quick view needs.
    pub fn quick_report(&self, platform: &PlatformDescriptor) -> Result<Report, AppError> {
        let (kind, payload) = self.fetch(platform)?;
        kind.quick(platform, payload, (self.clock)())
    }

    /// Detailed text for one platform id. Unknown ids get guidance text, not an error.
    pub fn platform_status(&self, id: &str) -> String {
        let Some(platform) = self.registry.lookup(id) else {
            return not_found_text(id);
        };
        match self.report(platform) {
            Ok(report) => render_detailed(&report),
            Err(err) => {
                log_source_failure(platform, &err);
                unavailable_text(&platform.name)
            }
        }
    }

    /// One-line status for a registered platform.
    pub fn quick_status(&self, platform: &PlatformDescriptor) -> String {
        match self.quick_report(platform) {
            Ok(report) => render_quick(&report),
            Err(err) => {
                log_source_failure(platform, &err);
                quick_unavailable_text(&platform.name)
            }
        }
    }

    /// Quick status of every platform, queried concurrently.
    ///
    /// Waits for every query to settle; output keeps registry order. A query that fails or panics
    /// turns into that platform's "unable to fetch" line and nothing else.
    pub fn query_all(&self) -> String {
        let platforms = self.registry.list_all();
        let lines: Vec<String> = thread::scope(|scope| {
            let handles: Vec<_> = platforms
                .iter()
                .map(|p| (p, scope.spawn(move || self.quick_status(p))))
                .collect();
            handles
                .into_iter()
                .map(|(p, handle)| {
                    handle.join().unwrap_or_else(|_| {
                        tracing::warn!(platform = %p.id, "status query panicked");
                        quick_unavailable_text(&p.name)
                    })
                })
                .collect()
        });
        render_all(&lines)
    }

    pub fn platforms_list(&self) -> String {
        render_platform_list(self.registry)
    }
}

fn log_source_failure(platform: &PlatformDescriptor, err: &AppError) {
    let details = err.details.as_deref().unwrap_or("");
    if err.is_source_failure() {
        tracing::warn!(
            platform = %platform.id,
            code = %err.code,
            retryable = err.retryable,
            details,
            "error fetching status: {}",
            err.message
        );
    } else {
        tracing::error!(
            platform = %platform.id,
            code = %err.code,
            details,
            "unexpected error building status: {}",
            err.message
        );
    }
}
