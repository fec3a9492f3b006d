//! Per-source payload adapters.
//!
//! Every adapter turns one decoded JSON payload into a normalized [`Report`]. Adapters never do
//! I/O. The observer fetches the payload once and hands it over. A payload that does not match the
//! adapter's shape is an `SOURCE_SHAPE_MISMATCH` error, never a partially filled report.

use pso_core::domain::{PlatformDescriptor, PlatformRef, Report, ServiceEntry};
use pso_core::error::AppError;
use pso_core::normalize::normalize;
use pso_core::normalize::text::non_empty;
use pso_core::normalize::timestamps::now_rfc3339_utc;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{Map, Value};
use time::OffsetDateTime;

pub mod anthropic;
pub mod atlassian;
pub mod docker;
pub mod gcp;
pub mod gemini;
pub mod github;
pub mod linkedin;
pub mod openai;
pub mod openrouter;
pub mod summary;
pub mod supabase;
pub mod x;

/// Top-level fields every proxied source carries. Only `overall` is required.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ProxyHeader {
    pub overall: String,
    #[serde(default)]
    pub last_updated: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl ProxyHeader {
    /// Report skeleton: overall normalized from the source's own field, never from services.
    pub fn report(&self, platform: &PlatformDescriptor, now: OffsetDateTime) -> Report {
        let last_updated =
            non_empty(self.last_updated.clone()).unwrap_or_else(|| now_rfc3339_utc(now));
        let overall = normalize(&self.overall);
        let mut report = Report::new(PlatformRef::from(platform), overall, last_updated);
        report.error = non_empty(self.error.clone());
        report
    }
}

/// Full proxied payload: the header plus services and source-specific incidents.
#[derive(Debug, Deserialize)]
pub(crate) struct ProxyPayload<I> {
    #[serde(flatten)]
    pub header: ProxyHeader,
    #[serde(default)]
    pub services: Option<Vec<ProxyService>>,
    #[serde(default = "Option::default")]
    pub incidents: Option<Vec<I>>,
}

impl<I> ProxyPayload<I> {
    pub fn services(&mut self) -> Vec<ProxyService> {
        self.services.take().unwrap_or_default()
    }

    pub fn incidents(&mut self) -> Vec<I> {
        self.incidents.take().unwrap_or_default()
    }

    pub fn report(&self, platform: &PlatformDescriptor, now: OffsetDateTime) -> Report {
        self.header.report(platform, now)
    }
}

/// Quick view for proxied sources: only the header is decoded.
pub(crate) fn quick(
    platform: &PlatformDescriptor,
    payload: Value,
    now: OffsetDateTime,
) -> Result<Report, AppError> {
    let header: ProxyHeader = decode(platform, payload)?;
    Ok(header.report(platform, now))
}

/// Union of the service fields the proxied sources use; each adapter reads what it needs.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ProxyService {
    pub name: String,
    pub status: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub uptime: Option<Value>,
    #[serde(default)]
    pub components: Option<u64>,
    #[serde(default)]
    pub is_child: Option<bool>,
    #[serde(default)]
    pub is_group: Option<bool>,
    #[serde(default)]
    pub children: Option<Vec<ProxyService>>,
    #[serde(default)]
    pub regions: Option<Map<String, Value>>,
}

impl ProxyService {
    pub fn entry(&self) -> ServiceEntry {
        ServiceEntry::new(&self.name, normalize(&self.status))
    }
}

/// Decode a payload into an adapter's shape.
pub(crate) fn decode<T: DeserializeOwned>(
    platform: &PlatformDescriptor,
    payload: Value,
) -> Result<T, AppError> {
    serde_json::from_value(payload).map_err(|e| AppError::shape_mismatch(&platform.name, e))
}

/// Numeric uptime as a percentage (`99.9%`). Zero, null and non-numeric values yield nothing.
pub(crate) fn uptime_percent(v: Option<&Value>) -> Option<String> {
    match v? {
        Value::Number(n) if n.as_f64().is_some_and(|f| f != 0.0) => Some(format!("{n}%")),
        _ => None,
    }
}

/// Text of a JSON scalar; strings unquoted, null/empty as absent.
pub(crate) fn scalar_text(v: Option<&Value>) -> Option<String> {
    match v? {
        Value::String(s) => non_empty(Some(s.clone())),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
