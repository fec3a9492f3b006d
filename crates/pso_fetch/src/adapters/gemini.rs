use pso_core::domain::{Incident, IncidentHeading, IncidentSection, PlatformDescriptor, Report};
use pso_core::error::AppError;
use pso_core::normalize::text::non_empty;
use serde::Deserialize;
use serde_json::Value;
use time::OffsetDateTime;

use super::{decode, ProxyPayload};

#[derive(Debug, Deserialize)]
struct GeminiIncident {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    status: Option<String>,
}

pub fn build(
    platform: &PlatformDescriptor,
    payload: Value,
    now: OffsetDateTime,
) -> Result<Report, AppError> {
    let mut data: ProxyPayload<GeminiIncident> = decode(platform, payload)?;
    let mut report = data.report(platform, now);
    report.services = data.services().iter().map(|s| s.entry()).collect();

    // The proxy only lists incidents that are still open.
    let entries = data
        .incidents()
        .into_iter()
        .map(|i| Incident {
            title: non_empty(i.title),
            description: non_empty(i.description),
            status: non_empty(i.status),
            ..Incident::default()
        })
        .collect();
    report.incidents = Some(IncidentSection::new(IncidentHeading::ActiveIncidents, entries));
    Ok(report)
}
