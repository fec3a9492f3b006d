use pso_core::domain::{Incident, IncidentHeading, IncidentSection, PlatformDescriptor, Report};
use pso_core::error::AppError;
use pso_core::normalize::text::non_empty;
use serde::Deserialize;
use serde_json::Value;
use time::OffsetDateTime;

use super::{decode, uptime_percent, ProxyPayload};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct OpenAiIncident {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    duration: Option<String>,
    #[serde(default)]
    affects: Option<String>,
}

pub fn build(
    platform: &PlatformDescriptor,
    payload: Value,
    now: OffsetDateTime,
) -> Result<Report, AppError> {
    let mut data: ProxyPayload<OpenAiIncident> = decode(platform, payload)?;
    let mut report = data.report(platform, now);
    report.incidents_first = true;

    report.services = data
        .services()
        .iter()
        .map(|s| {
            let mut entry = s.entry().with_uptime(uptime_percent(s.uptime.as_ref()));
            entry.subcomponents = s.components.filter(|n| *n > 0);
            entry
        })
        .collect();

    let entries = data
        .incidents()
        .into_iter()
        .map(|i| Incident {
            title: non_empty(i.title),
            description: non_empty(i.description),
            affects: non_empty(i.affects),
            duration: non_empty(i.duration),
            status: non_empty(i.status),
            ..Incident::default()
        })
        .collect();
    report.incidents = Some(IncidentSection::new(IncidentHeading::ActiveIncidents, entries));
    Ok(report)
}
