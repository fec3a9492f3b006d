use pso_core::domain::{
    Incident, IncidentHeading, IncidentSection, IncidentUpdate, PlatformDescriptor, Report,
};
use pso_core::error::AppError;
use pso_core::normalize::text::non_empty;
use serde::Deserialize;
use serde_json::Value;
use time::OffsetDateTime;

use super::{decode, uptime_percent, ProxyPayload};

const MAX_INCIDENTS: usize = 3;

#[derive(Debug, Deserialize)]
struct AnthropicIncident {
    #[serde(default)]
    date: Option<String>,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    impact: Option<String>,
    /// Newest first, plain text.
    #[serde(default)]
    updates: Option<Vec<String>>,
}

pub fn build(
    platform: &PlatformDescriptor,
    payload: Value,
    now: OffsetDateTime,
) -> Result<Report, AppError> {
    let mut data: ProxyPayload<AnthropicIncident> = decode(platform, payload)?;
    let mut report = data.report(platform, now);

    report.services = data
        .services()
        .iter()
        .map(|s| s.entry().with_uptime(uptime_percent(s.uptime.as_ref())))
        .collect();

    let entries: Vec<Incident> = data
        .incidents()
        .into_iter()
        .take(MAX_INCIDENTS)
        .map(|i| Incident {
            title: non_empty(i.title),
            date: i.date,
            impact: non_empty(i.impact),
            updates: i
                .updates
                .unwrap_or_default()
                .into_iter()
                .map(|message| IncidentUpdate {
                    message: Some(message),
                    ..IncidentUpdate::default()
                })
                .collect(),
            ..Incident::default()
        })
        .collect();
    report.incidents = Some(IncidentSection::new(IncidentHeading::Recent, entries));

    Ok(report)
}
