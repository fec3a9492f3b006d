use pso_core::domain::{
    Incident, IncidentHeading, IncidentSection, IncidentUpdate, PlatformDescriptor, Report,
};
use pso_core::error::AppError;
use pso_core::normalize::text::non_empty;
use serde::Deserialize;
use serde_json::Value;
use time::OffsetDateTime;

use super::{decode, ProxyPayload};

const MAX_INCIDENTS: usize = 3;

#[derive(Debug, Deserialize)]
struct XIncident {
    #[serde(default)]
    date: Option<String>,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    updates: Option<Vec<XUpdate>>,
}

#[derive(Debug, Deserialize)]
struct XUpdate {
    #[serde(default)]
    time: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

pub fn build(
    platform: &PlatformDescriptor,
    payload: Value,
    now: OffsetDateTime,
) -> Result<Report, AppError> {
    let mut data: ProxyPayload<XIncident> = decode(platform, payload)?;
    let mut report = data.report(platform, now);
    report.services = data.services().iter().map(|s| s.entry()).collect();

    let entries = data
        .incidents()
        .into_iter()
        .take(MAX_INCIDENTS)
        .map(|i| Incident {
            title: non_empty(i.title),
            date: i.date,
            updates: i
                .updates
                .unwrap_or_default()
                .into_iter()
                .map(|u| IncidentUpdate {
                    time: non_empty(u.time),
                    message: Some(u.message.unwrap_or_default()),
                    ..IncidentUpdate::default()
                })
                .collect(),
            ..Incident::default()
        })
        .collect();
    report.incidents = Some(IncidentSection::new(IncidentHeading::Recent, entries));
    Ok(report)
}
