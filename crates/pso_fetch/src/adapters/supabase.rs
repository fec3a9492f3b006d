use pso_core::domain::{
    Incident, IncidentHeading, IncidentSection, IncidentUpdate, PlatformDescriptor, Report,
    ServiceEntry,
};
use pso_core::error::AppError;
use pso_core::normalize::text::non_empty;
use serde::Deserialize;
use serde_json::Value;
use time::OffsetDateTime;

use super::{decode, scalar_text, ProxyPayload, ProxyService};

const MAX_INCIDENTS: usize = 3;

#[derive(Debug, Deserialize)]
struct SupabaseIncident {
    #[serde(default)]
    date: Option<String>,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    impact: Option<String>,
    #[serde(default)]
    updates: Option<Vec<SupabaseUpdate>>,
}

#[derive(Debug, Deserialize)]
struct SupabaseUpdate {
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    time: Option<String>,
}

fn service_entry(s: &ProxyService) -> ServiceEntry {
    if s.is_group.unwrap_or(false) {
        let mut group = s.entry();
        group.children = s
            .children
            .as_deref()
            .unwrap_or_default()
            .iter()
            .map(ProxyService::entry)
            .collect();
        group
    } else {
        // Uptime is already formatted by the source (e.g. "99.99%").
        s.entry().with_uptime(scalar_text(s.uptime.as_ref()))
    }
}

/// An incident surfaces only when it declares an impact other than `none`.
fn has_impact(i: &SupabaseIncident) -> bool {
    i.impact
        .as_deref()
        .is_some_and(|impact| !impact.is_empty() && impact != "none")
}

pub fn build(
    platform: &PlatformDescriptor,
    payload: Value,
    now: OffsetDateTime,
) -> Result<Report, AppError> {
    let mut data: ProxyPayload<SupabaseIncident> = decode(platform, payload)?;
    let mut report = data.report(platform, now);
    report.services = data.services().iter().map(service_entry).collect();

    let entries = data
        .incidents()
        .into_iter()
        .filter(has_impact)
        .take(MAX_INCIDENTS)
        .map(|i| Incident {
            title: non_empty(i.title),
            date: i.date,
            impact: i.impact,
            updates: i
                .updates
                .unwrap_or_default()
                .into_iter()
                .map(|u| IncidentUpdate {
                    time: non_empty(u.time),
                    title: None,
                    status: non_empty(u.status),
                    message: non_empty(u.message),
                })
                .collect(),
            ..Incident::default()
        })
        .collect();
    report.incidents = Some(IncidentSection::new(IncidentHeading::Recent, entries));
    Ok(report)
}
