use pso_core::domain::{
    Incident, IncidentHeading, IncidentSection, IncidentUpdate, PlatformDescriptor, RegionStatus,
    Report, ServiceEntry, ServiceLayout, UpdateLabel,
};
use pso_core::error::AppError;
use pso_core::normalize::text::non_empty;
use serde::Deserialize;
use serde_json::Value;
use time::OffsetDateTime;

use super::{decode, scalar_text, ProxyPayload, ProxyService};

#[derive(Debug, Deserialize)]
struct GcpIncident {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    products: Option<Value>,
    #[serde(default)]
    locations: Option<Value>,
    #[serde(default)]
    updates: Option<Vec<String>>,
}

// Products and locations arrive either pre-joined or as arrays.
fn joined(v: Option<&Value>) -> Option<String> {
    match v? {
        Value::Array(items) => {
            let parts: Vec<String> = items.iter().filter_map(|i| scalar_text(Some(i))).collect();
            (!parts.is_empty()).then(|| parts.join(", "))
        }
        other => scalar_text(Some(other)),
    }
}

/// Regional breakdown for one service, in source order. Blank statuses are dropped.
fn region_entry(s: &ProxyService) -> Option<ServiceEntry> {
    let regions: Vec<RegionStatus> = s
        .regions
        .as_ref()?
        .iter()
        .filter_map(|(code, status)| {
            scalar_text(Some(status)).map(|status| RegionStatus {
                code: code.clone(),
                status,
            })
        })
        .collect();
    if regions.is_empty() {
        return None;
    }
    let mut entry = s.entry();
    entry.regions = regions;
    Some(entry)
}

/// Google Cloud: a service × region matrix plus the currently open incidents, shown first.
pub fn build(
    platform: &PlatformDescriptor,
    payload: Value,
    now: OffsetDateTime,
) -> Result<Report, AppError> {
    let mut data: ProxyPayload<GcpIncident> = decode(platform, payload)?;
    let mut report = data.report(platform, now);
    report.layout = ServiceLayout::RegionMatrix;
    report.incidents_first = true;

    let mut services: Vec<ServiceEntry> = data.services().iter().filter_map(region_entry).collect();
    services.sort_by(|a, b| {
        a.name
            .to_lowercase()
            .cmp(&b.name.to_lowercase())
            .then_with(|| a.name.cmp(&b.name))
    });
    report.services = services;

    let entries = data
        .incidents()
        .into_iter()
        .map(|i| Incident {
            title: non_empty(i.title),
            products: joined(i.products.as_ref()),
            locations: joined(i.locations.as_ref()),
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
    report.incidents = Some(
        IncidentSection::new(IncidentHeading::ActiveIncidents, entries)
            .with_update_label(UpdateLabel::Title),
    );

    Ok(report)
}
