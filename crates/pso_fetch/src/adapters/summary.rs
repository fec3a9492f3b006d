use pso_core::domain::{
    Incident, IncidentHeading, IncidentSection, IncidentUpdate, PlatformDescriptor, PlatformRef,
    Report, ServiceEntry,
};
use pso_core::error::AppError;
use pso_core::normalize::normalize;
use pso_core::normalize::text::non_empty;
use pso_core::normalize::timestamps::now_rfc3339_utc;
use serde::Deserialize;
use serde_json::{Map, Value};
use time::OffsetDateTime;

use super::decode;

/// Top-level status and last-updated fields of a summary document.
#[derive(Debug, Deserialize)]
pub(crate) struct SummaryHeader {
    #[serde(default)]
    status: Option<SummaryStatus>,
    #[serde(default)]
    page: Option<SummaryPage>,
    #[serde(default)]
    updated: Option<String>,
    #[serde(default)]
    date_updated: Option<String>,
}

/// Common "summary" document: Statuspage `summary.json` and look-alikes (Slack's `current`).
#[derive(Debug, Deserialize)]
pub(crate) struct SummaryDocument {
    #[serde(flatten)]
    header: SummaryHeader,
    #[serde(default)]
    components: Option<ComponentList>,
    #[serde(default)]
    incidents: Option<Vec<StatuspageIncident>>,
    #[serde(default)]
    active_incidents: Option<Vec<SlackIncident>>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum SummaryStatus {
    Text(String),
    Object {
        #[serde(default)]
        indicator: Option<String>,
        #[serde(default)]
        description: Option<String>,
    },
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ComponentList {
    List(Vec<Value>),
    Map(Map<String, Value>),
}

#[derive(Debug, Deserialize)]
struct SummaryPage {
    #[serde(default)]
    updated_at: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SummaryComponent {
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    group: bool,
    #[serde(default)]
    group_id: Option<String>,
}

#[derive(Debug, Deserialize)]
struct StatuspageIncident {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    impact: Option<String>,
    #[serde(default)]
    shortlink: Option<String>,
    #[serde(default)]
    incident_updates: Option<Vec<StatuspageUpdate>>,
}

#[derive(Debug, Deserialize)]
struct StatuspageUpdate {
    #[serde(default)]
    body: Option<String>,
    #[serde(default)]
    created_at: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SlackIncident {
    #[serde(default)]
    title: Option<String>,
    #[serde(default, rename = "type")]
    kind: Option<String>,
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    url: Option<String>,
}

impl SummaryHeader {
    /// Overall status text: `status.description`, else a plain string status, else `Unknown`.
    ///
    /// With `use_indicator`, a missing description falls back to `status.indicator` first, where
    /// `none` means operational.
    pub fn overall_text(&self, use_indicator: bool) -> String {
        let text = match &self.status {
            Some(SummaryStatus::Object {
                indicator,
                description,
            }) => non_empty(description.clone()).or_else(|| {
                non_empty(indicator.clone())
                    .filter(|_| use_indicator)
                    .map(|i| {
                        if i == "none" {
                            "operational".to_string()
                        } else {
                            i
                        }
                    })
            }),
            Some(SummaryStatus::Text(s)) => non_empty(Some(s.clone())),
            None => None,
        };
        text.unwrap_or_else(|| "Unknown".to_string())
    }

    pub fn report(
        &self,
        platform: &PlatformDescriptor,
        now: OffsetDateTime,
        use_indicator: bool,
    ) -> Report {
        let last_updated = self
            .page
            .as_ref()
            .and_then(|p| non_empty(p.updated_at.clone()))
            .or_else(|| non_empty(self.updated.clone()))
            .or_else(|| non_empty(self.date_updated.clone()))
            .unwrap_or_else(|| now_rfc3339_utc(now));
        Report::new(
            PlatformRef::from(platform),
            normalize(&self.overall_text(use_indicator)),
            last_updated,
        )
    }
}

impl SummaryDocument {
    pub fn parse(platform: &PlatformDescriptor, payload: Value) -> Result<Self, AppError> {
        decode(platform, payload)
    }

    pub fn report(
        &self,
        platform: &PlatformDescriptor,
        now: OffsetDateTime,
        use_indicator: bool,
    ) -> Report {
        self.header.report(platform, now, use_indicator)
    }

    /// Component entries, or `None` when the source exposes no component list at all.
    ///
    /// Statuspage groups (`group: true`) collect the components naming them as `group_id`.
    pub fn services(&self) -> Option<Vec<ServiceEntry>> {
        let raw: Vec<&Value> = match self.components.as_ref()? {
            ComponentList::List(items) => items.iter().collect(),
            ComponentList::Map(map) => map.values().collect(),
        };
        let components: Vec<SummaryComponent> = raw
            .into_iter()
            .filter_map(|v| serde_json::from_value(v.clone()).ok())
            .collect();

        let group_ids: Vec<&str> = components
            .iter()
            .filter(|c| c.group)
            .filter_map(|c| c.id.as_deref())
            .collect();

        let to_entry = |c: &SummaryComponent| -> Option<ServiceEntry> {
            let name = non_empty(c.name.clone())?;
            let status = c.status.as_deref().unwrap_or("unknown");
            Some(ServiceEntry::new(name, normalize(status)).with_description(c.description.clone()))
        };

        let mut out: Vec<(Option<&str>, ServiceEntry)> = Vec::new();
        for c in &components {
            let parent = c
                .group_id
                .as_deref()
                .filter(|g| group_ids.contains(g));
            if parent.is_some() {
                continue;
            }
            if let Some(entry) = to_entry(c) {
                out.push((c.id.as_deref().filter(|_| c.group), entry));
            }
        }
        for c in &components {
            let Some(gid) = c.group_id.as_deref().filter(|g| group_ids.contains(g)) else {
                continue;
            };
            let Some(child) = to_entry(c) else { continue };
            if let Some((_, group)) = out.iter_mut().find(|(id, _)| *id == Some(gid)) {
                group.children.push(child);
            }
        }
        Some(out.into_iter().map(|(_, e)| e).collect())
    }

    /// Unresolved incidents, when the source includes them.
    pub fn incidents(&self) -> Option<IncidentSection> {
        let mut entries: Vec<Incident> = Vec::new();
        for i in self.incidents.as_deref().unwrap_or_default() {
            let latest = i
                .incident_updates
                .as_deref()
                .unwrap_or_default()
                .first()
                .map(|u| IncidentUpdate {
                    time: non_empty(u.created_at.clone()),
                    message: non_empty(u.body.clone()),
                    ..IncidentUpdate::default()
                });
            entries.push(Incident {
                title: non_empty(i.name.clone()),
                impact: non_empty(i.impact.clone()),
                status: non_empty(i.status.clone()),
                link: non_empty(i.shortlink.clone()),
                updates: latest.into_iter().collect(),
                ..Incident::default()
            });
        }
        for i in self.active_incidents.as_deref().unwrap_or_default() {
            entries.push(Incident {
                title: non_empty(i.title.clone()),
                impact: non_empty(i.kind.clone()),
                status: non_empty(i.status.clone()),
                link: non_empty(i.url.clone()),
                ..Incident::default()
            });
        }
        (!entries.is_empty())
            .then(|| IncidentSection::new(IncidentHeading::ActiveIncidents, entries))
    }
}

/// Generic adapter for every platform without a dedicated one.
pub fn build(
    platform: &PlatformDescriptor,
    payload: Value,
    now: OffsetDateTime,
) -> Result<Report, AppError> {
    let doc = SummaryDocument::parse(platform, payload)?;
    let mut report = doc.report(platform, now, false);
    report.services = doc.services().unwrap_or_default();
    report.incidents = doc.incidents();
    Ok(report)
}

/// Quick view: only the header is decoded, so a malformed component list cannot hide the overall.
pub fn quick(
    platform: &PlatformDescriptor,
    payload: Value,
    now: OffsetDateTime,
    use_indicator: bool,
) -> Result<Report, AppError> {
    let header: SummaryHeader = decode(platform, payload)?;
    Ok(header.report(platform, now, use_indicator))
}
