use pso_core::domain::{
    Incident, IncidentHeading, IncidentSection, PlatformDescriptor, Report, ServiceLayout,
};
use pso_core::error::AppError;
use pso_core::normalize::text::{non_empty, truncate_summary};
use pso_core::normalize::timestamps::is_recent;
use serde::Deserialize;
use serde_json::Value;
use time::OffsetDateTime;

use super::{decode, ProxyHeader, ProxyPayload};

const MAX_RESOLVED: usize = 3;
const MAX_ACTIVITY: usize = 2;

pub const ACTIVE_ISSUES_ADVISORY: &str = "Active Issues";

/// One entry of the OpenRouter incident feed, newest first.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FeedIncident {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    pub_date: Option<String>,
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    impact: Option<String>,
    /// Recency as judged by the proxy; ORed with our own window check.
    #[serde(default)]
    is_recent: bool,
    #[serde(default)]
    link: Option<String>,
}

impl FeedIncident {
    fn published_recently(&self, now: OffsetDateTime) -> bool {
        self.pub_date.as_deref().is_some_and(|d| is_recent(d, now))
    }

    fn is_active(&self) -> bool {
        self.status
            .as_deref()
            .is_some_and(|s| s.eq_ignore_ascii_case("active"))
    }

    fn to_incident(&self, with_summary: bool) -> Incident {
        Incident {
            title: non_empty(self.title.clone()),
            impact: non_empty(self.impact.clone()),
            status: self.status.clone(),
            published_at: non_empty(self.pub_date.clone()),
            summary: if with_summary {
                non_empty(self.description.clone()).map(|d| truncate_summary(&d))
            } else {
                None
            },
            link: non_empty(self.link.clone()),
            ..Incident::default()
        }
    }
}

/// Pick the one incident bucket to show. Checked in priority order, first non-empty wins:
/// recent + active, then recent (up to 3, as resolved), then anything (up to 2) as activity.
fn select_incidents(feed: &[FeedIncident], now: OffsetDateTime) -> Option<IncidentSection> {
    let active: Vec<Incident> = feed
        .iter()
        .filter(|i| i.is_active() && i.published_recently(now))
        .map(|i| i.to_incident(false))
        .collect();
    if !active.is_empty() {
        return Some(IncidentSection::new(IncidentHeading::Active, active));
    }

    let recent: Vec<Incident> = feed
        .iter()
        .filter(|i| i.is_recent || i.published_recently(now))
        .take(MAX_RESOLVED)
        .map(|i| i.to_incident(true))
        .collect();
    if !recent.is_empty() {
        return Some(IncidentSection::new(IncidentHeading::RecentResolved, recent));
    }

    if feed.is_empty() {
        return None;
    }
    let activity = feed
        .iter()
        .take(MAX_ACTIVITY)
        .map(|i| i.to_incident(false))
        .collect();
    Some(IncidentSection::new(IncidentHeading::RecentActivity, activity))
}

pub fn build(
    platform: &PlatformDescriptor,
    payload: Value,
    now: OffsetDateTime,
) -> Result<Report, AppError> {
    let mut data: ProxyPayload<FeedIncident> = decode(platform, payload)?;
    let mut report = data.report(platform, now);
    report.layout = ServiceLayout::CoreComponents;
    report.services = data.services().iter().map(|s| s.entry()).collect();

    let feed = data.incidents();
    report.advisory = advisory(&feed, now);
    report.incidents = select_incidents(&feed, now);
    Ok(report)
}

fn advisory(feed: &[FeedIncident], now: OffsetDateTime) -> Option<String> {
    feed.iter()
        .any(|i| i.is_active() && (i.is_recent || i.published_recently(now)))
        .then(|| ACTIVE_ISSUES_ADVISORY.to_string())
}

#[derive(Debug, Deserialize)]
struct QuickFeed {
    #[serde(flatten)]
    header: ProxyHeader,
    #[serde(default)]
    incidents: Option<Vec<Value>>,
}

/// Quick view: overall plus the advisory. Feed entries that do not decode are skipped.
pub fn quick(
    platform: &PlatformDescriptor,
    payload: Value,
    now: OffsetDateTime,
) -> Result<Report, AppError> {
    let data: QuickFeed = decode(platform, payload)?;
    let mut report = data.header.report(platform, now);
    let feed: Vec<FeedIncident> = data
        .incidents
        .unwrap_or_default()
        .into_iter()
        .filter_map(|v| serde_json::from_value(v).ok())
        .collect();
    report.advisory = advisory(&feed, now);
    Ok(report)
}
