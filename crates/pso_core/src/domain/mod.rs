use serde::{Deserialize, Serialize};

/// A status source known to the registry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlatformDescriptor {
    pub id: String,
    pub name: String,
    pub url: String,
    pub description: String,
}

/// Canonical severity classes every source status is folded into.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Severity {
    Operational,
    Degraded,
    MajorOutage,
    Maintenance,
    Unknown,
}

impl Severity {
    /// Fixed display label (with glyph). `Unknown` has none; its label is derived from the raw
    /// value.
    pub fn fixed_label(self) -> Option<&'static str> {
        match self {
            Severity::Operational => Some("Operational ✅"),
            Severity::Degraded => Some("Degraded Performance ⚠️"),
            Severity::MajorOutage => Some("Major Outage 🔴"),
            Severity::Maintenance => Some("Under Maintenance 🔧"),
            Severity::Unknown => None,
        }
    }
}

/// Result of normalizing one raw status string.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StatusLabel {
    pub raw: String,
    pub severity: Severity,
    pub label: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RegionStatus {
    /// Internal region code as reported by the source (e.g. `asiaPacific`).
    pub code: String,
    /// Raw status text for this service in this region.
    pub status: String,
}

/// A service or a group of services.
///
/// Grouping is a property of the entry: a group is an entry with non-empty `children`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ServiceEntry {
    pub name: String,
    pub status: StatusLabel,
    pub description: Option<String>,
    pub children: Vec<ServiceEntry>,
    pub regions: Vec<RegionStatus>,
    /// Uptime as rendered by the source (`"99.98%"`, `"99.9"`); formatting is the adapter's call.
    pub uptime: Option<String>,
    pub subcomponents: Option<u64>,
}

impl ServiceEntry {
    pub fn new(name: impl Into<String>, status: StatusLabel) -> Self {
        Self {
            name: name.into(),
            status,
            description: None,
            children: Vec::new(),
            regions: Vec::new(),
            uptime: None,
            subcomponents: None,
        }
    }

    pub fn with_description(mut self, description: Option<String>) -> Self {
        self.description = description.filter(|d| !d.trim().is_empty());
        self
    }

    pub fn with_uptime(mut self, uptime: Option<String>) -> Self {
        self.uptime = uptime;
        self
    }

    pub fn is_group(&self) -> bool {
        !self.children.is_empty()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct IncidentUpdate {
    pub time: Option<String>,
    pub title: Option<String>,
    pub status: Option<String>,
    pub message: Option<String>,
}

/// Read-only snapshot of one incident as reported by a source.
///
/// Never merged or deduplicated across sources. Which fields are populated depends on the adapter.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Incident {
    pub title: Option<String>,
    /// Source-formatted date shown as a `<date>: <title>` prefix.
    pub date: Option<String>,
    pub description: Option<String>,
    /// Already-truncated long-form summary.
    pub summary: Option<String>,
    pub impact: Option<String>,
    pub status: Option<String>,
    /// Publication timestamp (RFC 3339 or RFC 2822) as reported by the source.
    pub published_at: Option<String>,
    pub products: Option<String>,
    pub locations: Option<String>,
    pub affects: Option<String>,
    pub duration: Option<String>,
    pub updates: Vec<IncidentUpdate>,
    pub link: Option<String>,
}

impl Incident {
    pub fn latest_update(&self) -> Option<&IncidentUpdate> {
        self.updates.first()
    }
}

/// Which bucket an incident list was selected into; drives the heading and per-entry rendering.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum IncidentHeading {
    /// Recent incidents with an explicit active status.
    Active,
    /// Source-declared current incidents.
    ActiveIncidents,
    RecentResolved,
    /// Nothing recent; most recent entries of any age.
    RecentActivity,
    Recent,
}

impl IncidentHeading {
    pub fn title(self) -> &'static str {
        match self {
            IncidentHeading::Active => "🚨 ACTIVE INCIDENTS:",
            IncidentHeading::ActiveIncidents => "Active Incidents:",
            IncidentHeading::RecentResolved => "Recent Resolved Incidents:",
            IncidentHeading::RecentActivity => "Recent Activity:",
            IncidentHeading::Recent => "Recent Incidents:",
        }
    }
}

/// Key used for the latest-update line of snapshot entries. Sources differ in capitalization.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum UpdateLabel {
    #[default]
    Sentence,
    Title,
}

impl UpdateLabel {
    pub fn text(self) -> &'static str {
        match self {
            UpdateLabel::Sentence => "Latest update",
            UpdateLabel::Title => "Latest Update",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct IncidentSection {
    pub heading: IncidentHeading,
    pub entries: Vec<Incident>,
    #[serde(default)]
    pub update_label: UpdateLabel,
}

impl IncidentSection {
    pub fn new(heading: IncidentHeading, entries: Vec<Incident>) -> Self {
        Self {
            heading,
            entries,
            update_label: UpdateLabel::default(),
        }
    }

    pub fn with_update_label(mut self, label: UpdateLabel) -> Self {
        self.update_label = label;
        self
    }
}

/// How the service list of a report is laid out.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ServiceLayout {
    Components,
    CoreComponents,
    /// Service × region matrix.
    RegionMatrix,
    /// Fixed catalog with per-entry descriptions, used when a source exposes no structured list.
    FixedCatalog,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlatformRef {
    pub id: String,
    pub name: String,
}

impl From<&PlatformDescriptor> for PlatformRef {
    fn from(p: &PlatformDescriptor) -> Self {
        Self {
            id: p.id.clone(),
            name: p.name.clone(),
        }
    }
}

/// Normalized status report for one platform.
///
/// `overall` always reflects the source's own top-level status. It is never derived from
/// `services`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Report {
    pub platform: PlatformRef,
    pub overall: StatusLabel,
    pub services: Vec<ServiceEntry>,
    pub layout: ServiceLayout,
    pub incidents: Option<IncidentSection>,
    /// Render the incident section before services.
    pub incidents_first: bool,
    /// Raw last-updated timestamp.
    pub last_updated: String,
    /// Short quick-mode suffix, e.g. `Active Issues`.
    pub advisory: Option<String>,
    /// Set when the source reported trouble producing its own answer.
    pub error: Option<String>,
}

impl Report {
    pub fn new(
        platform: PlatformRef,
        overall: StatusLabel,
        last_updated: impl Into<String>,
    ) -> Self {
        Self {
            platform,
            overall,
            services: Vec::new(),
            layout: ServiceLayout::Components,
            incidents: None,
            incidents_first: false,
            last_updated: last_updated.into(),
            advisory: None,
            error: None,
        }
    }
}
