use crate::domain::{
    Incident, IncidentHeading, IncidentSection, Report, ServiceEntry, ServiceLayout, UpdateLabel,
};
use crate::normalize::impact_label;
use crate::normalize::text::region_display_name;
use crate::normalize::timestamps::{format_incident_date, format_update_time};
use crate::registry::Registry;

/// Separator between per-platform lines in the aggregate view.
pub const ALL_PLATFORMS_DELIMITER: &str = "\n\n---\n\n";

pub fn not_found_text(id: &str) -> String {
    format!("Platform '{id}' not found. Use 'status list' to see available platforms.")
}

pub fn unavailable_text(name: &str) -> String {
    format!(
        "Unable to fetch real-time status for {name}. \
         The status API might be unavailable or the format has changed."
    )
}

pub fn quick_unavailable_text(name: &str) -> String {
    format!("{name}: Unable to fetch status")
}

/// Single-line quick view: `<name>: <label>` plus an optional advisory suffix.
pub fn render_quick(report: &Report) -> String {
    match &report.advisory {
        Some(a) => format!("{}: {} ({a})", report.platform.name, report.overall.label),
        None => format!("{}: {}", report.platform.name, report.overall.label),
    }
}

/// Multi-line detailed view.
///
/// Section order: header, overall, (incidents when `incidents_first`), services, incidents,
/// last-updated. Empty sections render an explicit placeholder line; nothing here fails on absent
/// optional fields.
pub fn render_detailed(report: &Report) -> String {
    let mut out = String::new();
    out.push_str(&format!("{} Status:\n", report.platform.name));
    out.push_str(&format!("Overall: {}\n", report.overall.label));
    if let Some(err) = &report.error {
        out.push_str(&format!("Source note: {err}\n"));
    }
    out.push('\n');

    if report.incidents_first {
        push_incidents(&mut out, report.incidents.as_ref());
        out.push('\n');
        push_services(&mut out, report);
    } else {
        push_services(&mut out, report);
        out.push('\n');
        push_incidents(&mut out, report.incidents.as_ref());
    }

    out.push('\n');
    out.push_str(&format!(
        "Last Updated: {}",
        format_update_time(&report.last_updated)
    ));
    out
}

fn push_services(out: &mut String, report: &Report) {
    match report.layout {
        ServiceLayout::RegionMatrix => push_region_matrix(out, &report.services),
        ServiceLayout::FixedCatalog => {
            out.push_str("Components:\n");
            for s in &report.services {
                out.push_str(&format!("- {}: {}\n", s.name, s.status.label));
                if let Some(d) = &s.description {
                    out.push_str(&format!("  {d}\n"));
                }
            }
        }
        ServiceLayout::Components | ServiceLayout::CoreComponents => {
            if report.services.is_empty() {
                out.push_str("No component information available.\n");
                return;
            }
            if report.layout == ServiceLayout::CoreComponents {
                out.push_str("Core Components:\n");
            } else {
                out.push_str("Components:\n");
            }
            for s in &report.services {
                push_service_entry(out, s, 0);
            }
        }
    }
}

fn push_service_entry(out: &mut String, entry: &ServiceEntry, depth: usize) {
    let indent = "  ".repeat(depth);
    let mut line = format!("{indent}- {}: {}", entry.name, entry.status.label);
    if let Some(u) = &entry.uptime {
        line.push_str(&format!(" (Uptime: {u})"));
    }
    if let Some(n) = entry.subcomponents {
        line.push_str(&format!(" ({n} subcomponents)"));
    }
    out.push_str(&line);
    out.push('\n');
    if let Some(d) = &entry.description {
        out.push_str(&format!("{indent}  Description: {d}\n"));
    }
    for child in &entry.children {
        push_service_entry(out, child, depth + 1);
    }
}

fn push_region_matrix(out: &mut String, services: &[ServiceEntry]) {
    if services.is_empty() {
        out.push_str("No detailed service information available.\n");
        return;
    }
    out.push_str("Service Status by Region:\n");
    for s in services {
        out.push_str(&format!("\n{}:\n", s.name));
        for r in &s.regions {
            out.push_str(&format!("  {}: {}\n", region_display_name(&r.code), r.status));
        }
    }
}

fn push_incidents(out: &mut String, section: Option<&IncidentSection>) {
    let Some(section) = section.filter(|s| !s.entries.is_empty()) else {
        out.push_str("No recent incidents reported.\n");
        return;
    };

    out.push_str(section.heading.title());
    out.push('\n');
    for (idx, inc) in section.entries.iter().enumerate() {
        match section.heading {
            IncidentHeading::Active
            | IncidentHeading::RecentResolved
            | IncidentHeading::RecentActivity => {
                if idx > 0 {
                    out.push('\n');
                }
                push_feed_incident(out, inc, section.heading)
            }
            IncidentHeading::ActiveIncidents | IncidentHeading::Recent => {
                push_snapshot_incident(out, inc, section.update_label)
            }
        }
    }
}

// Feed-style entries: impact label, publication date, optional summary and link.
fn push_feed_incident(out: &mut String, inc: &Incident, heading: IncidentHeading) {
    let title = inc.title.as_deref().unwrap_or("No title");
    if heading == IncidentHeading::RecentResolved {
        out.push_str(&format!("- {title} (RESOLVED)\n"));
    } else {
        out.push_str(&format!("- {title}\n"));
    }
    if let Some(impact) = &inc.impact {
        out.push_str(&format!("  Impact: {}\n", impact_label(impact)));
    }
    if let Some(published) = &inc.published_at {
        let key = if heading == IncidentHeading::Active {
            "Started"
        } else {
            "Date"
        };
        out.push_str(&format!("  {key}: {}\n", format_incident_date(published)));
    }
    if heading == IncidentHeading::RecentResolved {
        if let Some(summary) = &inc.summary {
            out.push_str(&format!("  Summary: {summary}\n"));
        }
    }
    if let Some(link) = &inc.link {
        out.push_str(&format!("  Details: {link}\n"));
    }
}

// Snapshot-style entries: whatever detail fields the source provided, in a fixed order.
fn push_snapshot_incident(out: &mut String, inc: &Incident, update_label: UpdateLabel) {
    let title = inc.title.as_deref().unwrap_or("No title");
    match &inc.date {
        Some(date) => out.push_str(&format!("- {date}: {title}\n")),
        None => out.push_str(&format!("- {title}\n")),
    }

    let fields = [
        ("Impact", &inc.impact),
        ("Description", &inc.description),
        ("Affected Products", &inc.products),
        ("Affected Locations", &inc.locations),
        ("Affects", &inc.affects),
        ("Duration", &inc.duration),
        ("Status", &inc.status),
    ];
    for (key, value) in fields {
        if let Some(v) = value {
            out.push_str(&format!("  {key}: {v}\n"));
        }
    }

    if let Some(update) = inc.latest_update() {
        let text = [update.status.as_deref(), update.message.as_deref()]
            .into_iter()
            .flatten()
            .collect::<Vec<_>>()
            .join(" ");
        out.push_str(&format!("  {}: {text}\n", update_label.text()));
        if let Some(t) = &update.time {
            out.push_str(&format!("  Time: {t}\n"));
        }
    }
    if let Some(link) = &inc.link {
        out.push_str(&format!("  Details: {link}\n"));
    }
}

/// Listing of every registered platform with its invocation hint.
pub fn render_platform_list(registry: &Registry) -> String {
    let mut out = String::from("Available Platforms:\n\n");
    for p in registry.list_all() {
        out.push_str(&format!("- {} (use: status --{})\n", p.name, p.id));
        out.push_str(&format!("  {}\n", p.description));
    }
    out
}

/// Aggregate view over quick lines, which must already be in registry order.
pub fn render_all(lines: &[String]) -> String {
    format!(
        "Status for All Platforms:\n\n{}",
        lines.join(ALL_PLATFORMS_DELIMITER)
    )
}
