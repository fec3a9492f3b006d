use pso_core::domain::{PlatformDescriptor, Report, ServiceEntry, ServiceLayout};
use pso_core::error::AppError;
use pso_core::normalize::normalize;
use serde_json::Value;
use time::OffsetDateTime;

use super::summary::SummaryDocument;

/// Fallback catalog shown when the summary carries no component list: (name, description).
pub const GITHUB_CATALOG: [(&str, &str); 10] = [
    ("API Requests", "Status for GitHub APIs"),
    ("Actions", "Status of workflows and orchestration for GitHub Actions"),
    ("Codespaces", "Status of orchestration and compute for GitHub Codespaces"),
    ("Copilot", "Status of AI-powered code completion service"),
    ("Git Operations", "Performance of git operations (clones, pulls, pushes)"),
    ("Issues", "Status of requests for Issues on GitHub.com"),
    ("Packages", "Status of API requests and webhook delivery for GitHub Packages"),
    ("Pages", "Status of frontend app servers and API for Pages builds"),
    ("Pull Requests", "Status of requests for Pull Requests on GitHub.com"),
    ("Webhooks", "Status of real-time HTTP callbacks"),
];

fn catalog_entries() -> Vec<ServiceEntry> {
    GITHUB_CATALOG
        .iter()
        .map(|(name, description)| {
            ServiceEntry::new(*name, normalize("Unknown"))
                .with_description(Some(description.to_string()))
        })
        .collect()
}

pub fn build(
    platform: &PlatformDescriptor,
    payload: Value,
    now: OffsetDateTime,
) -> Result<Report, AppError> {
    let doc = SummaryDocument::parse(platform, payload)?;
    let mut report = doc.report(platform, now, true);
    match doc.services() {
        Some(services) => report.services = services,
        None => {
            report.layout = ServiceLayout::FixedCatalog;
            report.services = catalog_entries();
        }
    }
    report.incidents = doc.incidents();
    Ok(report)
}
