use pso_core::domain::{PlatformDescriptor, Report, ServiceEntry};
use pso_core::error::AppError;
use serde::de::IgnoredAny;
use serde_json::Value;
use time::OffsetDateTime;

use super::{decode, ProxyPayload, ProxyService};

/// Rebuild the parent/child tree from LinkedIn's flat list, where children follow their parent
/// and carry `isChild`. A child with no preceding parent stays top-level.
pub(crate) fn nest_children(services: &[ProxyService]) -> Vec<ServiceEntry> {
    let mut out: Vec<ServiceEntry> = Vec::new();
    for s in services {
        let entry = s.entry();
        match out.last_mut() {
            Some(parent) if s.is_child.unwrap_or(false) => parent.children.push(entry),
            _ => out.push(entry),
        }
    }
    out
}

pub fn build(
    platform: &PlatformDescriptor,
    payload: Value,
    now: OffsetDateTime,
) -> Result<Report, AppError> {
    let mut data: ProxyPayload<IgnoredAny> = decode(platform, payload)?;
    let mut report = data.report(platform, now);
    report.services = nest_children(&data.services());
    Ok(report)
}
