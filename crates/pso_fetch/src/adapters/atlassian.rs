use pso_core::domain::{PlatformDescriptor, Report};
use pso_core::error::AppError;
use serde::de::IgnoredAny;
use serde_json::Value;
use time::OffsetDateTime;

use super::{decode, ProxyPayload};

/// Atlassian reports product-level components only; each service also carries its own page URL,
/// which is not rendered.
pub fn build(
    platform: &PlatformDescriptor,
    payload: Value,
    now: OffsetDateTime,
) -> Result<Report, AppError> {
    let mut data: ProxyPayload<IgnoredAny> = decode(platform, payload)?;
    let mut report = data.report(platform, now);
    report.services = data.services().iter().map(|s| s.entry()).collect();
    Ok(report)
}
