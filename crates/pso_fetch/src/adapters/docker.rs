use pso_core::domain::{PlatformDescriptor, Report};
use pso_core::error::AppError;
use serde::de::IgnoredAny;
use serde_json::Value;
use time::OffsetDateTime;

use super::{decode, ProxyPayload};

pub fn build(
    platform: &PlatformDescriptor,
    payload: Value,
    now: OffsetDateTime,
) -> Result<Report, AppError> {
    let mut data: ProxyPayload<IgnoredAny> = decode(platform, payload)?;
    let mut report = data.report(platform, now);
    report.services = data
        .services()
        .into_iter()
        .map(|s| {
            let description = s.description.clone();
            s.entry().with_description(description)
        })
        .collect();
    Ok(report)
}
