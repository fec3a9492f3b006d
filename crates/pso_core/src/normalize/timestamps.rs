use time::format_description::well_known::{Rfc2822, Rfc3339};
use time::macros::format_description;
use time::{Duration, OffsetDateTime, PrimitiveDateTime, UtcOffset};

/// Incidents published within this window before the query are "recent".
pub const RECENCY_WINDOW: Duration = Duration::hours(7 * 24);

/// Parse a source timestamp.
///
/// Accepts RFC 3339 (Statuspage, proxy `lastUpdated`) and RFC 2822 (feed `pubDate`). A small
/// allowlist of zone-less ISO-like forms is read as UTC. Anything else is `None`; no fuzzy parsing.
pub fn parse_source_timestamp(raw: &str) -> Option<OffsetDateTime> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Ok(dt) = OffsetDateTime::parse(trimmed, &Rfc3339) {
        return Some(dt);
    }
    if let Ok(dt) = OffsetDateTime::parse(trimmed, &Rfc2822) {
        return Some(dt);
    }

    let zoneless = [
        format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]"),
        format_description!("[year]-[month]-[day] [hour]:[minute]:[second]"),
        format_description!("[year]-[month]-[day]T[hour]:[minute]"),
    ];
    zoneless
        .iter()
        .find_map(|fmt| PrimitiveDateTime::parse(trimmed, *fmt).ok())
        .map(PrimitiveDateTime::assume_utc)
}

/// True when `published` lies no further than `RECENCY_WINDOW` before `now`.
///
/// Unparseable timestamps are never recent. Future timestamps count as recent.
pub fn is_recent(published: &str, now: OffsetDateTime) -> bool {
    match parse_source_timestamp(published) {
        Some(dt) => now - dt <= RECENCY_WINDOW,
        None => false,
    }
}

/// Render a last-updated timestamp as `YYYY-MM-DD HH:MM:SS UTC`.
///
/// Unparseable input is returned as is.
pub fn format_update_time(raw: &str) -> String {
    let fmt = format_description!("[year]-[month]-[day] [hour]:[minute]:[second] UTC");
    parse_source_timestamp(raw)
        .and_then(|dt| dt.to_offset(UtcOffset::UTC).format(&fmt).ok())
        .unwrap_or_else(|| raw.to_string())
}

/// Render an incident date as `Jan 5, 2026, 14:03 UTC`; unparseable input is returned as is.
pub fn format_incident_date(raw: &str) -> String {
    let fmt = format_description!(
        "[month repr:short] [day padding:none], [year], [hour]:[minute] UTC"
    );
    parse_source_timestamp(raw)
        .and_then(|dt| dt.to_offset(UtcOffset::UTC).format(&fmt).ok())
        .unwrap_or_else(|| raw.to_string())
}

/// Current time as RFC 3339 UTC; used when a source omits its last-updated stamp.
pub fn now_rfc3339_utc(now: OffsetDateTime) -> String {
    now.to_offset(UtcOffset::UTC)
        .format(&Rfc3339)
        .unwrap_or_default()
}
