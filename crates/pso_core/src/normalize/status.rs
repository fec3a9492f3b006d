use crate::domain::{Severity, StatusLabel};
use crate::normalize::text::capitalize_first;

// Evaluated in this order; the first class with a matching keyword wins.
const KEYWORD_CLASSES: [(Severity, &[&str]); 4] = [
    (Severity::Operational, &["operational", "normal", "good", "ok"]),
    (Severity::Degraded, &["degraded", "partial", "minor"]),
    (Severity::MajorOutage, &["major", "outage", "down"]),
    (Severity::Maintenance, &["maintenance"]),
];

/// Classify a free-text source status into a canonical severity plus its display label.
///
/// Matching is case-insensitive substring matching. A string hitting several classes resolves to
/// the first class in priority order (Operational, Degraded, MajorOutage, Maintenance). Anything
/// else is `Unknown`, labelled with the raw value with its first character uppercased.
pub fn normalize(raw: &str) -> StatusLabel {
    let lower = raw.to_lowercase();
    let severity = KEYWORD_CLASSES
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|k| lower.contains(k)))
        .map(|(severity, _)| *severity)
        .unwrap_or(Severity::Unknown);

    let label = match severity.fixed_label() {
        Some(l) => l.to_string(),
        None => capitalize_first(raw),
    };

    StatusLabel {
        raw: raw.to_string(),
        severity,
        label,
    }
}

/// Display label for an incident impact classification (`major`, `minor`, ...).
pub fn impact_label(impact: &str) -> String {
    match impact.to_lowercase().as_str() {
        "major" => "Major Outage 🔴".to_string(),
        "degraded" => "Degraded Performance ⚠️".to_string(),
        "maintenance" => "Maintenance 🔧".to_string(),
        "minor" => "Minor Issue 🟡".to_string(),
        _ => capitalize_first(impact),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn earlier_class_wins_ties() {
        assert_eq!(normalize("partial outage").severity, Severity::Degraded);
        assert_eq!(normalize("normal maintenance window").severity, Severity::Operational);
        assert_eq!(normalize("Major outage").severity, Severity::MajorOutage);
    }

    #[test]
    fn unknown_status_keeps_raw_text() {
        let s = normalize("investigating");
        assert_eq!(s.severity, Severity::Unknown);
        assert_eq!(s.label, "Investigating");
        assert_eq!(normalize("").label, "");
    }

    #[test]
    fn impact_labels() {
        assert_eq!(impact_label("MINOR"), "Minor Issue 🟡");
        assert_eq!(impact_label("critical"), "Critical");
    }
}
