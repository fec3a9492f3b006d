use pso_core::domain::Severity;
use pso_core::normalize::normalize;

fn case_variants(s: &str) -> Vec<String> {
    let mut alternating = String::new();
    for (i, c) in s.chars().enumerate() {
        if i % 2 == 0 {
            alternating.extend(c.to_uppercase());
        } else {
            alternating.extend(c.to_lowercase());
        }
    }
    vec![s.to_lowercase(), s.to_uppercase(), alternating]
}

#[test]
fn operational_keywords_win_regardless_of_case_and_context() {
    let wrappers = [("", ""), ("All Systems ", ""), ("status: ", " (verified)"), ("x", "y")];
    for keyword in ["operational", "normal", "good", "ok"] {
        for variant in case_variants(keyword) {
            for (prefix, suffix) in wrappers {
                let raw = format!("{prefix}{variant}{suffix}");
                let s = normalize(&raw);
                assert_eq!(s.severity, Severity::Operational, "raw={raw}");
                assert_eq!(s.label, "Operational ✅");
                assert_eq!(s.raw, raw);
            }
        }
    }
    // Operational is checked first, so lower-priority keywords alongside it do not matter.
    assert_eq!(normalize("Operational after major outage").severity, Severity::Operational);
}

#[test]
fn classes_resolve_in_priority_order() {
    let cases = [
        ("degraded_performance", Severity::Degraded),
        ("Partial Outage", Severity::Degraded),
        ("minor", Severity::Degraded),
        ("MAJOR_OUTAGE", Severity::MajorOutage),
        ("service down", Severity::MajorOutage),
        ("Outage", Severity::MajorOutage),
        ("under_maintenance", Severity::Maintenance),
        ("maintenance with partial impact", Severity::Degraded),
        ("outage during maintenance", Severity::MajorOutage),
    ];
    for (raw, expected) in cases {
        assert_eq!(normalize(raw).severity, expected, "raw={raw}");
    }
    assert_eq!(normalize("under_maintenance").label, "Under Maintenance 🔧");
    assert_eq!(normalize("major_outage").label, "Major Outage 🔴");
    assert_eq!(normalize("degraded").label, "Degraded Performance ⚠️");
}

#[test]
fn unmatched_status_is_unknown_and_capitalized() {
    let s = normalize("investigating issue");
    assert_eq!(s.severity, Severity::Unknown);
    assert_eq!(s.label, "Investigating issue");

    let s = normalize("Service disruption");
    assert_eq!(s.severity, Severity::Unknown);
    assert_eq!(s.label, "Service disruption");
}
