use pso_core::normalize::text::{region_display_name, truncate_summary, SUMMARY_MAX_CHARS};
use pso_core::normalize::timestamps::{is_recent, RECENCY_WINDOW};
use time::format_description::well_known::{Rfc2822, Rfc3339};
use time::macros::datetime;
use time::Duration;

#[test]
fn recency_window_boundary_is_seven_days() {
    let now = datetime!(2026-03-20 12:00:00 UTC);
    let just_inside = now - RECENCY_WINDOW + Duration::seconds(1);
    let just_outside = now - RECENCY_WINDOW - Duration::seconds(1);

    assert!(is_recent(&just_inside.format(&Rfc3339).expect("fmt"), now));
    assert!(!is_recent(&just_outside.format(&Rfc3339).expect("fmt"), now));

    // Same boundary through the feed date format.
    assert!(is_recent(&just_inside.format(&Rfc2822).expect("fmt"), now));
    assert!(!is_recent(&just_outside.format(&Rfc2822).expect("fmt"), now));
}

#[test]
fn unparseable_publication_dates_are_not_recent() {
    let now = datetime!(2026-03-20 12:00:00 UTC);
    assert!(!is_recent("", now));
    assert!(!is_recent("last Tuesday", now));
}

#[test]
fn summary_truncation_at_150_characters() {
    let exact = "a".repeat(SUMMARY_MAX_CHARS);
    assert_eq!(truncate_summary(&exact), exact);

    let long = "b".repeat(SUMMARY_MAX_CHARS + 1);
    let out = truncate_summary(&long);
    assert_eq!(out, format!("{}...", "b".repeat(150)));
}

#[test]
fn region_codes_map_to_display_names() {
    assert_eq!(region_display_name("asiaPacific"), "Asia Pacific");
    assert_eq!(region_display_name("multiRegions"), "Multi-regions");
    assert_eq!(region_display_name("middleEast"), "Middle East");
    assert_eq!(region_display_name("us-central1"), "us-central1");
    assert_eq!(region_display_name("AsiaPacific"), "AsiaPacific");
}
