use pso_core::registry::Registry;

#[test]
fn lists_in_registration_order_and_last_registration_wins() {
    let mut r = Registry::new();
    assert!(r.is_empty());
    r.register("b", "Bee", "http://b", "second letter");
    r.register("a", "Ay", "http://a", "first letter");
    r.register("b", "Bee v2", "http://b2", "replaced");

    assert_eq!(r.len(), 2);
    let ids: Vec<&str> = r.list_all().iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["b", "a"]);

    let b = r.lookup("b").expect("b");
    assert_eq!(b.name, "Bee v2");
    assert_eq!(b.url, "http://b2");
    assert!(r.lookup("c").is_none());
}

#[test]
fn builtin_registry_has_the_fixed_platform_table() {
    let r = Registry::builtin("https://proxy.example");
    assert_eq!(r.len(), 23);
    let ids: Vec<&str> = r.list_all().iter().map(|p| p.id.as_str()).collect();
    let mut sorted = ids.clone();
    sorted.sort();
    assert_eq!(ids, sorted, "builtin table is registered in id order");

    let gcp = r.lookup("gcp").expect("gcp");
    assert_eq!(gcp.name, "Google Cloud Platform");
    assert_eq!(gcp.url, "https://proxy.example/gcp");
    assert_eq!(
        r.lookup("slack").map(|p| p.url.as_str()),
        Some("https://status.slack.com/api/v2.0.0/current")
    );
}
