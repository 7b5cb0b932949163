use framegen_testing::assertions::count_occurrences;
use framegen_testing::{StubServer, TestWorld};

#[test]
fn test_types_lists_every_type_in_catalog_order() {
    let server = StubServer::reference().expect("Failed to start stub server");
    let world = TestWorld::new().with_api_url(server.url());

    let result = world.run(&["types"]).expect("Failed to run types");

    assert!(result.success(), "types failed: {}", result.stderr);
    let keys: Vec<_> = ["linear", "non_linear", "cyclical", "hierarchical", "matrix"]
        .iter()
        .map(|k| result.stdout.find(&format!("   {}", k)).expect(k))
        .collect();
    assert!(keys.windows(2).all(|w| w[0] < w[1]), "order: {:?}", keys);
    assert!(result.stdout.contains("Orthogonal Axes"));
}

#[test]
fn test_types_json_carries_icons() -> anyhow::Result<()> {
    let server = StubServer::reference()?;
    let world = TestWorld::new().with_api_url(server.url());

    let result = world.run(&["types", "--format", "json"])?;
    assert!(result.success(), "types failed: {}", result.stderr);

    let json = result.json()?;
    let types = json["content"]["types"].as_array().expect("types array");
    assert_eq!(types.len(), 5);
    assert_eq!(types[2]["key"], "cyclical");
    assert_eq!(types[2]["icon"], "fas fa-sync-alt");
    assert_eq!(types[2]["selected"], false);
    Ok(())
}

#[test]
fn test_types_html_renders_cards() -> anyhow::Result<()> {
    let server = StubServer::reference()?;
    let world = TestWorld::new().with_api_url(server.url());

    let result = world.run(&["types", "--format", "html"])?;
    assert!(result.success(), "types failed: {}", result.stderr);

    assert_eq!(
        count_occurrences(&result.stdout, r#"class="framework-type-card""#),
        5
    );
    assert!(result.stdout.contains(r#"<i class="card-icon fas fa-border-all"></i>"#));
    assert!(!result.stdout.contains("selected"));
    Ok(())
}

#[test]
fn test_unreachable_api_reports_type_load_failure() {
    let world = TestWorld::new().with_api_url("http://127.0.0.1:9");

    let result = world.run(&["types"]).expect("Failed to run types");

    assert!(!result.success());
    assert!(
        result.stderr.contains("Error: Failed to load framework types"),
        "stderr: {}",
        result.stderr
    );
}

#[test]
fn test_examples_gallery() {
    let server = StubServer::reference().expect("Failed to start stub server");
    let world = TestWorld::new().with_api_url(server.url());

    let result = world.run(&["examples"]).expect("Failed to run examples");

    assert!(result.success(), "examples failed: {}", result.stderr);
    assert!(result.stdout.contains("Eisenhower Matrix"));
    assert!(result.stdout.contains("Plan → Do → Check → Act"));
}

#[test]
fn test_examples_show_opens_dialog() {
    let server = StubServer::reference().expect("Failed to start stub server");
    let world = TestWorld::new().with_api_url(server.url());

    let result = world
        .run(&["examples", "--show", "hierarchical"])
        .expect("Failed to run examples");

    assert!(result.success(), "examples failed: {}", result.stderr);
    assert!(result.stdout.starts_with("Maslow's Hierarchy of Needs\n"));
    assert!(result.stdout.contains("[Hierarchical Framework]"));
    assert!(result.stdout.contains("  5. Self-Actualization"));
    assert!(result.stdout.contains("Ideal Structure: 3-7 tiers"));
}

#[test]
fn test_examples_show_unknown_type_fails() {
    let server = StubServer::reference().expect("Failed to start stub server");
    let world = TestWorld::new().with_api_url(server.url());

    let result = world
        .run(&["examples", "--show", "spiral"])
        .expect("Failed to run examples");

    assert!(!result.success());
    assert!(
        result.stderr.contains("Error: No example available for 'spiral'"),
        "stderr: {}",
        result.stderr
    );
}
