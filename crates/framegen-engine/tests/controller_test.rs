use framegen_client::{ApiClient, EXAMPLES_PATH, FRAMEWORK_TYPES_PATH, GENERATE_PATH, HttpResponse, UiConfig};
use framegen_engine::controller::{
    EXPORTED, GENERATE_FAILED, GENERATED, NO_SELECTION, NOTHING_TO_EXPORT, TYPES_LOAD_FAILED,
};
use framegen_engine::{ClickTarget, Controller, Error, UiEvent};
use framegen_testing::assertions::{assert_banner_width, assert_export_round_trip};
use framegen_testing::fixtures;
use framegen_testing::{StubReply, StubTransport};
use framegen_types::FormInput;
use std::sync::Arc;
use std::time::{Duration, Instant};

fn form() -> FormInput {
    FormInput {
        industry: "E-commerce".into(),
        purpose: "Reduce churn".into(),
        target_audience: "Store owners".into(),
        complexity: "high".into(),
    }
}

fn later() -> Instant {
    Instant::now() + Duration::from_secs(60)
}

fn reference_stub() -> Arc<StubTransport> {
    Arc::new(
        StubTransport::new()
            .with_reference_catalogs()
            .on_post(GENERATE_PATH, HttpResponse::ok(fixtures::GROWTH_FRAMEWORK_JSON)),
    )
}

async fn started(stub: &Arc<StubTransport>) -> Controller {
    let mut controller = Controller::new(ApiClient::new(stub.clone()), UiConfig::default());
    controller.start().await.unwrap();
    controller
}

async fn generated(stub: &Arc<StubTransport>) -> Controller {
    let mut controller = started(stub).await;
    controller
        .dispatch(UiEvent::SelectType("cyclical".into()))
        .await
        .unwrap();
    controller.dispatch(UiEvent::Submit(form())).await.unwrap();
    controller
}

fn error_message(controller: &Controller) -> Option<String> {
    controller
        .notifications()
        .current_error()
        .map(|t| t.message.clone())
}

fn success_messages(controller: &Controller) -> Vec<String> {
    controller
        .notifications()
        .successes()
        .iter()
        .map(|t| t.message.clone())
        .collect()
}

#[tokio::test]
async fn test_start_loads_both_catalogs() {
    let stub = reference_stub();
    let controller = started(&stub).await;

    assert_eq!(controller.session().types(), &fixtures::type_catalog());
    assert_eq!(controller.session().examples(), &fixtures::example_catalog());
    assert_eq!(controller.session().selected_type(), None);
    assert!(controller.notifications().is_empty());
    assert_eq!(stub.calls_to(FRAMEWORK_TYPES_PATH), 1);
    assert_eq!(stub.calls_to(EXAMPLES_PATH), 1);
}

#[tokio::test]
async fn test_type_catalog_failure_is_shown() {
    let stub = Arc::new(
        StubTransport::new()
            .on_get(FRAMEWORK_TYPES_PATH, HttpResponse::new(500, "boom"))
            .on_get(EXAMPLES_PATH, HttpResponse::ok(fixtures::EXAMPLES_JSON)),
    );
    let mut controller = Controller::new(ApiClient::new(stub.clone()), UiConfig::default());

    let result = controller.start().await;

    assert!(matches!(result, Err(Error::Api(_))));
    assert_eq!(error_message(&controller).as_deref(), Some(TYPES_LOAD_FAILED));
    assert!(controller.session().types().is_empty());
    assert_eq!(controller.session().examples().len(), 5);
}

#[tokio::test]
async fn test_example_catalog_failure_is_silent() {
    let stub = Arc::new(
        StubTransport::new()
            .on_get(FRAMEWORK_TYPES_PATH, HttpResponse::ok(fixtures::FRAMEWORK_TYPES_JSON)),
    );
    stub.set("GET", EXAMPLES_PATH, StubReply::Unreachable("connection refused".into()));
    let mut controller = Controller::new(ApiClient::new(stub.clone()), UiConfig::default());

    controller.start().await.unwrap();

    assert!(controller.notifications().is_empty());
    assert!(controller.session().examples().is_empty());
    assert_eq!(controller.session().types().len(), 5);
}

#[tokio::test]
async fn test_selection_is_exclusive_and_reveals_form_later() {
    let stub = reference_stub();
    let mut controller = started(&stub).await;

    controller
        .dispatch(UiEvent::SelectType("linear".into()))
        .await
        .unwrap();
    controller
        .dispatch(UiEvent::SelectType("matrix".into()))
        .await
        .unwrap();

    assert_eq!(controller.session().selected_type(), Some("matrix"));
    assert!(!controller.page().form_visible);
    assert!(controller.next_deadline().is_some());

    controller.tick(later());
    assert!(controller.page().form_visible);
}

#[tokio::test]
async fn test_selecting_unknown_type_is_rejected() {
    let stub = reference_stub();
    let mut controller = started(&stub).await;
    controller
        .dispatch(UiEvent::SelectType("linear".into()))
        .await
        .unwrap();

    let result = controller
        .dispatch(UiEvent::SelectType("spiral".into()))
        .await;

    assert!(matches!(result, Err(Error::UnknownType(ref key)) if key == "spiral"));
    assert_eq!(controller.session().selected_type(), Some("linear"));
    assert!(error_message(&controller).unwrap().contains("spiral"));
}

#[tokio::test]
async fn test_submit_without_selection_sends_nothing() {
    let stub = reference_stub();
    let mut controller = started(&stub).await;

    let result = controller.dispatch(UiEvent::Submit(form())).await;

    assert!(matches!(result, Err(Error::NoSelection)));
    assert_eq!(error_message(&controller).as_deref(), Some(NO_SELECTION));
    assert_eq!(stub.calls_to(GENERATE_PATH), 0);
    assert!(!controller.page().loading_visible);
}

#[tokio::test]
async fn test_submit_posts_selected_type_and_form() {
    let stub = reference_stub();
    let controller = generated(&stub).await;

    let post = stub
        .calls()
        .into_iter()
        .find(|c| c.method == "POST")
        .unwrap();
    assert_eq!(post.path, GENERATE_PATH);
    assert_eq!(
        post.body.unwrap(),
        serde_json::json!({
            "type": "cyclical",
            "industry": "E-commerce",
            "purpose": "Reduce churn",
            "target_audience": "Store owners",
            "complexity": "high"
        })
    );

    let page = controller.page();
    assert!(page.results_visible);
    assert!(!page.loading_visible);
    assert!(!page.form_visible);
    assert_eq!(success_messages(&controller), vec![GENERATED.to_string()]);
}

#[tokio::test]
async fn test_generated_framework_is_normalized() {
    let stub = reference_stub();
    let controller = generated(&stub).await;

    let current = controller.session().current().unwrap();
    assert_eq!(current, &fixtures::growth_framework());
    assert_eq!(current.best_practices, vec!["Measure every stage of the loop"]);
    assert_eq!(current.elements[0].activities, vec!["Publish weekly content"]);
    assert_eq!(current.elements.len(), 3);
}

#[tokio::test]
async fn test_failed_generation_keeps_previous_framework() {
    let stub = reference_stub();
    let mut controller = generated(&stub).await;
    stub.set(
        "POST",
        GENERATE_PATH,
        StubReply::Respond(HttpResponse::new(500, r#"{"error": "LLM unavailable"}"#)),
    );

    let result = controller.dispatch(UiEvent::Submit(form())).await;

    assert!(matches!(result, Err(Error::Api(_))));
    assert_eq!(error_message(&controller).as_deref(), Some(GENERATE_FAILED));
    assert_eq!(
        controller.session().current().unwrap().name,
        "Growth & Retention!"
    );
    let page = controller.page();
    assert!(!page.loading_visible);
    assert!(!page.results_visible);
    assert!(!page.form_visible);
}

#[tokio::test]
async fn test_framework_of_unknown_type_is_rejected() {
    let stub = reference_stub();
    let body = fixtures::GROWTH_FRAMEWORK_JSON.replace("\"cyclical\"", "\"spiral\"");
    stub.set("POST", GENERATE_PATH, StubReply::Respond(HttpResponse::ok(body)));
    let mut controller = started(&stub).await;
    controller
        .dispatch(UiEvent::SelectType("cyclical".into()))
        .await
        .unwrap();

    let result = controller.dispatch(UiEvent::Submit(form())).await;

    assert!(matches!(result, Err(Error::UnknownType(ref key)) if key == "spiral"));
    assert!(controller.session().current().is_none());
    assert_eq!(error_message(&controller).as_deref(), Some(GENERATE_FAILED));
}

#[tokio::test]
async fn test_second_generation_replaces_current() {
    let stub = reference_stub();
    let mut controller = generated(&stub).await;
    stub.set(
        "POST",
        GENERATE_PATH,
        StubReply::Respond(HttpResponse::ok(fixtures::LAUNCH_FRAMEWORK_JSON)),
    );

    controller.dispatch(UiEvent::Regenerate).await.unwrap();
    controller
        .dispatch(UiEvent::SelectType("linear".into()))
        .await
        .unwrap();
    controller.dispatch(UiEvent::Submit(form())).await.unwrap();

    assert_eq!(
        controller.session().current(),
        Some(&fixtures::launch_framework())
    );
    assert_eq!(stub.calls_to(GENERATE_PATH), 2);
    assert_eq!(success_messages(&controller), vec![GENERATED.to_string(); 2]);
}

#[tokio::test]
async fn test_regenerate_returns_to_form_with_selection() {
    let stub = reference_stub();
    let mut controller = generated(&stub).await;

    controller.dispatch(UiEvent::Regenerate).await.unwrap();

    assert!(controller.page().form_visible);
    assert!(!controller.page().results_visible);
    assert_eq!(controller.session().selected_type(), Some("cyclical"));
}

#[tokio::test]
async fn test_export_without_framework_downloads_nothing() {
    let stub = reference_stub();
    let mut controller = started(&stub).await;

    let result = controller.dispatch(UiEvent::Export).await;

    assert!(matches!(result, Err(Error::NothingToExport)));
    assert_eq!(error_message(&controller).as_deref(), Some(NOTHING_TO_EXPORT));
    assert!(controller.pending_downloads().is_empty());
    controller.tick(later());
    assert!(controller.pending_downloads().is_empty());
}

#[tokio::test]
async fn test_export_delivers_json_then_text() {
    let stub = reference_stub();
    let mut controller = generated(&stub).await;

    controller.dispatch(UiEvent::Export).await.unwrap();

    let first = controller.take_downloads();
    assert_eq!(first.len(), 1);
    assert_eq!(first[0].filename, "growth___retention__framework.json");
    assert_eq!(first[0].mime, "application/json");
    assert!(success_messages(&controller).contains(&EXPORTED.to_string()));

    controller.tick(later());
    let second = controller.take_downloads();
    assert_eq!(second.len(), 1);
    assert_eq!(second[0].filename, "growth___retention__framework.txt");
    assert_eq!(second[0].mime, "text/plain");
}

#[tokio::test]
async fn test_exported_json_round_trips() -> anyhow::Result<()> {
    let stub = reference_stub();
    let mut controller = generated(&stub).await;

    controller.dispatch(UiEvent::Export).await?;
    let json = controller.take_downloads().remove(0);

    let exported: serde_json::Value = serde_json::from_str(&json.contents)?;
    let original: serde_json::Value =
        serde_json::from_str(&fixtures::growth_framework_listified_json())?;
    assert_export_round_trip(&exported, &original)?;
    assert_eq!(exported["framework_type_info"]["name"], "Cyclical");
    Ok(())
}

#[tokio::test]
async fn test_exported_text_report() -> anyhow::Result<()> {
    let stub = reference_stub();
    let mut controller = generated(&stub).await;

    controller.dispatch(UiEvent::Export).await?;
    controller.settle().await;
    let text = controller
        .take_downloads()
        .into_iter()
        .find(|d| d.filename.ends_with(".txt"))
        .unwrap();

    assert_banner_width(&text.contents, "Growth & Retention!", "Cyclical")?;
    assert!(text.contents.contains("   • Publish weekly content\n"));
    assert!(text.contents.contains("• Measure every stage of the loop\n"));
    assert!(text.contents.contains("3. Retain\n"));
    Ok(())
}

#[tokio::test]
async fn test_example_modal_open_and_close() {
    let stub = reference_stub();
    let mut controller = started(&stub).await;

    controller
        .dispatch(UiEvent::OpenExample("matrix".into()))
        .await
        .unwrap();
    assert_eq!(controller.page().modal.as_deref(), Some("matrix"));

    controller
        .dispatch(UiEvent::ModalClick(ClickTarget::Body))
        .await
        .unwrap();
    assert_eq!(controller.page().modal.as_deref(), Some("matrix"));

    controller
        .dispatch(UiEvent::ModalClick(ClickTarget::Backdrop))
        .await
        .unwrap();
    assert_eq!(controller.page().modal, None);

    controller
        .dispatch(UiEvent::OpenExample("linear".into()))
        .await
        .unwrap();
    controller.dispatch(UiEvent::CloseModal).await.unwrap();
    assert_eq!(controller.page().modal, None);
}

#[tokio::test]
async fn test_example_modal_for_unknown_type() {
    let stub = reference_stub();
    let mut controller = started(&stub).await;

    let result = controller
        .dispatch(UiEvent::OpenExample("spiral".into()))
        .await;

    assert!(matches!(result, Err(Error::UnknownExample(_))));
    assert_eq!(controller.page().modal, None);
    assert!(error_message(&controller).is_some());
}

#[tokio::test]
async fn test_toasts_expire_on_tick() {
    let stub = reference_stub();
    let mut controller = generated(&stub).await;
    let _ = controller.dispatch(UiEvent::Export).await;
    let _ = controller
        .dispatch(UiEvent::OpenExample("spiral".into()))
        .await;

    assert_eq!(controller.notifications().visible().count(), 3);

    controller
        .dispatch(UiEvent::Tick(Instant::now() + Duration::from_millis(3500)))
        .await
        .unwrap();
    assert!(controller.notifications().successes().is_empty());
    assert!(controller.notifications().current_error().is_some());

    controller.tick(later());
    assert!(controller.notifications().is_empty());
    assert_eq!(controller.next_deadline(), None);
}
