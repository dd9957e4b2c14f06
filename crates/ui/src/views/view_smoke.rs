use super::test_harness::setup_view_harness;
use crate::views::PROGRESS_ANCHOR_ID;

#[tokio::test(flavor = "current_thread")]
async fn progress_view_smoke_renders_initial_value() {
    let mut harness = setup_view_harness("Upload", 37, 1);
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains(&format!("id=\"{PROGRESS_ANCHOR_ID}\"")), "missing anchor in {html}");
    assert!(html.contains("Upload"), "missing title in {html}");
    assert!(html.contains("37%"), "missing label in {html}");
    assert!(html.contains("width: 37%;"), "missing bar width in {html}");
    assert!(html.contains("data-state=\"partial\""), "missing state in {html}");
    assert!(html.contains("Not changed yet"), "missing updated label in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn progress_view_smoke_rerenders_after_advance() {
    let mut harness = setup_view_harness("Upload", 10, 5);
    harness.rebuild();

    harness.act(|ctx| {
        ctx.advance();
    });
    let html = harness.render();

    assert!(html.contains("15%"), "missing advanced label in {html}");
    assert!(html.contains("Updated 22:13:20 UTC"), "missing timestamp in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn progress_view_smoke_clamps_at_boundaries() {
    let mut harness = setup_view_harness("Upload", 98, 1);
    harness.rebuild();

    harness.act(|ctx| {
        for _ in 0..150 {
            ctx.advance();
        }
    });
    let html = harness.render();
    assert!(html.contains("100%"), "missing full label in {html}");
    assert!(html.contains("data-state=\"complete\""), "missing complete state in {html}");

    harness.act(|ctx| {
        for _ in 0..150 {
            ctx.retreat();
        }
    });
    let html = harness.render();
    assert!(html.contains("0%"), "missing empty label in {html}");
    assert!(html.contains("data-state=\"empty\""), "missing empty state in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn progress_view_smoke_unsubscribes_on_unmount() {
    let mut harness = setup_view_harness("Upload", 0, 1);
    harness.rebuild();
    assert_eq!(harness.context.subscriber_count(), 1);

    let context = harness.context.clone();
    drop(harness);
    assert_eq!(context.subscriber_count(), 0);
}
