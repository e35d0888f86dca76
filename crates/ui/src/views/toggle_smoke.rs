use habit_core::HabitDay;
use habit_core::model::{Habit, HabitId, HabitsInfo};

use super::test_harness::{ViewKind, setup_view_harness};

fn half_done_info() -> HabitsInfo {
    HabitsInfo::new(
        vec![Habit::new("a", "Read"), Habit::new("b", "Run")],
        vec![HabitId::new("a")],
    )
}

#[tokio::test(flavor = "current_thread")]
async fn confirmed_toggle_checks_row_and_fills_progress() {
    let mut harness =
        setup_view_harness(ViewKind::Interactive("2026-10-16".into()), half_done_info());
    harness.settle().await;
    assert!(harness.render().contains("width: 50%"));

    harness.toggle("b");
    harness.drain().await;
    let html = harness.render();

    assert!(html.contains("width: 100%"), "missing full progress in {html}");
    assert_eq!(html.matches("habit-checkbox--checked").count(), 2, "{html}");
    assert!(!html.contains("Oops"), "unexpected alert in {html}");
    assert_eq!(harness.api.toggle_calls(), vec![HabitId::new("b")]);
}

#[tokio::test(flavor = "current_thread")]
async fn rejected_toggle_alerts_and_keeps_row() {
    let mut harness =
        setup_view_harness(ViewKind::Interactive("2026-10-16".into()), half_done_info());
    harness.settle().await;
    harness.api.set_fail_toggles(true);

    harness.toggle("b");
    harness.drain().await;
    let html = harness.render();

    assert!(html.contains("Oops"), "missing alert title in {html}");
    assert!(
        html.contains("Could not update habit information."),
        "missing alert message in {html}"
    );
    assert!(html.contains("width: 50%"), "progress changed in {html}");
    assert_eq!(html.matches("habit-checkbox--checked").count(), 1, "{html}");
    assert_eq!(harness.api.toggle_calls(), vec![HabitId::new("b")]);
}

#[tokio::test(flavor = "current_thread")]
async fn past_day_toggle_sends_nothing() {
    let mut harness =
        setup_view_harness(ViewKind::Interactive("2026-10-15".into()), HabitsInfo::default());
    let yesterday = HabitDay::parse("2026-10-15").unwrap();
    harness.api.insert_day(yesterday, half_done_info());
    harness.settle().await;

    harness.toggle("b");
    harness.drain().await;
    let html = harness.render();

    assert!(harness.api.toggle_calls().is_empty());
    assert!(!html.contains("Oops"), "unexpected alert in {html}");
    assert_eq!(html.matches("habit-checkbox--checked").count(), 1, "{html}");
    assert!(html.contains("habit-list--past"), "missing dimmed list in {html}");
}
