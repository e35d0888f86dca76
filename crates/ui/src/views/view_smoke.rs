use std::sync::Arc;

use habit_core::HabitDay;
use habit_core::model::{Habit, HabitId, HabitsInfo};
use services::{ApiError, HabitsApi};

use super::test_harness::{ViewKind, setup_view_harness, setup_view_harness_with_api};

fn read_only_info() -> HabitsInfo {
    HabitsInfo::new(vec![Habit::new("a", "Read")], Vec::new())
}

fn half_done_info() -> HabitsInfo {
    HabitsInfo::new(
        vec![Habit::new("a", "Read"), Habit::new("b", "Run")],
        vec![HabitId::new("a")],
    )
}

#[tokio::test(flavor = "current_thread")]
async fn habit_view_renders_single_unchecked_habit_at_zero() {
    let mut harness = setup_view_harness(ViewKind::Day("2026-10-16".into()), read_only_info());
    harness.settle().await;
    let html = harness.render();

    assert!(html.contains("width: 0%"), "missing empty progress in {html}");
    assert!(html.contains("Read"), "missing habit title in {html}");
    assert!(!html.contains("habit-checkbox--checked"), "unexpected check in {html}");
    assert!(html.contains("friday"), "missing weekday in {html}");
    assert!(html.contains("16/10"), "missing day/month in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn habit_view_renders_half_progress() {
    let mut harness = setup_view_harness(ViewKind::Day("2026-10-16".into()), half_done_info());
    harness.settle().await;
    let html = harness.render();

    assert!(html.contains("width: 50%"), "missing progress in {html}");
    assert_eq!(html.matches("habit-checkbox--checked").count(), 1, "{html}");
    assert!(!html.contains("habit-past-notice"), "unexpected notice in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn home_view_shows_initial_day_and_week() {
    let mut harness = setup_view_harness(ViewKind::Home, half_done_info());
    harness.settle().await;
    let html = harness.render();

    assert!(html.contains("week-strip"), "missing week strip in {html}");
    assert!(html.contains("week-day--selected"), "missing selection in {html}");
    assert!(html.contains("width: 50%"), "missing progress in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn past_day_is_view_only() {
    let mut harness = setup_view_harness(ViewKind::Day("2026-10-15".into()), read_only_info());
    let yesterday = HabitDay::parse("2026-10-15").unwrap();
    harness.api.insert_day(yesterday, read_only_info());
    harness.settle().await;
    let html = harness.render();

    assert!(html.contains("habit-list--past"), "missing dimmed list in {html}");
    assert!(html.contains("habit-checkbox--disabled"), "missing disabled row in {html}");
    assert!(
        html.contains("You cannot edit habits of a past date."),
        "missing notice in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn empty_day_renders_empty_state() {
    let mut harness = setup_view_harness(
        ViewKind::Day("2026-10-16".into()),
        HabitsInfo::default(),
    );
    harness.settle().await;
    let html = harness.render();

    assert!(
        html.contains("You are not tracking any habit on this day yet."),
        "missing empty state in {html}"
    );
    assert!(html.contains("width: 0%"), "missing progress in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn invalid_date_renders_parse_error() {
    let mut harness = setup_view_harness(ViewKind::Day("yesterday".into()), read_only_info());
    harness.settle().await;
    let html = harness.render();

    assert!(html.contains("invalid date"), "missing error in {html}");
}

struct FailingApi;

#[async_trait::async_trait]
impl HabitsApi for FailingApi {
    async fn day(&self, _day: HabitDay) -> Result<HabitsInfo, ApiError> {
        Err(ApiError::Unavailable("fail".to_string()))
    }

    async fn toggle_habit(&self, _id: &HabitId) -> Result<(), ApiError> {
        Err(ApiError::Unavailable("fail".to_string()))
    }
}

#[tokio::test(flavor = "current_thread")]
async fn failed_load_shows_alert_and_no_list() {
    let mut harness =
        setup_view_harness_with_api(ViewKind::Day("2026-10-16".into()), Arc::new(FailingApi));
    harness.settle().await;
    let html = harness.render();

    assert!(html.contains("Oops"), "missing alert title in {html}");
    assert!(
        html.contains("Could not load habit information."),
        "missing alert message in {html}"
    );
    assert!(!html.contains("Loading..."), "still loading in {html}");
    assert!(!html.contains("habit-checkbox"), "unexpected list in {html}");
}

struct PendingApi;

#[async_trait::async_trait]
impl HabitsApi for PendingApi {
    async fn day(&self, _day: HabitDay) -> Result<HabitsInfo, ApiError> {
        std::future::pending().await
    }

    async fn toggle_habit(&self, _id: &HabitId) -> Result<(), ApiError> {
        std::future::pending().await
    }
}

#[tokio::test(flavor = "current_thread")]
async fn in_flight_load_renders_loading() {
    let mut harness =
        setup_view_harness_with_api(ViewKind::Day("2026-10-16".into()), Arc::new(PendingApi));
    harness.settle().await;
    let html = harness.render();

    assert!(html.contains("Loading..."), "missing loading in {html}");
    assert!(!html.contains("progress-track"), "unexpected content in {html}");
}
