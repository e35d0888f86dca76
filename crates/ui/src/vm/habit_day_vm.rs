use habit_core::{Clock, HabitDay};
use habit_core::model::HabitId;
use services::{HabitDayAlert, HabitDayState};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HabitRowVm {
    pub id: HabitId,
    pub title: String,
    pub checked: bool,
    pub disabled: bool,
}

/// UI-ready snapshot of the habit day screen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HabitDayVm {
    pub weekday_label: String,
    pub day_month_label: String,
    pub progress: u8,
    pub is_past: bool,
    pub rows: Vec<HabitRowVm>,
    pub show_past_notice: bool,
    pub alert: Option<HabitDayAlert>,
}

impl HabitDayVm {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[must_use]
pub fn map_habit_day(day: HabitDay, state: &HabitDayState, clock: &Clock) -> HabitDayVm {
    let is_past = day.is_past(clock);
    let rows = state
        .info()
        .map(|info| {
            info.possible_habits()
                .iter()
                .map(|habit| HabitRowVm {
                    id: habit.id().clone(),
                    title: habit.title().to_string(),
                    checked: info.is_completed(habit.id()),
                    disabled: is_past || state.is_pending(habit.id()),
                })
                .collect::<Vec<_>>()
        })
        .unwrap_or_default();

    HabitDayVm {
        weekday_label: day.weekday_label().to_lowercase(),
        day_month_label: day.day_month_label(),
        progress: state.progress_percentage(),
        is_past,
        show_past_notice: is_past && !rows.is_empty(),
        rows,
        alert: state.alert(),
    }
}

#[must_use]
pub fn alert_title(_alert: HabitDayAlert) -> &'static str {
    "Oops"
}

#[must_use]
pub fn alert_message(alert: HabitDayAlert) -> &'static str {
    match alert {
        HabitDayAlert::LoadFailed => "Could not load habit information.",
        HabitDayAlert::ToggleFailed => "Could not update habit information.",
    }
}
