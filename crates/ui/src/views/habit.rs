use dioxus::prelude::*;
use habit_core::model::HabitId;
use habit_core::{Clock, HabitDay};
use services::HabitDayState;

use crate::components::{AlertDialog, BackButton, Checkbox, HabitsEmpty, Loading, ProgressBar};
use crate::context::AppContext;
use crate::vm::{alert_message, alert_title, map_habit_day};

/// Route entry: `/day/:date`.
#[component]
pub fn HabitView(date: String) -> Element {
    match HabitDay::parse(&date) {
        Ok(day) => rsx! {
            HabitDayScreen { key: "{day}", day }
        },
        Err(err) => rsx! {
            div { class: "page habit-page",
                BackButton {}
                p { class: "habit-error", "{err}" }
            }
        },
    }
}

/// State and toggle action of one habit day screen.
#[derive(Clone, Copy)]
pub struct HabitDayHandle {
    pub state: Signal<HabitDayState>,
    pub toggle: Callback<HabitId>,
}

/// Fetches `day` once and exposes a guarded toggle.
///
/// Requests run as tasks owned by the calling component, so they are dropped
/// with it.
pub fn use_habit_day(day: HabitDay) -> HabitDayHandle {
    let ctx = use_context::<AppContext>();
    let service = ctx.habit_days();
    let state = use_signal(HabitDayState::new);

    let load_service = service.clone();
    use_future(move || {
        let service = load_service.clone();
        let mut state = state;
        async move {
            state.write().begin_load();
            let result = service.load_day(day).await;
            state.write().finish_load(result);
        }
    });

    let toggle = use_callback(move |id: HabitId| {
        let read_only = service.is_read_only(day);
        let mut state = state;
        if !state.write().begin_toggle(&id, read_only).is_started() {
            return;
        }
        let service = service.clone();
        spawn(async move {
            let result = service.toggle_habit(day, &id).await;
            state.write().finish_toggle(&id, result);
        });
    });

    HabitDayHandle { state, toggle }
}

#[component]
pub fn HabitDayScreen(day: HabitDay) -> Element {
    let handle = use_habit_day(day);
    let clock = use_context::<AppContext>().habit_days().clock();
    render_habit_day(day, handle, &clock)
}

pub(crate) fn render_habit_day(day: HabitDay, handle: HabitDayHandle, clock: &Clock) -> Element {
    let HabitDayHandle { state, toggle } = handle;
    let snapshot = state.read().clone();
    if snapshot.is_loading() {
        return rsx! {
            Loading {}
        };
    }

    let vm = map_habit_day(day, &snapshot, clock);
    let list_class = if vm.is_past {
        "habit-list habit-list--past"
    } else {
        "habit-list"
    };
    let rows = vm.rows.iter().map(|row| {
        let id = row.id.clone();
        rsx! {
            Checkbox {
                key: "{row.id}",
                title: row.title.clone(),
                checked: row.checked,
                disabled: row.disabled,
                on_press: move |_| toggle.call(id.clone()),
            }
        }
    });

    rsx! {
        div { class: "page habit-page",
            BackButton {}

            p { class: "habit-weekday", "{vm.weekday_label}" }
            h2 { class: "habit-date", "{vm.day_month_label}" }

            ProgressBar { progress: f64::from(vm.progress) }

            div { class: list_class,
                if vm.is_empty() {
                    HabitsEmpty {}
                } else {
                    {rows}
                }
            }

            if vm.show_past_notice {
                p { class: "habit-past-notice", "You cannot edit habits of a past date." }
            }

            if let Some(alert) = vm.alert {
                AlertDialog {
                    title: alert_title(alert).to_string(),
                    message: alert_message(alert).to_string(),
                    on_dismiss: move |_| {
                        let mut state = state;
                        state.write().dismiss_alert();
                    },
                }
            }
        }
    }
}
