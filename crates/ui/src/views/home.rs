use dioxus::prelude::*;
use dioxus_router::Link;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::HabitDayScreen;
use crate::vm::map_week_strip;

#[component]
pub fn HomeView() -> Element {
    let ctx = use_context::<AppContext>();
    let day = ctx.initial_day();
    let today = ctx.habit_days().today();
    let week = map_week_strip(today, day);

    rsx! {
        nav { class: "week-strip",
            for link in week {
                Link {
                    key: "{link.route_date}",
                    class: week_day_class(link.selected, link.is_today),
                    to: Route::Day { date: link.route_date.clone() },
                    span { class: "week-day-name", "{link.short_label}" }
                    span { class: "week-day-number", "{link.day_of_month}" }
                }
            }
        }
        HabitDayScreen { key: "{day}", day }
    }
}

fn week_day_class(selected: bool, is_today: bool) -> &'static str {
    match (selected, is_today) {
        (true, _) => "week-day week-day--selected",
        (false, true) => "week-day week-day--today",
        (false, false) => "week-day",
    }
}
