use dioxus::prelude::*;

#[component]
pub fn HabitsEmpty() -> Element {
    rsx! {
        p { class: "habits-empty", "You are not tracking any habit on this day yet." }
    }
}
