use dioxus::prelude::*;
use dioxus_router::use_navigator;

#[component]
pub fn BackButton() -> Element {
    let navigator = use_navigator();
    rsx! {
        button {
            class: "back-button",
            r#type: "button",
            aria_label: "Back",
            onclick: move |_| navigator.go_back(),
            svg {
                view_box: "0 0 24 24",
                fill: "none",
                stroke: "currentColor",
                stroke_width: "2",
                stroke_linecap: "round",
                stroke_linejoin: "round",
                path { d: "M15 18l-6-6 6-6" }
            }
        }
    }
}
