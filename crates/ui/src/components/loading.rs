use dioxus::prelude::*;

#[component]
pub fn Loading() -> Element {
    rsx! {
        div { class: "loading", role: "status",
            span { class: "loading-spinner", aria_hidden: "true" }
            span { class: "loading-label", "Loading..." }
        }
    }
}
