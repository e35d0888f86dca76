use dioxus::prelude::*;

/// Blocking notice. Clicking the overlay or the button dismisses it.
#[component]
pub fn AlertDialog(title: String, message: String, on_dismiss: EventHandler<()>) -> Element {
    rsx! {
        div {
            class: "alert-overlay",
            onclick: move |_| on_dismiss.call(()),
            div {
                class: "alert-dialog",
                role: "alertdialog",
                onclick: move |evt| evt.stop_propagation(),
                h3 { class: "alert-title", "{title}" }
                p { class: "alert-message", "{message}" }
                div { class: "alert-actions",
                    button {
                        class: "btn btn-primary",
                        r#type: "button",
                        onclick: move |_| on_dismiss.call(()),
                        "OK"
                    }
                }
            }
        }
    }
}
