use dioxus::prelude::*;

#[component]
pub fn Checkbox(
    title: String,
    checked: bool,
    #[props(default)] disabled: bool,
    on_press: EventHandler<()>,
) -> Element {
    let class = match (checked, disabled) {
        (true, true) => "habit-checkbox habit-checkbox--checked habit-checkbox--disabled",
        (true, false) => "habit-checkbox habit-checkbox--checked",
        (false, true) => "habit-checkbox habit-checkbox--disabled",
        (false, false) => "habit-checkbox",
    };
    rsx! {
        button {
            class: class,
            r#type: "button",
            role: "checkbox",
            aria_checked: if checked { "true" } else { "false" },
            disabled: disabled,
            onclick: move |_| {
                if !disabled {
                    on_press.call(());
                }
            },
            span { class: "habit-checkbox-box",
                if checked {
                    svg {
                        view_box: "0 0 24 24",
                        fill: "none",
                        stroke: "currentColor",
                        stroke_width: "3",
                        stroke_linecap: "round",
                        stroke_linejoin: "round",
                        path { d: "M5 12l5 5L20 7" }
                    }
                }
            }
            span { class: "habit-checkbox-title", "{title}" }
        }
    }
}
