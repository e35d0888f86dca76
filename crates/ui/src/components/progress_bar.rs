use dioxus::prelude::*;

/// Clamp a percentage into `0..=100`. Non-finite input maps to 0.
#[must_use]
pub fn clamp_progress(progress: f64) -> f64 {
    if progress.is_finite() {
        progress.clamp(0.0, 100.0)
    } else {
        0.0
    }
}

/// A track with a fill proportional to `progress` (percent).
#[component]
pub fn ProgressBar(#[props(default)] progress: f64) -> Element {
    let width = clamp_progress(progress);
    rsx! {
        div {
            class: "progress-track",
            role: "progressbar",
            aria_valuemin: "0",
            aria_valuemax: "100",
            aria_valuenow: "{width}",
            div { class: "progress-fill", style: "width: {width}%" }
        }
    }
}
