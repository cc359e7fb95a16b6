use leptos::prelude::*;

/// Horizontal progress bar, 0..=100 percent.
#[component]
pub fn ProgressBar(#[prop(into)] percent: Signal<u8>) -> impl IntoView {
    view! {
        <div class="progress-bar">
            <div
                class="progress-bar__fill"
                style=move || format!("width: {}%;", percent.get().min(100))
            ></div>
            <span class="progress-bar__label">{move || format!("{}%", percent.get().min(100))}</span>
        </div>
    }
}
