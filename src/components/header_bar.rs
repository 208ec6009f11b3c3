//! Dashboard header toolbar with the new-requirement toggle.

#[cfg(test)]
#[path = "header_bar_test.rs"]
mod header_bar_test;

use leptos::prelude::*;

use crate::state::ui::UiState;

/// Label for the header toggle button, tracking the form panel state.
pub(crate) fn toggle_label(form_open: bool) -> &'static str {
    if form_open { "Close Form" } else { "New Requirement" }
}

/// Header toolbar: title, subtitle, and the form toggle control.
#[component]
pub fn HeaderBar() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        <header class="dashboard-page__header toolbar">
            <span class="toolbar__title">"Automated Requirement Writing Dashboard"</span>
            <span class="toolbar__subtitle">"AI-Powered Requirements Management"</span>
            <span class="toolbar__spacer"></span>
            <button
                class="btn toolbar__form-toggle"
                on:click=move |_| ui.update(|u| u.toggle_form())
            >
                {move || toggle_label(ui.get().form_open)}
            </button>
        </header>
    }
}
