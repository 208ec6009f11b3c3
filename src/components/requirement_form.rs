//! New-requirement form panel.
//!
//! DESIGN
//! ======
//! Submission is presentation-only: the draft is collected and discarded, and
//! the inventory is never touched. The dropzone is a drop target in layout
//! only; files are not read.

#[cfg(test)]
#[path = "requirement_form_test.rs"]
mod requirement_form_test;

use leptos::prelude::*;

use crate::state::requirements::{DEPARTMENTS, Requirement, RequirementsState};
use crate::state::ui::UiState;

/// In-progress form fields for a new requirement.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RequirementDraft {
    pub title: String,
    pub description: String,
    pub department: String,
    pub priority: String,
}

/// Handler behind the Submit control.
///
/// Intentionally leaves the inventory untouched: no validation, no insertion.
/// TODO: validate the draft and append it to the inventory once requirement
/// creation has a backing workflow.
pub(crate) fn submit_draft(draft: &RequirementDraft, items: &mut Vec<Requirement>) {
    let _ = (draft, items);
}

/// Collapsible panel for drafting a new requirement.
#[component]
pub fn RequirementForm() -> impl IntoView {
    let requirements = expect_context::<RwSignal<RequirementsState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let title = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let department = RwSignal::new(DEPARTMENTS[0].to_owned());
    let priority = RwSignal::new("HIGH".to_owned());

    let on_close = move |_| ui.update(|u| u.form_open = false);

    let on_submit = move |_| {
        let draft = RequirementDraft {
            title: title.get(),
            description: description.get(),
            department: department.get(),
            priority: priority.get(),
        };
        requirements.update(|state| submit_draft(&draft, &mut state.items));
        #[cfg(feature = "hydrate")]
        log::info!("new requirement submit ignored; create workflow not implemented");
    };

    view! {
        <div class="requirement-form">
            <div class="requirement-form__header">
                <h2>"New Requirement"</h2>
                <button class="requirement-form__close" on:click=on_close title="Close form">
                    "✕"
                </button>
            </div>
            <label class="requirement-form__label">
                "Title"
                <input
                    class="requirement-form__input"
                    type="text"
                    placeholder="Enter requirement title"
                    prop:value=move || title.get()
                    on:input=move |ev| title.set(event_target_value(&ev))
                />
            </label>
            <label class="requirement-form__label">
                "Description"
                <textarea
                    class="requirement-form__input requirement-form__input--multiline"
                    rows="4"
                    placeholder="Enter requirement description"
                    prop:value=move || description.get()
                    on:input=move |ev| description.set(event_target_value(&ev))
                ></textarea>
            </label>
            <label class="requirement-form__label">
                "Department"
                <select
                    class="requirement-form__input"
                    prop:value=move || department.get()
                    on:change=move |ev| department.set(event_target_value(&ev))
                >
                    {DEPARTMENTS
                        .iter()
                        .copied()
                        .map(|dept| view! { <option value=dept>{dept}</option> })
                        .collect_view()}
                </select>
            </label>
            <label class="requirement-form__label">
                "Priority"
                <select
                    class="requirement-form__input"
                    prop:value=move || priority.get()
                    on:change=move |ev| priority.set(event_target_value(&ev))
                >
                    <option value="HIGH">"HIGH"</option>
                    <option value="MEDIUM">"MEDIUM"</option>
                    <option value="LOW">"LOW"</option>
                </select>
            </label>
            <label class="requirement-form__label">
                "Attachments"
                <div class="requirement-form__dropzone">
                    <p>"Drag and drop files here, or click to select files"</p>
                </div>
            </label>
            <div class="requirement-form__actions">
                <button class="btn" on:click=on_close>
                    "Cancel"
                </button>
                <button class="btn btn--primary" on:click=on_submit>
                    "Submit"
                </button>
            </div>
        </div>
    }
}
