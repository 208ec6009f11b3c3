//! Dashboard page: the single route rendering the review screen.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reads all shared state from context and coordinates the form panel and
//! stories modal around the requirement list. There is no navigation away
//! from this page and no terminal state; the view stays live.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;

use crate::components::department_chart::DepartmentChart;
use crate::components::header_bar::HeaderBar;
use crate::components::requirement_card::RequirementCard;
use crate::components::requirement_form::RequirementForm;
use crate::components::stat_tiles::StatTiles;
use crate::components::status_chart::StatusChart;
use crate::components::story_modal::StoryModal;
use crate::state::requirements::RequirementsState;
use crate::state::ui::UiState;

/// Open the stories modal for a requirement row.
///
/// The id is accepted but not recorded: every row opens the same generated
/// set today, and no selected-row state is kept.
pub(crate) fn view_stories(ui: &mut UiState, requirement_id: &str) {
    let _ = requirement_id;
    ui.open_stories();
}

/// Dashboard page: summary tiles, chart panels, and the requirement list.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let requirements = expect_context::<RwSignal<RequirementsState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let on_view_stories = Callback::new(move |id: String| {
        ui.update(|u| view_stories(u, &id));
    });
    let on_modal_close = Callback::new(move |()| ui.update(|u| u.close_stories()));

    view! {
        <div class="dashboard-page">
            <HeaderBar/>

            <Show when=move || ui.get().form_open>
                <RequirementForm/>
            </Show>

            <StatTiles/>

            <div class="dashboard-page__charts">
                <StatusChart/>
                <DepartmentChart/>
            </div>

            <div class="requirement-list">
                <h2 class="requirement-list__title">"Requirements"</h2>
                <div class="requirement-list__rows">
                    {move || {
                        requirements
                            .get()
                            .items
                            .into_iter()
                            .map(|req| {
                                view! {
                                    <RequirementCard req=req on_view_stories=on_view_stories/>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </div>
            </div>

            <Show when=move || ui.get().stories_open>
                <StoryModal on_close=on_modal_close/>
            </Show>
        </div>
    }
}
