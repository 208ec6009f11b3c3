//! Summary tiles over the requirement inventory.

use leptos::prelude::*;

use crate::state::requirements::RequirementsState;

/// Four overview tiles: requirement count, story points, departments, and
/// the authored average-completion figure.
#[component]
pub fn StatTiles() -> impl IntoView {
    let requirements = expect_context::<RwSignal<RequirementsState>>();

    let requirement_count = move || requirements.get().items.len().to_string();
    let story_points = move || requirements.get().total_story_points().to_string();
    let departments = move || requirements.get().department_count().to_string();

    view! {
        <div class="stat-tiles">
            <div class="stat-tile">
                <p class="stat-tile__label">"Total Requirements"</p>
                <h2 class="stat-tile__value">{requirement_count}</h2>
            </div>
            <div class="stat-tile">
                <p class="stat-tile__label">"Story Points"</p>
                <h2 class="stat-tile__value">{story_points}</h2>
            </div>
            <div class="stat-tile">
                <p class="stat-tile__label">"Departments"</p>
                <h2 class="stat-tile__value">{departments}</h2>
            </div>
            <div class="stat-tile">
                <p class="stat-tile__label">"Avg. Completion"</p>
                <h2 class="stat-tile__value">"14d"</h2>
            </div>
        </div>
    }
}
