//! Modal listing the generated Jira stories for a requirement.

use leptos::prelude::*;

use crate::state::stories::stories_for;

/// Fullscreen modal with the generated story cards.
///
/// Every requirement currently yields the same fixed set, so callers that do
/// not track a selected row can omit the id; see `state::stories::stories_for`.
#[component]
pub fn StoryModal(
    #[prop(into, default = String::new())] requirement_id: String,
    on_close: Callback<()>,
) -> impl IntoView {
    let stories = stories_for(&requirement_id);
    let on_backdrop = move |_| on_close.run(());
    let on_close_click = move |_| on_close.run(());
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            on_close.run(());
        }
    };

    view! {
        <div class="story-modal__backdrop" on:click=on_backdrop>
            <div
                class="story-modal"
                on:click=move |ev| ev.stop_propagation()
                on:keydown=on_keydown
                tabindex="0"
            >
                <div class="story-modal__header">
                    <h2>"Generated Jira Stories"</h2>
                    <button class="story-modal__close" on:click=on_close_click title="Close stories">
                        "✕"
                    </button>
                </div>
                <div class="story-modal__cards">
                    {stories
                        .iter()
                        .map(|story| {
                            view! {
                                <div class="story-card">
                                    <div class="story-card__header">
                                        <span class="story-card__id">{story.id}</span>
                                        <span class="story-card__points">
                                            {format!("{} points", story.story_points)}
                                        </span>
                                    </div>
                                    <p>
                                        <strong>"As a "</strong>
                                        {story.role}
                                        ","
                                    </p>
                                    <p>
                                        <strong>"I want to "</strong>
                                        {story.want}
                                    </p>
                                    <p>
                                        <strong>"So that "</strong>
                                        {story.benefit}
                                    </p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}
