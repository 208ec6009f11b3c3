//! Card row for one requirement in the dashboard list.
//!
//! DESIGN
//! ======
//! Approve and reject are display-only controls: the approval workflow has no
//! backing state transition, so they render without handlers.

use leptos::prelude::*;

use crate::state::requirements::Requirement;

/// One requirement row with priority badge, attachment chips, a metadata
/// footer, and the row actions.
#[component]
pub fn RequirementCard(req: Requirement, on_view_stories: Callback<String>) -> impl IntoView {
    let badge_class = format!("requirement-card__badge {}", req.priority.badge_class());
    let points_line = format!("{} points", req.story_points);
    let view_id = req.id.clone();
    let on_view = move |_| on_view_stories.run(view_id.clone());

    view! {
        <div class="requirement-card">
            <div class="requirement-card__row">
                <div class="requirement-card__main">
                    <div class="requirement-card__heading">
                        <span class="requirement-card__id">{req.id}</span>
                        <h3 class="requirement-card__title">{req.title}</h3>
                        <span class=badge_class>{req.priority.label()}</span>
                    </div>
                    <p class="requirement-card__description">{req.description}</p>
                    <div class="requirement-card__attachments">
                        {req.attachments
                            .into_iter()
                            .map(|file| {
                                view! {
                                    <span class="requirement-card__attachment">"📎 " {file}</span>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
                <div class="requirement-card__actions">
                    <button
                        class="requirement-card__action requirement-card__action--view"
                        on:click=on_view
                    >
                        "👁 View Jira Stories"
                    </button>
                    <button
                        class="requirement-card__action requirement-card__action--approve"
                        title="Approve"
                        aria-label="Approve requirement"
                    >
                        "✓"
                    </button>
                    <button
                        class="requirement-card__action requirement-card__action--reject"
                        title="Reject"
                        aria-label="Reject requirement"
                    >
                        "✕"
                    </button>
                </div>
            </div>
            <div class="requirement-card__meta">
                <span>{req.department}</span>
                <span class="requirement-card__meta-divider">"•"</span>
                <span>{req.date}</span>
                <span class="requirement-card__meta-divider">"•"</span>
                <span>{points_line}</span>
            </div>
        </div>
    }
}
