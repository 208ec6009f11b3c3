//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::dashboard::DashboardPage;
use crate::state::requirements::RequirementsState;
use crate::state::ui::UiState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the shared state contexts and sets up client-side routing. The
/// dashboard is the only route.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let requirements = RwSignal::new(RequirementsState::default());
    let ui = RwSignal::new(UiState::default());

    provide_context(requirements);
    provide_context(ui);

    view! {
        <Stylesheet id="leptos" href="/pkg/reqboard.css"/>
        <Title text="Reqboard"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=DashboardPage/>
            </Routes>
        </Router>
    }
}
