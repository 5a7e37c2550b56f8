//! Root application component with meta tags, routing, and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::preview_modal::PreviewModal;
use crate::pages::home::HomePage;
use crate::state::modal::ModalState;
use crate::state::panel::PanelState;

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
/// Provides the shared panel and modal state contexts and mounts the single
/// home route. The preview modal lives here so it overlays the whole page and
/// is constructed exactly once.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let panel = RwSignal::new(PanelState::default());
    let modal = RwSignal::new(ModalState::default());

    provide_context(panel);
    provide_context(modal);

    view! {
        <Stylesheet id="leptos" href="/pkg/pitchperfect.css"/>
        <Title text="PitchPerfect Design Studio"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
            </Routes>
        </Router>

        <PreviewModal/>
    }
}
