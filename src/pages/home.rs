//! Single-page portfolio layout assembling all sections.

use leptos::prelude::*;

use crate::components::contact_form::ContactForm;
use crate::components::nav_panel::NavPanel;
use crate::components::service_list::ServiceList;
use crate::components::work_gallery::WorkGallery;
use crate::util::scroll;

/// Home page: header, hero, services, works, contact, footer.
#[component]
pub fn HomePage() -> impl IntoView {
    // Inline works links center the works card in the viewport rather than
    // jumping it to the top edge.
    let on_works_link = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        scroll::center_scroll_to("#works-card");
    };

    view! {
        <header class="site-header">
            <a class="site-header__brand" href="#top">"PitchPerfect"</a>
            <nav class="site-header__nav">
                <a class="site-header__link" href="#services">"Services"</a>
                <a class="site-header__link" href="#works" on:click=on_works_link>"Works"</a>
                <a class="site-header__link" href="#contact">"Contact"</a>
            </nav>
            <NavPanel/>
        </header>

        <main id="top" class="site-main">
            <section class="hero">
                <h1 class="hero__title">"Design that closes the deal."</h1>
                <p class="hero__lead">
                    "Pitch decks, brand systems, and marketing sites for founders who need to be believed."
                </p>
                <a class="hero__cta" href="#contact">"Start a project"</a>
            </section>

            <ServiceList/>

            <section id="works" class="works">
                <h2 class="works__heading">"Selected work"</h2>
                <div id="works-card" class="works__grid">
                    <WorkGallery/>
                </div>
            </section>

            <section id="contact" class="contact">
                <h2 class="contact__heading">"Tell me what you're pitching"</h2>
                <ContactForm/>
            </section>
        </main>

        <footer class="site-footer">
            <p class="site-footer__note">"PitchPerfect Studio"</p>
        </footer>
    }
}
