//! Slide-in mobile navigation panel with hamburger trigger and backdrop.
//!
//! The open/closed flag and its derived ARIA values live in
//! [`crate::state::panel`]. This component adds the focus choreography
//! (opening focuses the close control, closing returns focus to the trigger),
//! the document-level Escape handler, and the close-then-scroll behavior of
//! the panel's anchor links.

#[cfg(test)]
#[path = "nav_panel_test.rs"]
mod nav_panel_test;

use leptos::html;
use leptos::prelude::*;

use crate::state::panel::{NAV_SCROLL_DELAY_MS, PanelState};
use crate::util::scroll;

/// Anchor links rendered inside the panel.
const PANEL_LINKS: &[(&str, &str)] = &[
    ("#services", "Services"),
    ("#works", "Works"),
    ("#contact", "Contact"),
];

/// Returns the selector for a same-page anchor href, or `None` for hrefs that
/// should use default navigation.
fn same_page_anchor(href: &str) -> Option<&str> {
    if href.len() > 1 && href.starts_with('#') { Some(href) } else { None }
}

/// Hamburger trigger, backdrop overlay, and the panel itself.
#[component]
pub fn NavPanel() -> impl IntoView {
    let panel = expect_context::<RwSignal<PanelState>>();
    let trigger_ref = NodeRef::<html::Button>::new();
    let close_ref = NodeRef::<html::Button>::new();

    let open_panel = move || {
        panel.update(PanelState::open);
        #[cfg(feature = "hydrate")]
        if let Some(el) = close_ref.get_untracked() {
            if el.focus().is_err() {
                log::warn!("nav panel: could not focus close control");
            }
        }
    };

    let close_panel = move || {
        panel.update(PanelState::close);
        #[cfg(feature = "hydrate")]
        if let Some(el) = trigger_ref.get_untracked() {
            if el.focus().is_err() {
                log::warn!("nav panel: could not return focus to trigger");
            }
        }
    };

    let on_trigger = move |_| {
        if panel.get_untracked().is_open {
            close_panel();
        } else {
            open_panel();
        }
    };

    // Escape closes the panel from anywhere in the document while it is open.
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;

        let on_keydown = wasm_bindgen::closure::Closure::<dyn FnMut(web_sys::KeyboardEvent)>::new(
            move |ev: web_sys::KeyboardEvent| {
                if ev.key() == "Escape" && panel.get_untracked().is_open {
                    close_panel();
                }
            },
        );
        match web_sys::window().and_then(|w| w.document()) {
            Some(document) => {
                if document
                    .add_event_listener_with_callback("keydown", on_keydown.as_ref().unchecked_ref())
                    .is_err()
                {
                    log::warn!("nav panel: keydown listener not attached");
                }
            }
            None => log::warn!("nav panel: no document for keydown listener"),
        }
        // Page-lifetime listener.
        on_keydown.forget();
    }

    let on_link = move |ev: leptos::ev::MouseEvent, href: &'static str| {
        let Some(selector) = same_page_anchor(href) else {
            return;
        };
        ev.prevent_default();
        close_panel();
        scroll::center_scroll_after(NAV_SCROLL_DELAY_MS, selector);
    };

    view! {
        <button
            class="nav-panel__trigger"
            aria-label="Open navigation"
            aria-expanded=move || panel.get().trigger_aria_expanded()
            node_ref=trigger_ref
            on:click=on_trigger
        >
            <span class="nav-panel__trigger-bar"></span>
            <span class="nav-panel__trigger-bar"></span>
            <span class="nav-panel__trigger-bar"></span>
        </button>

        <div
            class="nav-panel__overlay"
            class:nav-panel__overlay--open=move || panel.get().is_open
            aria-hidden=move || panel.get().overlay_aria_hidden()
            on:click=move |_| close_panel()
        ></div>

        <aside
            id="mobile-panel"
            class="nav-panel"
            class:nav-panel--open=move || panel.get().is_open
            aria-hidden=move || panel.get().panel_aria_hidden()
        >
            <button
                class="nav-panel__close"
                aria-label="Close navigation"
                node_ref=close_ref
                on:click=move |_| close_panel()
            >
                "\u{2715}"
            </button>
            <nav class="nav-panel__nav">
                {PANEL_LINKS
                    .iter()
                    .map(|&(href, label)| {
                        view! {
                            <a
                                class="nav-panel__link"
                                href=href
                                on:click=move |ev| on_link(ev, href)
                            >
                                {label}
                            </a>
                        }
                    })
                    .collect::<Vec<_>>()}
            </nav>
        </aside>
    }
}
