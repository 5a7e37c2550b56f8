//! Fullscreen image preview modal for the works gallery.
//!
//! The overlay element is constructed once here and reused; visibility and
//! the loaded image come from [`crate::state::modal::ModalState`] in context.
//! Closing clears the image source so an in-flight load is abandoned.

use leptos::html;
use leptos::prelude::*;

use crate::state::modal::ModalState;

/// Singleton preview overlay. Backdrop and close-control clicks close it;
/// clicks inside the content card do not propagate to the backdrop handler.
#[component]
pub fn PreviewModal() -> impl IntoView {
    let modal = expect_context::<RwSignal<ModalState>>();
    let close_ref = NodeRef::<html::Button>::new();

    let close = move || modal.update(ModalState::close);

    // Move focus onto the close control whenever the modal opens.
    #[cfg(feature = "hydrate")]
    Effect::new(move || {
        if !modal.with(ModalState::is_open) {
            return;
        }
        if let Some(el) = close_ref.get_untracked() {
            if el.focus().is_err() {
                log::warn!("preview modal: could not focus close control");
            }
        }
    });

    // Escape closes the modal only while it is open.
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;

        let on_keydown = wasm_bindgen::closure::Closure::<dyn FnMut(web_sys::KeyboardEvent)>::new(
            move |ev: web_sys::KeyboardEvent| {
                if ev.key() == "Escape" {
                    modal.update(|m| {
                        m.close_if_open();
                    });
                }
            },
        );
        match web_sys::window().and_then(|w| w.document()) {
            Some(document) => {
                if document
                    .add_event_listener_with_callback("keydown", on_keydown.as_ref().unchecked_ref())
                    .is_err()
                {
                    log::warn!("preview modal: keydown listener not attached");
                }
            }
            None => log::warn!("preview modal: no document for keydown listener"),
        }
        // Page-lifetime listener.
        on_keydown.forget();
    }

    view! {
        <div
            class="preview-modal"
            class:preview-modal--open=move || modal.with(ModalState::is_open)
            role="dialog"
            aria-hidden=move || modal.with(ModalState::aria_hidden)
            on:click=move |_| close()
        >
            <div class="preview-modal__card" on:click=|ev| ev.stop_propagation()>
                <button
                    class="preview-modal__close"
                    aria-label="Close preview"
                    node_ref=close_ref
                    on:click=move |_| close()
                >
                    "\u{2715}"
                </button>
                <img
                    class="preview-modal__image"
                    alt="Work preview"
                    src=move || modal.with(|m| m.image_src().to_owned())
                />
            </div>
        </div>
    }
}
