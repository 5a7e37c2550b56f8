//! Contact form with asynchronous FormSubmit delivery.
//!
//! The submit control's lifecycle lives in [`crate::state::contact`]; this
//! component suppresses the default submission, drives the phase transitions
//! around the network call, and schedules the timed revert that re-enables
//! the control.

use leptos::html;
use leptos::prelude::*;

use crate::state::contact::SubmitPhase;

/// Resting label on the submit control.
const IDLE_LABEL: &str = "Send Message";

/// Contact form posting to the external FormSubmit endpoint.
#[component]
pub fn ContactForm() -> impl IntoView {
    let phase = RwSignal::new(SubmitPhase::Idle);
    let form_ref = NodeRef::<html::Form>::new();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if phase.get_untracked().is_busy() {
            return;
        }
        phase.set(SubmitPhase::Sending);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let outcome = match form_ref.get_untracked() {
                Some(form) => {
                    let sent = crate::net::api::submit_contact(&form).await;
                    if sent.is_ok() {
                        form.reset();
                    }
                    sent
                }
                None => Err("contact form not mounted".to_owned()),
            };
            if let Err(message) = &outcome {
                log::error!("contact submit failed: {message}");
            }
            phase.set(SubmitPhase::from_result(&outcome));

            gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(
                crate::state::contact::STATUS_REVERT_DELAY_MS,
            )))
            .await;
            phase.update(|p| *p = p.revert());
        });
    };

    view! {
        <form id="contact-form" class="contact-form" node_ref=form_ref on:submit=on_submit>
            <input
                class="contact-form__field"
                type="text"
                name="name"
                placeholder="Your name"
                required
            />
            <input
                class="contact-form__field"
                type="email"
                name="email"
                placeholder="you@example.com"
                required
            />
            <textarea
                class="contact-form__field contact-form__field--message"
                name="message"
                rows="6"
                placeholder="Tell me about the project"
                required
            ></textarea>
            <button
                class=move || {
                    let mut classes = "contact-form__submit".to_owned();
                    if let Some(status) = phase.get().status_class() {
                        classes.push(' ');
                        classes.push_str(status);
                    }
                    classes
                }
                type="submit"
                disabled=move || phase.get().is_busy()
            >
                {move || phase.get().label(IDLE_LABEL)}
            </button>
        </form>
    }
}
