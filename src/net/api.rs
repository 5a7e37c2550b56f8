//! HTTP helper for contact form delivery.
//!
//! Client-side (hydrate): a real multipart POST via `gloo-net`. The call is
//! fire-and-forget: no retry, no timeout, no request id. A hung request simply
//! keeps the submit control disabled until it completes.
//!
//! ERROR HANDLING
//! ==============
//! Callers get a `Result` with a human-readable message; failures degrade to
//! the form's visible error status instead of crashing hydration.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

/// Fixed FormSubmit AJAX endpoint the contact form posts to.
pub const CONTACT_ENDPOINT: &str = "https://formsubmit.co/ajax/raju.mia4396@gmail.com";

/// Error message for a non-success HTTP status.
#[must_use]
pub fn submit_failed_message(status: u16) -> String {
    format!("contact submit failed: {status}")
}

/// Package the form's fields as multipart data and POST them to
/// [`CONTACT_ENDPOINT`], expecting a JSON acknowledgement body.
///
/// # Errors
///
/// Returns a message if the fields cannot be packaged, the request fails, the
/// response status is non-success, or the body is not JSON.
#[cfg(feature = "hydrate")]
pub async fn submit_contact(form: &web_sys::HtmlFormElement) -> Result<(), String> {
    let fields = web_sys::FormData::new_with_form(form)
        .map_err(|_| "contact form fields unavailable".to_owned())?;
    let request = gloo_net::http::Request::post(CONTACT_ENDPOINT)
        .body(fields)
        .map_err(|e| e.to_string())?;
    let response = request.send().await.map_err(|e| e.to_string())?;
    if !response.ok() {
        return Err(submit_failed_message(response.status()));
    }
    // FormSubmit acknowledges with a JSON body; parsing it confirms delivery.
    #[derive(serde::Deserialize)]
    struct SubmitAck {
        #[serde(default)]
        message: String,
    }
    let ack: SubmitAck = response.json().await.map_err(|e| e.to_string())?;
    log::debug!("formsubmit ack: {}", ack.message);
    Ok(())
}
