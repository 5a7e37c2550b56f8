use super::*;

#[test]
fn submit_failed_message_formats_status() {
    assert_eq!(submit_failed_message(500), "contact submit failed: 500");
    assert_eq!(submit_failed_message(422), "contact submit failed: 422");
}

#[test]
fn contact_endpoint_is_the_formsubmit_ajax_url() {
    assert!(CONTACT_ENDPOINT.starts_with("https://formsubmit.co/ajax/"));
}
