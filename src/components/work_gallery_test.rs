use super::*;

#[test]
fn data_attribute_source_wins_over_rendered_source() {
    assert_eq!(
        preferred_preview_src(Some("full.jpg"), "thumb.jpg"),
        Some("full.jpg")
    );
}

#[test]
fn empty_data_attribute_falls_back_to_rendered_source() {
    assert_eq!(preferred_preview_src(Some(""), "thumb.jpg"), Some("thumb.jpg"));
    assert_eq!(preferred_preview_src(None, "thumb.jpg"), Some("thumb.jpg"));
}

#[test]
fn no_usable_source_yields_none() {
    assert_eq!(preferred_preview_src(Some(""), ""), None);
    assert_eq!(preferred_preview_src(None, ""), None);
}
