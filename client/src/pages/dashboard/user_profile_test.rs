use super::*;

#[test]
fn unchanged_or_blank_fields_produce_no_update() {
    assert_eq!(profile_changes(Some("Ann"), None, "Ann", "  "), None);
    assert_eq!(profile_changes(None, None, "", ""), None);
}

#[test]
fn only_changed_fields_are_sent() {
    let update = profile_changes(Some("Ann"), Some("https://a/p.png"), " Ann Lee ", "https://a/p.png").unwrap();
    assert_eq!(update.display_name.as_deref(), Some("Ann Lee"));
    assert_eq!(update.photo_url, None);
}
