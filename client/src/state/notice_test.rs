use super::*;

#[test]
fn notices_get_increasing_ids() {
    let mut state = NoticeState::default();
    let a = state.success("Saved");
    let b = state.error("Signup Failed", "An account with this email already exists.");
    assert!(b > a);
    assert_eq!(state.items[1].kind, NoticeKind::Error);
    assert_eq!(state.items[1].text.as_deref(), Some("An account with this email already exists."));
}

#[test]
fn dismiss_removes_only_that_notice() {
    let mut state = NoticeState::default();
    let a = state.success("One");
    let b = state.success("Two");
    state.dismiss(a);
    assert_eq!(state.items.len(), 1);
    assert_eq!(state.items[0].id, b);
    state.dismiss(999);
    assert_eq!(state.items.len(), 1);
}

#[test]
fn oldest_notices_drop_past_the_cap() {
    let mut state = NoticeState::default();
    for i in 0..(MAX_NOTICES + 2) {
        state.success(format!("n{i}"));
    }
    assert_eq!(state.items.len(), MAX_NOTICES);
    assert_eq!(state.items[0].title, "n2");
}
