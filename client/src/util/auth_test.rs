use super::*;
use crate::net::types::UserIdentity;

fn signed_in() -> Session {
    Session {
        user: Some(UserIdentity {
            id: "u1".to_owned(),
            display_name: Some("Alice".to_owned()),
            email: Some("alice@example.com".to_owned()),
            photo_url: None,
        }),
        loading: false,
    }
}

#[test]
fn guard_waits_while_loading() {
    assert_eq!(guard_decision(&Session::default()), GuardDecision::Pending);
}

#[test]
fn guard_never_redirects_while_loading_even_with_user() {
    let session = Session { loading: true, ..signed_in() };
    assert_eq!(guard_decision(&session), GuardDecision::Pending);
}

#[test]
fn guard_allows_signed_in_user() {
    assert_eq!(guard_decision(&signed_in()), GuardDecision::Allow);
}

#[test]
fn guard_redirects_after_sign_out() {
    let mut session = signed_in();
    session.apply_identity_change(None);
    assert_eq!(guard_decision(&session), GuardDecision::Redirect("/login"));
}

#[test]
fn guard_allows_after_sign_in_notification() {
    let mut session = Session::default();
    session.apply_identity_change(None);
    assert_eq!(guard_decision(&session), GuardDecision::Redirect("/login"));
    session.apply_identity_change(signed_in().user);
    assert_eq!(guard_decision(&session), GuardDecision::Allow);
}

#[test]
fn login_input_trims_email_and_requires_both() {
    assert_eq!(
        validate_login_input("  a@b.com ", "Secret1"),
        Ok(("a@b.com".to_owned(), "Secret1".to_owned()))
    );
    assert_eq!(validate_login_input("  ", "Secret1"), Err("Enter both email and password."));
    assert_eq!(validate_login_input("a@b.com", ""), Err("Enter both email and password."));
}

#[test]
fn oauth_states_are_unique() {
    let a = new_oauth_state();
    let b = new_oauth_state();
    assert_eq!(a.len(), 32);
    assert_ne!(a, b);
}

#[test]
fn oauth_fragment_parses_token_and_state() {
    let parsed = parse_oauth_fragment("#state=abc&id_token=eyJ.x%2By&authuser=0").unwrap();
    assert_eq!(parsed, OAuthRedirect { id_token: "eyJ.x+y".to_owned(), state: "abc".to_owned() });
}

#[test]
fn oauth_fragment_reports_provider_error() {
    let err = parse_oauth_fragment("error=access_denied&state=abc").unwrap_err();
    assert_eq!(err, "Google sign-in was cancelled (access_denied).");
}

#[test]
fn oauth_fragment_requires_token_and_state() {
    assert_eq!(parse_oauth_fragment("state=abc").unwrap_err(), "Google did not return an id token.");
    assert_eq!(
        parse_oauth_fragment("id_token=t").unwrap_err(),
        "Google did not return the sign-in state."
    );
    assert_eq!(parse_oauth_fragment("").unwrap_err(), "Google did not return an id token.");
}
