use super::*;

#[test]
fn matching_state_yields_google_credential() {
    let credential = credential_from_redirect("#id_token=tok&state=abc", Some("abc")).unwrap();
    assert_eq!(credential.provider, FederatedProvider::Google);
    assert_eq!(credential.id_token, "tok");
}

#[test]
fn mismatched_or_missing_state_is_rejected() {
    assert!(credential_from_redirect("#id_token=tok&state=abc", Some("xyz")).is_err());
    assert!(credential_from_redirect("#id_token=tok&state=abc", None).is_err());
}

#[test]
fn provider_error_is_reported() {
    let err = credential_from_redirect("#error=access_denied&state=abc", Some("abc")).unwrap_err();
    assert!(err.contains("access_denied"), "{err}");
}
