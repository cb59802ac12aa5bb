use super::*;

#[test]
fn weak_password_is_rejected_before_anything_else() {
    let err = validate_signup("Ann", "", "ann@example.com", "abcdef").unwrap_err();
    assert_eq!(err, SignupInputError::Password("Password must contain an uppercase letter.".to_owned()));
    assert_eq!(err.title(), "Invalid Password");

    let err = validate_signup("", "", "", "abc").unwrap_err().to_string();
    assert!(err.contains("uppercase"), "{err}");
    assert!(err.contains("6"), "{err}");
}

#[test]
fn valid_input_builds_request_with_trimmed_profile() {
    let request = validate_signup("  Ann Lee ", "   ", " ann@example.com ", "Abcdef").unwrap();
    assert_eq!(request.email, "ann@example.com");
    assert_eq!(request.password, "Abcdef");
    assert_eq!(request.profile.display_name.as_deref(), Some("Ann Lee"));
    assert_eq!(request.profile.photo_url, None);
}

#[test]
fn blank_email_is_rejected_with_its_own_title() {
    let err = validate_signup("Ann", "", "  ", "Abcdef").unwrap_err();
    assert_eq!(err, SignupInputError::MissingEmail);
    assert_eq!(err.to_string(), "Email is required.");
    assert_eq!(err.title(), "Invalid Email");
}
