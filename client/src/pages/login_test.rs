use super::*;

#[test]
fn validate_sign_in_input_trims_email() {
    assert_eq!(validate_sign_in_input("  jane@example.com  ", "secret"), Ok("jane@example.com".to_owned()));
}

#[test]
fn validate_sign_in_input_requires_both_fields() {
    assert_eq!(validate_sign_in_input("   ", "secret"), Err("Enter both email and password."));
    assert_eq!(validate_sign_in_input("jane@example.com", "  "), Err("Enter both email and password."));
}

#[test]
fn validate_sign_in_input_rejects_email_without_at() {
    assert_eq!(validate_sign_in_input("jane", "secret"), Err("Enter a valid email address."));
}

#[test]
fn validate_sign_up_input_requires_name_first() {
    assert_eq!(validate_sign_up_input("  ", "", ""), Err("Enter your name."));
}

#[test]
fn validate_sign_up_input_returns_trimmed_pair() {
    assert_eq!(
        validate_sign_up_input(" Jane ", " jane@example.com ", "pw"),
        Ok(("Jane".to_owned(), "jane@example.com".to_owned()))
    );
}

#[test]
fn auth_mode_toggles_between_forms() {
    assert_eq!(AuthMode::default(), AuthMode::SignIn);
    assert_eq!(AuthMode::SignIn.toggled(), AuthMode::SignUp);
    assert_eq!(AuthMode::SignUp.toggled(), AuthMode::SignIn);
}
