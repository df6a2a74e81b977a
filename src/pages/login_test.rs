use super::*;

#[test]
fn complete_credentials_pass() {
    assert_eq!(validate_login_input("dana@velomax.test", "hunter42"), Ok(()));
}

#[test]
fn missing_email_is_rejected() {
    assert_eq!(
        validate_login_input("", "hunter42"),
        Err("Enter both email and password.".to_owned())
    );
}

#[test]
fn missing_password_is_rejected() {
    assert_eq!(
        validate_login_input("dana@velomax.test", ""),
        Err("Enter both email and password.".to_owned())
    );
}
