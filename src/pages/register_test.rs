use super::*;

// =============================================================
// Registration validation
// =============================================================

#[test]
fn complete_registration_passes() {
    assert_eq!(
        validate_registration("Dana Reyes", "dana@velomax.test", "hunter42", "hunter42"),
        Ok(())
    );
}

#[test]
fn each_missing_field_gets_its_own_message() {
    assert_eq!(
        validate_registration("", "dana@velomax.test", "hunter42", "hunter42"),
        Err("Name is required.".to_owned())
    );
    assert_eq!(
        validate_registration("Dana", "", "hunter42", "hunter42"),
        Err("Email is required.".to_owned())
    );
    assert_eq!(
        validate_registration("Dana", "dana@velomax.test", "", ""),
        Err("Password is required.".to_owned())
    );
}

#[test]
fn malformed_emails_are_rejected() {
    assert_eq!(
        validate_registration("Dana", "dana.velomax.test", "hunter42", "hunter42"),
        Err("Enter a valid email.".to_owned())
    );
    assert_eq!(
        validate_registration("Dana", "dana@velomax", "hunter42", "hunter42"),
        Err("Enter a valid email.".to_owned())
    );
}

#[test]
fn short_passwords_are_rejected() {
    assert_eq!(
        validate_registration("Dana", "dana@velomax.test", "abc12", "abc12"),
        Err("Password must be at least 6 characters long.".to_owned())
    );
}

#[test]
fn mismatched_passwords_are_rejected() {
    assert_eq!(
        validate_registration("Dana", "dana@velomax.test", "hunter42", "hunter43"),
        Err("Passwords do not match.".to_owned())
    );
}

// =============================================================
// Email shape
// =============================================================

#[test]
fn email_shapes() {
    assert!(looks_like_email("a@b.c"));
    assert!(looks_like_email("dana.reyes@velomax.test"));
    assert!(!looks_like_email("a@b"));
    assert!(!looks_like_email("@b.c"));
    assert!(!looks_like_email("a@b..c"));
    assert!(!looks_like_email("a b@c.d"));
}
