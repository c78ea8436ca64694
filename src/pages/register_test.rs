use super::*;

#[test]
fn valid_fields_pass_through_trimmed() {
    assert_eq!(
        validate_register(" Alice ", " alice@example.com ", "password1", "password1"),
        Ok((
            "Alice".to_owned(),
            "alice@example.com".to_owned(),
            "password1".to_owned()
        ))
    );
}

#[test]
fn name_is_required() {
    assert_eq!(
        validate_register("  ", "a@b.com", "password1", "password1"),
        Err("Enter your name.")
    );
}

#[test]
fn email_must_look_like_an_email() {
    assert_eq!(
        validate_register("Alice", "nope", "password1", "password1"),
        Err("Enter a valid email address.")
    );
}

#[test]
fn short_password_is_rejected() {
    assert_eq!(
        validate_register("Alice", "a@b.com", "short", "short"),
        Err("Password must be at least 8 characters.")
    );
}

#[test]
fn mismatched_confirmation_is_rejected() {
    assert_eq!(
        validate_register("Alice", "a@b.com", "password1", "password2"),
        Err("Passwords do not match.")
    );
}
