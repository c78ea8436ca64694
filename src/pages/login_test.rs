use super::*;

#[test]
fn validate_login_trims_email() {
    assert_eq!(
        validate_login("  user@example.com  ", "secret"),
        Ok(("user@example.com".to_owned(), "secret".to_owned()))
    );
}

#[test]
fn validate_login_requires_plausible_email() {
    assert_eq!(
        validate_login("not-an-email", "secret"),
        Err("Enter a valid email address.")
    );
    assert_eq!(
        validate_login("   ", "secret"),
        Err("Enter a valid email address.")
    );
}

#[test]
fn validate_login_requires_password() {
    assert_eq!(
        validate_login("user@example.com", ""),
        Err("Enter your password.")
    );
}
