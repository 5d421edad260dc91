use super::*;

#[test]
fn validate_signup_input_builds_request() {
    let req = validate_signup_input(" Ari ", " ari@hotel.test ", "longenough", "manager").unwrap();
    assert_eq!(req.name, "Ari");
    assert_eq!(req.email, "ari@hotel.test");
    assert_eq!(req.role.as_deref(), Some("manager"));
}

#[test]
fn validate_signup_input_drops_unknown_role() {
    let req = validate_signup_input("Ari", "ari@hotel.test", "longenough", "admin").unwrap();
    assert!(req.role.is_none());
}

#[test]
fn validate_signup_input_requires_name_and_email() {
    assert_eq!(validate_signup_input("", "a@b.c", "longenough", "staff"), Err("Enter your name and email."));
    assert_eq!(validate_signup_input("Ari", " ", "longenough", "staff"), Err("Enter your name and email."));
}

#[test]
fn validate_signup_input_checks_email_and_password() {
    assert_eq!(validate_signup_input("Ari", "ari", "longenough", "staff"), Err("Enter a valid email address."));
    assert_eq!(
        validate_signup_input("Ari", "ari@hotel.test", "short", "staff"),
        Err("Password must be at least 8 characters.")
    );
}
