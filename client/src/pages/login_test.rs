use super::*;

#[test]
fn validate_login_input_trims_email() {
    assert_eq!(
        validate_login_input("  desk@hotel.test  ", "pw"),
        Ok(Credentials { email: "desk@hotel.test".to_owned(), password: "pw".to_owned() })
    );
}

#[test]
fn validate_login_input_keeps_password_verbatim() {
    let creds = validate_login_input("desk@hotel.test", " spaced ").unwrap();
    assert_eq!(creds.password, " spaced ");
}

#[test]
fn validate_login_input_requires_both_fields() {
    assert_eq!(validate_login_input("   ", "pw"), Err("Enter both email and password."));
    assert_eq!(validate_login_input("desk@hotel.test", ""), Err("Enter both email and password."));
}
