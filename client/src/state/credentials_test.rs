use super::*;

// =============================================================
// Helpers
// =============================================================

fn form(email: &str, password: &str) -> CredentialForm {
    CredentialForm { email: email.to_owned(), password: password.to_owned(), ..CredentialForm::default() }
}

// =============================================================
// Email validation
// =============================================================

#[test]
fn accepts_common_addresses() {
    for email in ["a@b.com", "first.last@example.co.uk", "o'neil+tag@mail-host.io", "x_y-z@sub.domain.org"] {
        assert_eq!(validate_email(email), Ok(()), "{email}");
    }
}

#[test]
fn rejects_malformed_addresses() {
    for email in [
        "",
        "plain",
        "@b.com",
        "a@",
        "a@b",
        "a@b.c",
        ".a@b.com",
        "a.@b.com",
        "a'@b.com",
        "a..b@c.com",
        "a@-b.com",
        "a@b..com",
        "a@b.c0m",
        "a b@c.com",
        "a@b@c.com",
    ] {
        assert_eq!(validate_email(email), Err(EMAIL_ERROR), "{email}");
    }
}

// =============================================================
// Password validation
// =============================================================

#[test]
fn password_requires_six_characters() {
    assert_eq!(validate_password("short"), Err(PASSWORD_ERROR));
    assert_eq!(validate_password("sixsix"), Ok(()));
}

#[test]
fn password_length_counts_characters_not_bytes() {
    assert_eq!(validate_password("ééééé"), Err(PASSWORD_ERROR));
    assert_eq!(validate_password("éééééé"), Ok(()));
}

// =============================================================
// CredentialForm
// =============================================================

#[test]
fn short_password_blocks_submit_with_field_error() {
    let mut f = form("a@b.com", "short");
    assert_eq!(f.begin_submit(), None);
    assert_eq!(f.errors.password, Some("Password must be at least 6 characters"));
    assert_eq!(f.errors.email, None);
    assert!(!f.submitting);
}

#[test]
fn errors_are_recomputed_each_attempt() {
    let mut f = form("bad", "short");
    assert_eq!(f.begin_submit(), None);
    assert_eq!(f.errors, FieldErrors { email: Some(EMAIL_ERROR), password: Some(PASSWORD_ERROR) });

    f.email = "a@b.com".to_owned();
    assert_eq!(f.begin_submit(), None);
    assert_eq!(f.errors, FieldErrors { email: None, password: Some(PASSWORD_ERROR) });

    f.password = "longenough".to_owned();
    let creds = f.begin_submit().unwrap();
    assert_eq!(creds.email, "a@b.com");
    assert!(f.errors.is_empty());
    assert!(f.submitting);
}

#[test]
fn begin_submit_refuses_while_in_flight() {
    let mut f = form("a@b.com", "secret1");
    assert!(f.begin_submit().is_some());
    assert_eq!(f.begin_submit(), None);
}

#[test]
fn finish_submit_reenables_after_failure_and_keeps_values() {
    let mut f = form("a@b.com", "secret1");
    f.begin_submit();
    f.finish_submit(AuthMode::SignIn, false);
    assert!(!f.submitting);
    assert_eq!(f.email, "a@b.com");
    assert_eq!(f.password, "secret1");
}

#[test]
fn finish_submit_after_signin_success_keeps_form() {
    let mut f = form("a@b.com", "secret1");
    f.begin_submit();
    f.finish_submit(AuthMode::SignIn, true);
    assert!(!f.submitting);
    assert_eq!(f.email, "a@b.com");
}

#[test]
fn finish_submit_after_signup_success_resets_to_signin() {
    let mut f = form("a@b.com", "secret1");
    f.set_mode(AuthMode::SignUp);
    f.begin_submit();
    f.finish_submit(AuthMode::SignUp, true);
    assert_eq!(f, CredentialForm::default());
}

// =============================================================
// AuthMode
// =============================================================

#[test]
fn auth_mode_labels() {
    assert_eq!(AuthMode::default(), AuthMode::SignIn);
    assert_eq!(AuthMode::SignIn.as_str(), "signin");
    assert_eq!(AuthMode::SignUp.as_str(), "signup");
    assert_eq!(AuthMode::SignUp.submit_label(), "Create Account");
    assert_eq!(AuthMode::SignUp.busy_label(), "Creating account...");
    assert_eq!(AuthMode::SignIn.busy_label(), "Signing in...");
}
