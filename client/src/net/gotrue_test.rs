use super::*;

fn configured() -> GoTrueClient {
    GoTrueClient::new(IdentityConfig::new("https://abcd.supabase.co", "anon").unwrap())
}

// =============================================================
// Endpoints
// =============================================================

#[test]
fn endpoints_format_expected_paths() {
    assert_eq!(token_endpoint("https://x.test"), "https://x.test/auth/v1/token");
    assert_eq!(signup_endpoint("https://x.test"), "https://x.test/auth/v1/signup");
    assert_eq!(logout_endpoint("https://x.test"), "https://x.test/auth/v1/logout");
}

#[test]
fn logout_terminal_statuses() {
    assert!(logout_status_is_terminal(401));
    assert!(logout_status_is_terminal(403));
    assert!(logout_status_is_terminal(404));
    assert!(!logout_status_is_terminal(500));
    assert!(!logout_status_is_terminal(429));
}

// =============================================================
// Sign-up response
// =============================================================

#[test]
fn signup_user_only_response_has_no_session() {
    let body = serde_json::json!({"id": "u-1", "email": "a@b.com", "confirmation_sent_at": "2025-08-08"});
    assert_eq!(session_from_signup(body), None);
}

#[test]
fn signup_auto_confirm_response_yields_session() {
    let body = serde_json::json!({
        "access_token": "at",
        "token_type": "bearer",
        "expires_in": 3600,
        "refresh_token": "rt",
        "user": {"id": "u-1", "email": "a@b.com"}
    });
    let session = session_from_signup(body).unwrap();
    assert_eq!(session.user.id, "u-1");
    assert_eq!(session.expires_at, None);
}

// =============================================================
// Configuration
// =============================================================

#[test]
fn base_url_requires_configuration() {
    let client = GoTrueClient::new(IdentityConfig::default());
    assert_eq!(client.base_url(), Err(ProviderError::not_configured()));
    assert_eq!(configured().base_url(), Ok("https://abcd.supabase.co"));
}

#[test]
fn on_session_change_returns_live_handle() {
    let client = configured();
    let handle = client.on_session_change(std::sync::Arc::new(|_| {}));
    assert!(handle.is_active());
    handle.unsubscribe();
    assert!(!handle.is_active());
}

// =============================================================
// Server-side stubs
// =============================================================

#[cfg(not(feature = "hydrate"))]
#[test]
fn server_stubs_have_no_session_and_refuse_mutations() {
    let client = configured();
    let creds = Credentials { email: "a@b.com".to_owned(), password: "secret1".to_owned() };
    futures::executor::block_on(async {
        assert_eq!(client.get_session().await, None);
        assert_eq!(client.sign_in_with_password(&creds).await, Err(ProviderError::unavailable_on_server()));
        assert_eq!(client.sign_up(&creds, "https://app.test/").await, Err(ProviderError::unavailable_on_server()));
        assert_eq!(client.sign_out().await, Err(ProviderError::unavailable_on_server()));
    });
}
