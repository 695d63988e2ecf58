use super::*;

/// # Safety
/// Tests must run with `--test-threads=1` to avoid env races.
unsafe fn clear_host_env() {
    unsafe {
        std::env::remove_var("PORT");
        std::env::remove_var("IDENTITY_URL");
        std::env::remove_var("IDENTITY_ANON_KEY");
    }
}

#[test]
fn parse_port_defaults_when_unset() {
    assert_eq!(parse_port(None), Ok(DEFAULT_PORT));
}

#[test]
fn parse_port_accepts_trimmed_number() {
    assert_eq!(parse_port(Some(" 8080 ")), Ok(8080));
}

#[test]
fn parse_port_rejects_garbage() {
    let err = parse_port(Some("eighty")).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { var: "PORT", .. }));
}

#[test]
fn from_env_reads_identity_and_port() {
    unsafe {
        clear_host_env();
        std::env::set_var("PORT", "4000");
        std::env::set_var("IDENTITY_URL", "https://abcd.supabase.co/");
        std::env::set_var("IDENTITY_ANON_KEY", "anon");
    }

    let cfg = HostConfig::from_env().unwrap();
    assert_eq!(cfg.port, 4000);
    assert_eq!(cfg.identity.url, "https://abcd.supabase.co");
    assert_eq!(cfg.identity.anon_key, "anon");

    unsafe { clear_host_env() };
}

#[test]
fn from_env_requires_identity_url() {
    unsafe {
        clear_host_env();
        std::env::set_var("IDENTITY_ANON_KEY", "anon");
    }

    assert_eq!(HostConfig::from_env(), Err(ConfigError::Missing { var: "IDENTITY_URL" }));

    unsafe { clear_host_env() };
}
