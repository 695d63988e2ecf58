//! Login form state and credential validation.
//!
//! DESIGN
//! ======
//! Validation is synchronous and runs before any provider call. Errors are
//! recomputed from scratch on every submit attempt, so a fixed field loses
//! its message on the next try.

#[cfg(test)]
#[path = "credentials_test.rs"]
mod credentials_test;

use crate::net::types::Credentials;

pub const MIN_PASSWORD_LEN: usize = 6;
pub const EMAIL_ERROR: &str = "Please enter a valid email";
pub const PASSWORD_ERROR: &str = "Password must be at least 6 characters";

/// Which request the form submits.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthMode {
    #[default]
    SignIn,
    SignUp,
}

impl AuthMode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::SignIn => "signin",
            Self::SignUp => "signup",
        }
    }

    pub fn tab_label(self) -> &'static str {
        match self {
            Self::SignIn => "Sign In",
            Self::SignUp => "Sign Up",
        }
    }

    pub fn submit_label(self) -> &'static str {
        match self {
            Self::SignIn => "Sign In",
            Self::SignUp => "Create Account",
        }
    }

    pub fn busy_label(self) -> &'static str {
        match self {
            Self::SignIn => "Signing in...",
            Self::SignUp => "Creating account...",
        }
    }

    pub fn password_autocomplete(self) -> &'static str {
        match self {
            Self::SignIn => "current-password",
            Self::SignUp => "new-password",
        }
    }
}

/// Per-field validation messages.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub email: Option<&'static str>,
    pub password: Option<&'static str>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.email.is_none() && self.password.is_none()
    }
}

/// Transient form state; never persisted.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CredentialForm {
    pub email: String,
    pub password: String,
    pub errors: FieldErrors,
    pub submitting: bool,
    pub mode: AuthMode,
}

impl CredentialForm {
    /// Validate without touching state.
    ///
    /// # Errors
    ///
    /// Returns every failing field's message.
    pub fn validate(&self) -> Result<Credentials, FieldErrors> {
        let errors = FieldErrors {
            email: validate_email(&self.email).err(),
            password: validate_password(&self.password).err(),
        };
        if errors.is_empty() {
            Ok(Credentials { email: self.email.clone(), password: self.password.clone() })
        } else {
            Err(errors)
        }
    }

    /// Start a submission. Returns `None` when validation fails (errors are
    /// stored) or a request is already in flight.
    pub fn begin_submit(&mut self) -> Option<Credentials> {
        if self.submitting {
            return None;
        }
        match self.validate() {
            Ok(credentials) => {
                self.errors = FieldErrors::default();
                self.submitting = true;
                Some(credentials)
            }
            Err(errors) => {
                self.errors = errors;
                None
            }
        }
    }

    /// Settle a submission. A confirmed sign-up clears the form and returns
    /// to sign-in; any other outcome keeps the entered values.
    pub fn finish_submit(&mut self, mode: AuthMode, succeeded: bool) {
        self.submitting = false;
        if succeeded && mode == AuthMode::SignUp {
            self.email.clear();
            self.password.clear();
            self.errors = FieldErrors::default();
            self.mode = AuthMode::SignIn;
        }
    }

    pub fn set_mode(&mut self, mode: AuthMode) {
        self.mode = mode;
    }
}

/// Password rule: at least [`MIN_PASSWORD_LEN`] characters.
///
/// # Errors
///
/// Returns [`PASSWORD_ERROR`] when too short.
pub fn validate_password(password: &str) -> Result<(), &'static str> {
    if password.chars().count() >= MIN_PASSWORD_LEN {
        Ok(())
    } else {
        Err(PASSWORD_ERROR)
    }
}

/// Email format check.
///
/// Local part: letters, digits and `_ ' + - .`; no leading dot, no `..`, not
/// ending in a dot. Domain: two or more labels, each starting with a letter
/// or digit and made of letters, digits and hyphens; the last label is at
/// least two letters.
///
/// # Errors
///
/// Returns [`EMAIL_ERROR`] when malformed.
pub fn validate_email(email: &str) -> Result<(), &'static str> {
    if is_valid_email(email) { Ok(()) } else { Err(EMAIL_ERROR) }
}

fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    valid_local_part(local) && valid_domain(domain)
}

fn valid_local_part(local: &str) -> bool {
    !local.is_empty()
        && !local.starts_with('.')
        && local
            .chars()
            .next_back()
            .is_some_and(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '+' | '-'))
        && !local.contains("..")
        && local
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '\'' | '+' | '-' | '.'))
}

fn valid_domain(domain: &str) -> bool {
    let labels: Vec<&str> = domain.split('.').collect();
    let Some((tld, hosts)) = labels.split_last() else {
        return false;
    };
    if hosts.is_empty() || tld.len() < 2 || !tld.chars().all(|c| c.is_ascii_alphabetic()) {
        return false;
    }
    hosts.iter().all(|label| {
        label.chars().next().is_some_and(|c| c.is_ascii_alphanumeric())
            && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
    })
}
