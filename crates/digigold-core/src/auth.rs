//! Credentials, validation, and the authentication capability.
//!
//! The login screen does not know how credentials are verified. It depends
//! on the [`Authenticator`] trait: a single-method capability supplied by
//! the embedder. When no authenticator is supplied, the UI falls back to a
//! simulated delay-then-success path driven by [`DemoAuthenticator`]'s
//! delay semantics.

use std::fmt;
use std::sync::LazyLock;
use std::time::Duration;

use futures_util::future::BoxFuture;
use regex::Regex;

/// Generic failure notice shown when an error carries no message.
pub const GENERIC_FAILURE_MESSAGE: &str = "Something went wrong";

/// Simple email shape check: one local part, one domain with a TLD segment.
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("valid email regex"));

/// A transient credential pair, created per submission attempt.
///
/// Never persisted; dropped when the submission completes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Validation failures, in the order the rules are checked.
///
/// Validation is short-circuit: the first failing rule is reported and
/// later rules are not evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    EmptyEmail,
    InvalidEmail,
    EmptyPassword,
}

impl ValidationError {
    /// Title for the user-facing notice.
    pub fn title(&self) -> &'static str {
        "Validation"
    }

    /// User-facing message for this rule.
    pub fn message(&self) -> &'static str {
        match self {
            ValidationError::EmptyEmail => "Please enter your email",
            ValidationError::InvalidEmail => "Please enter a valid email",
            ValidationError::EmptyPassword => "Please enter your password",
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for ValidationError {}

/// Validates credentials before submission. First-error-wins.
pub fn validate(credentials: &Credentials) -> Result<(), ValidationError> {
    if credentials.email.trim().is_empty() {
        return Err(ValidationError::EmptyEmail);
    }
    if !EMAIL_RE.is_match(&credentials.email) {
        return Err(ValidationError::InvalidEmail);
    }
    if credentials.password.is_empty() {
        return Err(ValidationError::EmptyPassword);
    }
    Ok(())
}

/// Failure returned by an [`Authenticator`].
///
/// Carries an optional human-readable message; the UI falls back to a
/// generic notice when none is present.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthError {
    message: Option<String>,
}

impl AuthError {
    /// An error with a user-facing message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
        }
    }

    /// An error with no message (the UI shows a generic notice).
    pub fn unspecified() -> Self {
        Self { message: None }
    }

    /// The message to surface to the user.
    pub fn user_message(&self) -> &str {
        self.message.as_deref().unwrap_or(GENERIC_FAILURE_MESSAGE)
    }
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.user_message())
    }
}

impl std::error::Error for AuthError {}

/// The submission capability the login screen delegates to.
///
/// Implementations own the actual credential handling (an API call, in a
/// real deployment). The form only awaits the result and reports failure
/// messages; there is no timeout on this call.
pub trait Authenticator: Send + Sync {
    fn authenticate(&self, credentials: Credentials) -> BoxFuture<'static, Result<(), AuthError>>;
}

/// Delay-then-success authenticator used by tests and demos.
#[derive(Debug, Clone)]
pub struct DemoAuthenticator {
    delay: Duration,
}

impl DemoAuthenticator {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Authenticator for DemoAuthenticator {
    fn authenticate(&self, _credentials: Credentials) -> BoxFuture<'static, Result<(), AuthError>> {
        let delay = self.delay;
        Box::pin(async move {
            tokio::time::sleep(delay).await;
            Ok(())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn creds(email: &str, password: &str) -> Credentials {
        Credentials {
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    /// Empty email is rejected before the password is ever checked.
    #[test]
    fn test_empty_email_rejected_first() {
        assert_eq!(
            validate(&creds("", "")),
            Err(ValidationError::EmptyEmail),
            "empty password must not shadow the empty-email rule"
        );
        assert_eq!(validate(&creds("   ", "pw")), Err(ValidationError::EmptyEmail));
    }

    /// Emails failing the pattern are rejected with the invalid-email notice.
    #[test]
    fn test_email_pattern() {
        assert_eq!(validate(&creds("foo", "pw")), Err(ValidationError::InvalidEmail));
        assert_eq!(validate(&creds("a@b", "pw")), Err(ValidationError::InvalidEmail));
        assert_eq!(
            validate(&creds("a b@c.com", "pw")),
            Err(ValidationError::InvalidEmail)
        );
        assert_eq!(
            validate(&creds("a@@b.com", "pw")),
            Err(ValidationError::InvalidEmail)
        );
        assert_eq!(validate(&creds("a@b.com", "pw")), Ok(()));
    }

    /// Valid email with empty password hits the empty-password rule.
    #[test]
    fn test_empty_password_rejected() {
        assert_eq!(
            validate(&creds("a@b.com", "")),
            Err(ValidationError::EmptyPassword)
        );
    }

    /// Invalid email shadows an empty password (first-error-wins).
    #[test]
    fn test_first_error_wins() {
        assert_eq!(validate(&creds("foo", "")), Err(ValidationError::InvalidEmail));
    }

    /// AuthError falls back to the generic message when none is set.
    #[test]
    fn test_auth_error_message_fallback() {
        assert_eq!(
            AuthError::new("bad credentials").user_message(),
            "bad credentials"
        );
        assert_eq!(
            AuthError::unspecified().user_message(),
            GENERIC_FAILURE_MESSAGE
        );
    }

    /// Demo authenticator resolves successfully after its delay.
    #[tokio::test(start_paused = true)]
    async fn test_demo_authenticator_resolves_after_delay() {
        let auth = DemoAuthenticator::new(Duration::from_millis(1200));
        let start = tokio::time::Instant::now();
        let result = auth.authenticate(creds("a@b.com", "pw")).await;
        assert!(result.is_ok());
        assert!(start.elapsed() >= Duration::from_millis(1200));
    }
}
