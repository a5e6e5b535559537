//! Effect handlers: pure async functions that return the event to dispatch.

use std::sync::Arc;
use std::time::Duration;

use digigold_core::auth::{Authenticator, Credentials};
use tracing::debug;

use crate::events::{SubmitOutcome, UiEvent};

/// Runs a login submission to completion.
///
/// With an authenticator, delegates and reports its result verbatim; the
/// call is awaited without a timeout. The demo path simulates a network
/// round-trip and always succeeds.
pub async fn submit_login(
    authenticator: Option<Arc<dyn Authenticator>>,
    credentials: Credentials,
    demo_delay: Duration,
) -> UiEvent {
    match authenticator {
        Some(authenticator) => {
            let result = authenticator.authenticate(credentials).await;
            UiEvent::LoginResult {
                outcome: SubmitOutcome::Delegated { result },
            }
        }
        None => {
            debug!(delay_ms = demo_delay.as_millis() as u64, "demo login delay");
            tokio::time::sleep(demo_delay).await;
            UiEvent::LoginResult {
                outcome: SubmitOutcome::Demo {
                    email: credentials.email,
                },
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use digigold_core::auth::{AuthError, DemoAuthenticator};
    use futures_util::future::BoxFuture;

    use super::*;

    struct RejectingAuthenticator;

    impl Authenticator for RejectingAuthenticator {
        fn authenticate(
            &self,
            _credentials: Credentials,
        ) -> BoxFuture<'static, Result<(), AuthError>> {
            Box::pin(async { Err(AuthError::new("Invalid password")) })
        }
    }

    fn creds() -> Credentials {
        Credentials {
            email: "user@example.com".to_string(),
            password: "secret".to_string(),
        }
    }

    /// Without an authenticator the demo path waits the configured delay
    /// and reports success with the submitted email.
    #[tokio::test(start_paused = true)]
    async fn test_demo_path_waits_then_succeeds() {
        let start = tokio::time::Instant::now();
        let event = submit_login(None, creds(), Duration::from_millis(1200)).await;

        assert!(start.elapsed() >= Duration::from_millis(1200));
        assert!(matches!(
            event,
            UiEvent::LoginResult {
                outcome: SubmitOutcome::Demo { ref email }
            } if email == "user@example.com"
        ));
    }

    /// A supplied authenticator's failure is reported verbatim.
    #[tokio::test]
    async fn test_delegated_failure_reported() {
        let auth: Arc<dyn Authenticator> = Arc::new(RejectingAuthenticator);
        let event = submit_login(Some(auth), creds(), Duration::ZERO).await;

        assert!(matches!(
            event,
            UiEvent::LoginResult {
                outcome: SubmitOutcome::Delegated { result: Err(ref error) }
            } if error.user_message() == "Invalid password"
        ));
    }

    /// A supplied authenticator's success is delegated, not demo.
    #[tokio::test(start_paused = true)]
    async fn test_delegated_success() {
        let auth: Arc<dyn Authenticator> =
            Arc::new(DemoAuthenticator::new(Duration::from_millis(10)));
        let event = submit_login(Some(auth), creds(), Duration::ZERO).await;

        assert!(matches!(
            event,
            UiEvent::LoginResult {
                outcome: SubmitOutcome::Delegated { result: Ok(()) }
            }
        ));
    }
}
