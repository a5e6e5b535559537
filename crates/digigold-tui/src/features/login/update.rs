//! Key handling and submission lifecycle for the login screen.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use digigold_core::auth;
use tracing::{debug, info, warn};

use super::state::{LoginState, SubmitState};
use crate::common::TaskSeq;
use crate::effects::UiEffect;
use crate::events::SubmitOutcome;
use crate::overlays::OverlayRequest;

/// Effects to execute plus an optional overlay to open.
pub type KeyResult = (Vec<UiEffect>, Option<OverlayRequest>);

pub fn handle_key(state: &mut LoginState, task_seq: &mut TaskSeq, key: KeyEvent) -> KeyResult {
    // All input is ignored while a submission is in flight; there is no
    // cancel, the form unlocks when the result arrives.
    if state.is_submitting() {
        return (vec![], None);
    }

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Tab | KeyCode::BackTab | KeyCode::Down | KeyCode::Up => {
            state.focus_next();
            (vec![], None)
        }
        KeyCode::Enter => submit(state, task_seq),
        KeyCode::Backspace => {
            state.pop_char();
            (vec![], None)
        }
        KeyCode::Char('r') if ctrl => {
            state.toggle_show_password();
            (vec![], None)
        }
        KeyCode::Char('f') if ctrl => {
            debug!("forgot-password requested");
            (
                vec![],
                Some(OverlayRequest::alert(
                    "Forgot Password",
                    "Implement recovery flow",
                )),
            )
        }
        KeyCode::Char('s') if ctrl => {
            debug!("sign-up requested");
            (
                vec![],
                Some(OverlayRequest::alert("Sign Up", "Go to signup screen")),
            )
        }
        KeyCode::Char(c) if !ctrl => {
            state.push_char(c);
            (vec![], None)
        }
        _ => (vec![], None),
    }
}

/// Validates the form and, if valid, starts a submission task.
///
/// Validation failures open a notice and leave the form untouched; no
/// effect is emitted and the fields keep their values.
fn submit(state: &mut LoginState, task_seq: &mut TaskSeq) -> KeyResult {
    let credentials = state.credentials();
    if let Err(error) = auth::validate(&credentials) {
        return (
            vec![],
            Some(OverlayRequest::alert(error.title(), error.message())),
        );
    }

    state.submit = SubmitState::Submitting;
    info!(email = %credentials.email, "login submission started");
    let task = task_seq.next_id();
    (vec![UiEffect::SubmitLogin { task, credentials }], None)
}

/// Applies a settled submission. Always returns the form to idle, whatever
/// the outcome, so a failure can never leave the form locked.
pub fn handle_login_result(state: &mut LoginState, outcome: SubmitOutcome) -> Option<OverlayRequest> {
    state.submit = SubmitState::Idle;
    match outcome {
        SubmitOutcome::Delegated { result: Ok(()) } => {
            // The embedder owns the post-login flow; nothing to show here.
            info!("login succeeded");
            None
        }
        SubmitOutcome::Delegated { result: Err(error) } => {
            warn!(message = error.user_message(), "login failed");
            Some(OverlayRequest::alert("Login failed", error.user_message()))
        }
        SubmitOutcome::Demo { email } => {
            info!(%email, "demo login completed");
            Some(OverlayRequest::alert(
                "Success",
                format!("Logged in as {email}"),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use digigold_core::auth::AuthError;

    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::from(code)
    }

    fn filled_form() -> LoginState {
        let mut state = LoginState::default();
        state.set_email("user@example.com");
        state.set_password("secret");
        state
    }

    /// Submitting an empty form opens the empty-email notice and emits no
    /// effect.
    #[test]
    fn test_submit_empty_form_shows_validation_notice() {
        let mut state = LoginState::default();
        let mut seq = TaskSeq::default();

        let (effects, overlay) = handle_key(&mut state, &mut seq, key(KeyCode::Enter));

        assert!(effects.is_empty());
        assert_eq!(
            overlay,
            Some(OverlayRequest::alert("Validation", "Please enter your email"))
        );
        assert!(!state.is_submitting());
    }

    /// A valid form starts a submission: effect emitted, form locked.
    #[test]
    fn test_submit_valid_form_starts_task() {
        let mut state = filled_form();
        let mut seq = TaskSeq::default();

        let (effects, overlay) = handle_key(&mut state, &mut seq, key(KeyCode::Enter));

        assert!(overlay.is_none());
        assert!(state.is_submitting());
        assert!(matches!(
            effects.as_slice(),
            [UiEffect::SubmitLogin { credentials, .. }]
                if credentials.email == "user@example.com" && credentials.password == "secret"
        ));
    }

    /// While a submission is in flight every key is swallowed, including a
    /// second Enter.
    #[test]
    fn test_input_ignored_while_submitting() {
        let mut state = filled_form();
        let mut seq = TaskSeq::default();
        let _ = handle_key(&mut state, &mut seq, key(KeyCode::Enter));

        let (effects, overlay) = handle_key(&mut state, &mut seq, key(KeyCode::Char('x')));
        assert!(effects.is_empty());
        assert!(overlay.is_none());
        assert_eq!(state.email, "user@example.com");

        let (effects, _) = handle_key(&mut state, &mut seq, key(KeyCode::Enter));
        assert!(effects.is_empty());
    }

    /// A failed result unlocks the form and opens the failure notice with
    /// the authenticator's message.
    #[test]
    fn test_failure_unlocks_and_reports_message() {
        let mut state = filled_form();
        state.submit = SubmitState::Submitting;

        let overlay = handle_login_result(
            &mut state,
            SubmitOutcome::Delegated {
                result: Err(AuthError::new("Invalid password")),
            },
        );

        assert!(!state.is_submitting());
        assert_eq!(
            overlay,
            Some(OverlayRequest::alert("Login failed", "Invalid password"))
        );
    }

    /// An error without a message falls back to the generic notice.
    #[test]
    fn test_failure_without_message_uses_generic_notice() {
        let mut state = filled_form();
        state.submit = SubmitState::Submitting;

        let overlay = handle_login_result(
            &mut state,
            SubmitOutcome::Delegated {
                result: Err(AuthError::unspecified()),
            },
        );

        assert_eq!(
            overlay,
            Some(OverlayRequest::alert("Login failed", "Something went wrong"))
        );
    }

    /// A delegated success closes the loop without any notice.
    #[test]
    fn test_delegated_success_shows_nothing() {
        let mut state = filled_form();
        state.submit = SubmitState::Submitting;

        let overlay =
            handle_login_result(&mut state, SubmitOutcome::Delegated { result: Ok(()) });

        assert!(!state.is_submitting());
        assert!(overlay.is_none());
    }

    /// The demo path reports success with the submitted email.
    #[test]
    fn test_demo_success_notice() {
        let mut state = filled_form();
        state.submit = SubmitState::Submitting;

        let overlay = handle_login_result(
            &mut state,
            SubmitOutcome::Demo {
                email: "user@example.com".to_string(),
            },
        );

        assert_eq!(
            overlay,
            Some(OverlayRequest::alert(
                "Success",
                "Logged in as user@example.com"
            ))
        );
    }

    /// Ctrl+F and Ctrl+S open the stub notices.
    #[test]
    fn test_stub_links_open_notices() {
        let mut state = LoginState::default();
        let mut seq = TaskSeq::default();

        let ctrl_f = KeyEvent::new(KeyCode::Char('f'), KeyModifiers::CONTROL);
        let (_, overlay) = handle_key(&mut state, &mut seq, ctrl_f);
        assert!(matches!(
            overlay,
            Some(OverlayRequest::Alert { ref title, .. }) if title == "Forgot Password"
        ));

        let ctrl_s = KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL);
        let (_, overlay) = handle_key(&mut state, &mut seq, ctrl_s);
        assert!(matches!(
            overlay,
            Some(OverlayRequest::Alert { ref title, .. }) if title == "Sign Up"
        ));
    }
}
