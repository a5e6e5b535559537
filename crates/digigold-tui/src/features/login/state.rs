//! Login form state.

use digigold_core::auth::Credentials;

/// Which form field has keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Field {
    #[default]
    Email,
    Password,
}

/// Submission lifecycle for the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitState {
    #[default]
    Idle,
    /// A submission is in flight; input is ignored until it settles.
    Submitting,
}

#[derive(Debug, Default)]
pub struct LoginState {
    pub email: String,
    pub password: String,
    /// Show the password in clear text instead of masked.
    pub show_password: bool,
    pub focus: Field,
    pub submit: SubmitState,
}

impl LoginState {
    pub fn is_submitting(&self) -> bool {
        matches!(self.submit, SubmitState::Submitting)
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
    }

    pub fn set_password(&mut self, password: impl Into<String>) {
        self.password = password.into();
    }

    pub fn toggle_show_password(&mut self) {
        self.show_password = !self.show_password;
    }

    pub fn focus_next(&mut self) {
        self.focus = match self.focus {
            Field::Email => Field::Password,
            Field::Password => Field::Email,
        };
    }

    /// Snapshot of the current field values for a submission attempt.
    pub fn credentials(&self) -> Credentials {
        Credentials {
            email: self.email.clone(),
            password: self.password.clone(),
        }
    }

    pub fn push_char(&mut self, c: char) {
        self.focused_field_mut().push(c);
    }

    pub fn pop_char(&mut self) {
        self.focused_field_mut().pop();
    }

    fn focused_field_mut(&mut self) -> &mut String {
        match self.focus {
            Field::Email => &mut self.email,
            Field::Password => &mut self.password,
        }
    }
}
