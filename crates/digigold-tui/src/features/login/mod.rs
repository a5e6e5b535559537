//! Login screen: email/password form with validation and async submission.

mod render;
mod state;
mod update;

pub use render::render_login;
pub use state::{Field, LoginState, SubmitState};
pub use update::{handle_key, handle_login_result};
