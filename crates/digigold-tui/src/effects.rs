//! Effects returned by the reducer and executed by the runtime.
//!
//! The reducer never performs I/O. It describes side effects as values and
//! the runtime carries them out, reporting results back as events.

use digigold_core::auth::Credentials;

use crate::common::TaskId;

#[derive(Debug)]
pub enum UiEffect {
    /// Exit the event loop.
    Quit,
    /// Submit credentials on a background task. The runtime answers with a
    /// `LoginResult` event wrapped in the task lifecycle.
    SubmitLogin {
        task: TaskId,
        credentials: Credentials,
    },
}
