//! UI events consumed by the reducer.

use std::time::Instant;

use digigold_core::auth::AuthError;

use crate::common::{TaskCompleted, TaskKind, TaskStarted};

/// Outcome of a settled login submission.
#[derive(Debug)]
pub enum SubmitOutcome {
    /// A caller-supplied authenticator resolved; its result is reported
    /// verbatim.
    Delegated { result: Result<(), AuthError> },
    /// The built-in demo path resolved (always success).
    Demo { email: String },
}

/// Events consumed by the reducer.
#[derive(Debug)]
pub enum UiEvent {
    /// Animation/render clock. Carries the wall-clock instant so animated
    /// values stay pure functions of time.
    Tick { now: Instant },
    /// Raw terminal input.
    Terminal(crossterm::event::Event),
    /// A login submission settled.
    LoginResult { outcome: SubmitOutcome },
    /// A background task was spawned.
    TaskStarted {
        kind: TaskKind,
        started: TaskStarted,
    },
    /// A background task finished; `result` is the event to dispatch.
    TaskCompleted {
        kind: TaskKind,
        completed: TaskCompleted<Box<UiEvent>>,
    },
}
