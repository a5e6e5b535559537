//! Feature slices: each screen owns its state, key handling, and rendering.

pub mod login;
pub mod onboard;
