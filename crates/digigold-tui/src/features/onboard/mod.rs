//! Onboarding screen: animated entrance, rotating logo, floating particles.

mod render;
mod state;
mod update;

pub use render::render_onboard;
pub use state::{Cta, OnboardState};
pub use update::handle_key;
