//! Onboarding animation state.
//!
//! The choreography starts when the screen mounts:
//! - entrance: fade 0→1 and slide 50→0 over 800ms, plus a spring scale
//!   0.8→1 (tension 50, friction 7), all in parallel
//! - logo: one full rotation every 10 seconds, looping
//! - particles: each waits `index × 1s`, rises over 4s, snaps back, and
//!   repeats (the stagger delay is part of every cycle)

use std::time::{Duration, Instant};

use crate::anim::{Spring, Track};

/// Entrance fade/slide duration.
pub const ENTRANCE: Duration = Duration::from_millis(800);
/// One full logo rotation.
pub const ROTATION_PERIOD: Duration = Duration::from_secs(10);
/// Per-particle start stagger.
pub const PARTICLE_STAGGER: Duration = Duration::from_millis(1000);
/// Particle rise duration.
pub const PARTICLE_RISE: Duration = Duration::from_millis(4000);

const SLIDE_DISTANCE: f32 = 50.0;
const SPRING_TENSION: f32 = 50.0;
const SPRING_FRICTION: f32 = 7.0;

/// Feature rows shown on the card: icon, title, description.
pub const FEATURES: [(&str, &str, &str); 4] = [
    (
        "🔒",
        "Bank-Level Security",
        "Your investments are protected with advanced encryption",
    ),
    (
        "💰",
        "Start from ₹1",
        "Begin investing in gold with as little as one rupee",
    ),
    (
        "📈",
        "Real-time Tracking",
        "Monitor your gold portfolio 24/7 with live updates",
    ),
    (
        "⚡",
        "Instant Liquidity",
        "Buy and sell digital gold instantly anytime",
    ),
];

/// Call-to-action buttons at the bottom of the card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cta {
    #[default]
    GetStarted,
    LearnMore,
}

/// Sampled animation values for the current frame.
#[derive(Debug, Clone)]
pub struct AnimatedValues {
    /// Card opacity, 0..=1.
    pub fade: f32,
    /// Card vertical offset in animation units, 50→0.
    pub slide: f32,
    /// Card scale, 0.8→~1 with overshoot.
    pub scale: f32,
    /// Logo rotation in degrees, 0..360.
    pub rotation_deg: f32,
    /// Per-particle cycle progress, 0..=1.
    pub particles: Vec<f32>,
}

#[derive(Debug)]
pub struct OnboardState {
    mounted_at: Option<Instant>,
    fade: Track,
    slide: Track,
    scale: Spring,
    rotation: Track,
    particles: Vec<Track>,
    pub values: AnimatedValues,
    pub focus: Cta,
}

impl OnboardState {
    pub fn new(particle_count: usize) -> Self {
        let particles = (0..particle_count)
            .map(|i| {
                Track::timing(0.0, 1.0, PARTICLE_RISE)
                    .delayed(PARTICLE_STAGGER * i as u32)
                    .looped()
            })
            .collect();
        Self {
            mounted_at: None,
            fade: Track::timing(0.0, 1.0, ENTRANCE),
            slide: Track::timing(SLIDE_DISTANCE, 0.0, ENTRANCE),
            scale: Spring::new(0.8, 1.0, SPRING_TENSION, SPRING_FRICTION),
            rotation: Track::timing(0.0, 360.0, ROTATION_PERIOD).looped(),
            particles,
            values: AnimatedValues {
                fade: 0.0,
                slide: SLIDE_DISTANCE,
                scale: 0.8,
                rotation_deg: 0.0,
                particles: vec![0.0; particle_count],
            },
            focus: Cta::default(),
        }
    }

    /// (Re)starts the choreography. Called by the router when this screen
    /// is shown; remounting restarts from zero.
    pub fn mount(&mut self, now: Instant) {
        self.mounted_at = Some(now);
        self.sample(Duration::ZERO);
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted_at.is_some()
    }

    /// Samples every animated value for the current clock. A no-op until
    /// the screen has mounted.
    pub fn tick(&mut self, now: Instant) {
        if let Some(mounted_at) = self.mounted_at {
            self.sample(now.saturating_duration_since(mounted_at));
        }
    }

    fn sample(&mut self, elapsed: Duration) {
        self.values.fade = self.fade.sample(elapsed);
        self.values.slide = self.slide.sample(elapsed);
        self.values.scale = self.scale.sample(elapsed);
        self.values.rotation_deg = self.rotation.sample(elapsed);
        for (value, track) in self.values.particles.iter_mut().zip(&self.particles) {
            *value = track.sample(elapsed);
        }
    }

    pub fn focus_next(&mut self) {
        self.focus = match self.focus {
            Cta::GetStarted => Cta::LearnMore,
            Cta::LearnMore => Cta::GetStarted,
        };
    }
}
