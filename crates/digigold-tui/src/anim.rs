//! Time-driven animation primitives.
//!
//! Every animated value is a pure function of elapsed time since its screen
//! mounted. Screens sample their tracks on each tick instead of integrating
//! per-frame deltas, so choreography is deterministic and testable without
//! a real clock.

use std::time::Duration;

/// Repeat behavior for a [`Track`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Repeat {
    /// Play once and hold the final value.
    Once,
    /// Wrap elapsed time modulo the track period.
    Loop,
}

/// One linear segment of a track.
#[derive(Debug, Clone, Copy)]
pub struct Segment {
    /// Offset from track start.
    pub start: Duration,
    pub duration: Duration,
    pub from: f32,
    pub to: f32,
}

impl Segment {
    fn end(&self) -> Duration {
        self.start + self.duration
    }
}

/// A piecewise-linear timeline sampled by elapsed time.
#[derive(Debug, Clone)]
pub struct Track {
    segments: Vec<Segment>,
    repeat: Repeat,
}

impl Track {
    /// A single segment from `from` to `to` over `duration`, starting at zero.
    pub fn timing(from: f32, to: f32, duration: Duration) -> Self {
        Self {
            segments: vec![Segment {
                start: Duration::ZERO,
                duration,
                from,
                to,
            }],
            repeat: Repeat::Once,
        }
    }

    /// Shifts every segment later by `delay`.
    ///
    /// Before the first segment starts, the track holds that segment's
    /// `from` value.
    #[must_use]
    pub fn delayed(mut self, delay: Duration) -> Self {
        for segment in &mut self.segments {
            segment.start += delay;
        }
        self
    }

    /// Repeats the track forever with period equal to its total length.
    ///
    /// At each period boundary the value snaps back to the track start.
    #[must_use]
    pub fn looped(mut self) -> Self {
        self.repeat = Repeat::Loop;
        self
    }

    /// Length of one pass: the latest segment end.
    pub fn period(&self) -> Duration {
        self.segments
            .iter()
            .map(Segment::end)
            .max()
            .unwrap_or(Duration::ZERO)
    }

    /// Samples the track at `elapsed` since mount.
    pub fn sample(&self, elapsed: Duration) -> f32 {
        let period = self.period();
        let t = match self.repeat {
            Repeat::Once => elapsed.min(period),
            Repeat::Loop if period.is_zero() => Duration::ZERO,
            Repeat::Loop => {
                Duration::from_nanos((elapsed.as_nanos() % period.as_nanos()) as u64)
            }
        };

        let mut value = self.segments.first().map_or(0.0, |s| s.from);
        for segment in &self.segments {
            if t < segment.start {
                break;
            }
            if t >= segment.end() {
                value = segment.to;
                continue;
            }
            let progress = (t - segment.start).as_secs_f32() / segment.duration.as_secs_f32();
            value = segment.from + (segment.to - segment.from) * progress;
            break;
        }
        value
    }
}

/// Closed-form damped spring, sampled by elapsed time (unit mass).
///
/// With tension 50 and friction 7 the system is underdamped (damping ratio
/// ~0.49), giving the slight overshoot of a natural pop-in before settling
/// on the target.
#[derive(Debug, Clone, Copy)]
pub struct Spring {
    from: f32,
    to: f32,
    tension: f32,
    friction: f32,
}

impl Spring {
    pub fn new(from: f32, to: f32, tension: f32, friction: f32) -> Self {
        Self {
            from,
            to,
            tension,
            friction,
        }
    }

    /// Position at `elapsed`, starting from rest at `from`.
    pub fn sample(&self, elapsed: Duration) -> f32 {
        let t = elapsed.as_secs_f32();
        let omega = self.tension.sqrt();
        let zeta = self.friction / (2.0 * omega);
        let x0 = self.from - self.to;

        let displaced = if zeta < 1.0 {
            let damped = omega * (1.0 - zeta * zeta).sqrt();
            let decay = (-zeta * omega * t).exp();
            decay * x0 * ((damped * t).cos() + (zeta * omega / damped) * (damped * t).sin())
        } else {
            // Critically damped fallback for stiff parameter choices.
            let decay = (-omega * t).exp();
            decay * x0 * (1.0 + omega * t)
        };

        self.to + displaced
    }
}

/// Maps `input` through a piecewise-linear set of `(input, output)` points.
///
/// Points must be sorted by input. Inputs outside the range clamp to the
/// nearest endpoint.
pub fn interpolate(input: f32, points: &[(f32, f32)]) -> f32 {
    let (Some(&(first_in, first_out)), Some(&(last_in, last_out))) =
        (points.first(), points.last())
    else {
        return 0.0;
    };
    if input <= first_in {
        return first_out;
    }
    if input >= last_in {
        return last_out;
    }
    for pair in points.windows(2) {
        let (x0, y0) = pair[0];
        let (x1, y1) = pair[1];
        if input <= x1 {
            if (x1 - x0).abs() < f32::EPSILON {
                return y1;
            }
            return y0 + (y1 - y0) * (input - x0) / (x1 - x0);
        }
    }
    last_out
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-3;

    fn assert_close(actual: f32, expected: f32) {
        assert!(
            (actual - expected).abs() < EPSILON,
            "expected {expected}, got {actual}"
        );
    }

    /// A once track interpolates linearly and holds its final value.
    #[test]
    fn test_timing_once_holds_final_value() {
        let track = Track::timing(0.0, 1.0, Duration::from_millis(800));

        assert_close(track.sample(Duration::ZERO), 0.0);
        assert_close(track.sample(Duration::from_millis(400)), 0.5);
        assert_close(track.sample(Duration::from_millis(800)), 1.0);
        assert_close(track.sample(Duration::from_secs(60)), 1.0);
    }

    /// A looping rotation track wraps modulo its period.
    #[test]
    fn test_rotation_loop_wraps() {
        let track = Track::timing(0.0, 360.0, Duration::from_secs(10)).looped();

        assert_close(track.sample(Duration::from_millis(2500)), 90.0);
        assert_close(track.sample(Duration::from_millis(12_500)), 90.0);
        assert_close(track.sample(Duration::from_secs(10)), 0.0); // snap at boundary
    }

    /// A delayed track holds its start value through the delay, and the
    /// delay is part of every loop cycle.
    #[test]
    fn test_delayed_loop_includes_delay_each_cycle() {
        let track = Track::timing(0.0, 1.0, Duration::from_millis(4000))
            .delayed(Duration::from_millis(2000))
            .looped();

        assert_eq!(track.period(), Duration::from_millis(6000));
        assert_close(track.sample(Duration::from_millis(1000)), 0.0);
        assert_close(track.sample(Duration::from_millis(4000)), 0.5);
        // Second cycle: delay applies again.
        assert_close(track.sample(Duration::from_millis(7000)), 0.0);
        assert_close(track.sample(Duration::from_millis(10_000)), 0.5);
    }

    /// The spring starts at `from`, overshoots the target, and settles.
    #[test]
    fn test_spring_overshoots_then_settles() {
        let spring = Spring::new(0.8, 1.0, 50.0, 7.0);

        assert_close(spring.sample(Duration::ZERO), 0.8);
        // Underdamped: first peak passes the target.
        assert!(spring.sample(Duration::from_millis(510)) > 1.0);
        // Settled well within two seconds.
        assert!((spring.sample(Duration::from_secs(2)) - 1.0).abs() < 0.01);
    }

    /// Interpolation clamps outside the input range and is linear inside.
    #[test]
    fn test_interpolate_clamps_and_interpolates() {
        let points = [(0.0, 0.0), (0.5, 1.0), (1.0, 0.0)];

        assert_close(interpolate(-1.0, &points), 0.0);
        assert_close(interpolate(0.25, &points), 0.5);
        assert_close(interpolate(0.5, &points), 1.0);
        assert_close(interpolate(0.75, &points), 0.5);
        assert_close(interpolate(2.0, &points), 0.0);
    }
}
