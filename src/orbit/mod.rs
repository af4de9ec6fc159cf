//! Camera orbit interpolation toward a target latitude/longitude.
//!
//! A run interpolates spherical camera angles `(theta, phi)` with cubic
//! ease-out from one time base, taking the shortest arc in theta across the
//! ±180° seam and landing exactly on the target at the end. The
//! [`OrbitAnimator`] owns a generation token so a new orbit request
//! supersedes an in-flight one instead of racing it: each tick serves only
//! the newest run, and a superseded run stops silently.

use web_time::{Duration, Instant};

use crate::util::angles::{
    phi_from_latitude_deg, theta_from_longitude_deg, wrap_delta_to_pi,
};
use crate::util::easing::EasingFunction;

/// Spherical camera orientation: `theta` is azimuth (east positive), `phi`
/// is measured down from the pole axis in `[0, π]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitAngles {
    /// Azimuthal angle in radians.
    pub theta: f64,
    /// Polar angle in radians, 0 at the north pole.
    pub phi: f64,
}

impl OrbitAngles {
    /// Orientation from explicit angles.
    #[must_use]
    pub fn new(theta: f64, phi: f64) -> Self {
        Self { theta, phi }
    }

    /// Orientation looking at a geographic position:
    /// `theta = lon·π/180`, `phi = (90° - lat)·π/180`.
    #[must_use]
    pub fn from_geographic(lat_deg: f64, lon_deg: f64) -> Self {
        Self {
            theta: theta_from_longitude_deg(lon_deg),
            phi: phi_from_latitude_deg(lat_deg),
        }
    }
}

/// One interpolated orientation sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitSample {
    /// Current orientation.
    pub angles: OrbitAngles,
    /// True on the terminal sample, which equals the target exactly.
    pub done: bool,
}

/// A single orbit interpolation run. The sampling math is pure: given an
/// elapsed time the result is fully determined, which keeps the run
/// testable without a clock.
#[derive(Debug, Clone)]
pub struct OrbitRun {
    start: OrbitAngles,
    target: OrbitAngles,
    /// Shortest-arc theta delta, wrapped into `[-π, π]`.
    delta_theta: f64,
    delta_phi: f64,
    start_time: Instant,
    duration: Duration,
    easing: EasingFunction,
}

impl OrbitRun {
    /// Start a run from the current orientation toward a target.
    #[must_use]
    pub fn new(
        current: OrbitAngles,
        target: OrbitAngles,
        duration: Duration,
    ) -> Self {
        Self::with_start_time(Instant::now(), current, target, duration)
    }

    /// Create with an explicit start time (for deterministic tests).
    #[must_use]
    pub fn with_start_time(
        start_time: Instant,
        current: OrbitAngles,
        target: OrbitAngles,
        duration: Duration,
    ) -> Self {
        Self {
            start: current,
            target,
            delta_theta: wrap_delta_to_pi(target.theta - current.theta),
            delta_phi: target.phi - current.phi,
            start_time,
            duration,
            easing: EasingFunction::DEFAULT,
        }
    }

    /// The target this run is heading toward.
    #[must_use]
    pub fn target(&self) -> OrbitAngles {
        self.target
    }

    /// Normalized progress (0.0 to 1.0) at a wall-clock instant.
    #[must_use]
    pub fn progress(&self, now: Instant) -> f64 {
        self.progress_at(now.saturating_duration_since(self.start_time))
    }

    fn progress_at(&self, elapsed: Duration) -> f64 {
        if self.duration.is_zero() {
            1.0
        } else {
            (elapsed.as_secs_f64() / self.duration.as_secs_f64()).min(1.0)
        }
    }

    /// Sample the run at an elapsed time since its start.
    ///
    /// Both angles ease from the same time base, so they complete
    /// synchronously; the terminal sample is the exact target, not an
    /// asymptotic approach.
    #[must_use]
    pub fn sample_at(&self, elapsed: Duration) -> OrbitSample {
        let progress = self.progress_at(elapsed);
        if progress >= 1.0 {
            return OrbitSample {
                angles: self.target,
                done: true,
            };
        }
        let eased = self.easing.evaluate(progress);
        OrbitSample {
            angles: OrbitAngles {
                theta: self.start.theta + self.delta_theta * eased,
                phi: self.start.phi + self.delta_phi * eased,
            },
            done: false,
        }
    }

    /// Sample the run at a wall-clock instant.
    #[must_use]
    pub fn sample(&self, now: Instant) -> OrbitSample {
        self.sample_at(now.saturating_duration_since(self.start_time))
    }
}

/// Monotonically increasing token identifying one orbit request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct OrbitGeneration(u64);

/// Drives orbit runs from the host's per-frame scheduler, one at a time.
///
/// Starting a new orbit supersedes the in-flight one; the superseded run
/// never produces another sample.
#[derive(Debug, Default)]
pub struct OrbitAnimator {
    generation: u64,
    active: Option<OrbitRun>,
}

impl OrbitAnimator {
    /// An idle animator.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin a new orbit, superseding any run in flight. Returns the
    /// request's generation token.
    pub fn start(
        &mut self,
        current: OrbitAngles,
        target: OrbitAngles,
        duration: Duration,
    ) -> OrbitGeneration {
        self.generation += 1;
        if self.active.is_some() {
            log::debug!(
                "orbit request superseded by generation {}",
                self.generation
            );
        }
        self.active = Some(OrbitRun::new(current, target, duration));
        OrbitGeneration(self.generation)
    }

    /// Whether a generation token still identifies the newest request.
    #[must_use]
    pub fn is_current(&self, generation: OrbitGeneration) -> bool {
        generation.0 == self.generation
    }

    /// Whether a run is in flight.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.active.is_some()
    }

    /// Advance to `now` and produce the next sample, or `None` when idle.
    /// After the terminal sample the animator returns to idle.
    pub fn tick(&mut self, now: Instant) -> Option<OrbitSample> {
        let run = self.active.as_ref()?;
        let sample = run.sample(now);
        if sample.done {
            self.active = None;
        }
        Some(sample)
    }

    /// Drop the in-flight run without completing it.
    pub fn cancel(&mut self) {
        self.active = None;
    }
}
