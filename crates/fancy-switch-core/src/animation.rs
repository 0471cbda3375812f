//! Animation primitives: spring physics and eased tweens.
//!
//! Springs are the workhorse for state transitions because they can be
//! retargeted mid-flight without a visual snap: the current value and
//! velocity carry over into the new motion. Tweens cover fixed-duration
//! effects such as icon morphs and press ripples.

// =============================================================================
// Easing Functions
// =============================================================================

use serde::{Deserialize, Serialize};

/// Standard easing functions for tweens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Easing {
    /// Linear interpolation (no easing)
    #[default]
    Linear,
    /// Ease in (slow start)
    EaseIn,
    /// Ease out (slow end)
    EaseOut,
    /// Ease in and out (slow start and end)
    EaseInOut,
    /// Cubic ease out
    CubicOut,
    /// Cubic ease in and out
    CubicInOut,
}

impl Easing {
    /// Apply easing function to a normalized time value (0.0 to 1.0).
    #[must_use]
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::EaseIn => t * t,
            Self::EaseOut => (1.0 - t).mul_add(-(1.0 - t), 1.0),
            Self::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0f64).mul_add(t, 2.0).powi(2) / 2.0
                }
            }
            Self::CubicOut => 1.0 - (1.0 - t).powi(3),
            Self::CubicInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0f64).mul_add(t, 2.0).powi(3) / 2.0
                }
            }
        }
    }
}

// =============================================================================
// SpringConfig - Spring Physics Parameters
// =============================================================================

/// Spring physics configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringConfig {
    /// Mass of the object (affects inertia)
    pub mass: f64,
    /// Stiffness of the spring (affects speed)
    pub stiffness: f64,
    /// Damping coefficient (affects bounciness)
    pub damping: f64,
    /// Displacement and velocity below which the spring is settled
    pub precision: f64,
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self::from_damping_ratio(Self::STIFFNESS_MEDIUM, Self::DAMPING_RATIO_NO_BOUNCY)
    }
}

impl SpringConfig {
    /// High stiffness preset.
    pub const STIFFNESS_HIGH: f64 = 10_000.0;
    /// Medium stiffness preset.
    pub const STIFFNESS_MEDIUM: f64 = 1500.0;
    /// Medium-low stiffness preset.
    pub const STIFFNESS_MEDIUM_LOW: f64 = 400.0;
    /// Low stiffness preset.
    pub const STIFFNESS_LOW: f64 = 200.0;

    /// Critically damped: fastest settle without overshoot from rest.
    pub const DAMPING_RATIO_NO_BOUNCY: f64 = 1.0;
    /// Slight overshoot.
    pub const DAMPING_RATIO_LOW_BOUNCY: f64 = 0.75;

    /// Default settle threshold.
    pub const DEFAULT_PRECISION: f64 = 0.001;

    /// Create custom spring config from raw coefficients.
    #[must_use]
    pub const fn custom(mass: f64, stiffness: f64, damping: f64) -> Self {
        Self {
            mass,
            stiffness,
            damping,
            precision: Self::DEFAULT_PRECISION,
        }
    }

    /// Unit-mass spring with the given stiffness and damping ratio.
    #[must_use]
    pub fn from_damping_ratio(stiffness: f64, damping_ratio: f64) -> Self {
        Self::custom(1.0, stiffness, 2.0 * damping_ratio * stiffness.sqrt())
    }

    /// Set the settle threshold.
    #[must_use]
    pub const fn with_precision(mut self, precision: f64) -> Self {
        self.precision = precision;
        self
    }

    /// Undamped angular frequency.
    #[must_use]
    pub fn natural_frequency(&self) -> f64 {
        (self.stiffness / self.mass).sqrt()
    }

    /// Calculate damping ratio.
    #[must_use]
    pub fn damping_ratio(&self) -> f64 {
        self.damping / (2.0 * (self.mass * self.stiffness).sqrt())
    }

    /// Whether spring is underdamped (will oscillate).
    #[must_use]
    pub fn is_underdamped(&self) -> bool {
        self.damping_ratio() < 1.0 - CRITICAL_TOLERANCE
    }

    /// Whether spring is critically damped (fastest without oscillation).
    #[must_use]
    pub fn is_critically_damped(&self) -> bool {
        (self.damping_ratio() - 1.0).abs() <= CRITICAL_TOLERANCE
    }

    /// Whether spring is overdamped (slow, no oscillation).
    #[must_use]
    pub fn is_overdamped(&self) -> bool {
        self.damping_ratio() > 1.0 + CRITICAL_TOLERANCE
    }
}

const CRITICAL_TOLERANCE: f64 = 1e-6;

// =============================================================================
// Interpolator - replaceable stepping function
// =============================================================================

/// Outcome of one interpolation step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringStep {
    /// New value
    pub value: f64,
    /// New velocity (units per second)
    pub velocity: f64,
    /// Whether the value has come to rest on the target
    pub settled: bool,
}

/// Advances an animated scalar toward a target.
///
/// When `settled` is reported the returned value equals `target` exactly and
/// the velocity is zero.
pub trait Interpolator {
    /// Step `current` (moving at `velocity`) toward `target` over `dt` seconds.
    fn advance(&self, current: f64, velocity: f64, target: f64, dt: f64) -> SpringStep;
}

impl Interpolator for SpringConfig {
    /// Closed-form damped harmonic oscillator; exact for any `dt`, so large
    /// frame hitches cannot destabilize the motion.
    fn advance(&self, current: f64, velocity: f64, target: f64, dt: f64) -> SpringStep {
        let x0 = current - target;
        let v0 = velocity;
        let t = dt.max(0.0);

        let omega = self.natural_frequency();
        let zeta = self.damping_ratio();

        let (x, v) = if self.is_critically_damped() {
            let b = omega.mul_add(x0, v0);
            let decay = (-omega * t).exp();
            (b.mul_add(t, x0) * decay, (omega * b * t).mul_add(-decay, v0 * decay))
        } else if self.is_overdamped() {
            let s = omega * zeta.mul_add(zeta, -1.0).sqrt();
            let r1 = (-zeta).mul_add(omega, s);
            let r2 = (-zeta).mul_add(omega, -s);
            let c2 = r1.mul_add(-x0, v0) / (r2 - r1);
            let c1 = x0 - c2;
            let (e1, e2) = ((r1 * t).exp(), (r2 * t).exp());
            (c1.mul_add(e1, c2 * e2), (c1 * r1).mul_add(e1, c2 * r2 * e2))
        } else {
            let zo = zeta * omega;
            let wd = omega * zeta.mul_add(-zeta, 1.0).sqrt();
            let a = x0;
            let b = zo.mul_add(x0, v0) / wd;
            let decay = (-zo * t).exp();
            let (sin, cos) = (wd * t).sin_cos();
            (
                decay * a.mul_add(cos, b * sin),
                decay * b.mul_add(wd, -zo * a).mul_add(cos, -a.mul_add(wd, zo * b) * sin),
            )
        };

        if x.abs() < self.precision && v.abs() < self.precision {
            SpringStep {
                value: target,
                velocity: 0.0,
                settled: true,
            }
        } else {
            SpringStep {
                value: target + x,
                velocity: v,
                settled: false,
            }
        }
    }
}

// =============================================================================
// Spring - Animated Spring Value
// =============================================================================

/// A spring-animated value.
#[derive(Debug, Clone)]
pub struct Spring {
    /// Current value
    pub value: f64,
    /// Target value
    pub target: f64,
    /// Current velocity
    pub velocity: f64,
    /// Spring configuration
    pub config: SpringConfig,
    /// Whether animation is complete
    pub at_rest: bool,
}

impl Spring {
    /// Create a new spring resting at an initial value.
    #[must_use]
    pub fn new(initial: f64) -> Self {
        Self {
            value: initial,
            target: initial,
            velocity: 0.0,
            config: SpringConfig::default(),
            at_rest: true,
        }
    }

    /// Set spring configuration.
    #[must_use]
    pub const fn with_config(mut self, config: SpringConfig) -> Self {
        self.config = config;
        self
    }

    /// Redirect toward a new target, keeping the current value and velocity.
    pub fn set_target(&mut self, target: f64) {
        if (self.target - target).abs() > f64::EPSILON {
            self.target = target;
            self.at_rest = false;
        }
    }

    /// Advance by `dt` seconds using the configured interpolator.
    pub fn update(&mut self, dt: f64) {
        if self.at_rest {
            return;
        }
        let step = self.config.advance(self.value, self.velocity, self.target, dt);
        self.value = step.value;
        self.velocity = step.velocity;
        self.at_rest = step.settled;
    }

    /// Immediately set value without animation.
    pub fn set_immediate(&mut self, value: f64) {
        self.value = value;
        self.target = value;
        self.velocity = 0.0;
        self.at_rest = true;
    }
}

// =============================================================================
// EasedValue - fixed-duration tween
// =============================================================================

/// An easing-based animated value.
#[derive(Debug, Clone)]
pub struct EasedValue {
    /// Start value
    pub from: f64,
    /// End value
    pub to: f64,
    /// Total duration in seconds
    pub duration: f64,
    /// Elapsed time
    pub elapsed: f64,
    /// Easing function
    pub easing: Easing,
}

impl EasedValue {
    /// Create new eased animation.
    #[must_use]
    pub const fn new(from: f64, to: f64, duration: f64) -> Self {
        Self {
            from,
            to,
            duration,
            elapsed: 0.0,
            easing: Easing::EaseInOut,
        }
    }

    /// A tween that is already complete at `value`.
    #[must_use]
    pub const fn settled(value: f64) -> Self {
        Self::new(value, value, 0.0)
    }

    /// Set easing function.
    #[must_use]
    pub const fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Get current value.
    #[must_use]
    pub fn value(&self) -> f64 {
        let eased = self.easing.apply(self.progress());
        (self.to - self.from).mul_add(eased, self.from)
    }

    /// Whether animation is complete.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.elapsed >= self.duration
    }

    /// Update animation.
    pub fn update(&mut self, dt: f64) {
        self.elapsed = (self.elapsed + dt.max(0.0)).min(self.duration);
    }

    /// Progress from 0.0 to 1.0.
    #[must_use]
    pub fn progress(&self) -> f64 {
        if self.duration > 0.0 {
            (self.elapsed / self.duration).clamp(0.0, 1.0)
        } else {
            1.0
        }
    }

    /// Restart from the current value toward `to`, over `duration` seconds.
    pub fn retarget(&mut self, to: f64, duration: f64) {
        let from = self.value();
        *self = Self::new(from, to, duration.max(0.0)).with_easing(self.easing);
    }
}

// =============================================================================
// Tests
// =============================================================================
