//! Value animation for the bar widget.
//!
//! [`ValueAnimator`] keeps two numbers apart: the *target* the host asked for
//! and the *displayed* value used for painting. When animation is enabled, a
//! target change starts a [`Transition`] from the current displayed value, and
//! each frame tick moves the displayed value along it.
//!
//! Every mutating method returns `Option<f32>`. `Some(displayed)` means the
//! displayed value was updated and exactly one update must be delivered to
//! the renderer; `None` means nothing visible changed.
//!
//! # Example
//!
//! ```
//! use horizon_bar::animation::{Easing, ValueAnimator};
//! use std::time::{Duration, Instant};
//!
//! let mut animator = ValueAnimator::new();
//! animator.set_duration(Duration::from_secs(1));
//! animator.set_easing(Easing::Linear);
//!
//! let t0 = Instant::now();
//! animator.set_target(100.0, t0);
//! let value = animator.tick(t0 + Duration::from_millis(500)).unwrap();
//! assert!((value - 50.0).abs() < 0.01);
//! ```

use std::time::{Duration, Instant};

use horizon_bar_core::logging::targets;

use super::easing::Easing;
use super::transition::{Transition, TransitionState};

/// Lowest representable bar value.
pub const MIN_VALUE: f32 = 0.0;
/// Highest representable bar value.
pub const MAX_VALUE: f32 = 100.0;
/// Transition duration used until one is configured.
pub const DEFAULT_DURATION: Duration = Duration::from_millis(500);

/// Clamp a value into the bar's 0-100 range.
///
/// Returns `None` for NaN, which has no meaningful position on the bar.
#[inline]
pub fn clamp_value(value: f32) -> Option<f32> {
    if value.is_nan() {
        None
    } else {
        Some(value.clamp(MIN_VALUE, MAX_VALUE))
    }
}

/// Whether the animator is currently driving a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnimatorState {
    /// Displayed value is at rest.
    #[default]
    Idle,
    /// A transition is in flight.
    Transitioning,
}

/// Reconciles target changes into a stream of displayed values.
#[derive(Debug, Clone)]
pub struct ValueAnimator {
    target: f32,
    displayed: f32,
    animated: bool,
    easing: Easing,
    duration: Duration,
    active: Option<Transition>,
}

impl ValueAnimator {
    /// Create an idle animator at 0 with animation enabled, a linear curve and
    /// a half-second duration.
    pub fn new() -> Self {
        Self {
            target: MIN_VALUE,
            displayed: MIN_VALUE,
            animated: true,
            easing: Easing::Linear,
            duration: DEFAULT_DURATION,
            active: None,
        }
    }

    /// The most recently requested value.
    #[inline]
    pub fn target(&self) -> f32 {
        self.target
    }

    /// The value currently used for rendering.
    #[inline]
    pub fn displayed(&self) -> f32 {
        self.displayed
    }

    /// Whether target changes are animated.
    #[inline]
    pub fn is_animated(&self) -> bool {
        self.animated
    }

    /// The curve used for new transitions.
    #[inline]
    pub fn easing(&self) -> Easing {
        self.easing
    }

    /// The duration used for new transitions.
    #[inline]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Current state of the state machine.
    pub fn state(&self) -> AnimatorState {
        if self.active.is_some() {
            AnimatorState::Transitioning
        } else {
            AnimatorState::Idle
        }
    }

    /// Check if a transition is in flight.
    #[inline]
    pub fn is_transitioning(&self) -> bool {
        self.active.is_some()
    }

    /// The in-flight transition, if any.
    pub fn active_transition(&self) -> Option<&Transition> {
        self.active.as_ref()
    }

    /// Set the curve for future transitions. An in-flight transition keeps its curve.
    pub fn set_easing(&mut self, easing: Easing) {
        self.easing = easing;
    }

    /// Set the duration for future transitions. An in-flight transition keeps its duration.
    pub fn set_duration(&mut self, duration: Duration) {
        self.duration = duration;
    }

    /// Set the duration in seconds. Negative, NaN and infinite input becomes
    /// zero; values too large for a `Duration` saturate.
    pub fn set_duration_secs(&mut self, secs: f32) {
        self.duration = duration_from_secs(secs);
    }

    /// Request a new target value at instant `now`.
    ///
    /// The value is clamped to 0-100. Requesting the current target is a no-op.
    /// When animated with a non-zero duration, any in-flight transition is
    /// discarded and a new one starts from the current displayed value;
    /// otherwise the displayed value jumps to the target.
    pub fn set_target(&mut self, value: f32, now: Instant) -> Option<f32> {
        let Some(target) = clamp_value(value) else {
            tracing::warn!(target: targets::ANIMATION, "ignoring NaN target value");
            return None;
        };

        if target == self.target {
            return None;
        }
        self.target = target;

        if !self.animated || self.duration.is_zero() {
            self.cancel("target set without animation");
            self.displayed = target;
            return Some(self.displayed);
        }

        self.cancel("superseded by new target");

        if self.displayed == target {
            return None;
        }

        tracing::debug!(
            target: targets::ANIMATION,
            from = self.displayed,
            to = target,
            duration = ?self.duration,
            easing = %self.easing,
            "transition started"
        );
        self.active = Some(Transition::new(
            self.displayed,
            target,
            now,
            self.duration,
            self.easing,
        ));
        None
    }

    /// Advance the in-flight transition to instant `now`.
    ///
    /// Returns the new displayed value, or `None` when idle. The transition
    /// ends (and the animator returns to idle) once its progress reaches 1.
    pub fn tick(&mut self, now: Instant) -> Option<f32> {
        let transition = self.active?;

        match transition.sample(now) {
            TransitionState::Running { value, .. } => {
                self.displayed = clamp_value(value).unwrap_or(transition.end());
                tracing::trace!(target: targets::ANIMATION, displayed = self.displayed, "transition tick");
            }
            TransitionState::Finished { value } => {
                self.displayed = value;
                self.active = None;
                tracing::debug!(target: targets::ANIMATION, value, "transition finished");
            }
        }

        Some(self.displayed)
    }

    /// Enable or disable animation.
    ///
    /// Disabling while a transition is in flight cancels it and snaps the
    /// displayed value to the target. Enabling never starts a transition.
    pub fn set_animated(&mut self, animated: bool) -> Option<f32> {
        self.animated = animated;
        if animated {
            None
        } else {
            self.snap()
        }
    }

    /// Cancel any transition and jump straight to the target.
    pub fn snap(&mut self) -> Option<f32> {
        let cancelled = self.cancel("snapped to target");
        if cancelled || self.displayed != self.target {
            self.displayed = self.target;
            Some(self.displayed)
        } else {
            None
        }
    }

    fn cancel(&mut self, reason: &'static str) -> bool {
        match self.active.take() {
            Some(transition) => {
                tracing::debug!(
                    target: targets::ANIMATION,
                    from = transition.start(),
                    to = transition.end(),
                    displayed = self.displayed,
                    reason,
                    "transition cancelled"
                );
                true
            }
            None => false,
        }
    }
}

impl Default for ValueAnimator {
    fn default() -> Self {
        Self::new()
    }
}

/// Convert a seconds value from the host into a duration, treating anything
/// that is not a finite non-negative number as zero.
///
/// Values too large for a [`Duration`] saturate to [`Duration::MAX`].
pub fn duration_from_secs(secs: f32) -> Duration {
    if secs.is_finite() && secs > 0.0 {
        Duration::try_from_secs_f32(secs).unwrap_or(Duration::MAX)
    } else {
        Duration::ZERO
    }
}
