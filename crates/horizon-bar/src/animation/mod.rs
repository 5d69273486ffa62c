//! Animation support for the bar widget.
//!
//! - [`Easing`] and [`ease`]: the closed set of interpolation curves.
//! - [`Transition`]: one immutable, time-bounded interpolation record.
//! - [`ValueAnimator`]: the Idle/Transitioning state machine that turns
//!   target changes into displayed values.
//!
//! Time never advances on its own here. Callers pass the current `Instant`
//! into every operation, usually read from a
//! [`FrameClock`](horizon_bar_core::FrameClock).

mod animator;
mod easing;
mod transition;

pub use animator::{
    clamp_value, duration_from_secs, AnimatorState, ValueAnimator, DEFAULT_DURATION, MAX_VALUE,
    MIN_VALUE,
};
pub use easing::{ease, lerp_eased, Easing};
pub use transition::{Transition, TransitionState};
