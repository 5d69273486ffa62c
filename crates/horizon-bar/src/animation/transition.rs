//! Transition records.
//!
//! A [`Transition`] describes one time-bounded interpolation between two
//! values. It is immutable once created: superseding a transition means
//! dropping the old record and building a new one.

use std::time::{Duration, Instant};

use super::easing::{ease, Easing};

/// Result of sampling a transition at some instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TransitionState {
    /// Transition is still in progress.
    Running {
        /// Eased progress (may leave 0.0-1.0 for overshooting curves).
        progress: f32,
        /// Interpolated value at this instant.
        value: f32,
    },
    /// Transition has reached its end value.
    Finished {
        /// The end value.
        value: f32,
    },
}

impl TransitionState {
    /// Check if the transition is still in progress.
    pub fn is_running(&self) -> bool {
        matches!(self, TransitionState::Running { .. })
    }

    /// The value at the sampled instant.
    pub fn value(&self) -> f32 {
        match *self {
            TransitionState::Running { value, .. } | TransitionState::Finished { value } => value,
        }
    }
}

/// An in-flight interpolation from `start` to `end`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    start: f32,
    end: f32,
    started_at: Instant,
    duration: Duration,
    easing: Easing,
}

impl Transition {
    /// Create a transition that begins at `started_at`.
    pub fn new(start: f32, end: f32, started_at: Instant, duration: Duration, easing: Easing) -> Self {
        Self {
            start,
            end,
            started_at,
            duration,
            easing,
        }
    }

    /// The value the transition starts from.
    #[inline]
    pub fn start(&self) -> f32 {
        self.start
    }

    /// The value the transition ends at.
    #[inline]
    pub fn end(&self) -> f32 {
        self.end
    }

    /// When the transition started.
    #[inline]
    pub fn started_at(&self) -> Instant {
        self.started_at
    }

    /// The total duration.
    #[inline]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// The easing curve.
    #[inline]
    pub fn easing(&self) -> Easing {
        self.easing
    }

    /// Linear (un-eased) progress at `now`, in 0.0-1.0.
    ///
    /// Instants before the start count as zero elapsed time; a zero duration
    /// is complete immediately.
    pub fn linear_progress(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.started_at);
        (elapsed.as_secs_f64() / self.duration.as_secs_f64()).min(1.0) as f32
    }

    /// Sample the transition at `now`.
    pub fn sample(&self, now: Instant) -> TransitionState {
        let raw_progress = self.linear_progress(now);

        if raw_progress >= 1.0 {
            return TransitionState::Finished { value: self.end };
        }

        let progress = ease(self.easing, raw_progress);
        TransitionState::Running {
            progress,
            value: self.start + (self.end - self.start) * progress,
        }
    }
}
