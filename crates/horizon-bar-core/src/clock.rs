//! Frame clock for Horizon Bar.
//!
//! Animations never read the wall clock directly. They ask a [`FrameClock`]
//! for the current instant, which lets a host drive every animated widget from
//! the same per-frame timestamp and lets tests step time deterministically.

use std::fmt;
use std::time::{Duration, Instant};

use parking_lot::Mutex;

use crate::logging::targets;

/// A source of frame timestamps.
pub trait FrameClock: Send + Sync {
    /// The instant of the current frame.
    fn now(&self) -> Instant;
}

/// A clock backed by [`Instant::now`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl FrameClock for SystemClock {
    #[inline]
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// A clock that only moves when told to.
///
/// # Example
///
/// ```
/// use horizon_bar_core::{FrameClock, ManualClock};
/// use std::time::Duration;
///
/// let clock = ManualClock::new();
/// let start = clock.now();
/// clock.advance(Duration::from_millis(16));
/// assert_eq!(clock.now() - start, Duration::from_millis(16));
/// ```
pub struct ManualClock {
    origin: Instant,
    current: Mutex<Instant>,
}

impl ManualClock {
    /// Create a clock frozen at the current wall-clock instant.
    pub fn new() -> Self {
        let origin = Instant::now();
        Self {
            origin,
            current: Mutex::new(origin),
        }
    }

    /// Move the clock forward by `delta`.
    ///
    /// A step that would overflow the platform's `Instant` range is ignored.
    pub fn advance(&self, delta: Duration) {
        let mut current = self.current.lock();
        match current.checked_add(delta) {
            Some(next) => {
                *current = next;
                tracing::trace!(target: targets::CLOCK, elapsed = ?(next - self.origin), "clock advanced");
            }
            None => {
                tracing::warn!(target: targets::CLOCK, ?delta, "ignoring clock step past the end of time");
            }
        }
    }

    /// Move the clock forward by `secs` seconds.
    ///
    /// Negative or non-finite input is ignored; values too large for a
    /// `Duration` are ignored like any other overflowing step.
    pub fn advance_secs(&self, secs: f64) {
        if !(secs.is_finite() && secs > 0.0) {
            return;
        }
        match Duration::try_from_secs_f64(secs) {
            Ok(delta) => self.advance(delta),
            Err(_) => {
                tracing::warn!(target: targets::CLOCK, secs, "ignoring clock step past the end of time");
            }
        }
    }

    /// Time elapsed since the clock was created.
    pub fn elapsed(&self) -> Duration {
        *self.current.lock() - self.origin
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock for ManualClock {
    fn now(&self) -> Instant {
        *self.current.lock()
    }
}

impl fmt::Debug for ManualClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ManualClock")
            .field("elapsed", &self.elapsed())
            .finish()
    }
}

static_assertions::assert_impl_all!(ManualClock: Send, Sync);
static_assertions::assert_impl_all!(SystemClock: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_manual_clock_is_frozen() {
        let clock = ManualClock::new();
        let a = clock.now();
        let b = clock.now();
        assert_eq!(a, b);
        assert_eq!(clock.elapsed(), Duration::ZERO);
    }

    #[test]
    fn test_manual_clock_advance() {
        let clock = ManualClock::new();
        clock.advance(Duration::from_millis(250));
        clock.advance(Duration::from_millis(250));
        assert_eq!(clock.elapsed(), Duration::from_millis(500));
    }

    #[test]
    fn test_advance_secs_ignores_bad_input() {
        let clock = ManualClock::new();
        clock.advance_secs(-1.0);
        clock.advance_secs(f64::NAN);
        clock.advance_secs(f64::INFINITY);
        assert_eq!(clock.elapsed(), Duration::ZERO);

        clock.advance_secs(0.5);
        assert_eq!(clock.elapsed(), Duration::from_millis(500));
    }

    #[test]
    fn test_overflowing_steps_are_ignored() {
        let clock = ManualClock::new();
        clock.advance_secs(0.25);

        clock.advance_secs(1e30);
        clock.advance(Duration::MAX);
        assert_eq!(clock.elapsed(), Duration::from_millis(250));

        clock.advance(Duration::from_millis(250));
        assert_eq!(clock.elapsed(), Duration::from_millis(500));
    }

    #[test]
    fn test_system_clock_moves_forward() {
        let clock = SystemClock;
        let a = clock.now();
        let b = clock.now();
        assert!(b >= a);
    }

    #[test]
    fn test_clock_as_trait_object() {
        let manual = Arc::new(ManualClock::new());
        let clock: Arc<dyn FrameClock> = manual.clone();
        let start = clock.now();
        manual.advance(Duration::from_secs(1));
        assert_eq!(clock.now() - start, Duration::from_secs(1));
    }
}
