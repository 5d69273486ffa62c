//! Easing functions for smooth animations.
//!
//! Easing functions map a linear progress value (0.0 to 1.0) to a transformed
//! value that creates smoother, more natural-looking animations. Every curve
//! starts at 0.0 and ends at 1.0; `back` and `elastic` curves overshoot in
//! between.
//!
//! Curves are addressed by snake-case names (`in_out_expo`, `out_elastic`,
//! ...) at the configuration boundary.

use std::f32::consts::PI;
use std::fmt;
use std::str::FromStr;

use horizon_bar_core::BarError;

/// Available easing functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Easing {
    /// Linear interpolation (no easing).
    #[default]
    Linear,
    /// Quadratic ease-in (starts slow, accelerates).
    InQuad,
    /// Quadratic ease-out (starts fast, decelerates).
    OutQuad,
    /// Quadratic ease-in-out (smooth start and end).
    InOutQuad,
    /// Cubic ease-in (more pronounced than quadratic).
    InCubic,
    /// Cubic ease-out.
    OutCubic,
    /// Cubic ease-in-out.
    InOutCubic,
    /// Quartic ease-in.
    InQuart,
    /// Quartic ease-out.
    OutQuart,
    /// Quartic ease-in-out.
    InOutQuart,
    /// Quintic ease-in.
    InQuint,
    /// Quintic ease-out.
    OutQuint,
    /// Quintic ease-in-out.
    InOutQuint,
    /// Sinusoidal ease-in.
    InSine,
    /// Sinusoidal ease-out.
    OutSine,
    /// Sinusoidal ease-in-out.
    InOutSine,
    /// Exponential ease-in.
    InExpo,
    /// Exponential ease-out.
    OutExpo,
    /// Exponential ease-in-out.
    InOutExpo,
    /// Circular ease-in.
    InCirc,
    /// Circular ease-out.
    OutCirc,
    /// Circular ease-in-out.
    InOutCirc,
    /// Elastic ease-in (oscillates below the start before leaving).
    InElastic,
    /// Elastic ease-out (oscillates around the end before settling).
    OutElastic,
    /// Elastic ease-in-out.
    InOutElastic,
    /// Back ease-in (pulls back before moving forward).
    InBack,
    /// Back ease-out (overshoots the end, then returns).
    OutBack,
    /// Back ease-in-out.
    InOutBack,
    /// Bounce ease-in.
    InBounce,
    /// Bounce ease-out (bounces against the end).
    OutBounce,
    /// Bounce ease-in-out.
    InOutBounce,
}

impl Easing {
    /// Every easing curve, in declaration order.
    pub const ALL: [Easing; 31] = [
        Easing::Linear,
        Easing::InQuad,
        Easing::OutQuad,
        Easing::InOutQuad,
        Easing::InCubic,
        Easing::OutCubic,
        Easing::InOutCubic,
        Easing::InQuart,
        Easing::OutQuart,
        Easing::InOutQuart,
        Easing::InQuint,
        Easing::OutQuint,
        Easing::InOutQuint,
        Easing::InSine,
        Easing::OutSine,
        Easing::InOutSine,
        Easing::InExpo,
        Easing::OutExpo,
        Easing::InOutExpo,
        Easing::InCirc,
        Easing::OutCirc,
        Easing::InOutCirc,
        Easing::InElastic,
        Easing::OutElastic,
        Easing::InOutElastic,
        Easing::InBack,
        Easing::OutBack,
        Easing::InOutBack,
        Easing::InBounce,
        Easing::OutBounce,
        Easing::InOutBounce,
    ];

    /// The canonical snake-case name of this curve.
    pub const fn name(self) -> &'static str {
        match self {
            Easing::Linear => "linear",
            Easing::InQuad => "in_quad",
            Easing::OutQuad => "out_quad",
            Easing::InOutQuad => "in_out_quad",
            Easing::InCubic => "in_cubic",
            Easing::OutCubic => "out_cubic",
            Easing::InOutCubic => "in_out_cubic",
            Easing::InQuart => "in_quart",
            Easing::OutQuart => "out_quart",
            Easing::InOutQuart => "in_out_quart",
            Easing::InQuint => "in_quint",
            Easing::OutQuint => "out_quint",
            Easing::InOutQuint => "in_out_quint",
            Easing::InSine => "in_sine",
            Easing::OutSine => "out_sine",
            Easing::InOutSine => "in_out_sine",
            Easing::InExpo => "in_expo",
            Easing::OutExpo => "out_expo",
            Easing::InOutExpo => "in_out_expo",
            Easing::InCirc => "in_circ",
            Easing::OutCirc => "out_circ",
            Easing::InOutCirc => "in_out_circ",
            Easing::InElastic => "in_elastic",
            Easing::OutElastic => "out_elastic",
            Easing::InOutElastic => "in_out_elastic",
            Easing::InBack => "in_back",
            Easing::OutBack => "out_back",
            Easing::InOutBack => "in_out_back",
            Easing::InBounce => "in_bounce",
            Easing::OutBounce => "out_bounce",
            Easing::InOutBounce => "in_out_bounce",
        }
    }

    /// Whether the curve is non-decreasing over [0, 1].
    ///
    /// Monotonic curves never move the animated value past either endpoint.
    pub const fn is_monotonic(self) -> bool {
        !matches!(
            self,
            Easing::InElastic
                | Easing::OutElastic
                | Easing::InOutElastic
                | Easing::InBack
                | Easing::OutBack
                | Easing::InOutBack
                | Easing::InBounce
                | Easing::OutBounce
                | Easing::InOutBounce
        )
    }
}

impl fmt::Display for Easing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Easing {
    type Err = BarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Easing::ALL
            .into_iter()
            .find(|easing| easing.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| BarError::invalid_easing(s))
    }
}

/// Apply an easing function to a progress value.
///
/// # Arguments
///
/// * `easing` - The easing function to apply
/// * `t` - Progress value from 0.0 to 1.0 (clamped)
///
/// # Example
///
/// ```
/// use horizon_bar::animation::{ease, Easing};
///
/// assert_eq!(ease(Easing::Linear, 0.5), 0.5);
/// assert!(ease(Easing::InQuad, 0.5) < 0.5);
/// assert!(ease(Easing::OutQuad, 0.5) > 0.5);
/// ```
#[inline]
pub fn ease(easing: Easing, t: f32) -> f32 {
    let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };

    match easing {
        Easing::Linear => t,
        Easing::InQuad => t * t,
        Easing::OutQuad => 1.0 - (1.0 - t).powi(2),
        Easing::InOutQuad => in_out(t, |p| p * p),
        Easing::InCubic => t.powi(3),
        Easing::OutCubic => 1.0 - (1.0 - t).powi(3),
        Easing::InOutCubic => in_out(t, |p| p.powi(3)),
        Easing::InQuart => t.powi(4),
        Easing::OutQuart => 1.0 - (1.0 - t).powi(4),
        Easing::InOutQuart => in_out(t, |p| p.powi(4)),
        Easing::InQuint => t.powi(5),
        Easing::OutQuint => 1.0 - (1.0 - t).powi(5),
        Easing::InOutQuint => in_out(t, |p| p.powi(5)),
        Easing::InSine => 1.0 - (t * PI / 2.0).cos(),
        Easing::OutSine => (t * PI / 2.0).sin(),
        Easing::InOutSine => -((PI * t).cos() - 1.0) / 2.0,
        Easing::InExpo => in_expo(t),
        Easing::OutExpo => 1.0 - in_expo(1.0 - t),
        Easing::InOutExpo => in_out(t, in_expo),
        Easing::InCirc => 1.0 - (1.0 - t * t).sqrt(),
        Easing::OutCirc => (1.0 - (t - 1.0).powi(2)).sqrt(),
        Easing::InOutCirc => in_out(t, |p| 1.0 - (1.0 - p * p).sqrt()),
        Easing::InElastic => in_elastic(t, ELASTIC_PERIOD),
        Easing::OutElastic => 1.0 - in_elastic(1.0 - t, ELASTIC_PERIOD),
        Easing::InOutElastic => in_out(t, |p| in_elastic(p, ELASTIC_PERIOD * 1.5)),
        Easing::InBack => in_back(t, BACK_OVERSHOOT),
        Easing::OutBack => 1.0 - in_back(1.0 - t, BACK_OVERSHOOT),
        Easing::InOutBack => in_out(t, |p| in_back(p, BACK_OVERSHOOT * 1.525)),
        Easing::InBounce => 1.0 - out_bounce(1.0 - t),
        Easing::OutBounce => out_bounce(t),
        Easing::InOutBounce => in_out(t, |p| 1.0 - out_bounce(1.0 - p)),
    }
}

/// Interpolate between two values using an easing function.
///
/// # Arguments
///
/// * `easing` - The easing function to apply
/// * `start` - Starting value
/// * `end` - Ending value
/// * `t` - Progress value from 0.0 to 1.0
#[inline]
pub fn lerp_eased(easing: Easing, start: f32, end: f32, t: f32) -> f32 {
    let eased_t = ease(easing, t);
    start + (end - start) * eased_t
}

const BACK_OVERSHOOT: f32 = 1.70158;
const ELASTIC_PERIOD: f32 = 0.3;

/// Build an in-out curve from an ease-in curve: the first half runs the
/// ease-in, the second half its mirror image.
#[inline]
fn in_out(t: f32, ease_in: impl Fn(f32) -> f32) -> f32 {
    if t < 0.5 {
        ease_in(t * 2.0) / 2.0
    } else {
        1.0 - ease_in((1.0 - t) * 2.0) / 2.0
    }
}

#[inline]
fn in_expo(t: f32) -> f32 {
    if t <= 0.0 {
        0.0
    } else {
        2f32.powf(10.0 * (t - 1.0))
    }
}

#[inline]
fn in_back(t: f32, s: f32) -> f32 {
    t * t * ((s + 1.0) * t - s)
}

#[inline]
fn in_elastic(t: f32, period: f32) -> f32 {
    if t <= 0.0 {
        return 0.0;
    }
    if t >= 1.0 {
        return 1.0;
    }
    let shift = period / 4.0;
    let q = t - 1.0;
    -(2f32.powf(10.0 * q) * ((q - shift) * (2.0 * PI) / period).sin())
}

#[inline]
fn out_bounce(t: f32) -> f32 {
    const N: f32 = 7.5625;
    const D: f32 = 2.75;

    if t < 1.0 / D {
        N * t * t
    } else if t < 2.0 / D {
        let p = t - 1.5 / D;
        N * p * p + 0.75
    } else if t < 2.5 / D {
        let p = t - 2.25 / D;
        N * p * p + 0.9375
    } else {
        let p = t - 2.625 / D;
        N * p * p + 0.984375
    }
}
