//! Percentage bar widget.
//!
//! The Bar widget renders a value between 0 and 100 as a filled rectangle
//! over a background rectangle. It supports:
//! - Four fill directions (see [`Orientation`])
//! - Optional eased transitions between values
//! - Separate fill and background colors
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use horizon_bar::{Bar, Easing, ManualClock, Orientation, Rect};
//!
//! let clock = Arc::new(ManualClock::new());
//! let mut bar = Bar::with_clock(clock.clone())
//!     .with_orientation(Orientation::LeftToRight)
//!     .with_animation_kind(Easing::OutQuad)
//!     .with_geometry(Rect::new(0.0, 0.0, 200.0, 20.0));
//!
//! bar.set_value(75.0);
//! assert_eq!(bar.value(), 75.0);
//! assert_eq!(bar.displayed_value(), 0.0);
//!
//! clock.advance_secs(1.0);
//! bar.tick();
//! assert_eq!(bar.displayed_value(), 75.0);
//! ```

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use horizon_bar_core::logging::{span_names, targets};
use horizon_bar_core::{FrameClock, PerfSpan, Result, Signal, SystemClock};

use crate::animation::{duration_from_secs, AnimatorState, Easing, ValueAnimator};
use crate::config::BarConfig;
use crate::geometry::{Color, Rect};

use super::layout::{compute_rects, BarRects, Orientation};
use super::paint::Painter;

/// A widget that displays a percentage as a filled bar.
///
/// # Values
///
/// [`value()`](Bar::value) is the target the host asked for. It is clamped to
/// 0-100 and changes immediately. [`displayed_value()`](Bar::displayed_value)
/// is what is painted; with animation enabled it follows the target over
/// [`animation_duration()`](Bar::animation_duration) as the host calls
/// [`tick()`](Bar::tick) once per frame.
///
/// # Signals
///
/// - `value_changed(f32)`: Emitted when the target value changes
/// - `displayed_changed(f32)`: Emitted on every displayed value update
/// - `repaint_requested(())`: Emitted whenever the bar needs to be redrawn
pub struct Bar {
    /// Time source for transitions.
    clock: Arc<dyn FrameClock>,

    /// Target/displayed value state machine.
    animator: ValueAnimator,

    /// Fill direction.
    orientation: Orientation,

    /// Fill color.
    color: Color,

    /// Background color.
    background_color: Color,

    /// Bounding box assigned by the host layout.
    geometry: Rect,

    /// Set when a redraw is pending, cleared by `take_repaint`.
    needs_repaint: bool,

    /// Signal emitted when the target value changes.
    pub value_changed: Signal<f32>,

    /// Signal emitted when the displayed value changes.
    pub displayed_changed: Signal<f32>,

    /// Signal emitted when the bar needs to be repainted.
    pub repaint_requested: Signal<()>,
}

impl Bar {
    /// Create a new bar driven by the system clock.
    ///
    /// The bar is created with:
    /// - Value: 0
    /// - Bottom-to-top orientation
    /// - White fill on a black background
    /// - Linear animation over 0.5 seconds
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    /// Create a new bar driven by `clock`.
    pub fn with_clock(clock: Arc<dyn FrameClock>) -> Self {
        Self {
            clock,
            animator: ValueAnimator::new(),
            orientation: Orientation::default(),
            color: Color::WHITE,
            background_color: Color::BLACK,
            geometry: Rect::ZERO,
            needs_repaint: false,
            value_changed: Signal::new(),
            displayed_changed: Signal::new(),
            repaint_requested: Signal::new(),
        }
    }

    /// Create a bar from a configuration, using the system clock.
    ///
    /// Fails if the orientation or easing name is not recognized.
    pub fn from_config(config: &BarConfig) -> Result<Self> {
        Self::from_config_with_clock(config, Arc::new(SystemClock))
    }

    /// Create a bar from a configuration, driven by `clock`.
    pub fn from_config_with_clock(config: &BarConfig, clock: Arc<dyn FrameClock>) -> Result<Self> {
        let mut bar = Self::with_clock(clock);
        bar.apply_config(config)?;
        bar.finish_animation();
        bar.needs_repaint = false;
        Ok(bar)
    }

    /// Apply every property in `config` to this bar.
    ///
    /// Names are validated before anything changes, so on error the bar is
    /// left untouched. The value goes through the normal setter and animates
    /// if animation is enabled.
    pub fn apply_config(&mut self, config: &BarConfig) -> Result<()> {
        let orientation = config.orientation.parse::<Orientation>().inspect_err(|e| {
            tracing::warn!(target: targets::CONFIG, error = %e, "rejected bar config");
        })?;
        let easing = config.animation.parse::<Easing>().inspect_err(|e| {
            tracing::warn!(target: targets::CONFIG, error = %e, "rejected bar config");
        })?;

        self.set_orientation(orientation);
        self.set_color(Color::from(config.color));
        self.set_background_color(Color::from(config.background_color));
        self.set_animation_kind(easing);
        self.set_animation_duration_secs(config.animation_duration);
        self.set_animated(config.animated);
        self.set_value(config.value);
        Ok(())
    }

    /// Snapshot the bar's properties as a configuration.
    pub fn to_config(&self) -> BarConfig {
        BarConfig {
            value: self.value(),
            orientation: self.orientation.to_string(),
            color: self.color.to_array(),
            background_color: self.background_color.to_array(),
            animated: self.is_animated(),
            animation: self.animation_kind().name().to_string(),
            animation_duration: self.animation_duration().as_secs_f32(),
        }
    }

    /// The clock driving this bar.
    pub fn clock(&self) -> &Arc<dyn FrameClock> {
        &self.clock
    }

    // =========================================================================
    // Value Methods
    // =========================================================================

    /// Get the target value.
    pub fn value(&self) -> f32 {
        self.animator.target()
    }

    /// Set the target value.
    ///
    /// The value is clamped to 0-100; NaN is ignored.
    pub fn set_value(&mut self, value: f32) {
        let previous = self.animator.target();
        let update = self.animator.set_target(value, self.clock.now());

        if let Some(displayed) = update {
            self.publish_displayed(displayed);
        }

        let target = self.animator.target();
        if target != previous {
            tracing::debug!(target: targets::WIDGET, from = previous, to = target, "bar value changed");
            self.value_changed.emit(target);
        }
    }

    /// Set value using builder pattern.
    ///
    /// The displayed value jumps straight to the new value; construction is
    /// not animated.
    pub fn with_value(mut self, value: f32) -> Self {
        self.set_value(value);
        self.finish_animation();
        self
    }

    /// Get the value currently being painted.
    pub fn displayed_value(&self) -> f32 {
        self.animator.displayed()
    }

    /// Check if a transition is in flight.
    pub fn is_animating(&self) -> bool {
        self.animator.is_transitioning()
    }

    /// The animation state machine's current state.
    pub fn animation_state(&self) -> AnimatorState {
        self.animator.state()
    }

    /// Advance the animation to the clock's current time.
    ///
    /// Returns `true` if the displayed value was updated.
    pub fn tick(&mut self) -> bool {
        if !self.animator.is_transitioning() {
            return false;
        }
        let _span = PerfSpan::new(span_names::TICK);
        match self.animator.tick(self.clock.now()) {
            Some(displayed) => {
                self.publish_displayed(displayed);
                true
            }
            None => false,
        }
    }

    /// Cancel any transition and jump to the target value.
    ///
    /// Returns `true` if the displayed value was updated.
    pub fn finish_animation(&mut self) -> bool {
        match self.animator.snap() {
            Some(displayed) => {
                self.publish_displayed(displayed);
                true
            }
            None => false,
        }
    }

    // =========================================================================
    // Orientation Methods
    // =========================================================================

    /// Get the orientation.
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Set the orientation.
    pub fn set_orientation(&mut self, orientation: Orientation) {
        if self.orientation != orientation {
            self.orientation = orientation;
            self.request_repaint();
        }
    }

    /// Set the orientation by name (`lr`, `rl`, `bt`, `tb`).
    ///
    /// Unknown names are rejected and the current orientation is kept.
    pub fn set_orientation_name(&mut self, name: &str) -> Result<()> {
        match name.parse::<Orientation>() {
            Ok(orientation) => {
                self.set_orientation(orientation);
                Ok(())
            }
            Err(e) => {
                tracing::warn!(target: targets::WIDGET, input = name, kept = %self.orientation, "rejected orientation");
                Err(e)
            }
        }
    }

    /// Set orientation using builder pattern.
    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    // =========================================================================
    // Color Methods
    // =========================================================================

    /// Get the fill color.
    pub fn color(&self) -> Color {
        self.color
    }

    /// Set the fill color.
    pub fn set_color(&mut self, color: Color) {
        if self.color != color {
            self.color = color;
            self.request_repaint();
        }
    }

    /// Set fill color using builder pattern.
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Get the background color.
    pub fn background_color(&self) -> Color {
        self.background_color
    }

    /// Set the background color.
    pub fn set_background_color(&mut self, color: Color) {
        if self.background_color != color {
            self.background_color = color;
            self.request_repaint();
        }
    }

    /// Set background color using builder pattern.
    pub fn with_background_color(mut self, color: Color) -> Self {
        self.background_color = color;
        self
    }

    // =========================================================================
    // Animation Methods
    // =========================================================================

    /// Check if value changes are animated.
    pub fn is_animated(&self) -> bool {
        self.animator.is_animated()
    }

    /// Enable or disable animation.
    ///
    /// Disabling while a transition is in flight jumps to the target value.
    pub fn set_animated(&mut self, animated: bool) {
        if let Some(displayed) = self.animator.set_animated(animated) {
            self.publish_displayed(displayed);
        }
    }

    /// Set animation using builder pattern.
    pub fn with_animated(mut self, animated: bool) -> Self {
        self.set_animated(animated);
        self
    }

    /// Get the easing curve used for transitions.
    pub fn animation_kind(&self) -> Easing {
        self.animator.easing()
    }

    /// Set the easing curve. Takes effect on the next transition.
    pub fn set_animation_kind(&mut self, easing: Easing) {
        self.animator.set_easing(easing);
    }

    /// Set the easing curve by name, e.g. `in_out_cubic`.
    ///
    /// Unknown names are rejected and the current curve is kept.
    pub fn set_animation_kind_name(&mut self, name: &str) -> Result<()> {
        match name.parse::<Easing>() {
            Ok(easing) => {
                self.set_animation_kind(easing);
                Ok(())
            }
            Err(e) => {
                tracing::warn!(
                    target: targets::WIDGET,
                    input = name,
                    kept = %self.animator.easing(),
                    "rejected animation kind"
                );
                Err(e)
            }
        }
    }

    /// Set easing curve using builder pattern.
    pub fn with_animation_kind(mut self, easing: Easing) -> Self {
        self.set_animation_kind(easing);
        self
    }

    /// Get the transition duration.
    pub fn animation_duration(&self) -> Duration {
        self.animator.duration()
    }

    /// Set the transition duration. Takes effect on the next transition.
    ///
    /// A zero duration makes value changes apply immediately.
    pub fn set_animation_duration(&mut self, duration: Duration) {
        self.animator.set_duration(duration);
    }

    /// Set the transition duration in seconds.
    ///
    /// Negative and non-finite values become zero.
    pub fn set_animation_duration_secs(&mut self, secs: f32) {
        if !(secs.is_finite() && secs >= 0.0) {
            tracing::warn!(target: targets::WIDGET, secs, "clamping animation duration to zero");
        }
        self.set_animation_duration(duration_from_secs(secs));
    }

    /// Set duration using builder pattern.
    pub fn with_animation_duration(mut self, duration: Duration) -> Self {
        self.set_animation_duration(duration);
        self
    }

    // =========================================================================
    // Geometry and Painting
    // =========================================================================

    /// Get the bounding box.
    pub fn geometry(&self) -> Rect {
        self.geometry
    }

    /// Set the bounding box assigned by the host layout.
    pub fn set_geometry(&mut self, geometry: Rect) {
        if self.geometry != geometry {
            self.geometry = geometry;
            self.request_repaint();
        }
    }

    /// Set geometry using builder pattern.
    pub fn with_geometry(mut self, geometry: Rect) -> Self {
        self.geometry = geometry;
        self
    }

    /// Background and fill rectangles for the current displayed value.
    pub fn rects(&self) -> BarRects {
        compute_rects(self.animator.displayed(), self.orientation, self.geometry)
    }

    /// Paint the bar: the background first, then the fill on top.
    pub fn paint(&self, painter: &mut dyn Painter) {
        let _span = PerfSpan::new(span_names::PAINT);
        let rects = self.rects();
        tracing::trace!(target: targets::WIDGET, fill = ?rects.fill, "painting bar");
        painter.fill_rect(rects.background, self.background_color);
        painter.fill_rect(rects.fill, self.color);
    }

    /// Check if a repaint has been requested since the last `take_repaint`.
    pub fn needs_repaint(&self) -> bool {
        self.needs_repaint
    }

    /// Read and clear the pending-repaint flag.
    pub fn take_repaint(&mut self) -> bool {
        std::mem::take(&mut self.needs_repaint)
    }

    fn publish_displayed(&mut self, displayed: f32) {
        self.displayed_changed.emit(displayed);
        self.request_repaint();
    }

    fn request_repaint(&mut self) {
        self.needs_repaint = true;
        self.repaint_requested.emit(());
    }
}

impl Default for Bar {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Bar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Bar")
            .field("animator", &self.animator)
            .field("orientation", &self.orientation)
            .field("color", &self.color)
            .field("background_color", &self.background_color)
            .field("geometry", &self.geometry)
            .field("needs_repaint", &self.needs_repaint)
            .finish_non_exhaustive()
    }
}

static_assertions::assert_impl_all!(Bar: Send, Sync);

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use horizon_bar_core::{BarError, ManualClock};

    use super::*;
    use crate::widget::paint::{PaintCommand, RecordingPainter};

    fn manual_bar() -> (Bar, Arc<ManualClock>) {
        let clock = Arc::new(ManualClock::new());
        let bar = Bar::with_clock(clock.clone())
            .with_orientation(Orientation::LeftToRight)
            .with_geometry(Rect::new(0.0, 0.0, 200.0, 20.0));
        (bar, clock)
    }

    #[test]
    fn test_bar_defaults() {
        let bar = Bar::new();
        assert_eq!(bar.value(), 0.0);
        assert_eq!(bar.displayed_value(), 0.0);
        assert_eq!(bar.orientation(), Orientation::BottomToTop);
        assert_eq!(bar.color(), Color::WHITE);
        assert_eq!(bar.background_color(), Color::BLACK);
        assert!(bar.is_animated());
        assert_eq!(bar.animation_kind(), Easing::Linear);
        assert_eq!(bar.animation_duration(), Duration::from_millis(500));
        assert!(!bar.needs_repaint());
    }

    #[test]
    fn test_builder_value_is_not_animated() {
        let bar = Bar::new().with_value(40.0);
        assert_eq!(bar.value(), 40.0);
        assert_eq!(bar.displayed_value(), 40.0);
        assert!(!bar.is_animating());
    }

    #[test]
    fn test_value_clamping() {
        let mut bar = Bar::new().with_animated(false);
        bar.set_value(150.0);
        assert_eq!(bar.value(), 100.0);
        bar.set_value(-50.0);
        assert_eq!(bar.value(), 0.0);
    }

    #[test]
    fn test_value_changed_signal() {
        let mut bar = Bar::new().with_animated(false);
        let count = Arc::new(AtomicUsize::new(0));
        let count_clone = count.clone();
        bar.value_changed.connect(move |_| {
            count_clone.fetch_add(1, Ordering::SeqCst);
        });

        bar.set_value(50.0);
        bar.set_value(50.0);
        bar.set_value(75.0);
        assert_eq!(count.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_animated_value_reaches_target() {
        let (mut bar, clock) = manual_bar();
        bar.set_value(100.0);
        assert!(bar.is_animating());
        assert_eq!(bar.displayed_value(), 0.0);

        clock.advance(Duration::from_millis(250));
        assert!(bar.tick());
        assert!((bar.displayed_value() - 50.0).abs() < 0.01);
        assert!((bar.rects().fill.width() - 100.0).abs() < 0.1);

        clock.advance(Duration::from_millis(250));
        assert!(bar.tick());
        assert_eq!(bar.displayed_value(), 100.0);
        assert!(!bar.is_animating());
        assert!(!bar.tick());
    }

    #[test]
    fn test_finish_animation() {
        let (mut bar, _clock) = manual_bar();
        bar.set_value(60.0);
        assert!(bar.finish_animation());
        assert_eq!(bar.displayed_value(), 60.0);
        assert!(!bar.finish_animation());
    }

    #[test]
    fn test_visual_changes_request_repaint() {
        let (mut bar, _clock) = manual_bar();
        let repaints = Arc::new(AtomicUsize::new(0));
        let repaints_clone = repaints.clone();
        bar.repaint_requested.connect(move |_| {
            repaints_clone.fetch_add(1, Ordering::SeqCst);
        });

        bar.set_orientation(Orientation::TopToBottom);
        bar.set_orientation(Orientation::TopToBottom);
        bar.set_color(Color::from_rgb(1.0, 0.0, 0.0));
        bar.set_background_color(Color::from_rgb(0.2, 0.2, 0.2));
        bar.set_geometry(Rect::new(0.0, 0.0, 20.0, 200.0));
        assert_eq!(repaints.load(Ordering::SeqCst), 4);

        assert!(bar.take_repaint());
        assert!(!bar.needs_repaint());
    }

    #[test]
    fn test_invalid_orientation_name_keeps_previous() {
        let (mut bar, _clock) = manual_bar();
        let err = bar.set_orientation_name("diagonal").unwrap_err();
        assert_eq!(err, BarError::InvalidOrientation("diagonal".into()));
        assert_eq!(bar.orientation(), Orientation::LeftToRight);

        bar.set_orientation_name("tb").unwrap();
        assert_eq!(bar.orientation(), Orientation::TopToBottom);
    }

    #[test]
    fn test_invalid_animation_kind_keeps_previous() {
        let mut bar = Bar::new().with_animation_kind(Easing::OutCubic);
        assert!(matches!(
            bar.set_animation_kind_name("wobbly"),
            Err(BarError::InvalidEasing(_))
        ));
        assert_eq!(bar.animation_kind(), Easing::OutCubic);

        bar.set_animation_kind_name("in_bounce").unwrap();
        assert_eq!(bar.animation_kind(), Easing::InBounce);
    }

    #[test]
    fn test_negative_duration_clamps() {
        let mut bar = Bar::new();
        bar.set_animation_duration_secs(-3.0);
        assert_eq!(bar.animation_duration(), Duration::ZERO);

        bar.set_value(30.0);
        assert_eq!(bar.displayed_value(), 30.0);
        assert!(!bar.is_animating());
    }

    #[test]
    fn test_paint_order() {
        let (bar, _clock) = manual_bar();
        let bar = bar
            .with_value(25.0)
            .with_color(Color::WHITE)
            .with_background_color(Color::BLACK);
        let mut painter = RecordingPainter::new();
        bar.paint(&mut painter);

        assert_eq!(
            painter.commands(),
            &[
                PaintCommand::FillRect {
                    rect: Rect::new(0.0, 0.0, 200.0, 20.0),
                    color: Color::BLACK,
                },
                PaintCommand::FillRect {
                    rect: Rect::new(0.0, 0.0, 50.0, 20.0),
                    color: Color::WHITE,
                },
            ]
        );
    }

    #[test]
    fn test_zero_fill_is_still_painted() {
        let (bar, _clock) = manual_bar();
        let mut painter = RecordingPainter::new();
        bar.paint(&mut painter);
        assert_eq!(painter.len(), 2);
    }

    #[test]
    fn test_from_config() {
        let config = BarConfig {
            value: 80.0,
            orientation: "rl".into(),
            animation: "out_back".into(),
            animation_duration: 1.5,
            ..BarConfig::default()
        };
        let bar = Bar::from_config(&config).unwrap();
        assert_eq!(bar.value(), 80.0);
        assert_eq!(bar.displayed_value(), 80.0);
        assert_eq!(bar.orientation(), Orientation::RightToLeft);
        assert_eq!(bar.animation_kind(), Easing::OutBack);
        assert_eq!(bar.animation_duration(), Duration::from_millis(1500));
        assert!(!bar.needs_repaint());
        assert_eq!(bar.to_config(), config);
    }

    #[test]
    fn test_huge_duration_saturates() {
        let mut bar = Bar::new();
        bar.set_animation_duration_secs(1e20);
        assert_eq!(bar.animation_duration(), Duration::MAX);

        bar.set_value(50.0);
        assert!(bar.is_animating());
        assert!(bar.finish_animation());
        assert_eq!(bar.displayed_value(), 50.0);
    }

    #[test]
    fn test_from_config_with_huge_duration() {
        let config = BarConfig::from_toml_str("value = 40.0\nanimation_duration = 1e20").unwrap();
        let bar = Bar::from_config(&config).unwrap();
        assert_eq!(bar.animation_duration(), Duration::MAX);
        assert_eq!(bar.displayed_value(), 40.0);
    }

    #[test]
    fn test_from_config_rejects_bad_names() {
        let config = BarConfig {
            orientation: "up".into(),
            ..BarConfig::default()
        };
        assert!(matches!(
            Bar::from_config(&config),
            Err(BarError::InvalidOrientation(_))
        ));

        let config = BarConfig {
            animation: "springy".into(),
            ..BarConfig::default()
        };
        assert!(matches!(
            Bar::from_config(&config),
            Err(BarError::InvalidEasing(_))
        ));
    }

    #[test]
    fn test_apply_config_error_leaves_bar_untouched() {
        let (mut bar, _clock) = manual_bar();
        let config = BarConfig {
            value: 90.0,
            animation: "nope".into(),
            ..BarConfig::default()
        };
        assert!(bar.apply_config(&config).is_err());
        assert_eq!(bar.value(), 0.0);
        assert_eq!(bar.orientation(), Orientation::LeftToRight);
    }
}
