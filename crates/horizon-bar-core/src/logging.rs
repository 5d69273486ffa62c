//! Logging facilities for Horizon Bar.
//!
//! Horizon Bar uses the `tracing` crate for instrumentation. Libraries never
//! install a subscriber; to see logs, install one in your application:
//!
//! ```ignore
//! fn main() {
//!     tracing_subscriber::fmt()
//!         .with_env_filter("horizon_bar=debug")
//!         .init();
//! }
//! ```

/// Span names used throughout Horizon Bar for tracing.
///
/// These constants can be used to filter traces for specific subsystems.
pub mod span_names {
    /// Animation tick span.
    pub const TICK: &str = "horizon_bar::tick";
    /// Paint pass span.
    pub const PAINT: &str = "horizon_bar::paint";
}

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Signal/slot system target.
    pub const SIGNAL: &str = "horizon_bar_core::signal";
    /// Frame clock target.
    pub const CLOCK: &str = "horizon_bar_core::clock";
    /// Value animation target.
    pub const ANIMATION: &str = "horizon_bar::animation";
    /// Widget boundary target.
    pub const WIDGET: &str = "horizon_bar::widget";
    /// Configuration loading target.
    pub const CONFIG: &str = "horizon_bar::config";
}

/// A guard that keeps a tracing span entered until dropped.
///
/// This is useful for tracking the duration of operations such as a paint pass.
#[derive(Debug)]
pub struct PerfSpan {
    #[allow(dead_code)]
    span: tracing::span::EnteredSpan,
}

impl PerfSpan {
    /// Create a new performance span.
    ///
    /// The span will be active until the guard is dropped.
    pub fn new(name: &'static str) -> Self {
        let span = tracing::info_span!(target: "horizon_bar::perf", "perf", operation = name);
        Self {
            span: span.entered(),
        }
    }
}
