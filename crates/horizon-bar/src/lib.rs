//! Horizon Bar: a percentage bar widget.
//!
//! A [`Bar`] shows a value between 0 and 100 as a filled rectangle over a
//! background, growing from one of four edges. Value changes can be animated
//! with any of the [`Easing`] curves; the host drives the animation by
//! calling [`Bar::tick`] once per frame and redraws through a [`Painter`].
//!
//! # Quick Start
//!
//! ```
//! use horizon_bar::{Bar, Orientation, RecordingPainter, Rect};
//!
//! let mut bar = Bar::new()
//!     .with_orientation(Orientation::LeftToRight)
//!     .with_geometry(Rect::new(0.0, 0.0, 200.0, 20.0))
//!     .with_animated(false);
//!
//! bar.set_value(25.0);
//!
//! let rects = bar.rects();
//! assert_eq!(rects.fill, Rect::new(0.0, 0.0, 50.0, 20.0));
//!
//! let mut painter = RecordingPainter::new();
//! bar.paint(&mut painter);
//! assert_eq!(painter.len(), 2);
//! ```
//!
//! # Modules
//!
//! - [`geometry`]: Points, sizes, y-up rectangles and RGBA colors
//! - [`animation`]: Easing curves, transitions and the value animator
//! - [`widget`]: Layout, painting and the [`Bar`] widget
//! - [`config`]: TOML-backed [`BarConfig`]

pub mod animation;
pub mod config;
pub mod geometry;
pub mod widget;

pub use animation::{AnimatorState, Easing, Transition, TransitionState, ValueAnimator};
pub use config::BarConfig;
pub use geometry::{Color, Point, Rect, Size};
pub use widget::{
    compute_rects, Bar, BarRects, Orientation, PaintCommand, Painter, RecordingPainter,
};

pub use horizon_bar_core::{
    BarError, ConnectionId, FrameClock, ManualClock, Result, Signal, SystemClock,
};
