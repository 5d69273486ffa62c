//! The bar widget and its supporting pieces.
//!
//! - [`layout`]: maps a displayed value to background and fill rectangles
//! - [`paint`]: the [`Painter`] sink the widget draws through
//! - [`Bar`]: the widget itself

mod bar;
pub mod layout;
pub mod paint;

pub use bar::Bar;
pub use layout::{compute_rects, BarRects, Orientation};
pub use paint::{PaintCommand, Painter, RecordingPainter};
