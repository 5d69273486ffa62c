//! Core systems for Horizon Bar.
//!
//! This crate provides the plumbing the bar widget is built on:
//!
//! - **Signal/Slot System**: Type-safe change notification
//! - **Frame Clock**: The time source that drives animations
//! - **Errors**: Boundary validation failures
//! - **Logging**: `tracing` targets and span helpers
//!
//! # Signal/Slot Example
//!
//! ```
//! use horizon_bar_core::Signal;
//!
//! let value_changed = Signal::<f32>::new();
//!
//! let conn_id = value_changed.connect(|value| {
//!     println!("Value changed to: {}", value);
//! });
//!
//! value_changed.emit(42.0);
//! value_changed.disconnect(conn_id);
//! ```
//!
//! # Clock Example
//!
//! ```
//! use horizon_bar_core::{FrameClock, ManualClock};
//! use std::time::Duration;
//!
//! let clock = ManualClock::new();
//! let frame = clock.now();
//! clock.advance(Duration::from_millis(16));
//! assert!(clock.now() > frame);
//! ```

pub mod clock;
mod error;
pub mod logging;
pub mod signal;

pub use clock::{FrameClock, ManualClock, SystemClock};
pub use error::{BarError, Result};
pub use logging::PerfSpan;
pub use signal::{ConnectionGuard, ConnectionId, Signal};
