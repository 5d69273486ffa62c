//! Paint sink for the bar widget.
//!
//! The bar never talks to a GPU or window directly. It describes what to draw
//! through a [`Painter`], which the host backs with whatever renderer it has.

use crate::geometry::{Color, Rect};

/// Receives fill commands from a widget's paint pass.
pub trait Painter {
    /// Fill `rect` with a solid `color`.
    ///
    /// Implementations may skip rectangles with zero area.
    fn fill_rect(&mut self, rect: Rect, color: Color);
}

/// A single recorded paint command.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PaintCommand {
    /// A solid rectangle fill.
    FillRect { rect: Rect, color: Color },
}

/// A [`Painter`] that records commands instead of drawing them.
///
/// Useful for headless hosts and for inspecting what a widget paints.
#[derive(Debug, Clone, Default)]
pub struct RecordingPainter {
    commands: Vec<PaintCommand>,
}

impl RecordingPainter {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Commands recorded so far, in paint order.
    pub fn commands(&self) -> &[PaintCommand] {
        &self.commands
    }

    /// Take the recorded commands, leaving the recorder empty.
    pub fn take_commands(&mut self) -> Vec<PaintCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Discard all recorded commands.
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Number of recorded commands.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Check if nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl Painter for RecordingPainter {
    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.commands.push(PaintCommand::FillRect { rect, color });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_in_order() {
        let mut painter = RecordingPainter::new();
        painter.fill_rect(Rect::new(0.0, 0.0, 10.0, 10.0), Color::BLACK);
        painter.fill_rect(Rect::new(0.0, 0.0, 5.0, 10.0), Color::WHITE);

        assert_eq!(painter.len(), 2);
        assert_eq!(
            painter.commands()[1],
            PaintCommand::FillRect {
                rect: Rect::new(0.0, 0.0, 5.0, 10.0),
                color: Color::WHITE,
            }
        );

        let taken = painter.take_commands();
        assert_eq!(taken.len(), 2);
        assert!(painter.is_empty());
    }
}
