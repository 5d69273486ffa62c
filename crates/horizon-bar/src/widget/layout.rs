//! Value-to-geometry mapping for the bar.

use std::fmt;
use std::str::FromStr;

use horizon_bar_core::BarError;

use crate::animation::MAX_VALUE;
use crate::geometry::Rect;

/// The edge the fill grows from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Orientation {
    /// Fill grows rightward from the left edge.
    LeftToRight,
    /// Fill grows leftward from the right edge.
    RightToLeft,
    /// Fill grows upward from the bottom edge.
    #[default]
    BottomToTop,
    /// Fill grows downward from the top edge.
    TopToBottom,
}

impl Orientation {
    /// All orientations.
    pub const ALL: [Orientation; 4] = [
        Orientation::LeftToRight,
        Orientation::RightToLeft,
        Orientation::BottomToTop,
        Orientation::TopToBottom,
    ];

    /// The two-letter code for this orientation.
    pub const fn code(self) -> &'static str {
        match self {
            Orientation::LeftToRight => "lr",
            Orientation::RightToLeft => "rl",
            Orientation::BottomToTop => "bt",
            Orientation::TopToBottom => "tb",
        }
    }

    /// Check if the fill grows along the x axis.
    #[inline]
    pub fn is_horizontal(self) -> bool {
        matches!(self, Orientation::LeftToRight | Orientation::RightToLeft)
    }

    /// Check if the fill grows along the y axis.
    #[inline]
    pub fn is_vertical(self) -> bool {
        !self.is_horizontal()
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Orientation {
    type Err = BarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lr" | "left_to_right" => Ok(Orientation::LeftToRight),
            "rl" | "right_to_left" => Ok(Orientation::RightToLeft),
            "bt" | "bottom_to_top" => Ok(Orientation::BottomToTop),
            "tb" | "top_to_bottom" => Ok(Orientation::TopToBottom),
            _ => Err(BarError::invalid_orientation(s)),
        }
    }
}

/// The two rectangles a bar paints.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BarRects {
    /// The full widget area.
    pub background: Rect,
    /// The filled portion.
    pub fill: Rect,
}

/// Compute the background and fill rectangles for a displayed value.
///
/// The fill fraction is `displayed / 100`, clamped to 0.0-1.0 with NaN
/// treated as 0.0. The background is always `bounds`.
pub fn compute_rects(displayed: f32, orientation: Orientation, bounds: Rect) -> BarRects {
    let f = fraction(displayed);
    let (width, height) = (bounds.width(), bounds.height());

    let fill = match orientation {
        Orientation::LeftToRight => Rect::new(bounds.left(), bounds.bottom(), width * f, height),
        Orientation::RightToLeft => {
            let w = width * f;
            Rect::new(bounds.right() - w, bounds.bottom(), w, height)
        }
        Orientation::BottomToTop => Rect::new(bounds.left(), bounds.bottom(), width, height * f),
        Orientation::TopToBottom => {
            let h = height * f;
            Rect::new(bounds.left(), bounds.top() - h, width, h)
        }
    };

    BarRects {
        background: bounds,
        fill,
    }
}

#[inline]
fn fraction(displayed: f32) -> f32 {
    if displayed.is_nan() {
        0.0
    } else {
        (displayed / MAX_VALUE).clamp(0.0, 1.0)
    }
}
