// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! View and plot rectangles.
//!
//! The chart is given an outer view size and a four-sided margin. The margin is where axes and
//! labels live; the remaining plot rectangle is what the scales map into.

use kurbo::Rect;
use serde::{Deserialize, Serialize};

/// A width/height pair used by chart layout.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    /// Width in chart coordinate units.
    pub width: f64,
    /// Height in chart coordinate units.
    pub height: f64,
}

impl Size {
    /// Creates a size.
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Space reserved around the plot rectangle.
///
/// Sides left out of a JSON object keep their default.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Margin {
    /// Left margin.
    pub left: f64,
    /// Top margin.
    pub top: f64,
    /// Bottom margin.
    pub bottom: f64,
    /// Right margin.
    pub right: f64,
}

impl Default for Margin {
    fn default() -> Self {
        Self {
            left: 10.0,
            top: 10.0,
            bottom: 10.0,
            right: 10.0,
        }
    }
}

impl Margin {
    /// Creates a margin.
    pub fn new(left: f64, top: f64, bottom: f64, right: f64) -> Self {
        Self {
            left,
            top,
            bottom,
            right,
        }
    }

    /// The sides as `(name, value)` pairs, for validation and diagnostics.
    pub fn sides(&self) -> [(&'static str, f64); 4] {
        [
            ("left", self.left),
            ("top", self.top),
            ("bottom", self.bottom),
            ("right", self.right),
        ]
    }
}

/// Output of the arrange pass.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChartLayout {
    /// Outer chart bounds.
    pub view: Rect,
    /// The plot (data) rectangle.
    pub plot: Rect,
}

impl ChartLayout {
    /// Insets the view by `margin`.
    ///
    /// Margins larger than the view collapse the plot to zero width or height instead of
    /// inverting it.
    pub fn arrange(size: Size, margin: Margin) -> Self {
        let width = size.width.max(0.0);
        let height = size.height.max(0.0);
        let view = Rect::new(0.0, 0.0, width, height);

        let left = margin.left.max(0.0);
        let top = margin.top.max(0.0);
        let plot_w = (width - left - margin.right.max(0.0)).max(0.0);
        let plot_h = (height - top - margin.bottom.max(0.0)).max(0.0);
        let plot = Rect::new(left, top, left + plot_w, top + plot_h);

        Self { view, plot }
    }

    /// Horizontal range for the ordinal scale.
    pub fn x_range(&self) -> (f64, f64) {
        (self.plot.x0, self.plot.x1)
    }

    /// Vertical range for the value scale (bottom to top).
    pub fn y_range(&self) -> (f64, f64) {
        (self.plot.y1, self.plot.y0)
    }
}
