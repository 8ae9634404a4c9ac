// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Rect, Size, Vec2};

/// Scroll axis along which all geometry is measured.
///
/// Vertical measurements use the Y coordinate and heights; horizontal
/// measurements use the X coordinate and widths.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Orientation {
    /// Top/bottom, Y based.
    #[default]
    Vertical,
    /// Left/right, X based.
    Horizontal,
}

impl Orientation {
    /// Leading edge of `rect` along this axis (top or left).
    #[must_use]
    pub fn leading_edge(self, rect: Rect) -> f64 {
        match self {
            Self::Vertical => rect.y0,
            Self::Horizontal => rect.x0,
        }
    }

    /// Extent of `rect` along this axis (height or width).
    #[must_use]
    pub fn extent(self, rect: Rect) -> f64 {
        match self {
            Self::Vertical => rect.height(),
            Self::Horizontal => rect.width(),
        }
    }

    /// Extent of the viewport along this axis.
    #[must_use]
    pub fn viewport_extent(self, viewport: Size) -> f64 {
        match self {
            Self::Vertical => viewport.height,
            Self::Horizontal => viewport.width,
        }
    }

    /// Scroll position along this axis.
    #[must_use]
    pub fn scroll_position(self, scroll: Vec2) -> f64 {
        match self {
            Self::Vertical => scroll.y,
            Self::Horizontal => scroll.x,
        }
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Rect, Size, Vec2};

    use super::Orientation;

    #[test]
    fn picks_axis_components() {
        let rect = Rect::new(10.0, 1000.0, 60.0, 1200.0);
        let viewport = Size::new(1280.0, 800.0);
        let scroll = Vec2::new(30.0, 500.0);

        let v = Orientation::Vertical;
        assert_eq!(v.leading_edge(rect), 1000.0);
        assert_eq!(v.extent(rect), 200.0);
        assert_eq!(v.viewport_extent(viewport), 800.0);
        assert_eq!(v.scroll_position(scroll), 500.0);

        let h = Orientation::Horizontal;
        assert_eq!(h.leading_edge(rect), 10.0);
        assert_eq!(h.extent(rect), 50.0);
        assert_eq!(h.viewport_extent(viewport), 1280.0);
        assert_eq!(h.scroll_position(scroll), 30.0);
    }
}
